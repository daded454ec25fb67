use crate::domain::ports::KeyValueStore;
use crate::utils::error::{MatchError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys live in one JSON object on disk. The file and its parent
/// directories are created on the first write; each write replaces the
/// whole file through a sibling `.tmp` file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| MatchError::StorageError {
            key: self.path.display().to_string(),
            message: format!("store file is not a JSON object of strings: {}", e),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert!(store.get("birthDate").unwrap().is_none());

        store.set("birthDate", "\"1996-09-01\"").unwrap();
        assert_eq!(
            store.get("birthDate").unwrap().as_deref(),
            Some("\"1996-09-01\"")
        );
        assert!(store.get("loveTimeline").unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");
        let mut store = JsonFileStore::new(&path);

        assert!(store.get("anything").unwrap().is_none());
        store.set("loveTimeline", "[]").unwrap();

        assert!(path.exists());
        assert_eq!(store.get("loveTimeline").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path().join("store.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        let reopened = JsonFileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let mut store = JsonFileStore::new(&path);

        store.set("birthDate", "\"1996-09-01\"").unwrap();

        let names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["store.json"]);
    }

    #[test]
    fn test_interrupted_write_keeps_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        let mut store = JsonFileStore::new(&path);
        store.set("a", "1").unwrap();

        // A half-written temp file from a crashed write is never read.
        std::fs::write(temp_dir.path().join("store.json.tmp"), "{\"a\": \"tru").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert!(!temp_dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("a"),
            Err(MatchError::StorageError { .. })
        ));
    }
}
