use crate::core::{KeyValueStore, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const BIRTH_DATE_KEY: &str = "birthDate";
pub const MATCH_INPUTS_KEY: &str = "compatibilityData";
pub const TIMELINE_KEY: &str = "loveTimeline";
pub const PROFILES_KEY: &str = "savedCoupleProfiles";

/// Reads a JSON value. A value that no longer parses is logged and treated
/// as absent, so one bad key never locks the user out.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable value under '{}': {}", key, e);
            Ok(None)
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
