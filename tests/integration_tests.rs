use anyhow::Result;
use chrono::NaiveDate;
use cosmic_match::adapters::{FixedClock, FixedRandom, JsonFileStore, SeededRandom};
use cosmic_match::core::persistence::{BIRTH_DATE_KEY, MATCH_INPUTS_KEY, PROFILES_KEY};
use cosmic_match::core::timeline::EventDraft;
use cosmic_match::core::KeyValueStore;
use cosmic_match::{MatchEngine, MatchScore, Sign};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::at_date(date(2026, 10, 16))
}

#[test]
fn test_end_to_end_check_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("nested").join("store.json");

    let checked = {
        let store = JsonFileStore::new(&store_path);
        let mut engine = MatchEngine::new(clock(), FixedRandom::midpoint(), store);
        engine.summarize(date(1996, 9, 1))?;
        engine.check(date(2007, 11, 29), date(2010, 11, 18))?
    };
    assert_eq!(checked.outcome.score, MatchScore::Soulmate);
    assert!(store_path.exists());

    // A fresh engine over the same file sees the same data.
    let store = JsonFileStore::new(&store_path);
    assert_eq!(store.get(BIRTH_DATE_KEY)?.as_deref(), Some("\"1996-09-01\""));
    let raw_inputs = store.get(MATCH_INPUTS_KEY)?.unwrap_or_default();
    assert!(raw_inputs.contains("\"person1Date\":\"2007-11-29\""));
    assert!(raw_inputs.contains("\"person2Date\":\"2010-11-18\""));

    let mut engine = MatchEngine::new(clock(), FixedRandom::midpoint(), store);
    let summary = engine.restore_summary()?.expect("saved birth date");
    assert_eq!(summary.sign, Sign::Virgo);

    let restored = engine.restore()?.expect("saved pair");
    assert_eq!(restored, checked);
    Ok(())
}

#[test]
fn test_corrupt_value_reads_as_absent() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = JsonFileStore::new(temp_dir.path().join("store.json"));
    store.set(MATCH_INPUTS_KEY, "{not json")?;
    store.set(PROFILES_KEY, "[1, 2")?;

    let mut engine = MatchEngine::new(clock(), FixedRandom::midpoint(), store);
    assert!(engine.restore()?.is_none());
    assert!(engine.profiles()?.profiles().is_empty());

    // Writing replaces the broken value.
    engine.check(date(1996, 9, 1), date(1997, 3, 2))?;
    assert!(engine.restore()?.is_some());
    Ok(())
}

#[test]
fn test_timeline_and_profiles_persist() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store_path = temp_dir.path().join("store.json");

    let profile_id = {
        let store = JsonFileStore::new(&store_path);
        let mut engine = MatchEngine::new(clock(), SeededRandom::new(3), store);
        engine.add_timeline_event(EventDraft::new("Future Wedding", date(2035, 6, 1)))?;
        engine.add_timeline_event(EventDraft::new("First Met", date(2024, 2, 10)))?;

        let report = engine.check(date(1996, 9, 1), date(1995, 11, 5))?;
        engine
            .save_profile("Us Forever 💖", date(1996, 9, 1), date(1995, 11, 5), report.outcome.score)?
            .id
    };

    let store = JsonFileStore::new(&store_path);
    let mut engine = MatchEngine::new(clock(), FixedRandom::midpoint(), store);

    let titles: Vec<String> = engine
        .timeline()?
        .events()
        .iter()
        .map(|e| e.title.clone())
        .collect();
    assert_eq!(titles, vec!["First Met", "Future Wedding"]);

    let book = engine.profiles()?;
    assert_eq!(book.profiles().len(), 1);
    assert_eq!(book.get(&profile_id)?.label, "Us Forever 💖");

    let rechecked = engine.check_profile(&profile_id)?;
    assert_eq!(rechecked.person1.sign, Sign::Virgo);
    assert_eq!(rechecked.person2.sign, Sign::Scorpio);
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<()> {
    let run = |seed| -> Result<MatchScore> {
        let temp_dir = TempDir::new()?;
        let store = JsonFileStore::new(temp_dir.path().join("store.json"));
        let mut engine = MatchEngine::new(clock(), SeededRandom::new(seed), store);
        Ok(engine.check(date(1992, 3, 25), date(1994, 8, 10))?.outcome.score)
    };

    assert_eq!(run(99)?, run(99)?);
    Ok(())
}
