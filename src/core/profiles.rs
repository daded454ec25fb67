use crate::core::persistence::{load_json, save_json, PROFILES_KEY};
use crate::core::{pick, KeyValueStore, MatchScore, RandomSource, Result, SavedProfile};
use crate::utils::error::MatchError;
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;

const SOULMATE_LABEL: &str = "Me & Charu 💕";

const SUGGESTED_LABELS: [&str; 6] = [
    "Me & My Love 💕",
    "Us Forever 💖",
    "Soulmate Check ✨",
    "Love Birds 🐦",
    "Perfect Match 💫",
    "Destiny Duo 🌟",
];

pub fn profile_emoji(score: MatchScore) -> &'static str {
    match score {
        MatchScore::Soulmate => "♾️",
        MatchScore::Percent(85..=u8::MAX) => "💕",
        MatchScore::Percent(70..=84) => "💖",
        MatchScore::Percent(60..=69) => "💝",
        MatchScore::Percent(_) => "💫",
    }
}

pub fn suggested_label<R: RandomSource + ?Sized>(score: MatchScore, rng: &mut R) -> &'static str {
    if score.is_soulmate() {
        return SOULMATE_LABEL;
    }
    *pick(rng, &SUGGESTED_LABELS)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileBook {
    profiles: Vec<SavedProfile>,
}

impl ProfileBook {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            profiles: load_json(store, PROFILES_KEY)?.unwrap_or_default(),
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_json(store, PROFILES_KEY, &self.profiles)
    }

    pub fn profiles(&self) -> &[SavedProfile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Result<&SavedProfile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MatchError::NotFoundError {
                what: format!("profile '{}'", id),
            })
    }

    /// Appends a profile; saved profiles keep insertion order.
    pub fn add(
        &mut self,
        label: &str,
        person1_date: NaiveDate,
        person2_date: NaiveDate,
        score: MatchScore,
        now_millis: i64,
    ) -> Result<SavedProfile> {
        validate_non_empty_string("label", label)?;

        let mut id = now_millis;
        while self.profiles.iter().any(|p| p.id == id.to_string()) {
            id += 1;
        }

        let profile = SavedProfile {
            id: id.to_string(),
            label: label.trim().to_string(),
            person1_date,
            person2_date,
            compatibility_score: score,
            timestamp: now_millis,
        };
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    pub fn remove(&mut self, id: &str) -> Result<SavedProfile> {
        let position = self
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| MatchError::NotFoundError {
                what: format!("profile '{}'", id),
            })?;
        Ok(self.profiles.remove(position))
    }
}
