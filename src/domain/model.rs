use crate::utils::error::MatchError;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Sign::Aries => "♈",
            Sign::Taurus => "♉",
            Sign::Gemini => "♊",
            Sign::Cancer => "♋",
            Sign::Leo => "♌",
            Sign::Virgo => "♍",
            Sign::Libra => "♎",
            Sign::Scorpio => "♏",
            Sign::Sagittarius => "♐",
            Sign::Capricorn => "♑",
            Sign::Aquarius => "♒",
            Sign::Pisces => "♓",
        }
    }

    /// Scorpio and Sagittarius get the highlighted card and bonus breakdown lines.
    pub fn is_special(self) -> bool {
        matches!(self, Sign::Scorpio | Sign::Sagittarius)
    }

    pub fn info(self) -> SignInfo {
        SignInfo {
            sign: self,
            symbol: self.symbol(),
            special: self.is_special(),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignInfo {
    pub sign: Sign,
    pub symbol: &'static str,
    pub special: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub sign: Sign,
    pub symbol: &'static str,
    pub weekday: Weekday,
    pub age: u32,
    pub special: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgeGap {
    pub years: u32,
    pub days: u32,
}

/// Either a clamped percentage or the hardcoded soulmate match, which is
/// stored and displayed as 999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum MatchScore {
    Percent(u8),
    Soulmate,
}

impl MatchScore {
    pub const SOULMATE_VALUE: u16 = 999;

    pub fn value(self) -> u16 {
        match self {
            MatchScore::Percent(p) => u16::from(p),
            MatchScore::Soulmate => Self::SOULMATE_VALUE,
        }
    }

    pub fn is_soulmate(self) -> bool {
        matches!(self, MatchScore::Soulmate)
    }
}

impl From<MatchScore> for u16 {
    fn from(score: MatchScore) -> Self {
        score.value()
    }
}

impl TryFrom<u16> for MatchScore {
    type Error = MatchError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            MatchScore::SOULMATE_VALUE => Ok(MatchScore::Soulmate),
            0..=100 => Ok(MatchScore::Percent(value as u8)),
            other => Err(MatchError::ValidationError {
                message: format!("compatibility score {} is neither 0-100 nor 999", other),
            }),
        }
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: &'static str,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityOutcome {
    pub score: MatchScore,
    pub message: &'static str,
    pub symbol: &'static str,
    pub breakdown: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub person1: PersonSummary,
    pub person2: PersonSummary,
    pub age_gap: AgeGap,
    pub outcome: CompatibilityOutcome,
}

/// The last pair of birth dates entered, as persisted under `compatibilityData`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInputs {
    #[serde(default)]
    pub person1_date: Option<NaiveDate>,
    #[serde(default)]
    pub person2_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub emoji: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProfile {
    pub id: String,
    pub label: String,
    pub person1_date: NaiveDate,
    pub person2_date: NaiveDate,
    pub compatibility_score: MatchScore,
    pub timestamp: i64,
}
