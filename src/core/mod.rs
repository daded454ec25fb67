pub mod compatibility;
pub mod dates;
pub mod engine;
pub mod milestones;
pub mod persistence;
pub mod profiles;
pub mod timeline;
pub mod zodiac;

pub use crate::domain::model::{
    AgeGap, CompatibilityOutcome, CompatibilityReport, MatchInputs, MatchScore, Message,
    PersonSummary, SavedProfile, Sign, SignInfo, TimelineEvent,
};
pub use crate::domain::ports::{Clock, KeyValueStore, RandomSource};
pub use crate::utils::error::Result;

/// Uniform pick from a non-empty pool, `floor(u * len)`.
pub(crate) fn pick<'a, T, R: RandomSource + ?Sized>(rng: &mut R, pool: &'a [T]) -> &'a T {
    let index = (rng.next_unit() * pool.len() as f64).floor() as usize;
    &pool[index.min(pool.len().saturating_sub(1))]
}
