use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub trait Clock {
    /// Local wall-clock time; ages and "today" are computed from this.
    fn now(&self) -> NaiveDateTime;

    /// The current instant, for epoch-millisecond ids and timestamps.
    fn now_utc(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

pub trait RandomSource {
    /// A uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// String key-value persistence with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
