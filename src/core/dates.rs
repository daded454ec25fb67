use crate::core::AgeGap;
use chrono::{Datelike, NaiveDate, Weekday};

const DAYS_PER_YEAR: u64 = 365;

pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Whole years from `birth` to `reference`, one less while this year's
/// birthday is still ahead. Birth dates after `reference` give 0.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Splits the absolute day distance into 365-day years and leftover days.
/// Leap days are deliberately not corrected for.
pub fn age_gap(a: NaiveDate, b: NaiveDate) -> AgeGap {
    let total_days = (a - b).num_days().unsigned_abs();
    AgeGap {
        years: (total_days / DAYS_PER_YEAR) as u32,
        days: (total_days % DAYS_PER_YEAR) as u32,
    }
}

/// Calendar-year distance used by the scoring rules, not a true age difference.
pub fn birth_year_gap(a: NaiveDate, b: NaiveDate) -> u32 {
    (a.year() - b.year()).unsigned_abs()
}
