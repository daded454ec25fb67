use crate::core::{Sign, SignInfo};
use chrono::{Datelike, NaiveDate};

struct SignRange {
    sign: Sign,
    start: (u32, u32),
    end: (u32, u32),
}

// Capricorn wraps the new year and is checked first.
#[rustfmt::skip]
static SIGN_RANGES: [SignRange; 12] = [
    SignRange { sign: Sign::Capricorn, start: (12, 22), end: (1, 19) },
    SignRange { sign: Sign::Aquarius, start: (1, 20), end: (2, 18) },
    SignRange { sign: Sign::Pisces, start: (2, 19), end: (3, 20) },
    SignRange { sign: Sign::Aries, start: (3, 21), end: (4, 19) },
    SignRange { sign: Sign::Taurus, start: (4, 20), end: (5, 20) },
    SignRange { sign: Sign::Gemini, start: (5, 21), end: (6, 20) },
    SignRange { sign: Sign::Cancer, start: (6, 21), end: (7, 22) },
    SignRange { sign: Sign::Leo, start: (7, 23), end: (8, 22) },
    SignRange { sign: Sign::Virgo, start: (8, 23), end: (9, 22) },
    SignRange { sign: Sign::Libra, start: (9, 23), end: (10, 22) },
    SignRange { sign: Sign::Scorpio, start: (10, 23), end: (11, 21) },
    SignRange { sign: Sign::Sagittarius, start: (11, 22), end: (12, 21) },
];

impl SignRange {
    fn contains(&self, month: u32, day: u32) -> bool {
        let (start_month, start_day) = self.start;
        let (end_month, end_day) = self.end;
        (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
    }
}

/// Resolves the sign for a (month, day) pair.
///
/// The day is not checked against the month's length; out-of-range input
/// falls through to Capricorn instead of panicking.
pub fn resolve_sign(month: u32, day: u32) -> SignInfo {
    let sign = SIGN_RANGES
        .iter()
        .find(|range| range.contains(month, day))
        .map(|range| range.sign)
        .unwrap_or(Sign::Capricorn);

    sign.info()
}

pub fn resolve_sign_for(date: NaiveDate) -> SignInfo {
    resolve_sign(date.month(), date.day())
}
