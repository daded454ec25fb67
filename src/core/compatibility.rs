use crate::core::dates::birth_year_gap;
use crate::core::{pick, CompatibilityOutcome, MatchScore, Message, RandomSource, Sign};
use chrono::{NaiveDate, Weekday};

pub const DEFAULT_BASE_SCORE: u8 = 45;
pub const MIN_SCORE: f64 = 15.0;
pub const MAX_SCORE: f64 = 95.0;

const SAME_WEEKDAY_BONUS: f64 = 8.0;
const CLOSE_AGE_BONUS: f64 = 5.0;
const CLOSE_AGE_YEARS: u32 = 3;
const WIDE_AGE_YEARS: u32 = 10;
const STRONG_MATCH_SCORE: f64 = 75.0;
const MAX_WIDE_GAP_PENALTY: u32 = 15;
const MAX_STRONG_GAP_PENALTY: u32 = 8;
const VARIANCE_SPREAD: f64 = 10.0;

/// The one hardcoded pair that always scores as soulmates, in either order.
pub const SOULMATE_PAIR: (NaiveDate, NaiveDate) = (ymd(2007, 11, 29), ymd(2010, 11, 18));

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

type Row = &'static [(Sign, u8)];

// Rows are grouped by element: fire, earth, air, water.
// Not symmetric: MATRIX[a][b] may differ from MATRIX[b][a].
#[rustfmt::skip]
static MATRIX: [(Sign, Row); 12] = [
    (Sign::Aries, &[
        (Sign::Leo, 85), (Sign::Sagittarius, 80), (Sign::Gemini, 75), (Sign::Aquarius, 70),
        (Sign::Libra, 65), (Sign::Aries, 60), (Sign::Scorpio, 55), (Sign::Cancer, 50),
        (Sign::Capricorn, 45), (Sign::Virgo, 40), (Sign::Taurus, 35), (Sign::Pisces, 30),
    ]),
    (Sign::Leo, &[
        (Sign::Aries, 85), (Sign::Sagittarius, 80), (Sign::Gemini, 75), (Sign::Libra, 70),
        (Sign::Aquarius, 65), (Sign::Leo, 60), (Sign::Scorpio, 55), (Sign::Cancer, 50),
        (Sign::Pisces, 45), (Sign::Virgo, 40), (Sign::Taurus, 35), (Sign::Capricorn, 30),
    ]),
    (Sign::Sagittarius, &[
        (Sign::Aries, 80), (Sign::Leo, 80), (Sign::Aquarius, 75), (Sign::Libra, 70),
        (Sign::Gemini, 65), (Sign::Sagittarius, 95), (Sign::Scorpio, 60), (Sign::Cancer, 50),
        (Sign::Virgo, 45), (Sign::Taurus, 40), (Sign::Capricorn, 35), (Sign::Pisces, 30),
    ]),
    (Sign::Taurus, &[
        (Sign::Virgo, 85), (Sign::Capricorn, 80), (Sign::Cancer, 75), (Sign::Pisces, 70),
        (Sign::Scorpio, 65), (Sign::Taurus, 60), (Sign::Leo, 50), (Sign::Aquarius, 45),
        (Sign::Sagittarius, 40), (Sign::Aries, 35), (Sign::Gemini, 30), (Sign::Libra, 25),
    ]),
    (Sign::Virgo, &[
        (Sign::Taurus, 85), (Sign::Capricorn, 80), (Sign::Cancer, 75), (Sign::Scorpio, 70),
        (Sign::Pisces, 65), (Sign::Virgo, 60), (Sign::Gemini, 55), (Sign::Libra, 50),
        (Sign::Aquarius, 45), (Sign::Leo, 40), (Sign::Sagittarius, 35), (Sign::Aries, 30),
    ]),
    (Sign::Capricorn, &[
        (Sign::Taurus, 80), (Sign::Virgo, 80), (Sign::Scorpio, 75), (Sign::Pisces, 70),
        (Sign::Cancer, 65), (Sign::Capricorn, 60), (Sign::Libra, 55), (Sign::Aquarius, 50),
        (Sign::Gemini, 45), (Sign::Sagittarius, 40), (Sign::Leo, 35), (Sign::Aries, 30),
    ]),
    (Sign::Gemini, &[
        (Sign::Libra, 85), (Sign::Aquarius, 80), (Sign::Aries, 75), (Sign::Leo, 70),
        (Sign::Sagittarius, 65), (Sign::Gemini, 60), (Sign::Virgo, 55), (Sign::Scorpio, 50),
        (Sign::Capricorn, 45), (Sign::Taurus, 40), (Sign::Cancer, 35), (Sign::Pisces, 30),
    ]),
    (Sign::Libra, &[
        (Sign::Gemini, 85), (Sign::Aquarius, 80), (Sign::Leo, 75), (Sign::Sagittarius, 70),
        (Sign::Aries, 65), (Sign::Libra, 60), (Sign::Cancer, 55), (Sign::Scorpio, 50),
        (Sign::Pisces, 45), (Sign::Capricorn, 40), (Sign::Virgo, 35), (Sign::Taurus, 30),
    ]),
    (Sign::Aquarius, &[
        (Sign::Gemini, 80), (Sign::Libra, 80), (Sign::Sagittarius, 75), (Sign::Aries, 70),
        (Sign::Leo, 65), (Sign::Aquarius, 60), (Sign::Scorpio, 55), (Sign::Cancer, 50),
        (Sign::Pisces, 45), (Sign::Taurus, 40), (Sign::Virgo, 35), (Sign::Capricorn, 30),
    ]),
    (Sign::Cancer, &[
        (Sign::Scorpio, 85), (Sign::Pisces, 80), (Sign::Taurus, 75), (Sign::Virgo, 70),
        (Sign::Capricorn, 65), (Sign::Cancer, 60), (Sign::Libra, 55), (Sign::Gemini, 50),
        (Sign::Leo, 45), (Sign::Sagittarius, 40), (Sign::Aries, 35), (Sign::Aquarius, 30),
    ]),
    (Sign::Scorpio, &[
        (Sign::Cancer, 85), (Sign::Pisces, 80), (Sign::Virgo, 75), (Sign::Capricorn, 70),
        (Sign::Taurus, 65), (Sign::Scorpio, 95), (Sign::Sagittarius, 60), (Sign::Libra, 55),
        (Sign::Aquarius, 50), (Sign::Gemini, 45), (Sign::Leo, 40), (Sign::Aries, 35),
    ]),
    (Sign::Pisces, &[
        (Sign::Cancer, 80), (Sign::Scorpio, 80), (Sign::Taurus, 75), (Sign::Capricorn, 70),
        (Sign::Virgo, 65), (Sign::Pisces, 60), (Sign::Sagittarius, 55), (Sign::Gemini, 50),
        (Sign::Libra, 45), (Sign::Aries, 40), (Sign::Leo, 35), (Sign::Aquarius, 30),
    ]),
];

// Breakdown lines use this four-entry table, not MATRIX, so the displayed
// percentages stay as they always were.
#[rustfmt::skip]
static BREAKDOWN_MATRIX: [(Sign, Row); 12] = [
    (Sign::Aries, &[(Sign::Leo, 85), (Sign::Sagittarius, 80), (Sign::Gemini, 75), (Sign::Aquarius, 70)]),
    (Sign::Taurus, &[(Sign::Virgo, 85), (Sign::Capricorn, 80), (Sign::Cancer, 75), (Sign::Pisces, 70)]),
    (Sign::Gemini, &[(Sign::Libra, 85), (Sign::Aquarius, 80), (Sign::Aries, 75), (Sign::Leo, 70)]),
    (Sign::Cancer, &[(Sign::Scorpio, 85), (Sign::Pisces, 80), (Sign::Taurus, 75), (Sign::Virgo, 70)]),
    (Sign::Leo, &[(Sign::Aries, 85), (Sign::Sagittarius, 80), (Sign::Gemini, 75), (Sign::Libra, 70)]),
    (Sign::Virgo, &[(Sign::Taurus, 85), (Sign::Capricorn, 80), (Sign::Cancer, 75), (Sign::Scorpio, 70)]),
    (Sign::Libra, &[(Sign::Gemini, 85), (Sign::Aquarius, 80), (Sign::Leo, 75), (Sign::Sagittarius, 70)]),
    (Sign::Scorpio, &[(Sign::Cancer, 85), (Sign::Pisces, 80), (Sign::Virgo, 75), (Sign::Capricorn, 70)]),
    (Sign::Sagittarius, &[(Sign::Aries, 80), (Sign::Leo, 80), (Sign::Aquarius, 75), (Sign::Libra, 70)]),
    (Sign::Capricorn, &[(Sign::Taurus, 80), (Sign::Virgo, 80), (Sign::Scorpio, 75), (Sign::Pisces, 70)]),
    (Sign::Aquarius, &[(Sign::Gemini, 80), (Sign::Libra, 80), (Sign::Sagittarius, 75), (Sign::Aries, 70)]),
    (Sign::Pisces, &[(Sign::Cancer, 80), (Sign::Scorpio, 80), (Sign::Taurus, 75), (Sign::Capricorn, 70)]),
];

const SOULMATE_MESSAGE: Message = Message {
    text: "💫 Soulmates unlocked: Your bond transcends time itself!",
    symbol: "❤️",
};

struct MessageTier {
    min_score: u8,
    texts: [&'static str; 3],
    symbol: &'static str,
}

// Descending thresholds; the last tier catches everything below 50.
static MESSAGE_TIERS: [MessageTier; 5] = [
    MessageTier {
        min_score: 85,
        texts: [
            "🌟 The universe ships you two!",
            "💖 Destiny-locked!",
            "✨ Written in the stars forever!",
        ],
        symbol: "💕",
    },
    MessageTier {
        min_score: 75,
        texts: [
            "🌟 The universe ships you two!",
            "💖 Destiny-locked!",
            "🎯 Perfect cosmic alignment!",
        ],
        symbol: "✨",
    },
    MessageTier {
        min_score: 60,
        texts: [
            "💫 Sweet cosmic vibes!",
            "🌙 Beautiful connection brewing!",
            "💝 Love is in the air!",
        ],
        symbol: "💖",
    },
    MessageTier {
        min_score: 50,
        texts: [
            "🌈 Adventure awaits you two!",
            "🎭 Opposites attract energy!",
            "🌸 Cute chaos combo!",
        ],
        symbol: "🔥",
    },
    MessageTier {
        min_score: 0,
        texts: [
            "🤔 Might need some stardust…",
            "💔 Opposites attract? Maybe…",
            "🌙 Love finds mysterious ways!",
        ],
        symbol: "💫",
    },
];

const SOULMATE_BREAKDOWN: [&str; 3] = [
    "❤️ Infinite soulmate energy!",
    "💫 Transcends all logic!",
    "✨ Pure cosmic magic!",
];

fn lookup(table: &[(Sign, Row)], a: Sign, b: Sign) -> Option<u8> {
    table
        .iter()
        .find(|(sign, _)| *sign == a)
        .and_then(|(_, row)| row.iter().find(|(other, _)| *other == b))
        .map(|(_, score)| *score)
}

/// Zodiac affinity used by [`score`].
pub fn base_score(a: Sign, b: Sign) -> u8 {
    lookup(&MATRIX, a, b).unwrap_or(DEFAULT_BASE_SCORE)
}

/// Zodiac affinity used by [`breakdown`]; most pairs fall back to 45 here.
pub fn breakdown_base_score(a: Sign, b: Sign) -> u8 {
    lookup(&BREAKDOWN_MATRIX, a, b).unwrap_or(DEFAULT_BASE_SCORE)
}

pub fn is_soulmate_pair(a: NaiveDate, b: NaiveDate) -> bool {
    let (first, second) = SOULMATE_PAIR;
    (a == first && b == second) || (a == second && b == first)
}

/// Scores a couple.
///
/// The override pair short-circuits to [`MatchScore::Soulmate`] without
/// drawing from `rng`. Every other pair draws exactly one sample, so the
/// result varies by up to ±5 between calls unless the source is pinned.
pub fn score<R: RandomSource + ?Sized>(
    sign_a: Sign,
    sign_b: Sign,
    weekday_a: Weekday,
    weekday_b: Weekday,
    date_a: NaiveDate,
    date_b: NaiveDate,
    rng: &mut R,
) -> MatchScore {
    if is_soulmate_pair(date_a, date_b) {
        tracing::debug!("Soulmate override matched for {} and {}", date_a, date_b);
        return MatchScore::Soulmate;
    }

    let mut total = f64::from(base_score(sign_a, sign_b));

    if weekday_a == weekday_b {
        total += SAME_WEEKDAY_BONUS;
    }

    let gap = birth_year_gap(date_a, date_b);
    if gap > WIDE_AGE_YEARS {
        let cap = if total < STRONG_MATCH_SCORE {
            MAX_WIDE_GAP_PENALTY
        } else {
            MAX_STRONG_GAP_PENALTY
        };
        total -= f64::from(cap.min(gap - WIDE_AGE_YEARS));
    } else if gap <= CLOSE_AGE_YEARS {
        total += CLOSE_AGE_BONUS;
    }

    let variance = (rng.next_unit() - 0.5) * VARIANCE_SPREAD;
    total += variance;

    let clamped = total.round().clamp(MIN_SCORE, MAX_SCORE);
    tracing::debug!(
        "Scored {} x {}: base {}, gap {}y, variance {:+.2} -> {}",
        sign_a,
        sign_b,
        base_score(sign_a, sign_b),
        gap,
        variance,
        clamped
    );

    MatchScore::Percent(clamped as u8)
}

pub fn message<R: RandomSource + ?Sized>(score: MatchScore, rng: &mut R) -> Message {
    let value = match score {
        MatchScore::Soulmate => return SOULMATE_MESSAGE,
        MatchScore::Percent(value) => value,
    };

    let tier = MESSAGE_TIERS
        .iter()
        .find(|tier| value >= tier.min_score)
        .unwrap_or(&MESSAGE_TIERS[MESSAGE_TIERS.len() - 1]);

    Message {
        text: *pick(rng, &tier.texts),
        symbol: tier.symbol,
    }
}

pub fn breakdown(
    sign_a: Sign,
    sign_b: Sign,
    weekday_a: Weekday,
    weekday_b: Weekday,
    date_a: NaiveDate,
    date_b: NaiveDate,
) -> Vec<String> {
    if is_soulmate_pair(date_a, date_b) {
        return SOULMATE_BREAKDOWN.iter().map(|line| line.to_string()).collect();
    }

    let mut lines = Vec::new();

    let zodiac_line = match breakdown_base_score(sign_a, sign_b) {
        80..=u8::MAX => "+35% for perfect zodiac match 💫",
        70..=79 => "+25% for great zodiac harmony ✨",
        60..=69 => "+15% for decent zodiac vibes 🌙",
        50..=59 => "+5% for neutral zodiac energy ⚖️",
        _ => "-10% for clashing elements 🔥🌊",
    };
    lines.push(zodiac_line.to_string());

    if weekday_a == weekday_b {
        lines.push("+8% for cosmic day connection 📅".to_string());
    }

    // Always the 15-point cap here, whatever the zodiac score.
    let gap = birth_year_gap(date_a, date_b);
    if gap <= CLOSE_AGE_YEARS {
        lines.push("+5% for close ages 👶👧".to_string());
    } else if gap > WIDE_AGE_YEARS {
        let penalty = MAX_WIDE_GAP_PENALTY.min(gap - WIDE_AGE_YEARS);
        lines.push(format!("-{}% for age gap 📊", penalty));
    }

    if sign_a == Sign::Scorpio || sign_b == Sign::Scorpio {
        lines.push("+5% for Scorpio magic 🦂".to_string());
    }
    if sign_a == Sign::Sagittarius || sign_b == Sign::Sagittarius {
        lines.push("+5% for Sagittarius adventure 🏹".to_string());
    }

    lines
}

/// Score, message and breakdown in one pass, consuming two samples from
/// `rng` (none for the override pair).
pub fn evaluate<R: RandomSource + ?Sized>(
    sign_a: Sign,
    sign_b: Sign,
    weekday_a: Weekday,
    weekday_b: Weekday,
    date_a: NaiveDate,
    date_b: NaiveDate,
    rng: &mut R,
) -> CompatibilityOutcome {
    let score = score(sign_a, sign_b, weekday_a, weekday_b, date_a, date_b, rng);
    let Message { text, symbol } = message(score, rng);

    CompatibilityOutcome {
        score,
        message: text,
        symbol,
        breakdown: breakdown(sign_a, sign_b, weekday_a, weekday_b, date_a, date_b),
    }
}
