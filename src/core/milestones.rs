use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DEFAULT_YEARS_AHEAD: u32 = 5;

const MARRIAGE_AGE: i32 = 25;
const YEARS_TO_FIRST_BABY: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    BothCanDrive,
    BothCanVote,
    LegalEverything,
    MarriageReady,
}

impl Badge {
    const THRESHOLDS: [(Badge, i32); 4] = [
        (Badge::BothCanDrive, 16),
        (Badge::BothCanVote, 18),
        (Badge::LegalEverything, 21),
        (Badge::MarriageReady, 25),
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Badge::BothCanDrive => "🚗",
            Badge::BothCanVote => "🗳️",
            Badge::LegalEverything => "🍾",
            Badge::MarriageReady => "💍",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::BothCanDrive => "Both Can Drive!",
            Badge::BothCanVote => "Both Can Vote!",
            Badge::LegalEverything => "Legal Everything!",
            Badge::MarriageReady => "Marriage Ready!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonMilestone {
    pub age: i32,
    pub grade: String,
    pub stage: &'static str,
}

impl PersonMilestone {
    fn for_age(age: i32) -> Self {
        Self {
            age,
            grade: grade_level(age),
            stage: life_stage(age),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneReport {
    pub year: i32,
    pub person1: PersonMilestone,
    pub person2: PersonMilestone,
    pub message: String,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuturePredictions {
    pub marriage_year: i32,
    pub baby_year: i32,
    pub marriage: String,
    pub baby: String,
}

fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub fn grade_level(age: i32) -> String {
    match age {
        i32::MIN..=4 => "Pre-K 👶".to_string(),
        5 => "Kindergarten 🎒".to_string(),
        // Real ordinals ("1st", "2nd"), not a bare "th" suffix.
        6..=11 => format!("{} Grade 📚", ordinal(age - 5)),
        12 => "6th Grade (Middle School) 🏫".to_string(),
        13 => "7th Grade 📖".to_string(),
        14 => "8th Grade 📝".to_string(),
        15 => "9th Grade (Freshman) 🎓".to_string(),
        16 => "10th Grade (Sophomore) 📋".to_string(),
        17 => "11th Grade (Junior) 📊".to_string(),
        18 => "12th Grade (Senior) 🎉".to_string(),
        // Counted from 18 so that 19 through 22 are years 1 through 4.
        19..=22 => format!("College Year {} 🎓", age - 18),
        23..=26 => "Graduate School 📚".to_string(),
        _ => "Working Professional 💼".to_string(),
    }
}

pub fn life_stage(age: i32) -> &'static str {
    match age {
        i32::MIN..=12 => "Childhood 🧸",
        13..=17 => "Teenager 🌟",
        18..=24 => "Young Adult 🌈",
        25..=34 => "Adult 💪",
        _ => "Mature Adult 🌺",
    }
}

/// Ages are counted by birth year only: everyone "turns" their age on January 1st.
pub fn milestones_for_year(birth1: NaiveDate, birth2: NaiveDate, year: i32) -> MilestoneReport {
    let person1 = PersonMilestone::for_age(year - birth1.year());
    let person2 = PersonMilestone::for_age(year - birth2.year());
    let (a1, a2) = (person1.age, person2.age);

    let both_adults = a1 >= 18 && a2 >= 18;
    let both_in_college = (18..=22).contains(&a1) && (18..=22).contains(&a2);

    let message = if both_adults && both_in_college {
        format!(
            "💑 In {}, you'll be {} and they'll be {} — perfect college sweethearts! 📚💕",
            year, a1, a2
        )
    } else if both_adults {
        format!(
            "💑 In {}, you'll be {} and they'll be {} — finally legal for everything! 🎉💍",
            year, a1, a2
        )
    } else if a1 >= 16 && a2 >= 16 {
        format!(
            "🚗 In {}, you'll both be driving age! Road trip dates incoming! 🛣️💕",
            year
        )
    } else {
        format!(
            "🌟 In {}, you'll be {} and they'll be {} — growing up together! 💫",
            year, a1, a2
        )
    };

    let badges = Badge::THRESHOLDS
        .iter()
        .filter(|(_, age)| a1 >= *age && a2 >= *age)
        .map(|(badge, _)| *badge)
        .collect();

    MilestoneReport {
        year,
        person1,
        person2,
        message,
        badges,
    }
}

pub fn future_predictions(birth1: NaiveDate, birth2: NaiveDate) -> FuturePredictions {
    let (y1, y2) = (birth1.year(), birth2.year());
    let marriage_year = (y1 + MARRIAGE_AGE).max(y2 + MARRIAGE_AGE);
    let baby_year = marriage_year + YEARS_TO_FIRST_BABY;

    FuturePredictions {
        marriage_year,
        baby_year,
        marriage: format!(
            "💍 Perfect marriage age: {} (you'll be {} & {})",
            marriage_year,
            marriage_year - y1,
            marriage_year - y2
        ),
        baby: format!(
            "👶 First baby guess: {} (you'll be {} & {}) 😂",
            baby_year,
            baby_year - y1,
            baby_year - y2
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grade_levels() {
        assert_eq!(grade_level(3), "Pre-K 👶");
        assert_eq!(grade_level(5), "Kindergarten 🎒");
        assert_eq!(grade_level(6), "1st Grade 📚");
        assert_eq!(grade_level(7), "2nd Grade 📚");
        assert_eq!(grade_level(8), "3rd Grade 📚");
        assert_eq!(grade_level(11), "6th Grade 📚");
        assert_eq!(grade_level(12), "6th Grade (Middle School) 🏫");
        assert_eq!(grade_level(18), "12th Grade (Senior) 🎉");
        assert_eq!(grade_level(19), "College Year 1 🎓");
        assert_eq!(grade_level(22), "College Year 4 🎓");
        assert_eq!(grade_level(26), "Graduate School 📚");
        assert_eq!(grade_level(27), "Working Professional 💼");
    }

    #[test]
    fn test_life_stages() {
        assert_eq!(life_stage(-2), "Childhood 🧸");
        assert_eq!(life_stage(12), "Childhood 🧸");
        assert_eq!(life_stage(13), "Teenager 🌟");
        assert_eq!(life_stage(24), "Young Adult 🌈");
        assert_eq!(life_stage(25), "Adult 💪");
        assert_eq!(life_stage(35), "Mature Adult 🌺");
    }

    #[test]
    fn test_college_sweethearts() {
        let report = milestones_for_year(date(2007, 11, 29), date(2008, 2, 1), 2027);
        assert_eq!(report.person1.age, 20);
        assert_eq!(report.person2.age, 19);
        assert!(report.message.contains("perfect college sweethearts"));
        assert_eq!(report.badges, vec![Badge::BothCanDrive, Badge::BothCanVote]);
    }

    #[test]
    fn test_driving_age_message() {
        let report = milestones_for_year(date(2009, 1, 1), date(2010, 1, 1), 2026);
        assert_eq!(
            report.message,
            "🚗 In 2026, you'll both be driving age! Road trip dates incoming! 🛣️💕"
        );
        assert_eq!(report.badges, vec![Badge::BothCanDrive]);
    }

    #[test]
    fn test_growing_up_together() {
        let report = milestones_for_year(date(2012, 1, 1), date(2010, 1, 1), 2026);
        assert!(report.message.contains("growing up together"));
        assert!(report.badges.is_empty());
    }

    #[test]
    fn test_all_badges() {
        let report = milestones_for_year(date(1990, 1, 1), date(1995, 1, 1), 2026);
        assert!(report.message.contains("finally legal for everything"));
        assert_eq!(report.badges.len(), 4);
        assert_eq!(report.badges[3].emoji(), "💍");
        assert_eq!(report.badges[3].label(), "Marriage Ready!");
    }

    #[test]
    fn test_future_predictions() {
        let predictions = future_predictions(date(2007, 11, 29), date(2010, 11, 18));
        assert_eq!(predictions.marriage_year, 2035);
        assert_eq!(predictions.baby_year, 2037);
        assert_eq!(
            predictions.marriage,
            "💍 Perfect marriage age: 2035 (you'll be 28 & 25)"
        );
        assert_eq!(
            predictions.baby,
            "👶 First baby guess: 2037 (you'll be 30 & 27) 😂"
        );
    }
}
