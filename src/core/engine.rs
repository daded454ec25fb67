use crate::core::compatibility::evaluate;
use crate::core::dates::{age_gap, age_in_years, weekday_of};
use crate::core::milestones::{
    future_predictions, milestones_for_year, FuturePredictions, MilestoneReport,
    DEFAULT_YEARS_AHEAD,
};
use crate::core::persistence::{load_json, save_json, BIRTH_DATE_KEY, MATCH_INPUTS_KEY};
use crate::core::profiles::ProfileBook;
use crate::core::timeline::{EventDraft, Timeline};
use crate::core::zodiac::resolve_sign_for;
use crate::core::{
    pick, Clock, CompatibilityReport, KeyValueStore, MatchInputs, MatchScore, PersonSummary,
    RandomSource, Result, SavedProfile, TimelineEvent,
};
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

const ADULT_AGE: u32 = 18;
const WORRYING_AGE_GAP: u32 = 3;

const AGE_GAP_WARNINGS: [&str; 3] = [
    "😅 You might have to wait a few years, but love always finds a way!",
    "💫 The stars aren't sure… but let's hope for a time skip!",
    "⏰ Time will make this connection even more magical!",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalCountdown {
    pub days: i64,
    pub year: i32,
    pub message: String,
}

pub fn display_score(score: MatchScore) -> String {
    match score {
        MatchScore::Soulmate => "∞".to_string(),
        MatchScore::Percent(value) => value.to_string(),
    }
}

/// Ties the scoring functions to a clock, a random source and a store, and
/// persists the inputs the way the interactive checker does.
pub struct MatchEngine<C: Clock, R: RandomSource, S: KeyValueStore> {
    clock: C,
    rng: R,
    store: S,
    years_ahead: u32,
}

impl<C: Clock, R: RandomSource, S: KeyValueStore> MatchEngine<C, R, S> {
    pub fn new(clock: C, rng: R, store: S) -> Self {
        Self {
            clock,
            rng,
            store,
            years_ahead: DEFAULT_YEARS_AHEAD,
        }
    }

    /// How far ahead [`MatchEngine::milestones`] looks when no year is given.
    pub fn with_years_ahead(mut self, years_ahead: u32) -> Self {
        self.years_ahead = years_ahead;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn now_millis(&self) -> i64 {
        self.clock.now_utc().timestamp_millis()
    }

    pub fn person_summary(&self, birth: NaiveDate) -> PersonSummary {
        let info = resolve_sign_for(birth);
        PersonSummary {
            sign: info.sign,
            symbol: info.symbol,
            weekday: weekday_of(birth),
            age: age_in_years(birth, self.today()),
            special: info.special,
        }
    }

    /// Summary for a single birthday, remembered as the user's own.
    pub fn summarize(&mut self, birth: NaiveDate) -> Result<PersonSummary> {
        let summary = self.person_summary(birth);
        save_json(&mut self.store, BIRTH_DATE_KEY, &birth)?;
        tracing::info!(
            "Saved birth date {} ({} {})",
            birth,
            summary.symbol,
            summary.sign
        );
        Ok(summary)
    }

    pub fn restore_summary(&mut self) -> Result<Option<PersonSummary>> {
        let saved: Option<NaiveDate> = load_json(&self.store, BIRTH_DATE_KEY)?;
        Ok(saved.map(|birth| self.person_summary(birth)))
    }

    /// Builds both summaries and the compatibility outcome, then saves the pair.
    pub fn check(&mut self, date1: NaiveDate, date2: NaiveDate) -> Result<CompatibilityReport> {
        let report = self.compute(date1, date2);

        let inputs = MatchInputs {
            person1_date: Some(date1),
            person2_date: Some(date2),
        };
        save_json(&mut self.store, MATCH_INPUTS_KEY, &inputs)?;
        tracing::info!(
            "Checked {} x {}: {}",
            report.person1.sign,
            report.person2.sign,
            report.outcome.score
        );

        Ok(report)
    }

    fn compute(&mut self, date1: NaiveDate, date2: NaiveDate) -> CompatibilityReport {
        let person1 = self.person_summary(date1);
        let person2 = self.person_summary(date2);
        tracing::debug!("Person 1: {:?}", person1);
        tracing::debug!("Person 2: {:?}", person2);

        let outcome = evaluate(
            person1.sign,
            person2.sign,
            person1.weekday,
            person2.weekday,
            date1,
            date2,
            &mut self.rng,
        );

        CompatibilityReport {
            person1,
            person2,
            age_gap: age_gap(date1, date2),
            outcome,
        }
    }

    /// Recomputes the last saved pair; `None` until both dates were entered.
    pub fn restore(&mut self) -> Result<Option<CompatibilityReport>> {
        let inputs: MatchInputs = load_json(&self.store, MATCH_INPUTS_KEY)?.unwrap_or_default();
        match (inputs.person1_date, inputs.person2_date) {
            (Some(date1), Some(date2)) => {
                tracing::debug!("Restoring saved pair {} / {}", date1, date2);
                Ok(Some(self.compute(date1, date2)))
            }
            _ => Ok(None),
        }
    }

    pub fn saved_inputs(&self) -> Result<MatchInputs> {
        Ok(load_json(&self.store, MATCH_INPUTS_KEY)?.unwrap_or_default())
    }

    pub fn age_gap_warning(&mut self, report: &CompatibilityReport) -> Option<&'static str> {
        let younger = report.person1.age.min(report.person2.age);
        let older = report.person1.age.max(report.person2.age);

        if younger < ADULT_AGE && older - younger > WORRYING_AGE_GAP {
            Some(*pick(&mut self.rng, &AGE_GAP_WARNINGS))
        } else {
            None
        }
    }

    /// Days until the younger person's 18th birthday, if it is still ahead.
    pub fn legal_countdown(&self, date1: NaiveDate, date2: NaiveDate) -> Option<LegalCountdown> {
        // Month arithmetic clamps: a Feb 29 birth turns 18 on Feb 28, not Mar 1.
        let adult_on = |birth: NaiveDate| birth.checked_add_months(Months::new(ADULT_AGE * 12));
        let both_adults_on = adult_on(date1)?.max(adult_on(date2)?);

        let today = self.today();
        if both_adults_on <= today {
            return None;
        }

        let days = (both_adults_on - today).num_days();
        let year = both_adults_on.year();
        Some(LegalCountdown {
            days,
            year,
            message: format!(
                "⏳ {} days until you're both legal adults! 🎉 You'll both be 18 in {}!",
                days, year
            ),
        })
    }

    /// Milestones for `year`, or `years_ahead` past the current year when `None`.
    pub fn milestones(
        &self,
        date1: NaiveDate,
        date2: NaiveDate,
        year: Option<i32>,
    ) -> MilestoneReport {
        let year = year.unwrap_or_else(|| self.today().year() + self.years_ahead as i32);
        milestones_for_year(date1, date2, year)
    }

    pub fn future_predictions(&self, date1: NaiveDate, date2: NaiveDate) -> FuturePredictions {
        future_predictions(date1, date2)
    }

    pub fn timeline(&self) -> Result<Timeline> {
        Timeline::load(&self.store)
    }

    pub fn add_timeline_event(&mut self, draft: EventDraft) -> Result<TimelineEvent> {
        let mut timeline = Timeline::load(&self.store)?;
        let event = timeline.add(draft, self.now_millis())?;
        timeline.save(&mut self.store)?;
        tracing::info!("Added timeline event '{}' on {}", event.title, event.date);
        Ok(event)
    }

    pub fn remove_timeline_event(&mut self, id: &str) -> Result<TimelineEvent> {
        let mut timeline = Timeline::load(&self.store)?;
        let event = timeline.remove(id)?;
        timeline.save(&mut self.store)?;
        tracing::info!("Removed timeline event '{}'", event.title);
        Ok(event)
    }

    pub fn profiles(&self) -> Result<ProfileBook> {
        ProfileBook::load(&self.store)
    }

    /// Saves a profile for a checked pair under `label`.
    pub fn save_profile(
        &mut self,
        label: &str,
        date1: NaiveDate,
        date2: NaiveDate,
        score: MatchScore,
    ) -> Result<SavedProfile> {
        let mut book = ProfileBook::load(&self.store)?;
        let profile = book.add(label, date1, date2, score, self.now_millis())?;
        book.save(&mut self.store)?;
        tracing::info!("Saved couple profile '{}'", profile.label);
        Ok(profile)
    }

    pub fn delete_profile(&mut self, id: &str) -> Result<SavedProfile> {
        let mut book = ProfileBook::load(&self.store)?;
        let profile = book.remove(id)?;
        book.save(&mut self.store)?;
        tracing::info!("Deleted couple profile '{}'", profile.label);
        Ok(profile)
    }

    /// Re-runs a saved profile's pair; this also makes it the current pair.
    pub fn check_profile(&mut self, id: &str) -> Result<CompatibilityReport> {
        let book = ProfileBook::load(&self.store)?;
        let profile = book.get(id)?;
        let (date1, date2) = (profile.person1_date, profile.person2_date);
        tracing::info!("Loading profile '{}'", profile.label);
        self.check(date1, date2)
    }

    pub fn suggested_label(&mut self, score: MatchScore) -> &'static str {
        crate::core::profiles::suggested_label(score, &mut self.rng)
    }
}
