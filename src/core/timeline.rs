use crate::core::persistence::{load_json, save_json, TIMELINE_KEY};
use crate::core::{KeyValueStore, Result, TimelineEvent};
use crate::utils::error::MatchError;
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;

pub const DEFAULT_EVENT_EMOJI: &str = "💕";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedEvent {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

#[rustfmt::skip]
pub static PREDEFINED_EVENTS: [PredefinedEvent; 9] = [
    PredefinedEvent { title: "First Met", emoji: "👋", description: "The day our paths crossed!" },
    PredefinedEvent { title: "First Crush", emoji: "😍", description: "When the butterflies started!" },
    PredefinedEvent { title: "First Date", emoji: "🌹", description: "Our magical first date!" },
    PredefinedEvent { title: "First Kiss", emoji: "💋", description: "Sparks flew everywhere!" },
    PredefinedEvent { title: "First 'I Love You'", emoji: "💌", description: "Those three little words!" },
    PredefinedEvent { title: "Anniversary", emoji: "🎉", description: "Celebrating our love!" },
    PredefinedEvent { title: "Future Engagement", emoji: "💍", description: "When we'll get engaged!" },
    PredefinedEvent { title: "Future Wedding", emoji: "👰", description: "Our dream wedding day!" },
    PredefinedEvent { title: "Future Baby", emoji: "👶", description: "Our little miracle!" },
];

pub fn predefined_event(title: &str) -> Option<&'static PredefinedEvent> {
    PREDEFINED_EVENTS
        .iter()
        .find(|event| event.title.eq_ignore_ascii_case(title.trim()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub emoji: Option<String>,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            emoji: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let mut events: Vec<TimelineEvent> = load_json(store, TIMELINE_KEY)?.unwrap_or_default();
        events.sort_by_key(|event| event.date);
        Ok(Self { events })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_json(store, TIMELINE_KEY, &self.events)
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Inserts the event in date order. A predefined title fills in whatever
    /// emoji or description the draft leaves out.
    pub fn add(&mut self, draft: EventDraft, now_millis: i64) -> Result<TimelineEvent> {
        validate_non_empty_string("title", &draft.title)?;

        let preset = predefined_event(&draft.title);
        let title = preset
            .map(|p| p.title.to_string())
            .unwrap_or_else(|| draft.title.trim().to_string());
        let emoji = draft
            .emoji
            .filter(|e| !e.trim().is_empty())
            .or_else(|| preset.map(|p| p.emoji.to_string()))
            .unwrap_or_else(|| DEFAULT_EVENT_EMOJI.to_string());
        let description = draft
            .description
            .or_else(|| preset.map(|p| p.description.to_string()))
            .unwrap_or_default();

        let event = TimelineEvent {
            id: self.unique_id(now_millis),
            title,
            date: draft.date,
            emoji,
            description,
        };

        // Stable: events on the same day keep insertion order.
        let position = self.events.partition_point(|e| e.date <= event.date);
        self.events.insert(position, event.clone());
        Ok(event)
    }

    pub fn remove(&mut self, id: &str) -> Result<TimelineEvent> {
        let position = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| MatchError::NotFoundError {
                what: format!("timeline event '{}'", id),
            })?;
        Ok(self.events.remove(position))
    }

    fn unique_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.events.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
