//! Calendar event shapes
//!
//! Events are day-scoped entries on the shared family calendar. Only `id`,
//! `title`, and `date` are required; times and description are optional
//! refinements. Dates travel as `YYYY-MM-DD` strings, times as `HH:MM`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar validation error types
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A required field was empty
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),

    /// Date is not a `YYYY-MM-DD` calendar date
    #[error("invalid event date: {0}")]
    InvalidDate(String),

    /// Time is not a `HH:MM` clock time
    #[error("invalid event time: {0}")]
    InvalidTime(String),
}

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;

/// A scheduled calendar entry
///
/// `id` is expected to be unique within a calendar's event set; the shape
/// does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Stable event identifier
    pub id: String,
    /// Short human-readable title
    pub title: String,
    /// Event day as `YYYY-MM-DD`
    pub date: String,
    /// Start of the event as `HH:MM`, if timed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End of the event as `HH:MM`, if timed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Longer free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarEvent {
    /// Create an event from the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            start_time: None,
            end_time: None,
            description: None,
        }
    }

    /// Set the start time
    pub fn with_start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }

    /// Set the end time
    pub fn with_end_time(mut self, time: impl Into<String>) -> Self {
        self.end_time = Some(time.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the shape at a trust boundary
    ///
    /// Checks required fields and the date/time string formats. A shape
    /// with only id, title, and date is a complete, valid event.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CalendarError::EmptyField("id"));
        }
        if self.title.is_empty() {
            return Err(CalendarError::EmptyField("title"));
        }
        if self.date.is_empty() {
            return Err(CalendarError::EmptyField("date"));
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDate(self.date.clone()))?;
        for time in [&self.start_time, &self.end_time].into_iter().flatten() {
            NaiveTime::parse_from_str(time, "%H:%M")
                .map_err(|_| CalendarError::InvalidTime(time.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_minimal_required_fields() {
        let event = CalendarEvent::new("ev-1", "Prenatal visit", "2026-03-15");
        assert!(event.validate().is_ok());
        assert!(event.start_time.is_none());
        assert!(event.end_time.is_none());
        assert!(event.description.is_none());
    }

    #[test]
    fn test_event_deserializes_without_optional_fields() {
        let json = r#"{"id":"ev-2","title":"Ultrasound","date":"2026-04-02"}"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert!(event.validate().is_ok());
        assert_eq!(event.title, "Ultrasound");
    }

    #[test]
    fn test_event_wire_names_are_camel_case() {
        let event = CalendarEvent::new("ev-3", "Checkup", "2026-05-20")
            .with_start_time("09:30")
            .with_end_time("10:15");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("startTime"));
        assert!(json.contains("endTime"));
        assert!(!json.contains("start_time"));

        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_rejects_malformed_date() {
        let event = CalendarEvent::new("ev-4", "Checkup", "15/03/2026");
        assert!(matches!(
            event.validate(),
            Err(CalendarError::InvalidDate(_))
        ));

        // February 30th is not a calendar date
        let event = CalendarEvent::new("ev-5", "Checkup", "2026-02-30");
        assert!(matches!(
            event.validate(),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_event_rejects_malformed_time() {
        let event =
            CalendarEvent::new("ev-6", "Checkup", "2026-03-15").with_start_time("25:99");
        assert!(matches!(
            event.validate(),
            Err(CalendarError::InvalidTime(_))
        ));
    }
}
