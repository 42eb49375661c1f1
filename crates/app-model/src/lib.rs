//! Domain data contracts for Growth Companion
//!
//! This crate defines the canonical value shapes shared across the
//! application: users, chart series, calendar events, notifications, and
//! device locations. Shapes are plain serde data owned by whichever caller
//! constructs them; behavior is limited to construction helpers and opt-in
//! validation for use at trust boundaries such as deserialization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod charts;
pub mod location;
pub mod notifications;
pub mod users;

pub use calendar::CalendarEvent;
pub use charts::{ChartColor, ChartData, ChartDataset};
pub use location::LocationData;
pub use notifications::NotificationData;
pub use users::User;
