//! Ambient application state for Growth Companion
//!
//! This crate owns the reactive theme signal: the user's theme mode
//! preference, the time-of-day schedule that resolves `auto`, and a
//! provider publishing the resolved theme and its derived color scheme to
//! adaptive surfaces.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod provider;
pub mod scheme;

pub use provider::{ScheduleHandle, ThemeEvent, ThemeProvider};
pub use scheme::{Clock, ColorScheme, SystemClock, ThemeMode, ThemeName, ThemePreferences};
