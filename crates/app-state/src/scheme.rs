//! Color scheme, theme identity, and the time-of-day schedule
//!
//! The app ships three concrete themes (light, comfort, dark) selected by a
//! four-valued user preference where `auto` follows a wall-clock schedule:
//! dark through the night, comfort through the evening, light otherwise.
//! Adaptive surfaces do not consume themes directly; they follow the
//! two-valued [`ColorScheme`] derived from the resolved theme.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Error returned when parsing a theme identifier from a string
#[derive(Debug, Error)]
#[error("unknown theme identifier: {0}")]
pub struct ParseThemeError(pub String);

// ============================================================================
// Color scheme
// ============================================================================

/// Two-valued ambient scheme consumed by adaptive surfaces
///
/// The set is closed: a surface always receives light or dark, never a
/// third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light surfaces, dark content
    #[default]
    Light,
    /// Dark surfaces, light content
    Dark,
}

impl ColorScheme {
    /// Whether this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

// ============================================================================
// Themes and modes
// ============================================================================

/// Concrete visual themes the app ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Bright daytime theme
    #[default]
    Light,
    /// Warm low-glare evening theme
    Comfort,
    /// Night theme
    Dark,
}

impl ThemeName {
    /// The scheme adaptive surfaces follow under this theme
    ///
    /// Comfort is a light-scheme theme: warm surfaces, dark content.
    pub fn color_scheme(&self) -> ColorScheme {
        match self {
            ThemeName::Dark => ColorScheme::Dark,
            ThemeName::Light | ThemeName::Comfort => ColorScheme::Light,
        }
    }

    /// All themes in selection order
    pub fn all() -> [ThemeName; 3] {
        [ThemeName::Light, ThemeName::Comfort, ThemeName::Dark]
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Light => write!(f, "light"),
            ThemeName::Comfort => write!(f, "comfort"),
            ThemeName::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeName::Light),
            "comfort" => Ok(ThemeName::Comfort),
            "dark" => Ok(ThemeName::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// User theme preference
///
/// `Auto` follows the time-of-day [`schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always the light theme
    Light,
    /// Always the comfort theme
    Comfort,
    /// Always the dark theme
    Dark,
    /// Follow the time-of-day schedule
    #[default]
    Auto,
}

impl ThemeMode {
    /// Resolve the preference to a concrete theme at the given local hour
    pub fn resolve(&self, hour: u32) -> ThemeName {
        match self {
            ThemeMode::Light => ThemeName::Light,
            ThemeMode::Comfort => ThemeName::Comfort,
            ThemeMode::Dark => ThemeName::Dark,
            ThemeMode::Auto => schedule::recommended_for_hour(hour),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Comfort => write!(f, "comfort"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "comfort" => Ok(ThemeMode::Comfort),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

// ============================================================================
// Schedule
// ============================================================================

/// Time-of-day theme bands
pub mod schedule {
    use super::ThemeName;

    /// Hour (inclusive) at which the night band begins
    pub const DARK_START_HOUR: u32 = 22;
    /// Hour (exclusive) at which the night band ends in the morning
    pub const DARK_END_HOUR: u32 = 6;
    /// Hour (inclusive) at which the evening band begins
    pub const COMFORT_START_HOUR: u32 = 18;

    /// Recommended theme for a local hour of day
    ///
    /// Bands: 22:00-05:59 dark, 18:00-21:59 comfort, otherwise light.
    /// Hours past 23 saturate into the night band.
    pub fn recommended_for_hour(hour: u32) -> ThemeName {
        if hour >= DARK_START_HOUR || hour < DARK_END_HOUR {
            ThemeName::Dark
        } else if hour >= COMFORT_START_HOUR {
            ThemeName::Comfort
        } else {
            ThemeName::Light
        }
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Wall-clock source for schedule resolution
///
/// A seam so resolution is testable at fixed hours.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current local hour of day (0-23)
    fn local_hour(&self) -> u32;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

// ============================================================================
// Persisted preferences
// ============================================================================

/// Host-persisted theme preference shape
///
/// The host stores and restores this blob; this crate never touches disk.
/// Unknown fields and absent fields deserialize to defaults so older blobs
/// keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePreferences {
    /// Selected theme mode
    pub mode: ThemeMode,
}

impl ThemePreferences {
    /// Set the theme mode
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_display_and_parse() {
        assert_eq!(ColorScheme::Light.to_string(), "light");
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert!("dim".parse::<ColorScheme>().is_err());
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
    }

    #[test]
    fn test_theme_name_scheme_mapping() {
        assert_eq!(ThemeName::Light.color_scheme(), ColorScheme::Light);
        assert_eq!(ThemeName::Comfort.color_scheme(), ColorScheme::Light);
        assert_eq!(ThemeName::Dark.color_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_theme_name_round_trip() {
        for name in ThemeName::all() {
            assert_eq!(name.to_string().parse::<ThemeName>().unwrap(), name);
        }
        let json = serde_json::to_string(&ThemeName::Comfort).unwrap();
        assert_eq!(json, "\"comfort\"");
    }

    #[test]
    fn test_schedule_bands() {
        use schedule::recommended_for_hour;

        assert_eq!(recommended_for_hour(23), ThemeName::Dark);
        assert_eq!(recommended_for_hour(0), ThemeName::Dark);
        assert_eq!(recommended_for_hour(2), ThemeName::Dark);
        assert_eq!(recommended_for_hour(5), ThemeName::Dark);
        assert_eq!(recommended_for_hour(6), ThemeName::Light);
        assert_eq!(recommended_for_hour(12), ThemeName::Light);
        assert_eq!(recommended_for_hour(17), ThemeName::Light);
        assert_eq!(recommended_for_hour(18), ThemeName::Comfort);
        assert_eq!(recommended_for_hour(21), ThemeName::Comfort);
        assert_eq!(recommended_for_hour(22), ThemeName::Dark);
        // Out-of-range hours saturate into the night band
        assert_eq!(recommended_for_hour(25), ThemeName::Dark);
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(ThemeMode::Auto.resolve(12), ThemeName::Light);
        assert_eq!(ThemeMode::Auto.resolve(19), ThemeName::Comfort);
        assert_eq!(ThemeMode::Auto.resolve(23), ThemeName::Dark);
        // Explicit modes ignore the clock
        assert_eq!(ThemeMode::Dark.resolve(12), ThemeName::Dark);
        assert_eq!(ThemeMode::Light.resolve(23), ThemeName::Light);
        assert_eq!(ThemeMode::Comfort.resolve(3), ThemeName::Comfort);
    }

    #[test]
    fn test_preferences_defaults_and_round_trip() {
        // An empty blob restores the default mode
        let prefs: ThemePreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.mode, ThemeMode::Auto);

        let prefs = ThemePreferences::default().with_mode(ThemeMode::Comfort);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"mode":"comfort"}"#);
        let back: ThemePreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        let hour = SystemClock.local_hour();
        assert!(hour < 24);
    }
}
