//! Route tables for the app shell
//!
//! Two closed route sets, mirrored from the host router's file layout:
//! - [`StackRoute`]: the root stack (`(tabs)`, `modal`, `settings`)
//! - [`TabRoute`]: the bottom tab group (`index`, `charts`, `calendar`,
//!   `profile`)
//!
//! None of these routes take parameters, so both tables are fieldless enums.
//! The host owns navigation state and history; this module only names the
//! destinations and carries their presentation metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tokens::sizing;

// =============================================================================
// Errors
// =============================================================================

/// Error raised when a route name does not belong to a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct ParseRouteError(pub String);

// =============================================================================
// Root Stack
// =============================================================================

/// How a stack screen is presented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Standard push onto the card stack
    #[default]
    Card,
    /// Slides up over the current screen
    Modal,
}

/// Screens registered on the root navigation stack.
///
/// The wire names match the host router's screen names exactly, including
/// the `(tabs)` group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StackRoute {
    /// The bottom tab group
    #[default]
    #[serde(rename = "(tabs)")]
    Tabs,
    /// Modal overlay screen
    #[serde(rename = "modal")]
    Modal,
    /// Settings screen
    #[serde(rename = "settings")]
    Settings,
}

impl StackRoute {
    /// The host router's screen name for this route.
    pub fn route_name(&self) -> &'static str {
        match self {
            StackRoute::Tabs => "(tabs)",
            StackRoute::Modal => "modal",
            StackRoute::Settings => "settings",
        }
    }

    /// Header title, when the screen shows a header at all.
    ///
    /// The tab group draws its own chrome, so it has no stack header.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            StackRoute::Tabs => None,
            StackRoute::Modal => Some("Modal"),
            StackRoute::Settings => Some("Settings"),
        }
    }

    /// How the host presents this screen.
    pub fn presentation(&self) -> Presentation {
        match self {
            StackRoute::Modal => Presentation::Modal,
            _ => Presentation::Card,
        }
    }

    /// Whether the host draws a header bar for this screen.
    pub fn header_shown(&self) -> bool {
        !matches!(self, StackRoute::Tabs)
    }

    /// All stack routes in registration order.
    pub fn all() -> [StackRoute; 3] {
        [StackRoute::Tabs, StackRoute::Modal, StackRoute::Settings]
    }
}

impl fmt::Display for StackRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

impl FromStr for StackRoute {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "(tabs)" => Ok(StackRoute::Tabs),
            "modal" => Ok(StackRoute::Modal),
            "settings" => Ok(StackRoute::Settings),
            other => Err(ParseRouteError(other.to_string())),
        }
    }
}

// =============================================================================
// Tab Group
// =============================================================================

/// Screens inside the bottom tab group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabRoute {
    /// Home dashboard
    #[default]
    Index,
    /// Growth charts
    Charts,
    /// Event calendar
    Calendar,
    /// Profile and account
    Profile,
}

impl TabRoute {
    /// The host router's screen name for this tab.
    pub fn route_name(&self) -> &'static str {
        match self {
            TabRoute::Index => "index",
            TabRoute::Charts => "charts",
            TabRoute::Calendar => "calendar",
            TabRoute::Profile => "profile",
        }
    }

    /// URL path for this tab. The index screen maps to the group root.
    pub fn to_path(&self) -> &'static str {
        match self {
            TabRoute::Index => "/",
            TabRoute::Charts => "/charts",
            TabRoute::Calendar => "/calendar",
            TabRoute::Profile => "/profile",
        }
    }

    /// Tab bar label.
    pub fn label(&self) -> &'static str {
        match self {
            TabRoute::Index => "Home",
            TabRoute::Charts => "Charts",
            TabRoute::Calendar => "Calendar",
            TabRoute::Profile => "Profile",
        }
    }

    /// Symbol name for the tab icon.
    ///
    /// The focused variant is the filled form, except the calendar tab which
    /// promotes to the badge glyph.
    pub fn icon(&self, focused: bool) -> &'static str {
        match (self, focused) {
            (TabRoute::Index, false) => "house",
            (TabRoute::Index, true) => "house.fill",
            (TabRoute::Charts, false) => "chart.bar",
            (TabRoute::Charts, true) => "chart.bar.fill",
            (TabRoute::Calendar, false) => "calendar",
            (TabRoute::Calendar, true) => "calendar.badge.plus",
            (TabRoute::Profile, false) => "person.crop.circle",
            (TabRoute::Profile, true) => "person.crop.circle.fill",
        }
    }

    /// Icon size used in the tab bar.
    pub fn icon_size(&self) -> f32 {
        sizing::icon::TAB_BAR
    }

    /// All tabs in presentation order.
    pub fn all() -> [TabRoute; 4] {
        [
            TabRoute::Index,
            TabRoute::Charts,
            TabRoute::Calendar,
            TabRoute::Profile,
        ]
    }
}

impl fmt::Display for TabRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

impl FromStr for TabRoute {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(TabRoute::Index),
            "charts" => Ok(TabRoute::Charts),
            "calendar" => Ok(TabRoute::Calendar),
            "profile" => Ok(TabRoute::Profile),
            other => Err(ParseRouteError(other.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_route_wire_names() {
        assert_eq!(
            serde_json::to_string(&StackRoute::Tabs).unwrap(),
            "\"(tabs)\""
        );
        assert_eq!(
            serde_json::to_string(&StackRoute::Modal).unwrap(),
            "\"modal\""
        );
        assert_eq!(
            serde_json::to_string(&StackRoute::Settings).unwrap(),
            "\"settings\""
        );
    }

    #[test]
    fn test_stack_route_round_trip() {
        for route in StackRoute::all() {
            let json = serde_json::to_string(&route).unwrap();
            let parsed: StackRoute = serde_json::from_str(&json).unwrap();
            assert_eq!(route, parsed);

            let from_name: StackRoute = route.route_name().parse().unwrap();
            assert_eq!(route, from_name);
        }
    }

    #[test]
    fn test_stack_route_presentation() {
        assert_eq!(StackRoute::Tabs.presentation(), Presentation::Card);
        assert_eq!(StackRoute::Modal.presentation(), Presentation::Modal);
        assert_eq!(StackRoute::Settings.presentation(), Presentation::Card);
    }

    #[test]
    fn test_stack_route_headers() {
        assert!(!StackRoute::Tabs.header_shown());
        assert_eq!(StackRoute::Tabs.title(), None);
        assert!(StackRoute::Settings.header_shown());
        assert_eq!(StackRoute::Settings.title(), Some("Settings"));
    }

    #[test]
    fn test_tab_route_round_trip() {
        // Fieldless variants carry no parameters by construction; the whole
        // table must survive its wire names.
        for route in TabRoute::all() {
            let json = serde_json::to_string(&route).unwrap();
            assert_eq!(json, format!("\"{}\"", route.route_name()));

            let parsed: TabRoute = serde_json::from_str(&json).unwrap();
            assert_eq!(route, parsed);

            let from_name: TabRoute = route.route_name().parse().unwrap();
            assert_eq!(route, from_name);
        }
    }

    #[test]
    fn test_tab_route_table_is_closed() {
        assert_eq!(TabRoute::all().len(), 4);
        assert!("health".parse::<TabRoute>().is_err());
        assert!(serde_json::from_str::<TabRoute>("\"health\"").is_err());
    }

    #[test]
    fn test_tab_icons_focused_variants() {
        assert_eq!(TabRoute::Index.icon(false), "house");
        assert_eq!(TabRoute::Index.icon(true), "house.fill");
        assert_eq!(TabRoute::Charts.icon(true), "chart.bar.fill");
        assert_eq!(TabRoute::Calendar.icon(false), "calendar");
        assert_eq!(TabRoute::Calendar.icon(true), "calendar.badge.plus");
        assert_eq!(TabRoute::Profile.icon(true), "person.crop.circle.fill");
    }

    #[test]
    fn test_tab_paths() {
        assert_eq!(TabRoute::Index.to_path(), "/");
        assert_eq!(TabRoute::Charts.to_path(), "/charts");
        assert_eq!(TabRoute::Calendar.to_path(), "/calendar");
        assert_eq!(TabRoute::Profile.to_path(), "/profile");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StackRoute::default(), StackRoute::Tabs);
        assert_eq!(TabRoute::default(), TabRoute::Index);
    }

    #[test]
    fn test_parse_error_reports_name() {
        let err = "composer".parse::<StackRoute>().unwrap_err();
        assert_eq!(err, ParseRouteError("composer".to_string()));
        assert_eq!(err.to_string(), "unknown route name: composer");
    }
}
