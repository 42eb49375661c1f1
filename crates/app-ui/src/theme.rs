//! Theme system for Growth Companion
//!
//! Color palettes for the three shipped themes: light (bright daytime),
//! comfort (warm evening beige), and dark (warm night blue-gray). Theme
//! identity, the mode preference, and scheduling live in `app-state`; this
//! module owns the visual values a renderer consumes.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Comfort);
//! let background = &theme.colors.interface.background;
//! assert!(!theme.is_dark());
//! ```

use serde::{Deserialize, Serialize};

pub use app_state::scheme::{ColorScheme, ThemeName};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FF8A9B")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    // get() keeps multi-byte input a parse failure, not a slice panic
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Color {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Growth Companion brand colors
pub mod brand {
    /// Rose pink, the primary brand color
    pub const ROSE: &str = "#FF8A9B";

    /// Lighter rose, promoted to primary on dark surfaces
    pub const ROSE_LIGHT: &str = "#FFB3C1";

    /// Deeper rose for pressed states
    pub const ROSE_DARK: &str = "#E6677A";

    /// Soft blue, the secondary brand color
    pub const SKY: &str = "#7FB3D3";

    /// Lighter soft blue
    pub const SKY_LIGHT: &str = "#A5C9E0";

    /// Deeper soft blue
    pub const SKY_DARK: &str = "#5A9BC4";
}

// =============================================================================
// Palette Groups
// =============================================================================

/// Primary and secondary brand colors in three strengths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    /// Primary brand color
    pub primary: Color,
    /// Lighter primary
    pub primary_light: Color,
    /// Deeper primary
    pub primary_dark: Color,
    /// Secondary brand color
    pub secondary: Color,
    /// Lighter secondary
    pub secondary_light: Color,
    /// Deeper secondary
    pub secondary_dark: Color,
}

/// Neutral ramp from lightest surface to strongest content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeutralScale {
    /// Lightest neutral
    pub neutral_100: Color,
    /// Neutral step 200
    pub neutral_200: Color,
    /// Neutral step 300
    pub neutral_300: Color,
    /// Neutral step 400
    pub neutral_400: Color,
    /// Neutral step 500
    pub neutral_500: Color,
    /// Neutral step 600
    pub neutral_600: Color,
    /// Neutral step 700
    pub neutral_700: Color,
    /// Neutral step 800
    pub neutral_800: Color,
    /// Strongest neutral
    pub neutral_900: Color,
}

/// Status colors with their soft background tints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    /// Positive state
    pub success: Color,
    /// Positive background tint
    pub success_light: Color,
    /// Cautionary state
    pub warning: Color,
    /// Cautionary background tint
    pub warning_light: Color,
    /// Failure state
    pub error: Color,
    /// Failure background tint
    pub error_light: Color,
    /// Informational state
    pub info: Color,
    /// Informational background tint
    pub info_light: Color,
}

/// Accent colors assigned to family roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleColors {
    /// Expectant parent
    pub pregnant: Color,
    /// Partner
    pub partner: Color,
    /// Grandparent
    pub grandparent: Color,
    /// Wider family
    pub family: Color,
}

/// Text and surface colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceColors {
    /// Body text
    pub text: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// De-emphasized text
    pub text_light: Color,
    /// Screen background
    pub background: Color,
    /// Secondary background for grouped content
    pub background_secondary: Color,
    /// Raised surface
    pub surface: Color,
    /// Hairline borders
    pub border: Color,
    /// Card background
    pub card: Color,
}

/// Navigation chrome colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationColors {
    /// Accent tint for interactive chrome
    pub tint: Color,
    /// Inactive tab icon
    pub tab_icon_default: Color,
    /// Active tab icon
    pub tab_icon_selected: Color,
    /// Standalone icons
    pub icon: Color,
}

/// Complete color set for one theme
///
/// Groups flatten into a single object on the wire, so a renderer sees one
/// flat `{"primary": ..., "neutral100": ..., "tabIconDefault": ...}` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Brand colors
    #[serde(flatten)]
    pub brand: BrandColors,
    /// Neutral ramp
    #[serde(flatten)]
    pub neutrals: NeutralScale,
    /// Status colors
    #[serde(flatten)]
    pub status: StatusColors,
    /// Family-role accents
    #[serde(flatten)]
    pub roles: RoleColors,
    /// Text and surfaces
    #[serde(flatten)]
    pub interface: InterfaceColors,
    /// Navigation chrome
    #[serde(flatten)]
    pub navigation: NavigationColors,
}

/// Emotional accent colors, shared by every theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalColors {
    /// Affection
    pub love: Color,
    /// Encouragement
    pub hope: Color,
    /// Serenity
    pub calm: Color,
    /// Warmth
    pub warm: Color,
    /// Comfort
    pub comfort: Color,
    /// Celebration
    pub joy: Color,
}

/// The shared emotional accent set
pub fn emotional_colors() -> EmotionalColors {
    EmotionalColors {
        love: "#FFE4E6".to_string(),
        hope: "#E8F5E8".to_string(),
        calm: "#E6F3FF".to_string(),
        warm: "#FFF4E6".to_string(),
        comfort: "#F0E6FF".to_string(),
        joy: "#FFF0E6".to_string(),
    }
}

/// Theme crossfade settings a host applies when the theme changes
pub mod transition {
    /// Crossfade duration in milliseconds
    pub const DURATION_MS: u32 = 300;

    /// Easing curve name
    pub const EASING: &str = "ease-in-out";

    /// Style properties the crossfade animates
    pub const PROPERTIES: [&str; 3] = ["background-color", "color", "border-color"];
}

// =============================================================================
// Theme
// =============================================================================

/// A complete theme: identity plus its color set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme identity
    pub name: ThemeName,
    /// Color values
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this theme uses the dark scheme
    pub fn is_dark(&self) -> bool {
        self.name.color_scheme().is_dark()
    }

    /// The scheme adaptive surfaces follow under this theme
    pub fn color_scheme(&self) -> ColorScheme {
        self.name.color_scheme()
    }
}

/// The bright daytime theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            brand: BrandColors {
                primary: brand::ROSE.to_string(),
                primary_light: brand::ROSE_LIGHT.to_string(),
                primary_dark: brand::ROSE_DARK.to_string(),
                secondary: brand::SKY.to_string(),
                secondary_light: brand::SKY_LIGHT.to_string(),
                secondary_dark: brand::SKY_DARK.to_string(),
            },
            neutrals: NeutralScale {
                neutral_100: "#FFFFFF".to_string(),
                neutral_200: "#F8F9FA".to_string(),
                neutral_300: "#E9ECEF".to_string(),
                neutral_400: "#DEE2E6".to_string(),
                neutral_500: "#ADB5BD".to_string(),
                neutral_600: "#6C757D".to_string(),
                neutral_700: "#495057".to_string(),
                neutral_800: "#343A40".to_string(),
                neutral_900: "#212529".to_string(),
            },
            status: StatusColors {
                success: "#28A745".to_string(),
                success_light: "#D4EDDA".to_string(),
                warning: "#FFC107".to_string(),
                warning_light: "#FFF3CD".to_string(),
                error: "#DC3545".to_string(),
                error_light: "#F8D7DA".to_string(),
                info: "#17A2B8".to_string(),
                info_light: "#D1ECF1".to_string(),
            },
            roles: RoleColors {
                pregnant: brand::ROSE.to_string(),
                partner: "#4A90E2".to_string(),
                grandparent: "#F5A623".to_string(),
                family: "#7ED321".to_string(),
            },
            interface: InterfaceColors {
                text: "#343A40".to_string(),
                text_secondary: "#6C757D".to_string(),
                text_light: "#ADB5BD".to_string(),
                background: "#FFFFFF".to_string(),
                background_secondary: "#F8F9FA".to_string(),
                surface: "#FFFFFF".to_string(),
                border: "#E9ECEF".to_string(),
                card: "#FFFFFF".to_string(),
            },
            navigation: NavigationColors {
                tint: brand::ROSE.to_string(),
                tab_icon_default: "#ADB5BD".to_string(),
                tab_icon_selected: brand::ROSE.to_string(),
                icon: "#6C757D".to_string(),
            },
        },
    }
}

/// The warm low-glare evening theme
pub fn comfort_theme() -> Theme {
    Theme {
        name: ThemeName::Comfort,
        colors: ThemeColors {
            brand: BrandColors {
                primary: "#F4758A".to_string(),
                primary_light: "#F89FAE".to_string(),
                primary_dark: brand::ROSE_DARK.to_string(),
                secondary: brand::SKY.to_string(),
                secondary_light: brand::SKY_LIGHT.to_string(),
                secondary_dark: brand::SKY_DARK.to_string(),
            },
            neutrals: NeutralScale {
                neutral_100: "#FBF9F6".to_string(),
                neutral_200: "#F5F2EC".to_string(),
                neutral_300: "#EFEBE3".to_string(),
                neutral_400: "#E8E4DC".to_string(),
                neutral_500: "#ADB5BD".to_string(),
                neutral_600: "#6C757D".to_string(),
                neutral_700: "#495057".to_string(),
                neutral_800: "#343A40".to_string(),
                neutral_900: "#212529".to_string(),
            },
            status: StatusColors {
                success: "#28A745".to_string(),
                success_light: "#D4EDDA".to_string(),
                warning: "#E6A700".to_string(),
                warning_light: "#F4E8B8".to_string(),
                error: "#DC3545".to_string(),
                error_light: "#F8D7DA".to_string(),
                info: "#17A2B8".to_string(),
                info_light: "#D1ECF1".to_string(),
            },
            roles: RoleColors {
                pregnant: "#F4758A".to_string(),
                partner: "#4A90E2".to_string(),
                grandparent: "#E09900".to_string(),
                family: "#7ED321".to_string(),
            },
            interface: InterfaceColors {
                text: "#2C2A26".to_string(),
                text_secondary: "#5C5A56".to_string(),
                text_light: "#8B8985".to_string(),
                background: "#FBF9F6".to_string(),
                background_secondary: "#F5F2EC".to_string(),
                surface: "#FBF9F6".to_string(),
                border: "#E8E4DC".to_string(),
                card: "#FBF9F6".to_string(),
            },
            navigation: NavigationColors {
                tint: "#F4758A".to_string(),
                tab_icon_default: "#8B8985".to_string(),
                tab_icon_selected: "#F4758A".to_string(),
                icon: "#5C5A56".to_string(),
            },
        },
    }
}

/// The warm blue-gray night theme
///
/// Light brand strengths are promoted to primary so rose still reads
/// against dark surfaces.
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            brand: BrandColors {
                primary: brand::ROSE_LIGHT.to_string(),
                primary_light: "#FFCDD6".to_string(),
                primary_dark: brand::ROSE.to_string(),
                secondary: brand::SKY_LIGHT.to_string(),
                secondary_light: "#C4DCE8".to_string(),
                secondary_dark: brand::SKY.to_string(),
            },
            neutrals: NeutralScale {
                neutral_100: "#252730".to_string(),
                neutral_200: "#2D2F3A".to_string(),
                neutral_300: "#3A3C47".to_string(),
                neutral_400: "#4A4D5A".to_string(),
                neutral_500: "#ADB5BD".to_string(),
                neutral_600: "#DEE2E6".to_string(),
                neutral_700: "#E9ECEF".to_string(),
                neutral_800: "#F8F9FA".to_string(),
                neutral_900: "#FFFFFF".to_string(),
            },
            status: StatusColors {
                success: "#30D158".to_string(),
                success_light: "#1E3A26".to_string(),
                warning: "#FF9F0A".to_string(),
                warning_light: "#332A1A".to_string(),
                error: "#FF453A".to_string(),
                error_light: "#331A1C".to_string(),
                info: "#64D2FF".to_string(),
                info_light: "#1A2B33".to_string(),
            },
            roles: RoleColors {
                pregnant: brand::ROSE_LIGHT.to_string(),
                partner: "#6BB6FF".to_string(),
                grandparent: "#FFD60A".to_string(),
                family: "#A6E83A".to_string(),
            },
            interface: InterfaceColors {
                text: "#F0F0F0".to_string(),
                text_secondary: "#B8B9BB".to_string(),
                text_light: "#8E8E93".to_string(),
                background: "#1A1B23".to_string(),
                background_secondary: "#252730".to_string(),
                surface: "#2D2F3A".to_string(),
                border: "#3A3C47".to_string(),
                card: "#252730".to_string(),
            },
            navigation: NavigationColors {
                tint: brand::ROSE_LIGHT.to_string(),
                tab_icon_default: "#8E8E93".to_string(),
                tab_icon_selected: brand::ROSE_LIGHT.to_string(),
                icon: "#8E8E93".to_string(),
            },
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Comfort => comfort_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// All themes in selection order
pub fn all_themes() -> Vec<Theme> {
    ThemeName::all().into_iter().map(get_theme).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(color: &str) -> f64 {
        let (r, g, b) = parse_hex_color(color).unwrap();
        0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
    }

    #[test]
    fn test_get_theme_for_each_name() {
        for name in ThemeName::all() {
            let theme = get_theme(name);
            assert_eq!(theme.name, name);
        }
        assert_eq!(all_themes().len(), 3);
    }

    #[test]
    fn test_only_dark_theme_is_dark() {
        assert!(!light_theme().is_dark());
        assert!(!comfort_theme().is_dark());
        assert!(dark_theme().is_dark());
        assert_eq!(dark_theme().color_scheme(), ColorScheme::Dark);
        assert_eq!(comfort_theme().color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_light_theme_values() {
        let colors = light_theme().colors;
        assert_eq!(colors.brand.primary, "#FF8A9B");
        assert_eq!(colors.interface.background, "#FFFFFF");
        assert_eq!(colors.navigation.tint, colors.brand.primary);
        assert_eq!(colors.navigation.tab_icon_selected, colors.brand.primary);
        assert_eq!(colors.navigation.tab_icon_default, "#ADB5BD");
        assert_eq!(colors.roles.pregnant, colors.brand.primary);
    }

    #[test]
    fn test_comfort_theme_is_warm() {
        let colors = comfort_theme().colors;
        assert_eq!(colors.interface.background, "#FBF9F6");
        assert_eq!(colors.status.warning, "#E6A700");
        assert_eq!(colors.roles.grandparent, "#E09900");
        assert_eq!(colors.interface.text, "#2C2A26");
        assert_eq!(colors.navigation.tab_icon_default, "#8B8985");
    }

    #[test]
    fn test_dark_theme_promotes_light_primary() {
        let colors = dark_theme().colors;
        assert_eq!(colors.brand.primary, brand::ROSE_LIGHT);
        assert_eq!(colors.brand.primary_dark, brand::ROSE);
        assert_eq!(colors.interface.background, "#1A1B23");
        assert_eq!(colors.navigation.tint, brand::ROSE_LIGHT);
        assert_eq!(colors.roles.partner, "#6BB6FF");
    }

    #[test]
    fn test_theme_colors_flatten_to_flat_map() {
        let value = serde_json::to_value(light_theme().colors).unwrap();
        let map = value.as_object().unwrap();
        // Flattened groups with camelCase keys, one level deep
        assert!(map.contains_key("primary"));
        assert!(map.contains_key("neutral100"));
        assert!(map.contains_key("tabIconDefault"));
        assert!(map.contains_key("backgroundSecondary"));
        assert_eq!(map.len(), 39);
        assert!(map.values().all(|v| v.is_string()));
    }

    #[test]
    fn test_all_theme_colors_are_valid_hex() {
        for theme in all_themes() {
            let value = serde_json::to_value(&theme.colors).unwrap();
            for (key, color) in value.as_object().unwrap() {
                let color = color.as_str().unwrap();
                assert!(
                    parse_hex_color(color).is_some(),
                    "{} in {} is not valid hex: {}",
                    key,
                    theme.name,
                    color
                );
            }
        }
    }

    #[test]
    fn test_text_contrast_against_background() {
        for theme in all_themes() {
            let text = luminance(&theme.colors.interface.text);
            let background = luminance(&theme.colors.interface.background);
            if theme.is_dark() {
                assert!(text > background, "{} text should be lighter", theme.name);
            } else {
                assert!(text < background, "{} text should be darker", theme.name);
            }
        }
    }

    #[test]
    fn test_emotional_colors_shared_set() {
        let emotional = emotional_colors();
        assert_eq!(emotional.love, "#FFE4E6");
        assert_eq!(emotional.joy, "#FFF0E6");
        let value = serde_json::to_value(&emotional).unwrap();
        for color in value.as_object().unwrap().values() {
            assert!(parse_hex_color(color.as_str().unwrap()).is_some());
        }
    }

    #[test]
    fn test_hex_helpers() {
        assert_eq!(parse_hex_color("#FF8A9B"), Some((255, 138, 155)));
        assert_eq!(parse_hex_color("FF8A9B"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#ZZ8A9B"), None);
        // Six bytes of UTF-8 but not six hex digits
        assert_eq!(parse_hex_color("#日abc"), None);
        assert_eq!(parse_hex_color("#ab日c"), None);
        assert_eq!(rgb_to_hex(255, 138, 155), "#FF8A9B");
    }

    #[test]
    fn test_transition_constants() {
        assert_eq!(transition::DURATION_MS, 300);
        assert_eq!(transition::PROPERTIES.len(), 3);
    }

    #[test]
    fn test_theme_round_trip() {
        let theme = comfort_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
