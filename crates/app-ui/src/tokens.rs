//! Design tokens for Growth Companion
//!
//! Spacing, corner radii, shadow levels, and component sizing primitives.
//! Values come from the design system; helpers resolve token names to values
//! for hosts that address tokens by string.

use serde::Serialize;

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 16px - Medium
    pub const MD: f32 = 16.0;
    /// 24px - Large
    pub const LG: f32 = 24.0;
    /// 32px - Extra large
    pub const XL: f32 = 32.0;
    /// 48px - 2x large
    pub const XXL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Radius Tokens
// =============================================================================

/// Corner radius scale in pixels
pub mod radius {
    /// 4px - Small
    pub const SM: f32 = 4.0;
    /// 8px - Medium
    pub const MD: f32 = 8.0;
    /// 12px - Large
    pub const LG: f32 = 12.0;
    /// 16px - Extra large
    pub const XL: f32 = 16.0;
    /// 50px - Fully rounded (pills, avatars)
    pub const FULL: f32 = 50.0;

    /// Get radius value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "full" => Some(FULL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Default icon size (24px)
        pub const DEFAULT: f32 = 24.0;
        /// Tab bar icon size (28px)
        pub const TAB_BAR: f32 = 28.0;
    }

    /// Tab bar chrome
    pub mod tab_bar {
        /// Bar height when floating over a translucent background (84px)
        pub const FLOATING_HEIGHT: f32 = 84.0;
        /// Bottom padding in the floating layout, reserving safe area (20px)
        pub const FLOATING_BOTTOM_PADDING: f32 = 20.0;
        /// Bar height in the fixed opaque layout (70px)
        pub const FIXED_HEIGHT: f32 = 70.0;
        /// Bottom padding in the fixed layout (10px)
        pub const FIXED_BOTTOM_PADDING: f32 = 10.0;
        /// Tab label font size (10px)
        pub const LABEL_FONT_SIZE: f32 = 10.0;
    }
}

// =============================================================================
// Font Weight Tokens
// =============================================================================

/// Numeric font weights
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;

    /// Get font weight by name
    pub fn get(name: &str) -> Option<u16> {
        match name {
            "light" => Some(LIGHT),
            "regular" => Some(REGULAR),
            "medium" => Some(MEDIUM),
            "semibold" => Some(SEMIBOLD),
            "bold" => Some(BOLD),
            _ => None,
        }
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// One shadow level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Horizontal offset in pixels
    pub offset_width: f32,
    /// Vertical offset in pixels
    pub offset_height: f32,
    /// Opacity of the shadow color
    pub opacity: f32,
    /// Blur radius in pixels
    pub radius: f32,
    /// Android elevation step
    pub elevation: u8,
}

/// Shadow levels from subtle to prominent
pub mod shadow {
    use super::Shadow;

    /// Shadow color shared by every level
    pub const COLOR: &str = "#000";

    /// Subtle shadow for list rows
    pub const SM: Shadow = Shadow {
        offset_width: 0.0,
        offset_height: 1.0,
        opacity: 0.05,
        radius: 2.0,
        elevation: 1,
    };

    /// Card shadow
    pub const MD: Shadow = Shadow {
        offset_width: 0.0,
        offset_height: 4.0,
        opacity: 0.07,
        radius: 6.0,
        elevation: 3,
    };

    /// Raised surface shadow
    pub const LG: Shadow = Shadow {
        offset_width: 0.0,
        offset_height: 10.0,
        opacity: 0.10,
        radius: 15.0,
        elevation: 6,
    };

    /// Modal and sheet shadow
    pub const XL: Shadow = Shadow {
        offset_width: 0.0,
        offset_height: 20.0,
        opacity: 0.15,
        radius: 25.0,
        elevation: 10,
    };

    /// Get shadow level by name
    pub fn get(name: &str) -> Option<Shadow> {
        match name {
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("md"), Some(16.0));
        assert_eq!(spacing::get("xxl"), Some(48.0));
        assert_eq!(spacing::get("huge"), None);
    }

    #[test]
    fn test_spacing_scale_is_monotonic() {
        let scale = [
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_radius_lookup() {
        assert_eq!(radius::get("sm"), Some(4.0));
        assert_eq!(radius::get("full"), Some(50.0));
        assert_eq!(radius::get("round"), None);
    }

    #[test]
    fn test_icon_sizes() {
        assert_eq!(sizing::icon::DEFAULT, 24.0);
        assert_eq!(sizing::icon::TAB_BAR, 28.0);
    }

    #[test]
    fn test_tab_bar_chrome() {
        // The floating layout is taller to absorb the safe-area inset
        assert!(sizing::tab_bar::FLOATING_HEIGHT > sizing::tab_bar::FIXED_HEIGHT);
        assert_eq!(sizing::tab_bar::LABEL_FONT_SIZE, 10.0);
    }

    #[test]
    fn test_font_weight_lookup() {
        assert_eq!(font_weight::get("regular"), Some(400));
        assert_eq!(font_weight::get("bold"), Some(700));
        assert_eq!(font_weight::get("black"), None);
    }

    #[test]
    fn test_shadow_levels_escalate() {
        let levels = [shadow::SM, shadow::MD, shadow::LG, shadow::XL];
        assert!(levels
            .windows(2)
            .all(|pair| pair[0].opacity < pair[1].opacity));
        assert!(levels
            .windows(2)
            .all(|pair| pair[0].elevation < pair[1].elevation));
        assert_eq!(shadow::get("md"), Some(shadow::MD));
        assert_eq!(shadow::get("xxl"), None);
    }

    #[test]
    fn test_shadow_serializes_camel_case() {
        let json = serde_json::to_string(&shadow::SM).unwrap();
        assert!(json.contains("offsetHeight"));
        assert!(json.contains("elevation"));
    }
}
