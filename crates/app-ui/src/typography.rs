//! Typography system for Growth Companion
//!
//! Font size ramp, font families, and the text variants used by themed
//! text. Sizes and weights come from the design system; variant colors
//! resolve against the active theme.

use crate::theme::{Color, Theme};
use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Page title (28px)
    pub const H1: f32 = 28.0;
    /// Section title (24px)
    pub const H2: f32 = 24.0;
    /// Subsection title (20px)
    pub const H3: f32 = 20.0;
    /// Minor heading (18px)
    pub const H4: f32 = 18.0;
    /// Emphasized body (16px)
    pub const BODY_LARGE: f32 = 16.0;
    /// Body text (14px)
    pub const BODY: f32 = 14.0;
    /// Small body text (12px)
    pub const BODY_SMALL: f32 = 12.0;
    /// Caption (11px)
    pub const CAPTION: f32 = 11.0;
    /// Overline label (10px)
    pub const OVERLINE: f32 = 10.0;

    /// Get font size by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "h1" => Some(H1),
            "h2" => Some(H2),
            "h3" => Some(H3),
            "h4" => Some(H4),
            "bodyLarge" => Some(BODY_LARGE),
            "body" => Some(BODY),
            "bodySmall" => Some(BODY_SMALL),
            "caption" => Some(CAPTION),
            "overline" => Some(OVERLINE),
            _ => None,
        }
    }
}

/// Font family stacks
pub mod font_family {
    /// Primary Latin face
    pub const PRIMARY: &str = "SF Pro Display";
    /// Primary CJK face
    pub const CJK: &str = "PingFang SC";
    /// Numeric and tabular face
    pub const MONO: &str = "SF Mono";

    /// Latin fallback stack
    pub const PRIMARY_FALLBACKS: [&str; 4] =
        ["SF Pro Display", "Helvetica Neue", "Arial", "sans-serif"];
    /// CJK fallback stack
    pub const CJK_FALLBACKS: [&str; 4] =
        ["PingFang SC", "Hiragino Sans GB", "Microsoft YaHei", "sans-serif"];
    /// Numeric fallback stack
    pub const MONO_FALLBACKS: [&str; 4] = ["SF Mono", "Monaco", "Consolas", "monospace"];
}

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Numeric font weight (300-700)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in pixels
    #[serde(default)]
    pub letter_spacing: f32,
    /// Font family override (None = platform default stack)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create a text style
    pub fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
            letter_spacing: 0.0,
            font_family: None,
        }
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Scale size and line height by a multiplier
    pub fn scaled(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            line_height: self.line_height * multiplier,
            ..self.clone()
        }
    }
}

// =============================================================================
// Text Variants
// =============================================================================

/// Themed text variants
///
/// Wire names match the host's `type` prop values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextVariant {
    /// Body copy
    #[default]
    Default,
    /// Screen title
    Title,
    /// Emphasized body copy
    DefaultSemiBold,
    /// Minor heading
    Subtitle,
    /// Tappable link
    Link,
    /// De-emphasized copy
    Secondary,
}

impl TextVariant {
    /// The variant's text metrics
    pub fn style(&self) -> TextStyle {
        match self {
            TextVariant::Default => {
                TextStyle::new(font_size::BODY, font_weight::REGULAR, 24.0)
            }
            TextVariant::Title => TextStyle::new(font_size::H2, font_weight::BOLD, 32.0),
            TextVariant::DefaultSemiBold => {
                TextStyle::new(font_size::BODY, font_weight::SEMIBOLD, 24.0)
            }
            TextVariant::Subtitle => TextStyle::new(font_size::H4, font_weight::MEDIUM, 24.0),
            TextVariant::Link => TextStyle::new(font_size::BODY, font_weight::MEDIUM, 30.0),
            TextVariant::Secondary => {
                TextStyle::new(font_size::BODY, font_weight::REGULAR, 24.0)
            }
        }
    }

    /// The variant's color under a theme
    ///
    /// Links take the primary tint, secondary copy the secondary text
    /// color, everything else the body text color.
    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            TextVariant::Link => theme.colors.brand.primary.clone(),
            TextVariant::Secondary => theme.colors.interface.text_secondary.clone(),
            _ => theme.colors.interface.text.clone(),
        }
    }

    /// All variants
    pub fn all() -> [TextVariant; 6] {
        [
            TextVariant::Default,
            TextVariant::Title,
            TextVariant::DefaultSemiBold,
            TextVariant::Subtitle,
            TextVariant::Link,
            TextVariant::Secondary,
        ]
    }
}
