//! UI component library for Growth Companion
//!
//! Components are Rust structs with serializable properties rendered by
//! the host shell. Each component provides type-safe props with builder
//! patterns and resolves theme-aware output through `computed_styles` or
//! `render` methods; the host owns layout and pixels.
//!
//! # Available Components
//!
//! - [`IconSymbol`] - Adaptive platform icon with rendering defaults
//! - [`TabBarBackground`] - Scheme-following translucent tab-bar backdrop
//! - [`ThemedText`] - Text styled by variant and theme
//! - [`ThemedView`] - Container backed by the theme background

use crate::memo::Memoized;
use crate::theme::{Color, Theme};
use crate::tokens::sizing;
use crate::typography::{TextStyle, TextVariant};
use app_state::scheme::{ColorScheme, ThemeName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::watch;

// =============================================================================
// Icon Symbol
// =============================================================================

/// Platform symbol weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolWeight {
    /// Host decides
    Unspecified,
    /// Ultra light stroke
    UltraLight,
    /// Thin stroke
    Thin,
    /// Light stroke
    Light,
    /// Standard stroke
    #[default]
    Regular,
    /// Medium stroke
    Medium,
    /// Semibold stroke
    Semibold,
    /// Bold stroke
    Bold,
    /// Heavy stroke
    Heavy,
    /// Black stroke
    Black,
}

/// Platform symbol scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolScale {
    /// Host default
    Default,
    /// Host decides
    Unspecified,
    /// Small glyph
    Small,
    /// Standard glyph
    #[default]
    Medium,
    /// Large glyph
    Large,
}

fn default_icon_size() -> f32 {
    sizing::icon::DEFAULT
}

/// An adaptive platform icon
///
/// Wraps the host icon renderer with rendering defaults: 24px, regular
/// weight, medium scale. `name` is a logical symbol identifier passed
/// through unvalidated; the icon host owns recognition. Properties this
/// component does not know about are captured in `extra` and forwarded
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSymbol {
    /// Logical symbol name (e.g. "house.fill")
    pub name: String,
    /// Icon size in pixels
    #[serde(default = "default_icon_size")]
    pub size: f32,
    /// Tint color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Stroke weight
    #[serde(default)]
    pub weight: SymbolWeight,
    /// Glyph scale
    #[serde(default)]
    pub scale: SymbolScale,
    /// Additional host properties forwarded unchanged
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl IconSymbol {
    /// Create an icon with default rendering properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: default_icon_size(),
            color: None,
            weight: SymbolWeight::default(),
            scale: SymbolScale::default(),
            extra: HashMap::new(),
        }
    }

    /// Set the size in pixels
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the tint color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the stroke weight
    pub fn with_weight(mut self, weight: SymbolWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the glyph scale
    pub fn with_scale(mut self, scale: SymbolScale) -> Self {
        self.scale = scale;
        self
    }

    /// Attach a pass-through host property
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Resolve the icon surface handed to the icon host
    pub fn render(&self) -> IconRender {
        IconRender {
            name: self.name.clone(),
            size: self.size,
            tint_color: self.color.clone(),
            weight: self.weight,
            scale: self.scale,
            extra: self.extra.clone(),
        }
    }

    /// A memoized renderer: equal props reuse the previous render
    pub fn memoized() -> Memoized<IconSymbol, IconRender> {
        Memoized::new(|icon: &IconSymbol| icon.render())
    }
}

/// Resolved icon surface description
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRender {
    /// Symbol name, unvalidated
    pub name: String,
    /// Size in pixels
    pub size: f32,
    /// Tint color forwarded to the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<Color>,
    /// Stroke weight
    pub weight: SymbolWeight,
    /// Glyph scale
    pub scale: SymbolScale,
    /// Pass-through host properties
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

// =============================================================================
// Themed Primitives
// =============================================================================

/// Per-theme color overrides
///
/// Absent entries fall back to the component's theme-derived color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorOverrides {
    /// Override under the light theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_color: Option<Color>,
    /// Override under the dark theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_color: Option<Color>,
    /// Override under the comfort theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_color: Option<Color>,
}

impl ThemeColorOverrides {
    /// The override for a theme, if set
    pub fn for_theme(&self, name: ThemeName) -> Option<&Color> {
        match name {
            ThemeName::Light => self.light_color.as_ref(),
            ThemeName::Dark => self.dark_color.as_ref(),
            ThemeName::Comfort => self.comfort_color.as_ref(),
        }
    }
}

/// Theme-aware text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedText {
    /// Text content
    pub content: String,
    /// Variant selecting metrics and the default color
    #[serde(default, rename = "type")]
    pub variant: TextVariant,
    /// Per-theme color overrides, taking precedence over the variant color
    #[serde(flatten)]
    pub overrides: ThemeColorOverrides,
}

impl ThemedText {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            overrides: ThemeColorOverrides::default(),
        }
    }

    /// Create title text
    pub fn title(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Title)
    }

    /// Create link text
    pub fn link(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Link)
    }

    /// Create secondary text
    pub fn secondary(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Secondary)
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the color under the light theme
    pub fn with_light_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.light_color = Some(color.into());
        self
    }

    /// Override the color under the dark theme
    pub fn with_dark_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.dark_color = Some(color.into());
        self
    }

    /// Override the color under the comfort theme
    pub fn with_comfort_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.comfort_color = Some(color.into());
        self
    }

    /// Compute resolved styles for a theme
    pub fn computed_styles(&self, theme: &Theme) -> ThemedTextStyles {
        let color = self
            .overrides
            .for_theme(theme.name)
            .cloned()
            .unwrap_or_else(|| self.variant.color(theme));
        ThemedTextStyles {
            color,
            text: self.variant.style(),
        }
    }
}

/// Resolved text styles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedTextStyles {
    /// Resolved text color
    pub color: Color,
    /// Resolved metrics
    #[serde(flatten)]
    pub text: TextStyle,
}

/// Theme-aware container backed by the theme background
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedView {
    /// Per-theme background overrides
    #[serde(flatten)]
    pub overrides: ThemeColorOverrides,
}

impl ThemedView {
    /// Create a view following the theme background
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the background under the light theme
    pub fn with_light_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.light_color = Some(color.into());
        self
    }

    /// Override the background under the dark theme
    pub fn with_dark_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.dark_color = Some(color.into());
        self
    }

    /// Override the background under the comfort theme
    pub fn with_comfort_color(mut self, color: impl Into<Color>) -> Self {
        self.overrides.comfort_color = Some(color.into());
        self
    }

    /// Compute resolved styles for a theme
    pub fn computed_styles(&self, theme: &Theme) -> ThemedViewStyles {
        let background_color = self
            .overrides
            .for_theme(theme.name)
            .cloned()
            .unwrap_or_else(|| theme.colors.interface.background.clone());
        ThemedViewStyles { background_color }
    }
}

/// Resolved view styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedViewStyles {
    /// Resolved background color
    pub background_color: Color,
}

// =============================================================================
// Tab Bar Background
// =============================================================================

/// Blur tint, always equal to the ambient color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurTint {
    /// Light translucency
    Light,
    /// Dark translucency
    Dark,
}

impl From<ColorScheme> for BlurTint {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => BlurTint::Light,
            ColorScheme::Dark => BlurTint::Dark,
        }
    }
}

/// Blur intensity behind the tab bar: always the host maximum
pub const BLUR_INTENSITY: u8 = 100;

/// Translucent backdrop behind the tab bar
///
/// Takes no caller properties. It holds a subscription to the ambient
/// color scheme; [`render`](Self::render) reads the current value, and
/// [`changed`](Self::changed) is the single suspension point the host
/// awaits before re-invoking `render`.
#[derive(Debug, Clone)]
pub struct TabBarBackground {
    scheme_rx: watch::Receiver<ColorScheme>,
}

impl TabBarBackground {
    /// Create a backdrop over a scheme subscription
    ///
    /// The receiver usually comes from
    /// `app_state::ThemeProvider::subscribe_scheme`.
    pub fn new(scheme_rx: watch::Receiver<ColorScheme>) -> Self {
        Self { scheme_rx }
    }

    /// Describe the blur surface for the current scheme
    pub fn render(&self) -> BlurSurface {
        BlurSurface {
            tint: (*self.scheme_rx.borrow()).into(),
            intensity: BLUR_INTENSITY,
            absolute_fill: true,
        }
    }

    /// Wait until the scheme changes
    ///
    /// Resolves once a new scheme value arrives; errors when the provider
    /// side is gone.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.scheme_rx.changed().await
    }
}

/// Description of the blur surface handed to the blur host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurSurface {
    /// Translucency tint
    pub tint: BlurTint,
    /// Blur intensity, fixed at the maximum
    pub intensity: u8,
    /// The surface fills its container absolutely
    pub absolute_fill: bool,
}
