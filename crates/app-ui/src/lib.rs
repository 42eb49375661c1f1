//! User interface for Growth Companion
//!
//! This crate provides the visual layer as serializable descriptions:
//! color palettes, design tokens, typography, adaptive components, and
//! the route tables for the app shell. Nothing here draws pixels; a host
//! renderer consumes the resolved styles.
//!
//! # Design System
//!
//! The design system is built around warm nursery colors:
//! - Primary: Rose pink (#FF8A9B)
//! - Secondary: Sky blue (#7FB3D3)
//!
//! Three themes are supported:
//! - [`theme::ThemeName::Light`] - Bright theme with white background
//! - [`theme::ThemeName::Comfort`] - Warm cream theme for evening use
//! - [`theme::ThemeName::Dark`] - Dark theme with deep slate background
//!
//! # Modules
//!
//! - [`theme`] - Color palettes and theme resolution
//! - [`tokens`] - Design tokens (spacing, radius, sizing, shadows)
//! - [`typography`] - Text styles and variants
//! - [`components`] - Adaptive component descriptions
//! - [`navigation`] - Closed route tables for the app shell
//! - [`memo`] - Render memoization keyed on structural prop equality
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//! use app_ui::tokens::spacing;
//! use app_ui::typography::TextVariant;
//!
//! // Resolve a theme
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//!
//! // Use design tokens
//! let padding = spacing::MD;
//! assert_eq!(padding, 16.0);
//!
//! // Get a text style
//! let title = TextVariant::Title.style();
//! assert_eq!(title.font_size, 24.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod memo;
pub mod navigation;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    all_themes, comfort_theme, dark_theme, get_theme, light_theme, Color, ColorScheme, Theme,
    ThemeColors, ThemeName,
};

pub use tokens::{font_weight, radius, shadow, sizing, spacing, Shadow};

pub use typography::{font_family, font_size, TextStyle, TextVariant};

pub use components::{
    BlurSurface, BlurTint, IconRender, IconSymbol, SymbolScale, SymbolWeight, TabBarBackground,
    ThemeColorOverrides, ThemedText, ThemedTextStyles, ThemedView, ThemedViewStyles,
    BLUR_INTENSITY,
};

pub use navigation::{ParseRouteError, Presentation, StackRoute, TabRoute};

pub use memo::Memoized;
