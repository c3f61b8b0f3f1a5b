//! Render configuration.
//!
//! The host supplies a `RenderConfig` alongside the card properties:
//! - `platform`: selects the card surface (shadow on iOS, elevation on Android)
//! - `style_overrides`: per-region style layers merged over the built-in table
//!
//! Neither setting changes what the card says, only how it is styled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::CardError;
use crate::render::{Style, StyleName, StyleSheet};

/// Host platform the tree is rendered for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Surfaces use a drop shadow.
    #[default]
    Ios,
    /// Surfaces use elevation.
    Android,
    /// Neither shadow nor elevation (web, desktop, tests).
    Other,
}

/// Configuration for rendering cards.
///
/// ## Example
///
/// ```
/// use pokemon_card::core::{Platform, RenderConfig};
/// use pokemon_card::render::{Style, StyleName};
///
/// let config = RenderConfig::new()
///     .with_platform(Platform::Android)
///     .with_style(StyleName::Name, Style { font_size: Some(26.0), ..Style::default() });
///
/// let sheet = config.stylesheet();
/// assert_eq!(sheet.style(StyleName::Name).font_size, Some(26.0));
/// assert_eq!(sheet.style(StyleName::Card).elevation, Some(5.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    /// Host platform.
    pub platform: Platform,

    /// Style layers merged over the built-in table, keyed by region.
    pub style_overrides: FxHashMap<StyleName, Style>,
}

impl RenderConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Add a style override for a region.
    ///
    /// Overrides for the same region accumulate, later ones winning.
    #[must_use]
    pub fn with_style(mut self, name: StyleName, style: Style) -> Self {
        let merged = match self.style_overrides.remove(&name) {
            Some(existing) => existing.merge(&style),
            None => style,
        };
        self.style_overrides.insert(name, merged);
        self
    }

    /// Decode a configuration from JSON.
    ///
    /// Keys are camelCase (`platform`, `styleOverrides`). Missing fields take
    /// their defaults; unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        serde_json::from_str(json).map_err(CardError::InvalidConfig)
    }

    /// Build the resolved style table.
    #[must_use]
    pub fn stylesheet(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new(self.platform);
        for (name, overlay) in &self.style_overrides {
            sheet.apply_override(*name, overlay);
        }
        sheet
    }
}
