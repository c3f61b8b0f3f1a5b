//! Style values consumed by the host layout engine.
//!
//! A `Style` is a flat record of optional properties, serialized with
//! camelCase keys and with unset properties omitted. Styles compose by
//! layering: `base.merge(&overlay)` keeps every property the overlay sets
//! and falls back to the base for the rest.

use std::borrow::Cow;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A color value, usually a hex string such as `#FFD700` or a named color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Create a color from a static string. Usable in `const` items.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Get the raw color string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A length: absolute points or a percentage of the parent.
///
/// Serializes as a bare number for points and as `"N%"` for percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Points(f32),
    Percent(f32),
}

impl Dimension {
    /// Full width or height of the parent.
    pub const FULL: Dimension = Dimension::Percent(100.0);
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Points(v) => serializer.serialize_f32(*v),
            Dimension::Percent(v) => serializer.serialize_str(&format!("{v}%")),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Dimension::Points(v)),
            Raw::Text(text) => text
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f32>().ok())
                .map(Dimension::Percent)
                .ok_or_else(|| de::Error::custom(format!("invalid dimension `{text}`"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// How an image is fitted into its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale to fit entirely inside the box, preserving aspect ratio (no crop).
    Contain,
    /// Scale to fill the box, preserving aspect ratio (may crop).
    Cover,
    Stretch,
    Center,
}

/// Drop shadow offset (iOS-style surfaces).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

/// A set of optional style properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<ShadowOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style that only sets a border color.
    #[must_use]
    pub fn border(color: Color) -> Self {
        Self {
            border_color: Some(color),
            ..Self::default()
        }
    }

    /// Check if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `overlay` on top of this style.
    ///
    /// Properties set in `overlay` win; everything else comes from `self`.
    #[must_use]
    pub fn merge(&self, overlay: &Style) -> Style {
        let o = overlay.clone();
        let b = self.clone();
        Style {
            background_color: o.background_color.or(b.background_color),
            border_color: o.border_color.or(b.border_color),
            border_radius: o.border_radius.or(b.border_radius),
            border_width: o.border_width.or(b.border_width),
            padding: o.padding.or(b.padding),
            padding_vertical: o.padding_vertical.or(b.padding_vertical),
            padding_horizontal: o.padding_horizontal.or(b.padding_horizontal),
            margin: o.margin.or(b.margin),
            margin_bottom: o.margin_bottom.or(b.margin_bottom),
            margin_right: o.margin_right.or(b.margin_right),
            width: o.width.or(b.width),
            height: o.height.or(b.height),
            flex_direction: o.flex_direction.or(b.flex_direction),
            justify_content: o.justify_content.or(b.justify_content),
            align_items: o.align_items.or(b.align_items),
            font_size: o.font_size.or(b.font_size),
            font_weight: o.font_weight.or(b.font_weight),
            shadow_offset: o.shadow_offset.or(b.shadow_offset),
            shadow_color: o.shadow_color.or(b.shadow_color),
            shadow_opacity: o.shadow_opacity.or(b.shadow_opacity),
            shadow_radius: o.shadow_radius.or(b.shadow_radius),
            elevation: o.elevation.or(b.elevation),
        }
    }
}
