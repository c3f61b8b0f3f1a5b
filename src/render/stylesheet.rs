//! The card's named style table.
//!
//! Every region of the card is styled by name. The table is static apart
//! from the card surface, which takes a drop shadow on iOS and an
//! elevation on Android.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::style::{
    AlignItems, Color, Dimension, FlexDirection, FontWeight, JustifyContent, ShadowOffset, Style,
};
use crate::core::Platform;

/// Name of a styled region of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleName {
    Card,
    NameContainer,
    Name,
    Hp,
    Image,
    TypeContainer,
    Badge,
    TypeEmoji,
    TypeText,
    MovesContainer,
    MovesText,
    WeaknessContainer,
    WeaknessText,
}

impl StyleName {
    /// All style names, in card order.
    pub const ALL: [StyleName; 13] = [
        StyleName::Card,
        StyleName::NameContainer,
        StyleName::Name,
        StyleName::Hp,
        StyleName::Image,
        StyleName::TypeContainer,
        StyleName::Badge,
        StyleName::TypeEmoji,
        StyleName::TypeText,
        StyleName::MovesContainer,
        StyleName::MovesText,
        StyleName::WeaknessContainer,
        StyleName::WeaknessText,
    ];

    /// The camelCase key used for this style in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StyleName::Card => "card",
            StyleName::NameContainer => "nameContainer",
            StyleName::Name => "name",
            StyleName::Hp => "hp",
            StyleName::Image => "image",
            StyleName::TypeContainer => "typeContainer",
            StyleName::Badge => "badge",
            StyleName::TypeEmoji => "typeEmoji",
            StyleName::TypeText => "typeText",
            StyleName::MovesContainer => "movesContainer",
            StyleName::MovesText => "movesText",
            StyleName::WeaknessContainer => "weaknessContainer",
            StyleName::WeaknessText => "weaknessText",
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Height of the image box, in points.
pub const IMAGE_HEIGHT: f32 = 200.0;

/// Body text size shared by the hp, type, moves and weakness lines.
const BODY_FONT_SIZE: f32 = 22.0;

/// Resolved style table for one platform.
///
/// ## Example
///
/// ```
/// use pokemon_card::core::Platform;
/// use pokemon_card::render::{StyleName, StyleSheet};
///
/// let sheet = StyleSheet::new(Platform::Android);
/// assert_eq!(sheet.style(StyleName::Card).elevation, Some(5.0));
/// ```
#[derive(Clone, Debug)]
pub struct StyleSheet {
    styles: FxHashMap<StyleName, Style>,
}

impl StyleSheet {
    /// Build the card style table for a platform.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let styles = StyleName::ALL
            .iter()
            .map(|&name| (name, base_style(name, platform)))
            .collect();
        Self { styles }
    }

    /// Get a style by name.
    #[must_use]
    pub fn get(&self, name: StyleName) -> Option<&Style> {
        self.styles.get(&name)
    }

    /// Get a style by name, or an empty style if it was never set.
    #[must_use]
    pub fn style(&self, name: StyleName) -> Style {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Layer an override onto a named style.
    pub fn apply_override(&mut self, name: StyleName, overlay: &Style) {
        let merged = self.style(name).merge(overlay);
        self.styles.insert(name, merged);
    }

    /// Iterate over all styles.
    pub fn iter(&self) -> impl Iterator<Item = (StyleName, &Style)> {
        self.styles.iter().map(|(name, style)| (*name, style))
    }
}

/// Surface styling for the card body: shadow on iOS, elevation on Android.
#[must_use]
pub fn platform_surface(platform: Platform) -> Style {
    match platform {
        Platform::Ios => Style {
            shadow_offset: Some(ShadowOffset { width: 2.0, height: 2.0 }),
            shadow_color: Some(Color::from_static("#333")),
            shadow_opacity: Some(0.3),
            shadow_radius: Some(4.0),
            ..Style::default()
        },
        Platform::Android => Style {
            elevation: Some(5.0),
            ..Style::default()
        },
        Platform::Other => Style::default(),
    }
}

fn bold_body() -> Style {
    Style {
        font_size: Some(BODY_FONT_SIZE),
        font_weight: Some(FontWeight::Bold),
        ..Style::default()
    }
}

fn base_style(name: StyleName, platform: Platform) -> Style {
    match name {
        StyleName::Card => Style {
            background_color: Some(Color::from_static("white")),
            border_radius: Some(16.0),
            border_width: Some(2.0),
            padding: Some(16.0),
            margin: Some(16.0),
            ..Style::default()
        }
        .merge(&platform_surface(platform)),
        StyleName::NameContainer => Style {
            flex_direction: Some(FlexDirection::Row),
            justify_content: Some(JustifyContent::SpaceBetween),
            width: Some(Dimension::FULL),
            margin_bottom: Some(32.0),
            ..Style::default()
        },
        StyleName::Name => Style {
            font_size: Some(30.0),
            font_weight: Some(FontWeight::Bold),
            ..Style::default()
        },
        StyleName::Hp => Style {
            font_size: Some(BODY_FONT_SIZE),
            ..Style::default()
        },
        StyleName::Image => Style {
            width: Some(Dimension::FULL),
            height: Some(Dimension::Points(IMAGE_HEIGHT)),
            margin_bottom: Some(16.0),
            ..Style::default()
        },
        StyleName::TypeContainer => Style {
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(AlignItems::Center),
            justify_content: Some(JustifyContent::Center),
            margin_bottom: Some(40.0),
            ..Style::default()
        },
        StyleName::Badge => Style {
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(AlignItems::Center),
            padding_vertical: Some(6.0),
            padding_horizontal: Some(12.0),
            border_radius: Some(20.0),
            border_width: Some(4.0),
            ..Style::default()
        },
        StyleName::TypeEmoji => Style {
            font_size: Some(30.0),
            margin_right: Some(12.0),
            ..Style::default()
        },
        StyleName::TypeText | StyleName::MovesText | StyleName::WeaknessText => bold_body(),
        StyleName::MovesContainer => Style {
            margin_bottom: Some(12.0),
            ..Style::default()
        },
        StyleName::WeaknessContainer => Style {
            margin_bottom: Some(8.0),
            ..Style::default()
        },
    }
}
