//! Type badge resolution: elemental type label to border color and emoji.
//!
//! The mapping is total. Absent, empty and unrecognized labels all resolve
//! to the gray "❓" badge, so there is no failure case to handle.
//!
//! | label    | border    | emoji |
//! |----------|-----------|-------|
//! | electric | `#FFD700` | ⚡️    |
//! | water    | `#6493EA` | 💧    |
//! | fire     | `#FF5733` | 🔥    |
//! | grass    | `#66CC66` | 🌿    |
//! | other    | `#A0A0A0` | ❓    |

use serde::{Deserialize, Serialize};

use crate::render::Color;

pub const GOLD: Color = Color::from_static("#FFD700");
pub const BLUE: Color = Color::from_static("#6493EA");
pub const ORANGE_RED: Color = Color::from_static("#FF5733");
pub const GREEN: Color = Color::from_static("#66CC66");
pub const GRAY: Color = Color::from_static("#A0A0A0");

/// A recognized elemental type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Electric,
    Water,
    Fire,
    Grass,
}

impl ElementType {
    /// All recognized types.
    pub const ALL: [ElementType; 4] = [
        ElementType::Electric,
        ElementType::Water,
        ElementType::Fire,
        ElementType::Grass,
    ];

    /// Parse a label case-insensitively. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "electric" => Some(ElementType::Electric),
            "water" => Some(ElementType::Water),
            "fire" => Some(ElementType::Fire),
            "grass" => Some(ElementType::Grass),
            _ => None,
        }
    }

    /// Canonical lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ElementType::Electric => "electric",
            ElementType::Water => "water",
            ElementType::Fire => "fire",
            ElementType::Grass => "grass",
        }
    }

    /// Badge styling for this type.
    #[must_use]
    pub const fn display(self) -> TypeDisplay {
        match self {
            ElementType::Electric => TypeDisplay::new(GOLD, "⚡️"),
            ElementType::Water => TypeDisplay::new(BLUE, "💧"),
            ElementType::Fire => TypeDisplay::new(ORANGE_RED, "🔥"),
            ElementType::Grass => TypeDisplay::new(GREEN, "🌿"),
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Border color and emoji shown on a type badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDisplay {
    pub border_color: Color,
    pub emoji: &'static str,
}

impl TypeDisplay {
    /// Badge for absent or unrecognized types.
    pub const DEFAULT: TypeDisplay = TypeDisplay::new(GRAY, "❓");

    const fn new(border_color: Color, emoji: &'static str) -> Self {
        Self { border_color, emoji }
    }
}

impl Default for TypeDisplay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolve the badge styling for an optional type label.
///
/// ```
/// use pokemon_card::cards::{resolve_type_display, TypeDisplay};
///
/// assert_eq!(resolve_type_display(Some("Fire")).emoji, "🔥");
/// assert_eq!(resolve_type_display(None), TypeDisplay::DEFAULT);
/// ```
#[must_use]
pub fn resolve_type_display(label: Option<&str>) -> TypeDisplay {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        tracing::trace!("no type label, using default badge");
        return TypeDisplay::DEFAULT;
    };

    match ElementType::from_label(label) {
        Some(element) => element.display(),
        None => {
            tracing::trace!("unrecognized type label {:?}, using default badge", label);
            TypeDisplay::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(resolve_type_display(Some("electric")), TypeDisplay::new(GOLD, "⚡️"));
        assert_eq!(resolve_type_display(Some("water")), TypeDisplay::new(BLUE, "💧"));
        assert_eq!(resolve_type_display(Some("fire")), TypeDisplay::new(ORANGE_RED, "🔥"));
        assert_eq!(resolve_type_display(Some("grass")), TypeDisplay::new(GREEN, "🌿"));
    }

    #[test]
    fn test_hex_values() {
        assert_eq!(GOLD.as_str(), "#FFD700");
        assert_eq!(BLUE.as_str(), "#6493EA");
        assert_eq!(ORANGE_RED.as_str(), "#FF5733");
        assert_eq!(GREEN.as_str(), "#66CC66");
        assert_eq!(GRAY.as_str(), "#A0A0A0");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(resolve_type_display(None), TypeDisplay::DEFAULT);
        assert_eq!(resolve_type_display(Some("")), TypeDisplay::DEFAULT);
        assert_eq!(resolve_type_display(Some("psychic")), TypeDisplay::DEFAULT);
        // Surrounding whitespace is not stripped.
        assert_eq!(resolve_type_display(Some(" fire")), TypeDisplay::DEFAULT);
        assert_eq!(TypeDisplay::default().emoji, "❓");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_type_display(Some("ELECTRIC")), resolve_type_display(Some("electric")));
        assert_eq!(resolve_type_display(Some("GrAsS")).border_color, GREEN);
    }

    #[test]
    fn test_element_type_labels() {
        for element in ElementType::ALL {
            assert_eq!(ElementType::from_label(element.label()), Some(element));
            assert_eq!(element.to_string(), element.label());
        }
        assert_eq!(ElementType::from_label("Water"), Some(ElementType::Water));
        assert_eq!(ElementType::from_label("ground"), None);
    }
}
