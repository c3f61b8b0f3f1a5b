//! Card properties - the input to a single render.
//!
//! `CardProperties` holds everything shown on one card. It is built with the
//! `with_*` builder methods or decoded from JSON. `moves` and `weaknesses`
//! default to empty lists when absent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardError;

/// Ordered list of short labels (moves, weaknesses). Cards rarely list more than four.
pub type LabelList = SmallVec<[String; 4]>;

/// Reference to the card image. Opaque to the renderer; the host resolves it.
///
/// Serialized untagged: a bare string is a bundled asset, an object with a
/// `uri` is a remote image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// Bundled asset, identified by its bundle path or handle.
    Asset(String),
    /// Remote image.
    Remote { uri: String },
}

impl ImageSource {
    /// Create a bundled asset reference.
    pub fn asset(path: impl Into<String>) -> Self {
        ImageSource::Asset(path.into())
    }

    /// Create a remote image reference.
    pub fn remote(uri: impl Into<String>) -> Self {
        ImageSource::Remote { uri: uri.into() }
    }
}

/// Properties of one creature card.
///
/// ## Example
///
/// ```
/// use pokemon_card::cards::{CardProperties, ImageSource};
///
/// let pikachu = CardProperties::new("Pikachu", ImageSource::asset("assets/pikachu.png"), 100)
///     .with_type("electric")
///     .with_moves(["Thunderbolt", "Quick Attack"])
///     .with_weaknesses(["Ground"]);
///
/// assert_eq!(pikachu.type_label(), Some("electric"));
/// assert_eq!(pikachu.moves.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardProperties {
    /// Creature name. Expected non-empty, not enforced.
    pub name: String,

    pub image: ImageSource,

    /// Elemental type as given by the caller. Original casing is kept for display.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    /// Hit points. Not range-checked.
    pub hp: i64,

    #[serde(default)]
    pub moves: LabelList,

    #[serde(default)]
    pub weaknesses: LabelList,
}

impl CardProperties {
    /// Create card properties with no type, moves or weaknesses.
    #[must_use]
    pub fn new(name: impl Into<String>, image: ImageSource, hp: i64) -> Self {
        Self {
            name: name.into(),
            image,
            element_type: None,
            hp,
            moves: LabelList::new(),
            weaknesses: LabelList::new(),
        }
    }

    /// Set the elemental type label.
    #[must_use]
    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.element_type = Some(label.into());
        self
    }

    /// Set the move list.
    #[must_use]
    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Set the weakness list.
    #[must_use]
    pub fn with_weaknesses<I, S>(mut self, weaknesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weaknesses = weaknesses.into_iter().map(Into::into).collect();
        self
    }

    /// The type label, if any.
    #[must_use]
    pub fn type_label(&self) -> Option<&str> {
        self.element_type.as_deref()
    }

    /// Decode properties from JSON.
    ///
    /// Fields must have the right JSON types: a numeric or boolean `type`
    /// is rejected rather than silently shown as an unknown type.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        serde_json::from_str(json).map_err(CardError::InvalidProperties)
    }
}
