//! # pokemon-card
//!
//! A presentational creature card, rendered to a declarative view tree.
//!
//! ## Design Principles
//!
//! 1. **Pure Rendering**: `render_card` is a function of its inputs. No state,
//!    no I/O, and identical inputs give identical trees.
//!
//! 2. **Total Type Lookup**: Every type label, including none at all, maps to
//!    a badge. Unknown types get the gray "❓" badge instead of an error.
//!
//! 3. **Host Owns Pixels**: The crate produces a `Node` tree and styles. Layout,
//!    image loading and drawing belong to the host framework.
//!
//! ## Modules
//!
//! - `core`: Render configuration and boundary errors
//! - `cards`: Card properties and type badge resolution
//! - `render`: View tree, styles and the card renderer

pub mod core;
pub mod cards;
pub mod render;

// Re-export commonly used types
pub use crate::core::{CardError, Platform, RenderConfig};

pub use crate::cards::{
    resolve_type_display, CardProperties, ElementType, ImageSource, TypeDisplay,
};

pub use crate::render::{render_card, render_card_list, Node, Style, StyleName, StyleSheet};
