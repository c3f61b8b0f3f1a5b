//! Rendering: card properties to a view tree plus a style table.
//!
//! ## Key Types
//!
//! - `Node`: Declarative view tree consumed by the host
//! - `Style`: Optional style properties, layered with `Style::merge`
//! - `StyleSheet`: Named styles for each card region, resolved per platform
//!
//! The host framework owns layout, image loading and pixel output.

pub mod card;
pub mod node;
pub mod style;
pub mod stylesheet;

pub use card::{render_card, render_card_list, UNKNOWN_TYPE_LABEL};
pub use node::Node;
pub use style::{
    AlignItems, Color, Dimension, FlexDirection, FontWeight, JustifyContent, ResizeMode,
    ShadowOffset, Style,
};
pub use stylesheet::{platform_surface, StyleName, StyleSheet, IMAGE_HEIGHT};
