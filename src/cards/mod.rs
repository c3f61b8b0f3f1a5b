//! Card inputs and type badge lookup.
//!
//! ## Key Types
//!
//! - `CardProperties`: Everything shown on one card
//! - `ImageSource`: Opaque image reference resolved by the host
//! - `ElementType`: The recognized elemental types
//! - `TypeDisplay`: Badge border color and emoji

pub mod properties;
pub mod type_display;

pub use properties::{CardProperties, ImageSource, LabelList};
pub use type_display::{resolve_type_display, ElementType, TypeDisplay};
