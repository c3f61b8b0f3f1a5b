//! Ambient types: render configuration and boundary errors.

pub mod config;
pub mod error;

pub use config::{Platform, RenderConfig};
pub use error::CardError;
