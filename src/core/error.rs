//! Errors at the input boundary.
//!
//! Rendering itself cannot fail. The only fallible step is decoding card
//! properties or render configuration handed over by the host as JSON.

/// Errors that can occur while decoding host input.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// Malformed JSON, a missing required field, or a field of the wrong
    /// type (such as a non-string `type`).
    #[error("invalid card properties: {0}")]
    InvalidProperties(#[source] serde_json::Error),

    #[error("invalid render config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
