//! Error types.
//!
//! The public computation functions never fail; they degrade to a defined
//! value. These errors describe *why* an input degraded and are returned by
//! the fallible helpers underneath.

use thiserror::Error;

/// Reasons a style value could not be read as a pixel length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelError {
    #[error("Empty pixel value")]
    Empty,
    #[error("Missing px suffix: {0:?}")]
    MissingSuffix(String),
    #[error("Invalid number: {0:?}")]
    Invalid(String),
    #[error("Non-finite pixel value: {0:?}")]
    NonFinite(String),
}

/// Errors raised while matching a handle selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,
    #[error("Unsupported selector: {0:?}")]
    Unsupported(String),
    #[error("Invalid selector {selector:?}: {reason}")]
    Invalid { selector: String, reason: String },
}

/// Errors raised while loading or addressing a [`crate::Scene`].
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown node: {0}")]
    UnknownNode(String),
}
