//! Error types for the mask engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A word's categories were requested but the word is not in the
    /// catalog.
    #[error("\"{0}\" is not in the catalog")]
    UnknownEntry(String),

    /// A mask token resolved to zero members, so no candidate can be
    /// produced for that position.
    #[error("class \"{0}\" has no members; the mask cannot be enumerated")]
    EmptyPositionClass(String),

    /// Entropy is undefined for an empty possibility space.
    #[error("entropy is undefined for a possibility count of zero")]
    InvalidDomain,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
