//! Error types for hexmap-layout.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the layout boundary.
///
/// Placement itself never fails; these only reject malformed input before
/// any cell is assigned.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity is missing a required field or carries an out-of-range value.
    #[error("invalid entity at index {index}: {reason}")]
    InvalidEntity { index: usize, reason: String },

    /// Two entities in one run share an id.
    #[error("duplicate entity id: {0}")]
    DuplicateEntity(String),

    /// The layout configuration cannot produce a valid layout.
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    /// A color string is not `#RRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
