//! Error type for layout model and persistence operations.
//!
//! Every variant is recoverable: callers show a notice and keep the
//! current layout.

use crate::models::FurnitureId;

/// Errors raised by [`Layout`](crate::models::Layout) operations and the
/// persistence adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Wall name is not one of front, back, left, right, top, bottom.
    #[error("invalid wall identifier '{0}' (expected front, back, left, right, top or bottom)")]
    InvalidWallIdentifier(String),

    /// No furniture item with the given id exists in the layout.
    #[error("furniture item {0} not found")]
    NotFound(FurnitureId),

    /// Persisted layout text is malformed.
    #[error("failed to parse layout: {0}")]
    Parse(String),

    /// A room dimension is zero, negative, or not finite.
    #[error("invalid room {axis}: {value} (must be a positive number)")]
    InvalidDimension {
        /// Which dimension was rejected ("width", "height" or "depth")
        axis: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A scale component is zero, negative, or not finite.
    #[error("invalid scale {0} (components must be positive)")]
    InvalidScale(String),

    /// A rotation or position value is NaN or infinite.
    #[error("invalid {field}: {value} (must be a finite number)")]
    NonFinite {
        /// Which value was rejected ("yaw" or "position")
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Layout could not be encoded as JSON.
    #[error("failed to encode layout: {0}")]
    Encode(String),

    /// Color value does not fit in 24 bits or is not valid hex.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

/// Result alias for layout operations.
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
