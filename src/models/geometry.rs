//! Vector and room dimension primitives.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-component vector used for positions, Euler rotations and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component (left/right)
    pub x: f64,
    /// Y component (up/down)
    pub y: f64,
    /// Z component (front/back)
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// The unit scale vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an `[x, y, z]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Builds a vector from an `[x, y, z]` array.
    #[must_use]
    pub const fn from_array(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    /// Returns true if every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Room box size. All three fields are positive and finite.
///
/// The room is centered on the origin horizontally: x spans
/// `[-width/2, width/2]` and z spans `[-depth/2, depth/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
    /// Extent along z
    pub depth: f64,
}

impl RoomDimensions {
    /// Creates validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`] for the first field that is
    /// zero, negative, or not finite.
    pub fn new(width: f64, height: f64, depth: f64) -> LayoutResult<Self> {
        let dimensions = Self {
            width,
            height,
            depth,
        };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Checks that every field is positive and finite.
    pub fn validate(&self) -> LayoutResult<()> {
        for (axis, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension { axis, value });
            }
        }
        Ok(())
    }

    /// Half-extent available to furniture along x once `margin` is reserved.
    ///
    /// Never negative: a room narrower than the margin collapses to 0.
    #[must_use]
    pub fn half_span_x(&self, margin: f64) -> f64 {
        ((self.width - margin) / 2.0).max(0.0)
    }

    /// Half-extent available to furniture along z once `margin` is reserved.
    #[must_use]
    pub fn half_span_z(&self, margin: f64) -> f64 {
        ((self.depth - margin) / 2.0).max(0.0)
    }
}

impl Default for RoomDimensions {
    /// 10 x 5 x 10, the stock room.
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 5.0,
            depth: 10.0,
        }
    }
}

impl fmt::Display for RoomDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.width, self.height, self.depth)
    }
}
