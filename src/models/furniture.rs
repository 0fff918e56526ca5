//! Furniture kinds, ids and placed furniture items.

use crate::models::Vec3;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of furniture piece.
///
/// Parsing never fails: unrecognized tags are kept verbatim as
/// [`FurnitureKind::Other`] so layouts written by newer versions load
/// unchanged. `Other` pieces are drawn as a unit cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FurnitureKind {
    /// Seat, four legs and a backrest
    Chair,
    /// Top on four legs
    Table,
    /// Frame, mattress and pillow
    Bed,
    /// Base, backrest and two arms
    Sofa,
    /// Open frame with shelves
    Bookshelf,
    /// Unit cube
    Cube,
    /// Unit-diameter sphere
    Sphere,
    /// Unit-diameter, unit-height cylinder
    Cylinder,
    /// Unrecognized tag, preserved as written
    Other(String),
}

impl FurnitureKind {
    /// Every kind this version knows how to build.
    pub const SUPPORTED: [Self; 8] = [
        Self::Chair,
        Self::Table,
        Self::Bed,
        Self::Sofa,
        Self::Bookshelf,
        Self::Cube,
        Self::Sphere,
        Self::Cylinder,
    ];

    /// Persisted tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Chair => "chair",
            Self::Table => "table",
            Self::Bed => "bed",
            Self::Sofa => "sofa",
            Self::Bookshelf => "bookshelf",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Other(tag) => tag,
        }
    }

    /// False for [`FurnitureKind::Other`].
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Built from several primitives rather than a single one.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(
            self,
            Self::Chair | Self::Table | Self::Bed | Self::Sofa | Self::Bookshelf
        )
    }
}

impl FromStr for FurnitureKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Ok(Self::SUPPORTED
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .unwrap_or_else(|| Self::Other(s.to_string())))
    }
}

impl From<String> for FurnitureKind {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<FurnitureKind> for String {
    fn from(kind: FurnitureKind) -> Self {
        match kind {
            FurnitureKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a furniture item within one loaded layout.
///
/// Ids are generated on creation and on every load; they are never written
/// to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FurnitureId(Uuid);

impl FurnitureId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for FurnitureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FurnitureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece of furniture placed in the room.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureItem {
    /// Stable id for the item's lifetime
    pub id: FurnitureId,
    /// What the item is
    pub kind: FurnitureKind,
    /// Origin in room coordinates
    pub position: Vec3,
    /// Euler angles in radians; y is yaw
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl FurnitureItem {
    /// Creates an item at `position` with zero rotation and unit scale.
    #[must_use]
    pub fn new(kind: FurnitureKind, position: Vec3) -> Self {
        Self {
            id: FurnitureId::new(),
            kind,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Sets the rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Yaw in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn yaw_degrees(&self) -> f64 {
        self.rotation.y.to_degrees().rem_euclid(360.0)
    }
}
