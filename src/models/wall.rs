//! Wall identifiers and the per-wall color record.

use crate::error::LayoutError;
use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six faces of the room box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    /// +z face
    Front,
    /// -z face
    Back,
    /// -x face
    Left,
    /// +x face
    Right,
    /// Ceiling
    Top,
    /// Floor
    Bottom,
}

impl Wall {
    /// All walls in persisted key order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// Lowercase identifier used in persisted layouts and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for Wall {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|wall| wall.as_str() == wanted)
            .ok_or_else(|| LayoutError::InvalidWallIdentifier(s.to_string()))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color of every wall.
///
/// Six named fields rather than a map, so a record with a missing wall
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallColors {
    /// Front wall color
    pub front: RgbColor,
    /// Back wall color
    pub back: RgbColor,
    /// Left wall color
    pub left: RgbColor,
    /// Right wall color
    pub right: RgbColor,
    /// Ceiling color
    pub top: RgbColor,
    /// Floor color
    pub bottom: RgbColor,
}

impl WallColors {
    /// Paints all six walls the same color.
    #[must_use]
    pub const fn uniform(color: RgbColor) -> Self {
        Self {
            front: color,
            back: color,
            left: color,
            right: color,
            top: color,
            bottom: color,
        }
    }

    /// Color of one wall.
    #[must_use]
    pub const fn get(&self, wall: Wall) -> RgbColor {
        match wall {
            Wall::Front => self.front,
            Wall::Back => self.back,
            Wall::Left => self.left,
            Wall::Right => self.right,
            Wall::Top => self.top,
            Wall::Bottom => self.bottom,
        }
    }

    /// Replaces the color of exactly one wall.
    pub fn set(&mut self, wall: Wall, color: RgbColor) {
        let slot = match wall {
            Wall::Front => &mut self.front,
            Wall::Back => &mut self.back,
            Wall::Left => &mut self.left,
            Wall::Right => &mut self.right,
            Wall::Top => &mut self.top,
            Wall::Bottom => &mut self.bottom,
        };
        *slot = color;
    }

    /// Iterates `(wall, color)` pairs in persisted key order.
    pub fn iter(&self) -> impl Iterator<Item = (Wall, RgbColor)> + '_ {
        Wall::ALL.into_iter().map(move |wall| (wall, self.get(wall)))
    }
}

impl Default for WallColors {
    fn default() -> Self {
        Self::uniform(RgbColor::default())
    }
}
