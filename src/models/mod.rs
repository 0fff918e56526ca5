//! Data models for rooms, walls and furniture.
//!
//! This module contains the core layout state. Models are independent of
//! any rendering layer, storage medium or user interface.

pub mod blueprint;
pub mod furniture;
pub mod geometry;
pub mod layout;
pub mod rgb;
pub mod wall;

// Re-export all model types
pub use blueprint::{blueprint_bounds, Bounds, Primitive, ShapePart, Tint};
pub use furniture::{FurnitureId, FurnitureItem, FurnitureKind};
pub use geometry::{RoomDimensions, Vec3};
pub use layout::{Layout, RotateOutcome};
pub use rgb::RgbColor;
pub use wall::{Wall, WallColors};
