//! Service layer for placement rules and layout persistence.
//!
//! This module contains the logic that sits between the layout model and
//! the outside world: where furniture may go, and where layouts are stored.

pub mod layouts;
pub mod placement;
pub mod store;

// Re-export commonly used types and functions
pub use layouts::{LayoutService, DEFAULT_SLOT};
pub use placement::{clamp_to_room, is_within_room, random_spawn_position, DEFAULT_MARGIN};
pub use store::{FileStore, LayoutStore, MemoryStore};
