//! Placement policy: where new furniture spawns and how existing furniture
//! is kept inside the room.
//!
//! Horizontal ranges are `[-(dim - margin)/2, (dim - margin)/2]` on x
//! (width) and z (depth). The margin keeps furniture from spawning flush
//! against a wall. Vertical position is never touched here except to set
//! the resting height on spawn.

use crate::models::{RoomDimensions, Vec3};
use rand::Rng;

/// Horizontal clearance reserved against the walls, in room units.
pub const DEFAULT_MARGIN: f64 = 2.0;

/// Draws a spawn position uniformly within the room's usable floor area.
///
/// `y` is set to `resting_height`. A room no wider than the margin yields
/// `x = 0` (and likewise for depth).
pub fn random_spawn_position<R: Rng + ?Sized>(
    dimensions: &RoomDimensions,
    margin: f64,
    resting_height: f64,
    rng: &mut R,
) -> Vec3 {
    let half_x = dimensions.half_span_x(margin);
    let half_z = dimensions.half_span_z(margin);

    Vec3::new(
        sample_symmetric(rng, half_x),
        resting_height,
        sample_symmetric(rng, half_z),
    )
}

/// Clamps x and z into the room's usable floor area, leaving y unchanged.
#[must_use]
pub fn clamp_to_room(position: Vec3, dimensions: &RoomDimensions, margin: f64) -> Vec3 {
    let half_x = dimensions.half_span_x(margin);
    let half_z = dimensions.half_span_z(margin);

    Vec3::new(
        position.x.clamp(-half_x, half_x),
        position.y,
        position.z.clamp(-half_z, half_z),
    )
}

/// Returns true if `position` lies within the usable floor area.
#[must_use]
pub fn is_within_room(position: Vec3, dimensions: &RoomDimensions, margin: f64) -> bool {
    let half_x = dimensions.half_span_x(margin);
    let half_z = dimensions.half_span_z(margin);
    position.x.abs() <= half_x && position.z.abs() <= half_z
}

fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}
