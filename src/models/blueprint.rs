//! Declarative shape blueprints for furniture kinds.
//!
//! A blueprint is the list of primitive solids a renderer assembles to draw
//! one item. Offsets are relative to the item origin, which sits on the
//! floor for compound pieces and at the center for single primitives.

use crate::models::{FurnitureKind, Vec3};
use serde::Serialize;

/// A primitive solid, sized in room units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Primitive {
    /// Axis-aligned box
    Box {
        /// Extent along x
        width: f64,
        /// Extent along y
        height: f64,
        /// Extent along z
        depth: f64,
    },
    /// Sphere
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Upright cylinder
    Cylinder {
        /// Radius
        radius: f64,
        /// Extent along y
        height: f64,
    },
}

impl Primitive {
    /// Half extents along x, y and z.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => Vec3::new(width / 2.0, height / 2.0, depth / 2.0),
            Self::Sphere { radius } => Vec3::new(radius, radius, radius),
            Self::Cylinder { radius, height } => Vec3::new(radius, height / 2.0, radius),
        }
    }
}

/// Material role of a part; the renderer picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    /// Main structure (wood, frame)
    Body,
    /// Legs and trim
    Accent,
    /// Soft parts (mattress, pillow, seat cushion)
    Cushion,
}

/// One primitive placed relative to the item origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapePart {
    /// Solid to draw
    pub primitive: Primitive,
    /// Center of the solid relative to the item origin
    pub offset: Vec3,
    /// Material role
    pub tint: Tint,
}

impl ShapePart {
    const fn new(primitive: Primitive, offset: Vec3, tint: Tint) -> Self {
        Self {
            primitive,
            offset,
            tint,
        }
    }
}

/// Axis-aligned bounds of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Bounds {
    /// Size along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}

const fn cuboid(width: f64, height: f64, depth: f64) -> Primitive {
    Primitive::Box {
        width,
        height,
        depth,
    }
}

/// Four legs of `height` under a rectangle of `span_x` by `span_z`, centers
/// inset by `inset` from the edges.
fn legs(span_x: f64, span_z: f64, inset: f64, thickness: f64, height: f64) -> Vec<ShapePart> {
    let x = span_x / 2.0 - inset;
    let z = span_z / 2.0 - inset;
    [(-x, -z), (x, -z), (-x, z), (x, z)]
        .into_iter()
        .map(|(lx, lz)| {
            ShapePart::new(
                cuboid(thickness, height, thickness),
                Vec3::new(lx, height / 2.0, lz),
                Tint::Accent,
            )
        })
        .collect()
}

impl FurnitureKind {
    /// Primitive parts that make up this kind.
    ///
    /// Unrecognized kinds get the unit cube.
    #[must_use]
    pub fn blueprint(&self) -> Vec<ShapePart> {
        match self {
            Self::Chair => {
                let mut parts = legs(0.5, 0.5, 0.05, 0.05, 0.45);
                parts.push(ShapePart::new(
                    cuboid(0.5, 0.05, 0.5),
                    Vec3::new(0.0, 0.475, 0.0),
                    Tint::Cushion,
                ));
                parts.push(ShapePart::new(
                    cuboid(0.5, 0.5, 0.05),
                    Vec3::new(0.0, 0.75, -0.225),
                    Tint::Body,
                ));
                parts
            }
            Self::Table => {
                let mut parts = legs(1.2, 0.8, 0.08, 0.08, 0.72);
                parts.push(ShapePart::new(
                    cuboid(1.2, 0.06, 0.8),
                    Vec3::new(0.0, 0.75, 0.0),
                    Tint::Body,
                ));
                parts
            }
            Self::Bed => vec![
                ShapePart::new(cuboid(1.6, 0.3, 2.1), Vec3::new(0.0, 0.15, 0.0), Tint::Body),
                ShapePart::new(
                    cuboid(1.5, 0.2, 2.0),
                    Vec3::new(0.0, 0.4, 0.0),
                    Tint::Cushion,
                ),
                ShapePart::new(
                    cuboid(0.6, 0.1, 0.35),
                    Vec3::new(0.0, 0.55, -0.75),
                    Tint::Cushion,
                ),
                ShapePart::new(
                    cuboid(1.6, 0.9, 0.08),
                    Vec3::new(0.0, 0.45, -1.09),
                    Tint::Body,
                ),
            ],
            Self::Sofa => vec![
                ShapePart::new(
                    cuboid(2.0, 0.4, 0.9),
                    Vec3::new(0.0, 0.2, 0.0),
                    Tint::Cushion,
                ),
                ShapePart::new(
                    cuboid(2.0, 0.5, 0.2),
                    Vec3::new(0.0, 0.65, -0.35),
                    Tint::Body,
                ),
                ShapePart::new(
                    cuboid(0.2, 0.6, 0.9),
                    Vec3::new(-0.9, 0.3, 0.0),
                    Tint::Body,
                ),
                ShapePart::new(
                    cuboid(0.2, 0.6, 0.9),
                    Vec3::new(0.9, 0.3, 0.0),
                    Tint::Body,
                ),
            ],
            Self::Bookshelf => {
                let mut parts = vec![
                    ShapePart::new(cuboid(0.05, 1.8, 0.3), Vec3::new(-0.425, 0.9, 0.0), Tint::Body),
                    ShapePart::new(cuboid(0.05, 1.8, 0.3), Vec3::new(0.425, 0.9, 0.0), Tint::Body),
                    ShapePart::new(cuboid(0.9, 1.8, 0.02), Vec3::new(0.0, 0.9, -0.14), Tint::Body),
                ];
                for level in 0_u8..5 {
                    parts.push(ShapePart::new(
                        cuboid(0.8, 0.03, 0.28),
                        Vec3::new(0.0, 0.015 + f64::from(level) * 0.4425, 0.0),
                        Tint::Accent,
                    ));
                }
                parts
            }
            Self::Sphere => vec![ShapePart::new(
                Primitive::Sphere { radius: 0.5 },
                Vec3::ZERO,
                Tint::Body,
            )],
            Self::Cylinder => vec![ShapePart::new(
                Primitive::Cylinder {
                    radius: 0.5,
                    height: 1.0,
                },
                Vec3::ZERO,
                Tint::Body,
            )],
            Self::Cube | Self::Other(_) => {
                vec![ShapePart::new(cuboid(1.0, 1.0, 1.0), Vec3::ZERO, Tint::Body)]
            }
        }
    }

    /// Height of the item origin above the floor when at rest.
    ///
    /// Half the vertical extent for single primitives, 0 for compound
    /// pieces whose parts already stand on the floor.
    #[must_use]
    pub fn resting_height(&self) -> f64 {
        blueprint_bounds(&self.blueprint()).map_or(0.0, |bounds| (-bounds.min.y).max(0.0))
    }
}

/// Axis-aligned bounds enclosing every part, or `None` for an empty list.
#[must_use]
pub fn blueprint_bounds(parts: &[ShapePart]) -> Option<Bounds> {
    let mut iter = parts.iter().map(|part| {
        let half = part.primitive.half_extents();
        let min = Vec3::new(
            part.offset.x - half.x,
            part.offset.y - half.y,
            part.offset.z - half.z,
        );
        let max = Vec3::new(
            part.offset.x + half.x,
            part.offset.y + half.y,
            part.offset.z + half.z,
        );
        Bounds { min, max }
    });

    let first = iter.next()?;
    Some(iter.fold(first, |acc, b| Bounds {
        min: Vec3::new(
            acc.min.x.min(b.min.x),
            acc.min.y.min(b.min.y),
            acc.min.z.min(b.min.z),
        ),
        max: Vec3::new(
            acc.max.x.max(b.max.x),
            acc.max.y.max(b.max.y),
            acc.max.z.max(b.max.z),
        ),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_primitive_kinds_rest_at_half_height() {
        for kind in [FurnitureKind::Cube, FurnitureKind::Sphere, FurnitureKind::Cylinder] {
            assert!((kind.resting_height() - 0.5).abs() < EPS, "{kind}");
        }
    }

    #[test]
    fn test_compound_kinds_stand_on_floor() {
        for kind in FurnitureKind::SUPPORTED.iter().filter(|k| k.is_compound()) {
            let bounds = blueprint_bounds(&kind.blueprint()).unwrap();
            assert!(bounds.min.y.abs() < EPS, "{kind} floats or sinks");
            assert!(kind.resting_height().abs() < EPS);
        }
    }

    #[test]
    fn test_unknown_kind_falls_back_to_cube() {
        let other = FurnitureKind::Other("lamp".to_string());
        assert_eq!(other.blueprint(), FurnitureKind::Cube.blueprint());
    }

    #[test]
    fn test_chair_part_count() {
        // seat + backrest + four legs
        assert_eq!(FurnitureKind::Chair.blueprint().len(), 6);
    }

    #[test]
    fn test_bounds_size() {
        let bounds = blueprint_bounds(&FurnitureKind::Table.blueprint()).unwrap();
        let size = bounds.size();
        assert!((size.x - 1.2).abs() < EPS);
        assert!((size.y - 0.78).abs() < EPS);
        assert!((size.z - 0.8).abs() < EPS);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(blueprint_bounds(&[]).is_none());
    }
}
