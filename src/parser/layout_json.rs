//! JSON encoding of saved room layouts.
//!
//! # Format
//!
//! ```json
//! {
//!   "roomDimensions": { "width": 10.0, "height": 5.0, "depth": 10.0 },
//!   "wallColors": { "front": 13421772, "back": 13421772, "left": 13421772,
//!                   "right": 13421772, "top": 13421772, "bottom": 13421772 },
//!   "furniture": [
//!     { "type": "sofa", "position": [1.5, 0.0, -2.0], "rotation": [0.0, 1.57, 0.0] }
//!   ]
//! }
//! ```
//!
//! Only kind, position and rotation are saved per item. Ids, scale and
//! selection are rebuilt on load.

use crate::error::{LayoutError, LayoutResult};
use crate::models::{FurnitureItem, FurnitureKind, Layout, RgbColor, RoomDimensions, Vec3, WallColors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocument {
    room_dimensions: DimensionsDocument,
    wall_colors: WallColorsDocument,
    furniture: Vec<FurnitureDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DimensionsDocument {
    width: f64,
    height: f64,
    depth: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct WallColorsDocument {
    front: u32,
    back: u32,
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct FurnitureDocument {
    #[serde(rename = "type")]
    kind: FurnitureKind,
    position: [f64; 3],
    rotation: [f64; 3],
}

impl From<&Layout> for LayoutDocument {
    fn from(layout: &Layout) -> Self {
        let dims = layout.dimensions();
        let walls = layout.wall_colors();
        Self {
            room_dimensions: DimensionsDocument {
                width: dims.width,
                height: dims.height,
                depth: dims.depth,
            },
            wall_colors: WallColorsDocument {
                front: walls.front.to_u24(),
                back: walls.back.to_u24(),
                left: walls.left.to_u24(),
                right: walls.right.to_u24(),
                top: walls.top.to_u24(),
                bottom: walls.bottom.to_u24(),
            },
            furniture: layout
                .furniture()
                .iter()
                .map(|item| FurnitureDocument {
                    kind: item.kind.clone(),
                    position: item.position.to_array(),
                    rotation: item.rotation.to_array(),
                })
                .collect(),
        }
    }
}

impl TryFrom<LayoutDocument> for Layout {
    type Error = LayoutError;

    fn try_from(doc: LayoutDocument) -> LayoutResult<Self> {
        let dims = doc.room_dimensions;
        let dimensions = RoomDimensions::new(dims.width, dims.height, dims.depth)
            .map_err(|e| LayoutError::Parse(format!("roomDimensions: {e}")))?;

        let walls = doc.wall_colors;
        let color = |name: &str, value: u32| {
            RgbColor::from_u24(value).map_err(|_| {
                LayoutError::Parse(format!(
                    "wallColors.{name}: {value} is not a 24-bit color"
                ))
            })
        };
        let wall_colors = WallColors {
            front: color("front", walls.front)?,
            back: color("back", walls.back)?,
            left: color("left", walls.left)?,
            right: color("right", walls.right)?,
            top: color("top", walls.top)?,
            bottom: color("bottom", walls.bottom)?,
        };

        let furniture = doc
            .furniture
            .into_iter()
            .map(|entry| {
                FurnitureItem::new(entry.kind, Vec3::from_array(entry.position))
                    .with_rotation(Vec3::from_array(entry.rotation))
            })
            .collect();

        Ok(Self::from_parts(dimensions, wall_colors, furniture))
    }
}

/// Encodes a layout as pretty-printed JSON.
///
/// Output is deterministic: keys always appear in the same order and
/// furniture keeps its list order.
///
/// # Errors
///
/// Returns [`LayoutError::Encode`] if the document cannot be written as JSON.
pub fn serialize(layout: &Layout) -> LayoutResult<String> {
    let doc = LayoutDocument::from(layout);
    serde_json::to_string_pretty(&doc).map_err(|e| LayoutError::Encode(e.to_string()))
}

/// Decodes a saved layout.
///
/// Each furniture item gets a fresh id, unit scale and no selection.
/// Unrecognized furniture types are kept as-is. Positions are restored
/// exactly; clamping to the room happens when the layout is installed with
/// [`Layout::replace_with`].
///
/// # Errors
///
/// Returns [`LayoutError::Parse`] if the text is not valid JSON, a key is
/// missing, a value has the wrong type, a dimension is not positive, or a
/// wall color does not fit in 24 bits. Nothing is partially built.
pub fn deserialize(text: &str) -> LayoutResult<Layout> {
    let doc: LayoutDocument =
        serde_json::from_str(text).map_err(|e| LayoutError::Parse(e.to_string()))?;
    Layout::try_from(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FurnitureKind, Wall};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_layout() -> Layout {
        let mut layout = Layout::with_dimensions(RoomDimensions::new(8.0, 3.0, 6.0).unwrap());
        let mut rng = StdRng::seed_from_u64(9);
        let sofa = layout.add_furniture_with_rng(FurnitureKind::Sofa, &mut rng);
        layout.add_furniture_with_rng(FurnitureKind::Bookshelf, &mut rng);
        layout.add_furniture_with_rng(FurnitureKind::Other("piano".to_string()), &mut rng);
        layout.select_furniture(Some(sofa));
        layout.rotate_furniture(sofa, 1.25).unwrap();
        layout.set_wall_color(Wall::Top, RgbColor::from_u24(0x0A_0B0C).unwrap());
        layout
    }

    #[test]
    fn test_roundtrip_preserves_model_fields() {
        let original = sample_layout();
        let restored = deserialize(&serialize(&original).unwrap()).unwrap();

        assert_eq!(restored.dimensions(), original.dimensions());
        assert_eq!(restored.wall_colors(), original.wall_colors());
        assert_eq!(restored.len(), original.len());
        for (a, b) in original.furniture().iter().zip(restored.furniture()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.position, b.position);
            assert_eq!(a.rotation, b.rotation);
            assert_ne!(a.id, b.id, "ids are regenerated on load");
            assert_eq!(b.scale, Vec3::ONE);
        }
        assert_eq!(restored.selected_id(), None);
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let layout = sample_layout();
        assert_eq!(serialize(&layout).unwrap(), serialize(&layout).unwrap());
    }

    #[test]
    fn test_serialize_key_names() {
        let value: serde_json::Value = serde_json::from_str(&serialize(&sample_layout()).unwrap()).unwrap();
        assert_eq!(value["roomDimensions"]["width"], 8.0);
        assert_eq!(value["wallColors"]["top"], 0x0A_0B0C);
        assert_eq!(value["furniture"][0]["type"], "sofa");
        assert_eq!(value["furniture"][2]["type"], "piano");
        assert_eq!(value["furniture"][0]["rotation"][1], 1.25);
        assert!(value["furniture"][0].get("scale").is_none());
        assert!(value["furniture"][0].get("id").is_none());
    }

    #[test]
    fn test_deserialize_source_format() {
        let text = r#"{
            "roomDimensions": { "width": 10, "height": 5, "depth": 10 },
            "wallColors": { "front": 13421772, "back": 0, "left": 255, "right": 65280, "top": 16711680, "bottom": 16777215 },
            "furniture": [
                { "type": "chair", "position": [1, 0, 2], "rotation": [0, 3.14, 0] },
                { "type": "hammock", "position": [0, 0.5, 0], "rotation": [0, 0, 0] }
            ]
        }"#;
        let layout = deserialize(text).unwrap();
        assert_eq!(layout.wall_colors().front, RgbColor::default());
        assert_eq!(layout.wall_colors().right, RgbColor::new(0, 255, 0));
        assert_eq!(layout.furniture()[0].position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(
            layout.furniture()[1].kind,
            FurnitureKind::Other("hammock".to_string())
        );
    }

    #[test]
    fn test_unknown_type_tag_written_back_unchanged() {
        let text = r#"{
            "roomDimensions": { "width": 10, "height": 5, "depth": 10 },
            "wallColors": { "front": 0, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0 },
            "furniture": [
                { "type": " Lamp", "position": [0, 0.5, 0], "rotation": [0, 0, 0] }
            ]
        }"#;
        let layout = deserialize(text).unwrap();
        assert_eq!(layout.furniture()[0].kind, FurnitureKind::Other(" Lamp".to_string()));

        let value: serde_json::Value = serde_json::from_str(&serialize(&layout).unwrap()).unwrap();
        assert_eq!(value["furniture"][0]["type"], " Lamp");
    }

    #[test]
    fn test_deserialize_missing_furniture_key() {
        let text = r#"{
            "roomDimensions": { "width": 10, "height": 5, "depth": 10 },
            "wallColors": { "front": 0, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0 }
        }"#;
        let err = deserialize(text).unwrap_err();
        assert!(matches!(err, LayoutError::Parse(ref msg) if msg.contains("furniture")));
    }

    #[test]
    fn test_deserialize_structural_errors() {
        let cases = [
            "not json",
            r#"{"roomDimensions": {"width": "wide", "height": 5, "depth": 10},
                "wallColors": {"front": 0, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0},
                "furniture": []}"#,
            r#"{"roomDimensions": {"width": 10, "height": 5, "depth": 10},
                "wallColors": {"front": 0, "back": 0, "left": 0, "right": 0, "top": 0},
                "furniture": []}"#,
            r#"{"roomDimensions": {"width": 10, "height": 5, "depth": 10},
                "wallColors": {"front": 0, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0},
                "furniture": [{"type": "cube", "position": [0, 0], "rotation": [0, 0, 0]}]}"#,
            r#"{"roomDimensions": {"width": 10, "height": 5, "depth": 10},
                "wallColors": {"front": -1, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0},
                "furniture": []}"#,
        ];
        for text in cases {
            assert!(
                matches!(deserialize(text), Err(LayoutError::Parse(_))),
                "expected parse error for {text}"
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_values() {
        let zero_width = r#"{"roomDimensions": {"width": 0, "height": 5, "depth": 10},
            "wallColors": {"front": 0, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0},
            "furniture": []}"#;
        assert!(matches!(deserialize(zero_width), Err(LayoutError::Parse(ref m)) if m.contains("width")));

        let big_color = r#"{"roomDimensions": {"width": 1, "height": 5, "depth": 10},
            "wallColors": {"front": 16777216, "back": 0, "left": 0, "right": 0, "top": 0, "bottom": 0},
            "furniture": []}"#;
        assert!(matches!(deserialize(big_color), Err(LayoutError::Parse(ref m)) if m.contains("front")));
    }
}
