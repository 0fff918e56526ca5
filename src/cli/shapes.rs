//! Print the primitive blueprint for a furniture kind.

use crate::cli::common::{print_json, CliResult};
use crate::models::{blueprint_bounds, Bounds, FurnitureKind, Primitive, ShapePart};
use clap::Args;
use serde::Serialize;

/// Show the primitives a furniture kind is built from
#[derive(Debug, Clone, Args)]
pub struct ShapesArgs {
    /// Furniture kind (unknown kinds show the fallback cube)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShapesResponse {
    kind: String,
    supported: bool,
    resting_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
    parts: Vec<ShapePart>,
}

impl ShapesArgs {
    /// Execute the shapes command
    pub fn execute(&self) -> CliResult<()> {
        let kind = FurnitureKind::from(self.kind.clone());
        let parts = kind.blueprint();
        let response = ShapesResponse {
            kind: kind.to_string(),
            supported: kind.is_supported(),
            resting_height: kind.resting_height(),
            bounds: blueprint_bounds(&parts),
            parts,
        };

        if self.json {
            return print_json(&response);
        }

        if response.supported {
            println!("{} ({} parts):", response.kind, response.parts.len());
        } else {
            println!("{} (unknown kind, drawn as a cube):", response.kind);
        }
        for part in &response.parts {
            println!(
                "  {:<28} at {}  {:?}",
                describe(&part.primitive),
                part.offset,
                part.tint
            );
        }
        if let Some(bounds) = response.bounds {
            println!();
            println!("Size: {}", bounds.size());
        }
        println!("Resting height: {:.2}", response.resting_height);
        Ok(())
    }
}

fn describe(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Box {
            width,
            height,
            depth,
        } => format!("box {width:.2} x {height:.2} x {depth:.2}"),
        Primitive::Sphere { radius } => format!("sphere r={radius:.2}"),
        Primitive::Cylinder { radius, height } => {
            format!("cylinder r={radius:.2} h={height:.2}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_primitives() {
        assert_eq!(
            describe(&Primitive::Box {
                width: 1.0,
                height: 0.5,
                depth: 2.0
            }),
            "box 1.00 x 0.50 x 2.00"
        );
        assert_eq!(describe(&Primitive::Sphere { radius: 0.5 }), "sphere r=0.50");
    }
}
