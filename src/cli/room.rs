//! Room commands: create, inspect and resize the saved layout.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::{Layout, RoomDimensions};
use crate::services::store::LayoutStore;
use clap::Args;
use serde::Serialize;

/// Create a new empty layout in the slot
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Room width (defaults to the configured width)
    #[arg(long, value_name = "W", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Room height (defaults to the configured height)
    #[arg(long, value_name = "H", allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Room depth (defaults to the configured depth)
    #[arg(long, value_name = "D", allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Overwrite an existing layout in the slot
    #[arg(long)]
    pub force: bool,
}

/// Show the room, its walls and furniture
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Change the room size, pulling furniture back inside
#[derive(Debug, Clone, Args)]
pub struct ResizeArgs {
    /// New width
    #[arg(long, value_name = "W", allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// New height
    #[arg(long, value_name = "H", allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// New depth
    #[arg(long, value_name = "D", allow_negative_numbers = true)]
    pub depth: Option<f64>,
}

// JSON response types
#[derive(Debug, Serialize)]
struct WallOutput {
    wall: &'static str,
    color: String,
}

#[derive(Debug, Serialize)]
struct ItemOutput {
    index: usize,
    #[serde(rename = "type")]
    kind: String,
    supported: bool,
    position: [f64; 3],
    yaw_degrees: f64,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    slot: String,
    dimensions: RoomDimensions,
    walls: Vec<WallOutput>,
    furniture: Vec<ItemOutput>,
    count: usize,
}

/// Wall list in [`crate::models::Wall::ALL`] order.
fn wall_outputs(layout: &Layout) -> Vec<WallOutput> {
    layout
        .wall_colors()
        .iter()
        .map(|(wall, color)| WallOutput {
            wall: wall.as_str(),
            color: color.to_hex(),
        })
        .collect()
}

fn item_outputs(layout: &Layout) -> Vec<ItemOutput> {
    layout
        .furniture()
        .iter()
        .enumerate()
        .map(|(i, item)| ItemOutput {
            index: i + 1,
            kind: item.kind.to_string(),
            supported: item.kind.is_supported(),
            position: item.position.to_array(),
            yaw_degrees: item.yaw_degrees(),
        })
        .collect()
}

/// Prints the numbered furniture list, either as JSON or a table.
pub(crate) fn print_furniture(layout: &Layout, json: bool) -> CliResult<()> {
    let items = item_outputs(layout);
    if json {
        #[derive(Serialize)]
        struct ListResponse {
            furniture: Vec<ItemOutput>,
            count: usize,
        }
        return print_json(&ListResponse {
            count: items.len(),
            furniture: items,
        });
    }

    if items.is_empty() {
        println!("No furniture.");
        return Ok(());
    }

    println!("Furniture ({}):", items.len());
    println!();
    for item in items {
        let [x, y, z] = item.position;
        let note = if item.supported { "" } else { "  (drawn as cube)" };
        println!(
            "  {:>3}. {:<12} ({x:.2}, {y:.2}, {z:.2})  yaw {:.1}°{note}",
            item.index, item.kind, item.yaw_degrees
        );
    }
    Ok(())
}

/// Prints the wall colors, either as JSON or a table.
pub(crate) fn print_walls(layout: &Layout, json: bool) -> CliResult<()> {
    let walls = wall_outputs(layout);
    if json {
        #[derive(Serialize)]
        struct WallsResponse {
            walls: Vec<WallOutput>,
        }
        return print_json(&WallsResponse { walls });
    }

    for wall in walls {
        println!("  {:<8} {}", wall.wall, wall.color);
    }
    Ok(())
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;

        let exists = store
            .load(ctx.slot())
            .map_err(|e| CliError::io(format!("Failed to read slot: {e:#}")))?
            .is_some();
        if exists && !self.force {
            return Err(CliError::validation(format!(
                "Slot '{}' already holds a layout. Use --force to replace it.",
                ctx.slot()
            )));
        }

        let defaults = &config.room;
        let dimensions = RoomDimensions::new(
            self.width.unwrap_or(defaults.width),
            self.height.unwrap_or(defaults.height),
            self.depth.unwrap_or(defaults.depth),
        )?;

        let mut layout = config
            .new_layout()
            .map_err(|e| CliError::validation(format!("Invalid room defaults: {e:#}")))?;
        layout.resize_room(dimensions)?;

        ctx.save_layout(&mut store, &layout)?;
        println!("Created {dimensions} room in slot '{}'.", ctx.slot());
        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let store = ctx.store(&config)?;
        let layout = ctx.load_layout(&config, &store)?;

        if self.json {
            let furniture = item_outputs(&layout);
            return print_json(&ShowResponse {
                slot: ctx.slot().to_string(),
                dimensions: *layout.dimensions(),
                walls: wall_outputs(&layout),
                count: furniture.len(),
                furniture,
            });
        }

        println!("Room '{}': {}", ctx.slot(), layout.dimensions());
        println!();
        println!("Walls:");
        print_walls(&layout, false)?;
        println!();
        print_furniture(&layout, false)
    }
}

impl ResizeArgs {
    /// Execute the resize command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if self.width.is_none() && self.height.is_none() && self.depth.is_none() {
            return Err(CliError::validation(
                "At least one of --width, --height or --depth must be specified",
            ));
        }

        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        let current = *layout.dimensions();
        let dimensions = RoomDimensions {
            width: self.width.unwrap_or(current.width),
            height: self.height.unwrap_or(current.height),
            depth: self.depth.unwrap_or(current.depth),
        };
        layout.resize_room(dimensions)?;

        ctx.save_layout(&mut store, &layout)?;
        println!("Room resized to {dimensions}.");
        Ok(())
    }
}
