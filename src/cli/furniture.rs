//! Furniture commands for the saved layout.
//!
//! Items are addressed by their 1-based position in `furniture list`.
//! Ids are regenerated on every load, so they cannot be used across
//! invocations.

use crate::cli::common::{item_index, CliContext, CliError, CliResult};
use crate::cli::room::print_furniture;
use crate::models::{FurnitureKind, RotateOutcome, Vec3};
use clap::{Args, Subcommand};

/// Add, remove, rotate and move furniture
#[derive(Debug, Clone, Args)]
pub struct FurnitureArgs {
    /// Furniture subcommand
    #[command(subcommand)]
    pub command: FurnitureCommand,
}

/// Furniture subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum FurnitureCommand {
    /// List furniture in the layout
    List(ListFurnitureArgs),
    /// Add an item at a random spot in the room
    Add(AddFurnitureArgs),
    /// Remove an item
    Remove(RemoveFurnitureArgs),
    /// Select an item and turn it about the vertical axis
    Rotate(RotateFurnitureArgs),
    /// Move an item on the floor
    Move(MoveFurnitureArgs),
}

/// List furniture in the layout
#[derive(Debug, Clone, Args)]
pub struct ListFurnitureArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an item at a random spot in the room
#[derive(Debug, Clone, Args)]
pub struct AddFurnitureArgs {
    /// chair, table, bed, sofa, bookshelf, cube, sphere or cylinder
    #[arg(value_name = "KIND")]
    pub kind: String,
}

/// Remove an item
#[derive(Debug, Clone, Args)]
pub struct RemoveFurnitureArgs {
    /// Item number from `furniture list`
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Select an item and turn it about the vertical axis
#[derive(Debug, Clone, Args)]
pub struct RotateFurnitureArgs {
    /// Item number from `furniture list`
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Angle to add, in degrees
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub degrees: f64,
}

/// Move an item on the floor
#[derive(Debug, Clone, Args)]
pub struct MoveFurnitureArgs {
    /// Item number from `furniture list`
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Target x
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub x: f64,

    /// Target z
    #[arg(long, value_name = "Z", allow_negative_numbers = true)]
    pub z: f64,
}

impl FurnitureArgs {
    /// Execute the furniture command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            FurnitureCommand::List(args) => args.execute(ctx),
            FurnitureCommand::Add(args) => args.execute(ctx),
            FurnitureCommand::Remove(args) => args.execute(ctx),
            FurnitureCommand::Rotate(args) => args.execute(ctx),
            FurnitureCommand::Move(args) => args.execute(ctx),
        }
    }
}

impl ListFurnitureArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let store = ctx.store(&config)?;
        let layout = ctx.load_layout(&config, &store)?;
        print_furniture(&layout, self.json)
    }
}

impl AddFurnitureArgs {
    /// Execute the add command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let kind = FurnitureKind::from(self.kind.clone());
        if kind.as_str().is_empty() {
            return Err(CliError::validation("Furniture kind cannot be empty"));
        }

        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        if !kind.is_supported() {
            eprintln!("Warning: unknown furniture kind '{kind}', it will be drawn as a cube.");
        }

        let id = layout.add_furniture(kind.clone());
        let position = layout.get(id).map_or(Vec3::ZERO, |item| item.position);
        ctx.save_layout(&mut store, &layout)?;

        println!("Added {kind} #{} at {position}.", layout.len());
        Ok(())
    }
}

impl RemoveFurnitureArgs {
    /// Execute the remove command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        let index = item_index(self.index, layout.len())?;
        let id = layout
            .id_at(index)
            .ok_or_else(|| CliError::validation(format!("No furniture item #{}", self.index)))?;
        let removed = layout.remove_furniture(id)?;
        ctx.save_layout(&mut store, &layout)?;

        println!("Removed {} #{}.", removed.kind, self.index);
        Ok(())
    }
}

impl RotateFurnitureArgs {
    /// Execute the rotate command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if !self.degrees.is_finite() {
            return Err(CliError::validation("--degrees must be a finite number"));
        }

        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        let index = item_index(self.index, layout.len())?;
        let id = layout
            .id_at(index)
            .ok_or_else(|| CliError::validation(format!("No furniture item #{}", self.index)))?;

        layout.select_furniture(Some(id));
        let RotateOutcome::Rotated { .. } = layout.rotate_furniture(id, self.degrees.to_radians())?
        else {
            return Err(CliError::validation(format!(
                "Item #{} could not be selected",
                self.index
            )));
        };
        ctx.save_layout(&mut store, &layout)?;

        let yaw = layout.get(id).map_or(0.0, |item| item.yaw_degrees());
        println!("Rotated #{} to {yaw:.1}°.", self.index);
        Ok(())
    }
}

impl MoveFurnitureArgs {
    /// Execute the move command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if !self.x.is_finite() || !self.z.is_finite() {
            return Err(CliError::validation("--x and --z must be finite numbers"));
        }

        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        let index = item_index(self.index, layout.len())?;
        let id = layout
            .id_at(index)
            .ok_or_else(|| CliError::validation(format!("No furniture item #{}", self.index)))?;
        let y = layout.get(id).map_or(0.0, |item| item.position.y);

        let applied = layout.move_furniture(id, Vec3::new(self.x, y, self.z))?;
        ctx.save_layout(&mut store, &layout)?;

        if (applied.x - self.x).abs() > f64::EPSILON || (applied.z - self.z).abs() > f64::EPSILON {
            println!("Moved #{} to {applied} (kept inside the room).", self.index);
        } else {
            println!("Moved #{} to {applied}.", self.index);
        }
        Ok(())
    }
}
