//! Wall color commands.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::cli::room::print_walls;
use crate::models::{RgbColor, Wall};
use clap::{Args, Subcommand};
use regex::Regex;

/// Inspect and paint the room's walls
#[derive(Debug, Clone, Args)]
pub struct WallArgs {
    /// Wall subcommand
    #[command(subcommand)]
    pub command: WallCommand,
}

/// Wall subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum WallCommand {
    /// List the color of every wall
    List(ListWallsArgs),
    /// Paint one wall
    Set(SetWallArgs),
}

/// List the color of every wall
#[derive(Debug, Clone, Args)]
pub struct ListWallsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Paint one wall
#[derive(Debug, Clone, Args)]
pub struct SetWallArgs {
    /// front, back, left, right, top or bottom
    #[arg(value_name = "WALL")]
    pub wall: String,

    /// Color as #RRGGBB, #RGB, a decimal 24-bit integer, or `random`
    #[arg(value_name = "COLOR")]
    pub color: String,
}

impl WallArgs {
    /// Execute the wall command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            WallCommand::List(args) => args.execute(ctx),
            WallCommand::Set(args) => args.execute(ctx),
        }
    }
}

impl ListWallsArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let store = ctx.store(&config)?;
        let layout = ctx.load_layout(&config, &store)?;

        if !self.json {
            println!("Walls:");
        }
        print_walls(&layout, self.json)
    }
}

impl SetWallArgs {
    /// Execute the set command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let wall: Wall = self.wall.parse()?;
        let color = parse_color(&self.color).map_err(CliError::validation)?;

        let config = ctx.config()?;
        let mut store = ctx.store(&config)?;
        let mut layout = ctx.load_layout(&config, &store)?;

        layout.set_wall_color(wall, color);
        ctx.save_layout(&mut store, &layout)?;

        println!("Painted {wall} wall {color}.");
        Ok(())
    }
}

/// Parses `#RRGGBB`, `#RGB`, a decimal packed 24-bit color or `random`.
fn parse_color(text: &str) -> Result<RgbColor, String> {
    let text = text.trim();

    if text.eq_ignore_ascii_case("random") {
        return Ok(RgbColor::random(&mut rand::thread_rng()));
    }

    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        let value: u32 = text
            .parse()
            .map_err(|_| format!("Color value '{text}' is out of range"))?;
        return RgbColor::from_u24(value).map_err(|e| e.to_string());
    }

    // Match #RRGGBB or #RGB format
    let hex_regex = Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$")
        .map_err(|_| "Failed to create hex regex".to_string())?;

    if !hex_regex.is_match(text) {
        return Err(format!(
            "Invalid color: '{text}'. Expected #RRGGBB, #RGB, a decimal value or 'random'"
        ));
    }

    // Expand short hex format (#RGB -> #RRGGBB)
    let expanded = if text.len() == 4 {
        text[1..].chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        text[1..].to_string()
    };

    RgbColor::from_hex(&expanded).map_err(|e| format!("Failed to parse color: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_long_hex() {
        assert_eq!(parse_color("#FF8000").unwrap(), RgbColor::new(255, 128, 0));
    }

    #[test]
    fn test_parse_color_short_hex() {
        assert_eq!(parse_color("#F0a").unwrap(), RgbColor::new(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_parse_color_decimal() {
        assert_eq!(parse_color("13421772").unwrap(), RgbColor::default());
        assert_eq!(parse_color("0").unwrap(), RgbColor::new(0, 0, 0));
        assert!(parse_color("16777216").is_err());
        assert!(parse_color("99999999999").is_err());
    }

    #[test]
    fn test_parse_color_random() {
        assert!(parse_color("random").is_ok());
        assert!(parse_color("RANDOM").is_ok());
    }

    #[test]
    fn test_parse_color_invalid() {
        assert!(parse_color("FF0000").is_err());
        assert!(parse_color("#FF00").is_err());
        assert!(parse_color("#GG0000").is_err());
        assert!(parse_color("red").is_err());
        assert!(parse_color("").is_err());
    }
}
