//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Clearance kept between furniture and the walls
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    margin: Option<f64>,

    /// Directory for saved layouts
    #[arg(long, value_name = "DIR")]
    layouts_dir: Option<PathBuf>,

    /// Floor grid helper at session start (on or off)
    #[arg(long, value_name = "on|off")]
    grid: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    room: RoomOutput,
    placement: PlacementOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    layouts_dir: String,
}

#[derive(Serialize, Debug)]
struct RoomOutput {
    width: f64,
    height: f64,
    depth: f64,
    wall_color: String,
}

#[derive(Serialize, Debug)]
struct PlacementOutput {
    margin: f64,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    show_grid: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.margin.is_none() && self.layouts_dir.is_none() && self.grid.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --margin, --layouts-dir, or --grid",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(margin) = self.margin {
            config
                .set_margin(margin)
                .map_err(|e| CliError::validation(format!("Invalid margin: {e}")))?;
        }

        if let Some(path) = &self.layouts_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create layouts directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.layouts_dir = Some(path.clone());
        }

        if let Some(grid) = &self.grid {
            config.ui.show_grid = parse_toggle(grid)?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn parse_toggle(value: &str) -> CliResult<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CliError::validation(format!(
            "Invalid grid setting '{value}'. Must be 'on' or 'off'"
        ))),
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
    let layouts_dir = config
        .layouts_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve layouts directory: {e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            layouts_dir: layouts_dir.to_string_lossy().to_string(),
        },
        room: RoomOutput {
            width: config.room.width,
            height: config.room.height,
            depth: config.room.depth,
            wall_color: config.room.wall_color.clone(),
        },
        placement: PlacementOutput {
            margin: config.placement.margin,
        },
        ui: UiOutput {
            show_grid: config.ui.show_grid,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("File: {}", output.config_file);
    println!();

    println!("Paths:");
    println!("  Layouts Directory: {}", output.paths.layouts_dir);
    println!();

    println!("Room:");
    println!(
        "  Default Size: {} x {} x {}",
        output.room.width, output.room.height, output.room.depth
    );
    println!("  Wall Color: {}", output.room.wall_color);
    println!();

    println!("Placement:");
    println!("  Margin: {}", output.placement.margin);
    println!();

    println!("UI:");
    println!(
        "  Grid: {}",
        if output.ui.show_grid { "on" } else { "off" }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_toggle_parsing() {
        assert!(parse_toggle("on").unwrap());
        assert!(parse_toggle("ON").unwrap());
        assert!(!parse_toggle("off").unwrap());
        assert!(parse_toggle("maybe").is_err());
    }
}
