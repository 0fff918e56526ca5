//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::{Layout, RgbColor, RoomDimensions, Wall};
use crate::services::placement::DEFAULT_MARGIN;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding saved layout slots. Defaults to `<config dir>/layouts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts_dir: Option<PathBuf>,
}

/// Settings for newly created rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Default room width
    pub width: f64,
    /// Default room height
    pub height: f64,
    /// Default room depth
    pub depth: f64,
    /// Default wall color as #RRGGBB
    pub wall_color: String,
}

impl Default for RoomConfig {
    fn default() -> Self {
        let dims = RoomDimensions::default();
        Self {
            width: dims.width,
            height: dims.height,
            depth: dims.depth,
            wall_color: RgbColor::default().to_hex(),
        }
    }
}

impl RoomConfig {
    /// Default room size as validated dimensions.
    pub fn dimensions(&self) -> Result<RoomDimensions> {
        RoomDimensions::new(self.width, self.height, self.depth)
            .context("Invalid default room dimensions in [room]")
    }

    /// Default wall color.
    pub fn wall_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.wall_color).context("Invalid wall_color in [room]")
    }
}

/// Furniture placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Clearance kept between furniture and the walls, in room units
    #[serde(default = "default_margin")]
    pub margin: f64,
}

/// Default wall clearance
fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the floor grid helper when a session starts
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
}

/// Grid helper is on by default
fn default_show_grid() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_grid: default_show_grid(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/RoomPlanner/config.toml`
/// - macOS: `~/Library/Application Support/RoomPlanner/config.toml`
/// - Windows: `%APPDATA%\RoomPlanner\config.toml`
///
/// The `ROOMPLANNER_CONFIG_DIR` environment variable overrides the directory.
///
/// # Validation
///
/// - default room dimensions must be positive
/// - `wall_color` must be `#RRGGBB`
/// - margin must be a finite number >= 0
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// New room defaults
    #[serde(default)]
    pub room: RoomConfig,
    /// Placement settings
    #[serde(default)]
    pub placement: PlacementConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - `$ROOMPLANNER_CONFIG_DIR` if set
    /// - Linux: `~/.config/RoomPlanner/`
    /// - macOS: `~/Library/Application Support/RoomPlanner/`
    /// - Windows: `%APPDATA%\RoomPlanner\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory for saved layouts: the configured one, or
    /// `<config dir>/layouts`.
    pub fn layouts_dir(&self) -> Result<PathBuf> {
        match &self.paths.layouts_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("layouts")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - default room dimensions are positive
    /// - default wall color is valid hex
    /// - margin is finite and not negative
    pub fn validate(&self) -> Result<()> {
        self.room.dimensions()?;
        self.room.wall_color()?;

        let margin = self.placement.margin;
        if !margin.is_finite() || margin < 0.0 {
            anyhow::bail!("Placement margin must be a number >= 0, got {margin}");
        }

        Ok(())
    }

    /// Sets the placement margin with validation.
    pub fn set_margin(&mut self, margin: f64) -> Result<()> {
        let previous = self.placement.margin;
        self.placement.margin = margin;
        if let Err(e) = self.validate() {
            self.placement.margin = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Empty layout built from the `[room]` defaults and placement margin.
    pub fn new_layout(&self) -> Result<Layout> {
        let mut layout = Layout::with_dimensions(self.room.dimensions()?)
            .with_margin(self.placement.margin);
        let color = self.room.wall_color()?;
        for wall in Wall::ALL {
            layout.set_wall_color(wall, color);
        }
        Ok(layout)
    }
}
