//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and environment overrides.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Room Planner";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "roomplanner";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "RoomPlanner";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ROOMPLANNER_CONFIG_DIR";
