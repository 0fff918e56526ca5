//! CLI command handlers for Room Planner.
//!
//! This module provides headless, scriptable access to the layout model:
//! each command loads the selected slot, applies one edit and saves it back.

pub mod common;
pub mod config;
pub mod furniture;
pub mod room;
pub mod session;
pub mod shapes;
pub mod wall;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliErrorKind, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use furniture::FurnitureArgs;
pub use room::{NewArgs, ResizeArgs, ShowArgs};
pub use session::SessionArgs;
pub use shapes::ShapesArgs;
pub use wall::WallArgs;
