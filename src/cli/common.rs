//! Shared CLI plumbing: error type, exit codes and slot resolution.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::LayoutError;
use crate::models::Layout;
use crate::services::store::{validate_key, FileStore};
use crate::services::{LayoutService, DEFAULT_SLOT};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input, invalid layout, or a rejected edit
    ValidationError = 1,
    /// File system failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error category, which decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Exit code 1
    Validation,
    /// Exit code 2
    Io,
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Category
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation or usage error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// File system error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Classifies an error from the service layer: a rejected layout is a
    /// validation error, anything else came from storage.
    pub fn from_service(context: &str, error: &anyhow::Error) -> Self {
        let message = format!("{context}: {error:#}");
        if error.downcast_ref::<LayoutError>().is_some() {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LayoutError> for CliError {
    fn from(error: LayoutError) -> Self {
        Self::validation(error.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every command that touches a saved layout.
#[derive(Debug, Clone)]
pub struct CliContext {
    layouts_dir: Option<PathBuf>,
    slot: String,
}

impl CliContext {
    /// Resolves the global `--layouts-dir` and `--slot` options.
    pub fn new(layouts_dir: Option<PathBuf>, slot: Option<String>) -> CliResult<Self> {
        let slot = slot.unwrap_or_else(|| DEFAULT_SLOT.to_string());
        validate_key(&slot).map_err(|e| CliError::validation(e.to_string()))?;
        Ok(Self { layouts_dir, slot })
    }

    /// Selected slot key.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Loads the configuration file.
    pub fn config(&self) -> CliResult<Config> {
        Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
    }

    /// Store for the chosen layouts directory: `--layouts-dir`, else the
    /// configured one.
    pub fn store(&self, config: &Config) -> CliResult<FileStore> {
        let dir = match &self.layouts_dir {
            Some(dir) => dir.clone(),
            None => config
                .layouts_dir()
                .map_err(|e| CliError::io(format!("Failed to resolve layouts directory: {e:#}")))?,
        };
        tracing::debug!(dir = %dir.display(), slot = %self.slot, "using layout store");
        Ok(FileStore::new(dir))
    }

    /// Loads the slot, or a fresh layout from the config defaults if the
    /// slot is empty. The configured margin is applied either way.
    pub fn load_layout(&self, config: &Config, store: &FileStore) -> CliResult<Layout> {
        let saved = LayoutService::load(store, &self.slot)
            .map_err(|e| CliError::from_service("Failed to load layout", &e))?;

        match saved {
            Some(layout) => Ok(layout.with_margin(config.placement.margin)),
            None => config
                .new_layout()
                .map_err(|e| CliError::validation(format!("Invalid room defaults: {e:#}"))),
        }
    }

    /// Saves `layout` to the slot.
    pub fn save_layout(&self, store: &mut FileStore, layout: &Layout) -> CliResult<()> {
        LayoutService::save(store, &self.slot, layout)
            .map_err(|e| CliError::io(format!("Failed to save layout: {e:#}")))
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Converts a 1-based item number into a list index.
pub fn item_index(number: usize, len: usize) -> CliResult<usize> {
    if number == 0 || number > len {
        return Err(CliError::validation(format!(
            "No furniture item #{number} (layout has {len} item{})",
            if len == 1 { "" } else { "s" }
        )));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(CliError::io("x").exit_code().code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_layout_errors_are_validation() {
        let err = anyhow::Error::new(LayoutError::Parse("bad".to_string())).context("slot");
        assert_eq!(CliError::from_service("load", &err).kind, CliErrorKind::Validation);

        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(CliError::from_service("load", &err).kind, CliErrorKind::Io);
    }

    #[test]
    fn test_context_rejects_bad_slot() {
        assert!(CliContext::new(None, Some("../x".to_string())).is_err());
        let ctx = CliContext::new(None, None).unwrap();
        assert_eq!(ctx.slot(), DEFAULT_SLOT);
    }

    #[test]
    fn test_item_index() {
        assert_eq!(item_index(1, 3).unwrap(), 0);
        assert!(item_index(0, 3).is_err());
        assert!(item_index(4, 3).is_err());
    }
}
