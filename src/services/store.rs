//! String-keyed storage slots for saved layouts.
//!
//! A slot holds one serialized layout under a short key. [`FileStore`]
//! keeps each slot in `<dir>/<key>.json`; [`MemoryStore`] keeps them in a
//! map and backs tests and throwaway sessions.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Longest accepted slot key.
pub const MAX_KEY_LEN: usize = 64;

/// Backing storage for serialized layouts.
pub trait LayoutStore {
    /// Reads the text stored under `key`, or `None` if the slot is empty.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Writes `text` under `key`, replacing any previous content.
    fn save(&mut self, key: &str, text: &str) -> Result<()>;

    /// Empties a slot. Returns false if it was already empty.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// Keys of all non-empty slots, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Checks that a slot key is non-empty, at most [`MAX_KEY_LEN`] characters
/// and made of ASCII letters, digits, `-` and `_`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        anyhow::bail!("Slot key cannot be empty");
    }

    if key.len() > MAX_KEY_LEN {
        anyhow::bail!(
            "Slot key '{}' exceeds maximum length of {} characters (got {})",
            key,
            MAX_KEY_LEN,
            key.len()
        );
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!("Slot key '{key}' may only contain letters, digits, '-' and '_'");
    }

    Ok(())
}

/// Directory of `<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl LayoutStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            tracing::debug!(slot = key, path = %path.display(), "slot is empty");
            return Ok(None);
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read layout slot: {}", path.display()))?;
        tracing::debug!(slot = key, bytes = text.len(), "loaded slot");
        Ok(Some(text))
    }

    /// Writes via a temp file + rename so the slot is never left half
    /// written.
    fn save(&mut self, key: &str, text: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create layouts directory: {}", self.dir.display())
        })?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, text)
            .with_context(|| format!("Failed to write temp layout file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &path).with_context(|| {
            format!("Failed to rename temp layout file to: {}", path.display())
        })?;

        tracing::debug!(slot = key, bytes = text.len(), path = %path.display(), "saved slot");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove layout slot: {}", path.display()))?;
        tracing::debug!(slot = key, "removed slot");
        Ok(true)
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).with_context(|| {
            format!("Failed to read layouts directory: {}", self.dir.display())
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-memory slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, text: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.slots.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.slots.keys().cloned().collect())
    }
}
