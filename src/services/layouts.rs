//! Layout save/load service.
//!
//! This module joins the JSON codec to a [`LayoutStore`], giving one place
//! for error context and logging around persisted layouts.

use anyhow::{Context, Result};

use crate::models::Layout;
use crate::parser::layout_json;
use crate::services::store::LayoutStore;

/// Slot used when none is given.
pub const DEFAULT_SLOT: &str = "roomLayout";

/// Service for saving and loading layouts through a store.
pub struct LayoutService;

impl LayoutService {
    /// Loads and decodes the layout in `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Layout))` - Slot held a valid layout
    /// * `Ok(None)` - Slot is empty
    /// * `Err(...)` - Storage failure or malformed layout text
    ///
    /// # Examples
    ///
    /// ```
    /// use roomplanner::models::Layout;
    /// use roomplanner::services::{LayoutService, MemoryStore};
    ///
    /// let mut store = MemoryStore::new();
    /// LayoutService::save(&mut store, "den", &Layout::new())?;
    /// assert!(LayoutService::load(&store, "den")?.is_some());
    /// assert!(LayoutService::load(&store, "attic")?.is_none());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load<S: LayoutStore + ?Sized>(store: &S, key: &str) -> Result<Option<Layout>> {
        let Some(text) = store
            .load(key)
            .with_context(|| format!("Failed to read layout slot '{key}'"))?
        else {
            return Ok(None);
        };

        match layout_json::deserialize(&text) {
            Ok(layout) => {
                tracing::debug!(slot = key, items = layout.len(), "decoded layout");
                Ok(Some(layout))
            }
            Err(e) => {
                tracing::warn!(slot = key, error = %e, "rejected saved layout");
                Err(e).with_context(|| format!("Saved layout in slot '{key}' is invalid"))
            }
        }
    }

    /// Encodes `layout` and writes it to `key`.
    pub fn save<S: LayoutStore + ?Sized>(store: &mut S, key: &str, layout: &Layout) -> Result<()> {
        let text = layout_json::serialize(layout)
            .with_context(|| format!("Failed to encode layout for slot '{key}'"))?;
        store
            .save(key, &text)
            .with_context(|| format!("Failed to save layout to slot '{key}'"))?;
        tracing::info!(slot = key, items = layout.len(), "saved layout");
        Ok(())
    }
}
