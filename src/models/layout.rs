//! The room layout aggregate and its mutation operations.

use crate::error::{LayoutError, LayoutResult};
use crate::models::{FurnitureId, FurnitureItem, FurnitureKind, RgbColor, RoomDimensions, Vec3, Wall, WallColors};
use crate::services::placement::{self, DEFAULT_MARGIN};
use rand::Rng;

/// Result of a rotate request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotateOutcome {
    /// The item was rotated; carries the new yaw in radians.
    Rotated {
        /// Yaw after rotation
        yaw: f64,
    },
    /// The item exists but is not the selected one; nothing changed.
    NotSelected,
    /// No item is selected; nothing changed.
    NothingSelected,
}

/// Complete room layout: dimensions, wall colors, furniture and selection.
///
/// # Invariants
///
/// - Dimensions are always positive and finite
/// - After a resize, a margin change or [`Layout::replace_with`], every
///   furniture item lies horizontally inside the room less the margin
/// - At most one item is selected, and the selected id always refers to an
///   item in the list
///
/// Furniture order is insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    dimensions: RoomDimensions,
    wall_colors: WallColors,
    furniture: Vec<FurnitureItem>,
    selected: Option<FurnitureId>,
    margin: f64,
}

impl Layout {
    /// Creates an empty layout with the stock 10 x 5 x 10 room.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimensions(RoomDimensions::default())
    }

    /// Creates an empty layout with the given room size.
    #[must_use]
    pub fn with_dimensions(dimensions: RoomDimensions) -> Self {
        Self {
            dimensions,
            wall_colors: WallColors::default(),
            furniture: Vec::new(),
            selected: None,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Assembles a layout from already validated parts.
    ///
    /// Positions are taken as given; they are clamped once the layout is
    /// installed with [`Layout::replace_with`] or [`Layout::with_margin`].
    pub(crate) fn from_parts(
        dimensions: RoomDimensions,
        wall_colors: WallColors,
        furniture: Vec<FurnitureItem>,
    ) -> Self {
        Self {
            dimensions,
            wall_colors,
            furniture,
            selected: None,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Sets the wall clearance used for spawning and clamping.
    ///
    /// Negative or non-finite margins are treated as 0. Existing items are
    /// re-clamped.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        self.reclamp();
        self
    }

    /// Room size.
    #[must_use]
    pub const fn dimensions(&self) -> &RoomDimensions {
        &self.dimensions
    }

    /// Wall colors.
    #[must_use]
    pub const fn wall_colors(&self) -> &WallColors {
        &self.wall_colors
    }

    /// Furniture in insertion order.
    #[must_use]
    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    /// Wall clearance in room units.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.margin
    }

    /// Number of furniture items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.furniture.len()
    }

    /// True when the room has no furniture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.furniture.is_empty()
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: FurnitureId) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|item| item.id == id)
    }

    /// Position of an item in the furniture list.
    #[must_use]
    pub fn index_of(&self, id: FurnitureId) -> Option<usize> {
        self.furniture.iter().position(|item| item.id == id)
    }

    /// Id of the item at `index` (0-based).
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<FurnitureId> {
        self.furniture.get(index).map(|item| item.id)
    }

    fn get_mut(&mut self, id: FurnitureId) -> LayoutResult<&mut FurnitureItem> {
        self.furniture
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(LayoutError::NotFound(id))
    }

    /// Resizes the room and pulls every item back inside the new bounds.
    ///
    /// Items are only repositioned, never removed or rescaled.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimension`] if any field is not a
    /// positive number; the layout is left unchanged.
    pub fn resize_room(&mut self, dimensions: RoomDimensions) -> LayoutResult<()> {
        dimensions.validate()?;
        self.dimensions = dimensions;
        self.reclamp();
        Ok(())
    }

    fn reclamp(&mut self) {
        let (dimensions, margin) = (self.dimensions, self.margin);
        for item in &mut self.furniture {
            item.position = placement::clamp_to_room(item.position, &dimensions, margin);
        }
    }

    /// Paints one wall, leaving the other five untouched.
    pub fn set_wall_color(&mut self, wall: Wall, color: RgbColor) {
        self.wall_colors.set(wall, color);
    }

    /// Paints one wall identified by name.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidWallIdentifier`] for names other than
    /// front, back, left, right, top and bottom.
    pub fn set_wall_color_by_name(&mut self, wall: &str, color: RgbColor) -> LayoutResult<()> {
        let wall: Wall = wall.parse()?;
        self.set_wall_color(wall, color);
        Ok(())
    }

    /// Adds a new item at a random spawn position and returns its id.
    ///
    /// Unsupported kinds are accepted and drawn as a cube.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> FurnitureId {
        self.add_furniture_with_rng(kind, &mut rand::thread_rng())
    }

    /// [`Layout::add_furniture`] with a caller-supplied random source.
    pub fn add_furniture_with_rng<R: Rng + ?Sized>(
        &mut self,
        kind: FurnitureKind,
        rng: &mut R,
    ) -> FurnitureId {
        let position = placement::random_spawn_position(
            &self.dimensions,
            self.margin,
            kind.resting_height(),
            rng,
        );
        let item = FurnitureItem::new(kind, position);
        let id = item.id;
        self.furniture.push(item);
        id
    }

    /// Removes an item, clearing the selection if it was selected.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotFound`] if no item has this id; the
    /// furniture list is not modified.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> LayoutResult<FurnitureItem> {
        let index = self.index_of(id).ok_or(LayoutError::NotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.furniture.remove(index))
    }

    /// Removes every item and clears the selection.
    pub fn clear_furniture(&mut self) {
        self.furniture.clear();
        self.selected = None;
    }

    /// Selects one item, deselecting any other. `None` clears the selection.
    ///
    /// An id that is not in the layout also clears the selection. Returns
    /// true if an item ended up selected.
    pub fn select_furniture(&mut self, id: Option<FurnitureId>) -> bool {
        self.selected = id.filter(|id| self.get(*id).is_some());
        self.selected.is_some()
    }

    /// Id of the selected item.
    #[must_use]
    pub const fn selected_id(&self) -> Option<FurnitureId> {
        self.selected
    }

    /// The selected item.
    #[must_use]
    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.selected.and_then(|id| self.get(id))
    }

    /// True if `id` is the selected item.
    #[must_use]
    pub fn is_selected(&self, id: FurnitureId) -> bool {
        self.selected == Some(id)
    }

    /// Adds `delta_yaw` radians to an item's yaw, but only if it is the
    /// selected item.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonFinite`] if `delta_yaw` is NaN or infinite
    /// and [`LayoutError::NotFound`] if no item has this id.
    pub fn rotate_furniture(&mut self, id: FurnitureId, delta_yaw: f64) -> LayoutResult<RotateOutcome> {
        if !delta_yaw.is_finite() {
            return Err(LayoutError::NonFinite {
                field: "yaw",
                value: delta_yaw.to_string(),
            });
        }
        let selected = self.selected;
        let item = self.get_mut(id)?;

        match selected {
            None => Ok(RotateOutcome::NothingSelected),
            Some(selected) if selected != id => Ok(RotateOutcome::NotSelected),
            Some(_) => {
                item.rotation.y += delta_yaw;
                Ok(RotateOutcome::Rotated {
                    yaw: item.rotation.y,
                })
            }
        }
    }

    /// Rotates whichever item is selected.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonFinite`] if `delta_yaw` is NaN or infinite.
    pub fn rotate_selected(&mut self, delta_yaw: f64) -> LayoutResult<RotateOutcome> {
        match self.selected {
            Some(id) => self.rotate_furniture(id, delta_yaw),
            None => Ok(RotateOutcome::NothingSelected),
        }
    }

    /// Moves an item, clamping x and z into the room. Returns the position
    /// actually applied.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonFinite`] if any component of `position` is
    /// NaN or infinite and [`LayoutError::NotFound`] if no item has this id.
    pub fn move_furniture(&mut self, id: FurnitureId, position: Vec3) -> LayoutResult<Vec3> {
        if !position.is_finite() {
            return Err(LayoutError::NonFinite {
                field: "position",
                value: position.to_string(),
            });
        }
        let clamped = placement::clamp_to_room(position, &self.dimensions, self.margin);
        let item = self.get_mut(id)?;
        item.position = clamped;
        Ok(clamped)
    }

    /// Sets an item's scale.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidScale`] for non-positive or non-finite
    /// components and [`LayoutError::NotFound`] for unknown ids.
    pub fn scale_furniture(&mut self, id: FurnitureId, scale: Vec3) -> LayoutResult<()> {
        if !scale.is_finite() || scale.x <= 0.0 || scale.y <= 0.0 || scale.z <= 0.0 {
            return Err(LayoutError::InvalidScale(scale.to_string()));
        }
        self.get_mut(id)?.scale = scale;
        Ok(())
    }

    /// Replaces room, walls and furniture with those of `other`, keeping
    /// this layout's margin.
    ///
    /// Used after a successful load so a failed parse never touches the
    /// live layout.
    pub fn replace_with(&mut self, other: Self) {
        let margin = self.margin;
        *self = other.with_margin(margin);
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
