//! Interactive editing session.
//!
//! A [`Session`] owns one live [`Layout`] plus the store and slot it saves
//! to. Text commands are parsed into [`Command`] values and applied with
//! [`Session::execute`], which answers with a [`Notice`] for the caller to
//! show. Nothing here prints.

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::models::{FurnitureId, FurnitureKind, Layout, RgbColor, RoomDimensions, RotateOutcome, Vec3, Wall};
use crate::parser::layout_json;
use crate::services::placement;
use crate::services::store::LayoutStore;
use crate::services::LayoutService;

/// One editing command.
///
/// Furniture is addressed by 1-based position in the furniture list, the
/// same numbering `list` prints.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <kind>`
    Add(FurnitureKind),
    /// `remove <n>`
    Remove(usize),
    /// `select <n>`
    Select(usize),
    /// `deselect`
    Deselect,
    /// `rotate <degrees>`: turns the selected item
    Rotate(f64),
    /// `move <n> <x> <z>`
    Move {
        /// Item position in the list
        index: usize,
        /// Target x
        x: f64,
        /// Target z
        z: f64,
    },
    /// `scale <n> <s>`: uniform scale
    Scale {
        /// Item position in the list
        index: usize,
        /// Scale factor for all three axes
        factor: f64,
    },
    /// `resize <w> <h> <d>`
    Resize(RoomDimensions),
    /// `wall <wall> <color>`, where color may be `random`
    Wall(Wall, RgbColor),
    /// `grid`: toggles the floor grid helper
    Grid,
    /// `save`
    Save,
    /// `load`
    Load,
    /// `list`
    List,
    /// `show`
    Show,
}

impl Command {
    /// Usage line for every command, in help order.
    pub const USAGE: &'static [&'static str] = &[
        "add <kind>",
        "remove <n>",
        "select <n>",
        "deselect",
        "rotate <degrees>",
        "move <n> <x> <z>",
        "scale <n> <factor>",
        "resize <width> <height> <depth>",
        "wall <front|back|left|right|top|bottom> <#RRGGBB|random>",
        "grid",
        "save",
        "load",
        "list",
        "show",
    ];
}

fn parse_number(word: &str, what: &str) -> Result<f64> {
    let value: f64 = word
        .parse()
        .with_context(|| format!("Expected a number for {what}, got '{word}'"))?;
    if !value.is_finite() {
        anyhow::bail!("{what} must be a finite number, got '{word}'");
    }
    Ok(value)
}

fn parse_index(word: &str) -> Result<usize> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => anyhow::bail!("Expected an item number (1, 2, ...), got '{word}'"),
    }
}

fn expect_args<'a>(name: &str, args: &'a [&'a str], count: usize) -> Result<&'a [&'a str]> {
    if args.len() != count {
        anyhow::bail!(
            "'{name}' takes {count} argument{}, got {}",
            if count == 1 { "" } else { "s" },
            args.len()
        );
    }
    Ok(args)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            anyhow::bail!("Empty command");
        };
        let name = name.to_ascii_lowercase();

        let command = match name.as_str() {
            "add" => {
                let args = expect_args(&name, args, 1)?;
                Self::Add(FurnitureKind::from(args[0].to_string()))
            }
            "remove" => Self::Remove(parse_index(expect_args(&name, args, 1)?[0])?),
            "select" => Self::Select(parse_index(expect_args(&name, args, 1)?[0])?),
            "deselect" => {
                expect_args(&name, args, 0)?;
                Self::Deselect
            }
            "rotate" => Self::Rotate(parse_number(expect_args(&name, args, 1)?[0], "degrees")?),
            "move" => {
                let args = expect_args(&name, args, 3)?;
                Self::Move {
                    index: parse_index(args[0])?,
                    x: parse_number(args[1], "x")?,
                    z: parse_number(args[2], "z")?,
                }
            }
            "scale" => {
                let args = expect_args(&name, args, 2)?;
                Self::Scale {
                    index: parse_index(args[0])?,
                    factor: parse_number(args[1], "scale")?,
                }
            }
            "resize" => {
                let args = expect_args(&name, args, 3)?;
                let dims = RoomDimensions::new(
                    parse_number(args[0], "width")?,
                    parse_number(args[1], "height")?,
                    parse_number(args[2], "depth")?,
                )?;
                Self::Resize(dims)
            }
            "wall" => {
                let args = expect_args(&name, args, 2)?;
                let color = if args[1].eq_ignore_ascii_case("random") {
                    RgbColor::random(&mut rand::thread_rng())
                } else {
                    RgbColor::from_hex(args[1])?
                };
                Self::Wall(args[0].parse()?, color)
            }
            "grid" | "save" | "load" | "list" | "show" => {
                expect_args(&name, args, 0)?;
                match name.as_str() {
                    "grid" => Self::Grid,
                    "save" => Self::Save,
                    "load" => Self::Load,
                    "list" => Self::List,
                    _ => Self::Show,
                }
            }
            other => anyhow::bail!("Unknown command '{other}' (try 'help')"),
        };

        Ok(command)
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The command did what was asked
    Info,
    /// The command was accepted but changed nothing
    Warning,
}

/// Message produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text for the user
    pub message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Live layout bound to a storage slot.
pub struct Session<S: LayoutStore> {
    layout: Layout,
    store: S,
    slot: String,
    show_grid: bool,
}

impl<S: LayoutStore> Session<S> {
    /// Starts a session on `layout`, saving to `slot` in `store`.
    pub fn new(layout: Layout, store: S, slot: impl Into<String>) -> Self {
        Self {
            layout,
            store,
            slot: slot.into(),
            show_grid: true,
        }
    }

    /// Sets the initial grid helper state.
    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// The live layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Slot this session saves to.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Whether the floor grid helper is on.
    #[must_use]
    pub const fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Parses and runs one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Notice> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    fn id_for(&self, index: usize) -> Result<FurnitureId> {
        index
            .checked_sub(1)
            .and_then(|i| self.layout.id_at(i))
            .with_context(|| {
                format!(
                    "No item #{index} (layout has {} item{})",
                    self.layout.len(),
                    if self.layout.len() == 1 { "" } else { "s" }
                )
            })
    }

    /// Applies a command to the live layout.
    ///
    /// # Errors
    ///
    /// Unknown item numbers, invalid values and storage failures are
    /// returned as errors. The layout is unchanged when an error is
    /// returned.
    pub fn execute(&mut self, command: Command) -> Result<Notice> {
        tracing::debug!(?command, "executing");

        match command {
            Command::Add(kind) => {
                let supported = kind.is_supported();
                let id = self.layout.add_furniture(kind.clone());
                let position = self.layout.get(id).map(|i| i.position).unwrap_or(Vec3::ZERO);
                let number = self.layout.len();
                if supported {
                    Ok(Notice::info(format!("Added {kind} #{number} at {position}")))
                } else {
                    Ok(Notice::warning(format!(
                        "Added '{kind}' #{number} at {position} (unknown type, drawn as a cube)"
                    )))
                }
            }
            Command::Remove(index) => {
                let item = self.layout.remove_furniture(self.id_for(index)?)?;
                Ok(Notice::info(format!("Removed {} #{index}", item.kind)))
            }
            Command::Select(index) => {
                let id = self.id_for(index)?;
                self.layout.select_furniture(Some(id));
                let kind = self.layout.get(id).map(|i| i.kind.to_string()).unwrap_or_default();
                Ok(Notice::info(format!("Selected {kind} #{index}")))
            }
            Command::Deselect => {
                if self.layout.selected_id().is_none() {
                    return Ok(Notice::warning("Nothing was selected"));
                }
                self.layout.select_furniture(None);
                Ok(Notice::info("Selection cleared"))
            }
            Command::Rotate(degrees) => match self.layout.rotate_selected(degrees.to_radians())? {
                RotateOutcome::Rotated { yaw } => Ok(Notice::info(format!(
                    "Rotated to {:.1}°",
                    yaw.to_degrees().rem_euclid(360.0)
                ))),
                RotateOutcome::NotSelected | RotateOutcome::NothingSelected => {
                    Ok(Notice::warning("Select an item before rotating"))
                }
            },
            Command::Move { index, x, z } => {
                let id = self.id_for(index)?;
                let y = self.layout.get(id).map_or(0.0, |i| i.position.y);
                let requested = Vec3::new(x, y, z);
                let inside =
                    placement::is_within_room(requested, self.layout.dimensions(), self.layout.margin());
                let applied = self.layout.move_furniture(id, requested)?;
                if !inside {
                    Ok(Notice::warning(format!("Moved #{index} to {applied} (kept inside the room)")))
                } else {
                    Ok(Notice::info(format!("Moved #{index} to {applied}")))
                }
            }
            Command::Scale { index, factor } => {
                let id = self.id_for(index)?;
                self.layout
                    .scale_furniture(id, Vec3::new(factor, factor, factor))?;
                Ok(Notice::info(format!("Scaled #{index} by {factor}")))
            }
            Command::Resize(dims) => {
                self.layout.resize_room(dims)?;
                Ok(Notice::info(format!("Room resized to {dims}")))
            }
            Command::Wall(wall, color) => {
                self.layout.set_wall_color(wall, color);
                Ok(Notice::info(format!("Painted {wall} wall {color}")))
            }
            Command::Grid => {
                self.show_grid = !self.show_grid;
                Ok(Notice::info(if self.show_grid {
                    "Grid on"
                } else {
                    "Grid off"
                }))
            }
            Command::Save => {
                LayoutService::save(&mut self.store, &self.slot, &self.layout)?;
                Ok(Notice::info(format!(
                    "Saved {} item(s) to '{}'",
                    self.layout.len(),
                    self.slot
                )))
            }
            Command::Load => self.load(),
            Command::List => Ok(Notice::info(self.describe_furniture())),
            Command::Show => Ok(Notice::info(self.describe_room())),
        }
    }

    /// Reloads the slot into the live layout.
    ///
    /// The saved text is fully decoded before anything is swapped, so a
    /// corrupt slot leaves the live layout untouched.
    fn load(&mut self) -> Result<Notice> {
        let Some(text) = self.store.load(&self.slot)? else {
            return Ok(Notice::warning(format!("Nothing saved in '{}'", self.slot)));
        };

        let loaded = match layout_json::deserialize(&text) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(slot = %self.slot, error = %e, "keeping live layout");
                return Err(e).with_context(|| format!("Could not load '{}'", self.slot));
            }
        };

        self.layout.replace_with(loaded);
        tracing::debug!(slot = %self.slot, items = self.layout.len(), "swapped in saved layout");
        Ok(Notice::info(format!(
            "Loaded {} item(s) from '{}'",
            self.layout.len(),
            self.slot
        )))
    }

    /// One line per furniture item, numbered from 1.
    #[must_use]
    pub fn describe_furniture(&self) -> String {
        if self.layout.is_empty() {
            return "No furniture".to_string();
        }

        self.layout
            .furniture()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if self.layout.is_selected(item.id) { '*' } else { ' ' };
                format!(
                    "{marker}{:>3}. {:<10} at {}  yaw {:.1}°",
                    i + 1,
                    item.kind.as_str(),
                    item.position,
                    item.yaw_degrees()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Room size, wall colors and grid state.
    #[must_use]
    pub fn describe_room(&self) -> String {
        let mut lines = vec![format!("Room {}", self.layout.dimensions())];
        for (wall, color) in self.layout.wall_colors().iter() {
            lines.push(format!("  {:<6} {color}", wall.as_str()));
        }
        lines.push(format!("Furniture: {}", self.layout.len()));
        lines.push(format!("Grid: {}", if self.show_grid { "on" } else { "off" }));
        lines.join("\n")
    }
}
