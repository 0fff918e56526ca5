//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use roomplanner::constants::CONFIG_DIR_ENV;
use roomplanner::models::{FurnitureKind, Layout, RgbColor, RoomDimensions, Vec3, Wall};
use roomplanner::parser::layout_json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the roomplanner binary (set by cargo at compile time)
pub fn roomplanner_bin() -> &'static str {
    env!("CARGO_BIN_EXE_roomplanner")
}

/// Saved layout text in the on-disk format: an 8 x 3 x 6 room with a sofa,
/// a chair and one unknown item.
pub const SAMPLE_LAYOUT_JSON: &str = r#"{
  "roomDimensions": { "width": 8.0, "height": 3.0, "depth": 6.0 },
  "wallColors": {
    "front": 16711680, "back": 65280, "left": 255,
    "right": 13421772, "top": 16777215, "bottom": 0
  },
  "furniture": [
    { "type": "sofa", "position": [1.0, 0.0, -1.0], "rotation": [0.0, 0.0, 0.0] },
    { "type": "chair", "position": [-2.0, 0.0, 1.5], "rotation": [0.0, 1.5707963267948966, 0.0] },
    { "type": "piano", "position": [0.0, 0.5, 0.0], "rotation": [0.0, 0.0, 0.0] }
  ]
}"#;

/// Isolated config and layouts directories for one test.
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    /// Creates empty config and layouts directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config dir");
        Self { temp_dir }
    }

    /// Creates an environment whose default slot holds [`SAMPLE_LAYOUT_JSON`].
    pub fn with_sample() -> Self {
        let env = Self::new();
        env.write_slot("roomLayout", SAMPLE_LAYOUT_JSON);
        env
    }

    /// Directory passed as `ROOMPLANNER_CONFIG_DIR`.
    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Directory passed as `--layouts-dir`.
    pub fn layouts_dir(&self) -> PathBuf {
        self.temp_dir.path().join("layouts")
    }

    /// File backing a slot.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.layouts_dir().join(format!("{key}.json"))
    }

    /// Writes raw text into a slot.
    pub fn write_slot(&self, key: &str, text: &str) {
        fs::create_dir_all(self.layouts_dir()).expect("Failed to create layouts dir");
        fs::write(self.slot_path(key), text).expect("Failed to write slot");
    }

    /// Reads the raw text of a slot.
    pub fn read_slot(&self, key: &str) -> String {
        fs::read_to_string(self.slot_path(key)).expect("Failed to read slot")
    }

    /// Decodes a slot into a layout.
    pub fn load_slot(&self, key: &str) -> Layout {
        layout_json::deserialize(&self.read_slot(key)).expect("Slot should hold a valid layout")
    }

    /// Command with isolated config and layouts directories.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = self.config_only_command(&[]);
        // --layouts-dir is a top-level option and must precede the subcommand
        cmd.arg("--layouts-dir").arg(self.layouts_dir());
        cmd.args(args);
        cmd
    }

    /// Command with an isolated config directory; layouts go wherever the
    /// config says.
    pub fn config_only_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(roomplanner_bin());
        cmd.env(CONFIG_DIR_ENV, self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command with isolated directories.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs `session`, feeding `script` on stdin.
    pub fn run_session(&self, extra_args: &[&str], script: &str) -> Output {
        let mut args = vec!["session"];
        args.extend_from_slice(extra_args);
        let mut child = self
            .command(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn session");

        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(script.as_bytes())
            .expect("Failed to write script");

        child.wait_with_output().expect("Failed to wait for session")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts an exit code, showing stderr on failure.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Builds a layout in memory with deterministic contents.
pub fn test_layout_basic() -> Layout {
    let mut layout = Layout::with_dimensions(
        RoomDimensions::new(6.0, 3.0, 4.0).expect("valid dimensions"),
    );
    layout.set_wall_color(Wall::Front, RgbColor::new(0x12, 0x34, 0x56));
    let table = layout.add_furniture(FurnitureKind::Table);
    layout
        .move_furniture(table, Vec3::new(0.5, 0.0, -0.5))
        .expect("table exists");
    layout
}

/// Writes a layout into a slot file.
pub fn write_layout_file(layout: &Layout, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = layout_json::serialize(layout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(path, text)
}
