//! End-to-end tests for `roomplanner session`.

use roomplanner::models::{FurnitureKind, RgbColor};

mod fixtures;
use fixtures::*;

#[test]
fn test_session_edits_and_saves() {
    let env = TestEnv::new();
    let script = "\
add sofa
add chair
select 2
rotate 90
wall front #112233
resize 6 3 4
save
";
    let output = env.run_session(&[], script);
    assert_exit(&output, 0);

    let text = stdout(&output);
    assert!(text.contains("Added sofa #1"));
    assert!(text.contains("Rotated to 90.0°"));
    assert!(text.contains("Saved 2 item(s)"));

    let layout = env.load_slot("roomLayout");
    assert_eq!(layout.len(), 2);
    assert_eq!(layout.dimensions().width, 6.0);
    assert_eq!(layout.wall_colors().front, RgbColor::new(0x11, 0x22, 0x33));
    assert_eq!(layout.furniture()[0].rotation.y, 0.0);
    assert!((layout.furniture()[1].rotation.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    // Selection is not persisted
    assert_eq!(layout.selected_id(), None);
}

#[test]
fn test_session_without_save_leaves_slot_alone() {
    let env = TestEnv::with_sample();
    let output = env.run_session(&[], "add bed\nremove 1\n");
    assert_exit(&output, 0);
    assert_eq!(env.read_slot("roomLayout"), SAMPLE_LAYOUT_JSON);
}

#[test]
fn test_session_rotate_needs_selection() {
    let env = TestEnv::with_sample();
    let output = env.run_session(&[], "rotate 45\nsave\n");
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("warning: Select an item"));

    let layout = env.load_slot("roomLayout");
    assert_eq!(layout.furniture()[0].rotation.y, 0.0);
}

#[test]
fn test_session_load_discards_unsaved_edits() {
    let env = TestEnv::with_sample();
    let output = env.run_session(&[], "add cube\nadd cube\nload\nlist\n");
    assert_exit(&output, 0);
    let text = stdout(&output);
    let (_, after_load) = text
        .split_once("Loaded 3 item(s)")
        .expect("load should report the saved items");
    assert!(after_load.contains("sofa"));
    assert!(!after_load.contains("cube"));
}

#[test]
fn test_session_reports_failures_and_continues() {
    let env = TestEnv::new();
    let output = env.run_session(&[], "remove 1\nfly\nadd table\nsave\n");
    assert_exit(&output, 1);

    let err = stderr(&output);
    assert!(err.contains("line 1"));
    assert!(err.contains("line 2"));
    assert_eq!(env.load_slot("roomLayout").furniture()[0].kind, FurnitureKind::Table);
}

#[test]
fn test_session_strict_stops_at_first_error() {
    let env = TestEnv::new();
    let output = env.run_session(&["--strict"], "fly\nadd table\nsave\n");
    assert_exit(&output, 1);
    assert!(!env.slot_path("roomLayout").exists());
}

#[test]
fn test_session_grid_starts_from_config() {
    let env = TestEnv::new();
    std::fs::write(env.config_dir().join("config.toml"), "[ui]\nshow_grid = false\n").unwrap();
    let output = env.run_session(&[], "show\ngrid\n");
    assert_exit(&output, 0);

    let text = stdout(&output);
    assert!(text.contains("Grid: off"));
    assert!(text.contains("Grid on"));
}

#[test]
fn test_session_uses_slot_option() {
    let env = TestEnv::new();
    let output = env.run_session(&["--slot", "garage"], "add cylinder\nsave\n");
    assert_exit(&output, 0);
    assert!(env.slot_path("garage").exists());
    assert!(!env.slot_path("roomLayout").exists());
}
