//! End-to-end tests for `roomplanner wall` commands.

use roomplanner::models::{RgbColor, Wall};

mod fixtures;
use fixtures::*;

#[test]
fn test_wall_list_json() {
    let env = TestEnv::with_sample();
    let output = env.run(&["wall", "list", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    let walls = json["walls"].as_array().expect("walls array");
    let names: Vec<&str> = walls.iter().filter_map(|w| w["wall"].as_str()).collect();
    assert_eq!(names, ["front", "back", "left", "right", "top", "bottom"]);
    assert_eq!(walls[2]["color"], "#0000FF");
}

#[test]
fn test_wall_list_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["wall", "list"]);
    assert_exit(&output, 0);
    let text = stdout(&output);
    assert!(text.contains("bottom"));
    assert!(text.contains("#CCCCCC"));
}

#[test]
fn test_wall_set_changes_only_one_wall() {
    let env = TestEnv::with_sample();
    let before = env.load_slot("roomLayout");

    let output = env.run(&["wall", "set", "top", "#112233"]);
    assert_exit(&output, 0);

    let after = env.load_slot("roomLayout");
    assert_eq!(after.wall_colors().top, RgbColor::new(0x11, 0x22, 0x33));
    for wall in Wall::ALL.into_iter().filter(|w| *w != Wall::Top) {
        assert_eq!(after.wall_colors().get(wall), before.wall_colors().get(wall));
    }
    assert_eq!(after.len(), before.len());
}

#[test]
fn test_wall_set_color_formats() {
    let env = TestEnv::new();

    assert_exit(&env.run(&["wall", "set", "FRONT", "#abc"]), 0);
    assert_exit(&env.run(&["wall", "set", "back", "255"]), 0);

    let layout = env.load_slot("roomLayout");
    assert_eq!(layout.wall_colors().front, RgbColor::new(0xAA, 0xBB, 0xCC));
    assert_eq!(layout.wall_colors().back, RgbColor::new(0, 0, 255));
}

#[test]
fn test_wall_set_invalid_wall() {
    let env = TestEnv::with_sample();
    let output = env.run(&["wall", "set", "ceiling", "#112233"]);
    assert_exit(&output, 1);
    assert!(stderr(&output).contains("ceiling"));
    assert_eq!(env.read_slot("roomLayout"), SAMPLE_LAYOUT_JSON);
}

#[test]
fn test_wall_set_invalid_color() {
    let env = TestEnv::with_sample();
    for color in ["blue", "#12345", "16777216"] {
        let output = env.run(&["wall", "set", "left", color]);
        assert_exit(&output, 1);
    }
    assert_eq!(env.read_slot("roomLayout"), SAMPLE_LAYOUT_JSON);
}
