//! End-to-end tests for `roomplanner furniture` and `shapes` commands.

use roomplanner::models::FurnitureKind;

mod fixtures;
use fixtures::*;

// ============================================================================
// List / Add / Remove
// ============================================================================

#[test]
fn test_furniture_list_json() {
    let env = TestEnv::with_sample();
    let output = env.run(&["furniture", "list", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    assert_eq!(json["furniture"][0]["type"], "sofa");
    assert_eq!(json["furniture"][0]["position"][0], 1.0);
}

#[test]
fn test_furniture_list_empty() {
    let env = TestEnv::new();
    let output = env.run(&["furniture", "list"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("No furniture"));
}

#[test]
fn test_furniture_add_spawns_inside_room() {
    let env = TestEnv::new();
    assert_exit(&env.run(&["new", "--width", "6", "--depth", "4"]), 0);

    for _ in 0..10 {
        assert_exit(&env.run(&["furniture", "add", "cube"]), 0);
    }
    assert_exit(&env.run(&["furniture", "add", "bookshelf"]), 0);

    let layout = env.load_slot("roomLayout");
    assert_eq!(layout.len(), 11);
    for item in &layout.furniture()[..10] {
        assert_eq!(item.kind, FurnitureKind::Cube);
        assert!(item.position.x.abs() <= 2.0);
        assert!(item.position.z.abs() <= 1.0);
        assert!((item.position.y - 0.5).abs() < 1e-12);
        assert_eq!(item.rotation.y, 0.0);
    }
    assert_eq!(layout.furniture()[10].position.y, 0.0);
}

#[test]
fn test_furniture_add_unknown_kind_warns() {
    let env = TestEnv::new();
    let output = env.run(&["furniture", "add", "hammock"]);
    assert_exit(&output, 0);
    assert!(stderr(&output).contains("hammock"));

    let layout = env.load_slot("roomLayout");
    assert_eq!(layout.furniture()[0].kind, FurnitureKind::Other("hammock".to_string()));
    assert!(env.read_slot("roomLayout").contains("\"hammock\""));
}

#[test]
fn test_furniture_remove_keeps_order() {
    let env = TestEnv::with_sample();
    let output = env.run(&["furniture", "remove", "2"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("Removed chair #2"));

    let layout = env.load_slot("roomLayout");
    let kinds: Vec<String> = layout.furniture().iter().map(|i| i.kind.to_string()).collect();
    assert_eq!(kinds, ["sofa", "piano"]);
}

#[test]
fn test_furniture_remove_missing_index() {
    let env = TestEnv::with_sample();
    for index in ["0", "4"] {
        let output = env.run(&["furniture", "remove", index]);
        assert_exit(&output, 1);
    }
    assert_eq!(env.read_slot("roomLayout"), SAMPLE_LAYOUT_JSON);
}

// ============================================================================
// Rotate / Move
// ============================================================================

#[test]
fn test_furniture_rotate_accumulates() {
    let env = TestEnv::with_sample();
    assert_exit(&env.run(&["furniture", "rotate", "1", "--degrees", "90"]), 0);
    let output = env.run(&["furniture", "rotate", "1", "--degrees", "-45"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("45.0°"));

    let layout = env.load_slot("roomLayout");
    let yaw = layout.furniture()[0].rotation.y;
    assert!((yaw - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    // Other items untouched
    assert!((layout.furniture()[1].rotation.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_furniture_move_clamps() {
    let env = TestEnv::with_sample();
    let output = env.run(&["furniture", "move", "1", "--x", "-50", "--z", "0.5"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("kept inside"));

    let item = env.load_slot("roomLayout").furniture()[0].clone();
    assert_eq!(item.position.x, -3.0);
    assert_eq!(item.position.z, 0.5);
    assert_eq!(item.position.y, 0.0);
}

#[test]
fn test_furniture_move_missing_index() {
    let env = TestEnv::new();
    let output = env.run(&["furniture", "move", "1", "--x", "0", "--z", "0"]);
    assert_exit(&output, 1);
}

// ============================================================================
// Shapes
// ============================================================================

#[test]
fn test_shapes_table_json() {
    let env = TestEnv::new();
    let output = env.run(&["shapes", "table", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "table");
    assert_eq!(json["supported"], true);
    assert_eq!(json["resting_height"], 0.0);
    assert_eq!(json["parts"].as_array().map(Vec::len), Some(5));
    assert!(json["bounds"]["min"]["y"].as_f64().unwrap().abs() < 1e-12);
}

#[test]
fn test_shapes_unknown_kind_is_cube() {
    let env = TestEnv::new();
    let output = env.run(&["shapes", "lamp", "--json"]);
    assert_exit(&output, 0);

    let json = stdout_json(&output);
    assert_eq!(json["supported"], false);
    assert_eq!(json["parts"][0]["primitive"]["shape"], "box");
    assert_eq!(json["resting_height"], 0.5);
}

#[test]
fn test_shapes_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["shapes", "sphere"]);
    assert_exit(&output, 0);
    assert!(stdout(&output).contains("sphere r=0.50"));
}
