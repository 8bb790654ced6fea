use assert_cmd::cargo::cargo_bin_cmd;
use moonshot_testing::{Dataset, TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_list_view_prints_one_row_per_mission() {
    let world = TestWorld::new().with_dataset(Dataset::apollo_sample());

    let result = world.run(&["missions", "--view", "list"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!(result.stdout().trim_end(), @r"
    [apollo1]   Apollo 1             N/A  ›
    [apollo7]   Apollo 7    Oct 11, 1968  ›
    ");
}

#[test]
fn test_grid_view_is_the_default() {
    let world = TestWorld::new().with_dataset(Dataset::apollo_sample());

    let result = world.run(&["missions"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let stdout = result.stdout();
    assert!(stdout.contains('┌'));
    assert!(stdout.contains("[apollo7]"));
    assert!(stdout.contains("Oct 11, 1968"));
    assert!(!stdout.contains('›'));
}

#[test]
fn test_json_lists_bundled_missions_in_order() {
    let world = TestWorld::new();

    let result = world.run(&["missions", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_mission_ids(&json, &[1, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17])
        .unwrap();
    assert_eq!(json["content"]["view_mode"], "grid");
    assert_eq!(json["content"]["missions"][0]["formatted_launch_date"], "N/A");
    assert!(json["content"]["missions"][0]["launch_date"].is_null());
    assert_eq!(json["content"]["missions"][5]["image_key"], "apollo11");
    assert_eq!(json["content"]["missions"][5]["launch_date"], "1969-07-16");
}

#[test]
fn test_config_default_view_applies_without_flag() {
    let world = TestWorld::new()
        .with_dataset(Dataset::apollo_sample())
        .with_config("[display]\ndefault_view = \"list\"\n");

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).arg("missions");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Apollo 7    Oct 11, 1968  ›"));
}

#[test]
fn test_flag_overrides_config_view() {
    let world = TestWorld::new()
        .with_dataset(Dataset::apollo_sample())
        .with_config("[display]\ndefault_view = \"list\"\n");

    let result = world
        .run(&["missions", "--view", "grid", "--format", "json"])
        .unwrap();
    assert_eq!(result.json().unwrap()["content"]["view_mode"], "grid");
}

#[test]
fn test_config_resource_dir_is_used() {
    let world = TestWorld::new();
    let dir = world.write_dataset("custom", &Dataset::apollo_sample());
    let world = world.with_config(&format!(
        "[catalog]\nresource_dir = {:?}\n",
        dir.display().to_string()
    ));

    let result = world.run(&["missions", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_mission_ids(&result.json().unwrap(), &[1, 7]).unwrap();
}

#[test]
fn test_empty_catalog_shows_info_badge() {
    let world = TestWorld::new().with_dataset(Dataset::new());

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).arg("missions");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No missions found"))
        .stdout(predicate::str::contains("moonshot validate"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("[display]\ngrid_min_cell_width = 0\n");

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).arg("missions");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}
