use assert_cmd::cargo::cargo_bin_cmd;
use moonshot_testing::{Dataset, TestWorld};
use predicates::prelude::*;

#[test]
fn test_lookup_by_key_lists_missions_flown() {
    let world = TestWorld::new();

    let result = world.run(&["astronaut", "lovell", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["name"], "James A. Lovell Jr.");
    assert_eq!(json["content"]["portrait_key"], "lovell");

    let missions: Vec<u64> = json["content"]["missions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["mission_id"].as_u64())
        .collect();
    assert_eq!(missions, [8, 13]);
}

#[test]
fn test_lookup_by_full_name() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("moonshot");
    world
        .configure_command(&mut cmd)
        .args(["astronaut", "Michael Collins"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Michael Collins"))
        .stdout(predicate::str::contains("[collins]"))
        .stdout(predicate::str::contains("Apollo 11"));
}

#[test]
fn test_unknown_astronaut_fails() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).args(["astronaut", "gagarin"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown astronaut: 'gagarin'"));
}

#[test]
fn test_suggested_command_resolves_in_name_keyed_table() {
    let dataset = Dataset::new()
        .with_keyed_astronaut(
            "Wally Schirra",
            "wally-schirra",
            "Wally Schirra",
            "Flew Mercury, Gemini and Apollo.",
        )
        .with_mission(7, Some("1968-10-11"), &[("Wally Schirra", "Commander")], "");
    let world = TestWorld::new().with_dataset(dataset);

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).args(["mission", "7"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("moonshot astronaut wally-schirra"));

    let mut cmd = cargo_bin_cmd!("moonshot");
    world
        .configure_command(&mut cmd)
        .args(["astronaut", "wally-schirra"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wally Schirra"))
        .stdout(predicate::str::contains("Apollo 7"));
}

#[test]
fn test_name_shadowing_another_key_is_rejected() {
    let dataset = Dataset::new()
        .with_keyed_astronaut("Pete Conrad", "conrad", "Charles Conrad", "Apollo 12 commander.")
        .with_astronaut("conrad-jr", "Pete Conrad", "Same nickname, different record.")
        .with_mission(12, None, &[("Pete Conrad", "Commander")], "");
    let world = TestWorld::new().with_dataset(dataset);

    let mut cmd = cargo_bin_cmd!("moonshot");
    world.configure_command(&mut cmd).arg("validate");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Crew reference 'Pete Conrad' is ambiguous"));
}
