//! Integration tests for `license-gen generate`, `list` and `info`.

mod common;

use common::{stderr, stdout, TestProject};

#[test]
fn test_generate_writes_license_file() {
    let project = TestProject::new();
    let output = project.run(&["generate", "-t", "MIT", "-a", "Jane Doe", "-y", "2021"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = project.read_file("LICENSE");
    assert!(text.starts_with("MIT License"));
    assert!(text.contains("Copyright (c) 2021 Jane Doe"));
    assert!(stdout(&output).contains("License: MIT License"));
}

#[test]
fn test_gen_alias_and_output_path() {
    let project = TestProject::new();
    let output = project.run(&["gen", "--type", "Apache-2.0", "--output", "COPYING"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(project.read_file("COPYING").contains("Your Name"));
}

#[test]
fn test_generate_unknown_type_fails() {
    let project = TestProject::new();
    let output = project.run(&["generate", "-t", "WTFPL"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("License type \"WTFPL\" not found"));
    assert!(!project.path().join("LICENSE").exists());
}

#[test]
fn test_generate_uses_config_defaults() {
    let project = TestProject::new();
    project.create_file(
        ".license-gen/config.toml",
        "[generate]\nlicense = \"ISC\"\nauthor = \"Config Author\"\n",
    );
    let output = project.run(&["generate", "-y", "2000"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = project.read_file("LICENSE");
    assert!(text.starts_with("ISC License"));
    assert!(text.contains("Copyright (c) 2000 Config Author"));
}

#[test]
fn test_list_json() {
    let project = TestProject::new();
    let output = project.run(&["list", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"MIT"));
    assert!(keys.contains(&"GPL-3.0"));
    assert_eq!(keys.len(), 11);
}

#[test]
fn test_info_known_and_unknown() {
    let project = TestProject::new();
    let output = project.run(&["info", "GPL-3.0"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("GNU General Public License v3.0"));
    assert!(out.contains("Copyleft"));
    assert!(out.contains("LGPL-3.0"));

    let output = project.run(&["info", "gpl-3.0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn test_home_config_is_read_from_home() {
    let project = TestProject::new();
    project.create_file(
        ".config/license-gen/config.toml",
        "[generate]\nauthor = \"Home Author\"\n",
    );
    let output = project.run(&["generate", "-t", "MIT", "-y", "2020"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(project
        .read_file("LICENSE")
        .contains("Copyright (c) 2020 Home Author"));
}
