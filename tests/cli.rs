// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use assert_cmd::Command;

fn demo() -> Command {
    Command::cargo_bin("argbind-demo").unwrap()
}

#[test]
fn prints_the_parsed_instance() {
    let output = demo()
        .args(["my string", "5", "--list1", "30", "15"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("var1: \"my string\""));
    assert!(stdout.contains("var2: 5"));
    assert!(stdout.contains("name: \"A\""));
    assert!(stdout.contains("list1: Some([30, 15])"));
}

#[test]
fn missing_arguments_exit_with_usage_error() {
    let output = demo().assert().failure().code(2).get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("var1"));
}

#[test]
fn invalid_choice_exits_with_usage_error() {
    demo()
        .args(["x", "1", "--enum1", "not_a_val"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn help_exits_successfully() {
    let output = demo().arg("--help").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    for name in ["var1", "var2", "enum1", "list1"] {
        assert!(stdout.contains(name));
    }
}
