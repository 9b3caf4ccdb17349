use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn simulate_prints_a_full_report() {
    Command::cargo_bin("cli")
        .unwrap()
        .args(["simulate", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Battle Start!")
                .and(predicate::str::contains("Battle Over!")),
        );
}

#[test]
fn same_seed_is_reproducible() {
    let run = |seed: &str| {
        let output = Command::cargo_bin("cli")
            .unwrap()
            .args(["simulate", "--seed", seed])
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run("123"), run("123"));
}

#[test]
fn json_output_is_machine_readable() {
    Command::cargo_bin("cli")
        .unwrap()
        .args(["simulate", "--seed", "7", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\"").and(predicate::str::contains("\"turns\"")));
}

#[test]
fn roll_classifies_each_die() {
    Command::cargo_bin("cli")
        .unwrap()
        .args(["roll", "--seed", "1", "--rolls", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attack"));
}

#[test]
fn catalog_lists_both_tables() {
    Command::cargo_bin("cli")
        .unwrap()
        .arg("catalog")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Maldquake").and(predicate::str::contains("Gyatt Harden")),
        );
}
