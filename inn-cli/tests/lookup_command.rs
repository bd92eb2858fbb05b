//! Integration tests for the `lookup` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn seeded() -> (TestEnv, i64) {
    let env = TestEnv::with_catalog();
    let first = env.reserve("A1", "2024-06-01", "2024-06-03");
    env.reserve("C3", "2024-06-10", "2024-06-12");

    env.command()
        .args(["reserve", "--first-name", "Grace", "--last-name", "Hopper"])
        .args(["--check-in", "2024-06-01", "--check-out", "2024-06-02"])
        .args(["--room", "B2", "--choice", "1"])
        .assert()
        .success();

    (env, first)
}

#[test]
fn test_lookup_without_criteria_lists_everything() {
    let (env, _) = seeded();
    let all = env.lookup_json(&[]);

    assert_eq!(all.len(), 3);
    // Ordered by check-in, then code
    assert_eq!(all[2]["reservation"]["room"], "C3");
}

#[test]
fn test_lookup_criteria_combine() {
    let (env, first) = seeded();

    let found = env.lookup_json(&["--last-name", "Lovelace", "--check-in", "2024-06-01"]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["reservation"]["code"], first);
    assert_eq!(found[0]["room_name"], "Garden view");

    let found = env.lookup_json(&["--first-name", "Grace", "--room", "A1"]);
    assert!(found.is_empty());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let (env, _) = seeded();
    assert!(env.lookup_json(&["--last-name", "lovelace"]).is_empty());
}

#[test]
fn test_lookup_blank_criterion_is_ignored() {
    let (env, _) = seeded();
    assert_eq!(env.lookup_json(&["--room", "  "]).len(), 3);
}

#[test]
fn test_lookup_table_output() {
    let (env, first) = seeded();

    env.command()
        .args(["lookup", "--code", &first.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CODE\tROOM\tROOM_NAME"))
        .stdout(predicate::str::contains("Garden view\t2024-06-01\t2024-06-03\t2\t220.00"));
}

#[test]
fn test_lookup_csv_output() {
    let (env, _) = seeded();

    let output = env
        .command()
        .args(["lookup", "--room", "B2", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "code,room,room_name,check_in,check_out,nights,rate,last_name,first_name,adults,children"
    );
    assert!(lines[1].ends_with(",B2,Harbor suite,2024-06-01,2024-06-02,1,275.00,Hopper,Grace,1,0"));
}

#[test]
fn test_lookup_no_match_reports_on_stderr() {
    let (env, _) = seeded();

    env.command()
        .args(["lookup", "--code", "999999"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No matching reservations"));
}

#[test]
fn test_lookup_format_from_config() {
    let (env, _) = seeded();
    env.write_config("output_format: tsv\n");

    env.command()
        .args(["lookup", "--room", "C3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("code\troom\troom_name"));
}
