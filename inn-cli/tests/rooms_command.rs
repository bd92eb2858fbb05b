//! Integration tests for the `rooms` command and catalog import.

mod common;

use common::{TestEnv, CATALOG_CSV};
use predicates::prelude::*;

fn rooms_json(env: &TestEnv, args: &[&str]) -> Vec<serde_json::Value> {
    let output = env
        .command()
        .arg("rooms")
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "rooms failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_rooms_ranked_by_popularity() {
    let env = TestEnv::with_catalog();
    env.reserve("A1", "2024-06-01", "2024-06-06");
    env.reserve("A1", "2024-06-08", "2024-06-10");
    env.reserve("C3", "2024-06-20", "2024-06-25");

    let rows = rooms_json(&env, &["--as-of", "2024-06-21", "--window-days", "20"]);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["room"]["code"], "A1");
    assert_eq!(rows[0]["popularity"], "0.35");
    assert_eq!(rows[0]["next_check_in"], "2024-06-21");
    assert_eq!(rows[0]["last_stay_nights"], 2);

    assert_eq!(rows[1]["room"]["code"], "C3");
    assert_eq!(rows[1]["next_check_in"], "2024-06-20");
    assert_eq!(rows[1]["last_stay_nights"], 0);

    assert_eq!(rows[2]["room"]["code"], "B2");
    assert_eq!(rows[2]["popularity"], "0");
}

#[test]
fn test_rooms_reference_date_from_config() {
    let env = TestEnv::with_catalog();
    env.reserve("B2", "2024-06-01", "2024-06-03");
    env.write_config("reference_date: 2024-06-03\npopularity_window_days: 4\n");

    let rows = rooms_json(&env, &[]);
    assert_eq!(rows[0]["room"]["code"], "B2");
    assert_eq!(rows[0]["popularity"], "0.5");
    assert_eq!(rows[0]["last_stay_nights"], 2);
}

#[test]
fn test_rooms_table_output() {
    let env = TestEnv::with_catalog();

    env.command()
        .args(["rooms", "--as-of", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ROOM\tNAME\tBEDS"))
        .stdout(predicate::str::contains(
            "A1\tGarden view\t1\tQueen\t2\t100.00\tmodern\t0.00\t2024-06-01\t0",
        ))
        .stderr(predicate::str::contains("3 room(s) as of 2024-06-01"));
}

#[test]
fn test_rooms_quiet_has_no_footer() {
    let env = TestEnv::with_catalog();

    env.command()
        .args(["--quiet", "rooms", "--as-of", "2024-06-01"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rooms_zero_window_rejected() {
    let env = TestEnv::with_catalog();

    env.command()
        .args(["rooms", "--window-days", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_rooms_window_beyond_calendar_rejected() {
    let env = TestEnv::with_catalog();

    env.command()
        .args(["rooms", "--as-of", "2024-06-01", "--window-days", "100000000"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("window_days"));
}

#[test]
fn test_rooms_without_ledger() {
    let env = TestEnv::new();

    env.command().arg("rooms").assert().failure().code(3);
}

#[test]
fn test_import_is_an_upsert() {
    let env = TestEnv::with_catalog();
    env.import(
        "RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor\n\
         A1,Garden view,1,Queen,2,130,modern\n\
         D4,Cellar,2,Double,3,90,traditional\n",
    );

    let rows = rooms_json(&env, &["--as-of", "2024-06-01"]);
    assert_eq!(rows.len(), 4);
    let a1 = rows.iter().find(|r| r["room"]["code"] == "A1").unwrap();
    assert_eq!(a1["room"]["base_rate"], "130");
}

#[test]
fn test_import_invalid_row_writes_nothing() {
    let env = TestEnv::new();
    let path = env.write_file(
        "bad.csv",
        "RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor\nA1,Garden view,1,Queen,0,100,modern\n",
    );

    env.command()
        .arg("import-rooms")
        .arg(&path)
        .assert()
        .failure()
        .code(4);
    assert!(!env.data_dir.join("inn.db").exists());
}

#[test]
fn test_import_missing_file() {
    let env = TestEnv::new();

    env.command()
        .args(["import-rooms", "/nonexistent/rooms.csv"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_import_reports_count() {
    let env = TestEnv::new();
    let path = env.write_file("rooms.csv", CATALOG_CSV);

    env.command()
        .arg("import-rooms")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 3 room(s)"));
}
