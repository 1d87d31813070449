#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference day used by every fixture.
pub const NOW: &str = "2024-05-10";

/// Binary with HOME/APPDATA pointed at a scratch dir, so a developer's
/// real configuration never leaks into the assertions.
pub fn rtl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimelens_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimelens");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimelens.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimelens_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a JSON snapshot and return its path.
pub fn write_snapshot(name: &str, json: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, json).expect("write snapshot");
    p
}

/// Schema + a small dataset:
///
/// | id | date       | occupation        | category  | minutes |
/// |----|------------|-------------------|-----------|---------|
/// | t1 | 2024-05-10 | Coding            | Work      | 90      |
/// | t2 | 2024-05-10 | Meetings          | Work      | 30      |
/// | t3 | 2024-05-09 | Running           | Health    | 45      |
/// | t4 | 2024-05-08 | Coding            | Work      | 120     |
/// | t5 | 2024-05-09 | (missing)         | (missing) | 20      |
/// | t6 | 2024-04-01 | Limbo             | (missing) | 60      |
pub fn init_db_with_data(db_path: &str) {
    rtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        INSERT INTO categories (id, name, color) VALUES ('cat-work', 'Work', '#0088FE');
        INSERT INTO categories (id, name, color) VALUES ('cat-health', 'Health', NULL);

        INSERT INTO occupations (id, name, category_id) VALUES ('occ-coding', 'Coding', 'cat-work');
        INSERT INTO occupations (id, name, category_id) VALUES ('occ-meet', 'Meetings', 'cat-work');
        INSERT INTO occupations (id, name, category_id) VALUES ('occ-run', 'Running', 'cat-health');
        INSERT INTO occupations (id, name, category_id) VALUES ('occ-limbo', 'Limbo', 'cat-gone');

        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t1', 'occ-coding', '2024-05-10', 1, 30);
        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t2', 'occ-meet',   '2024-05-10', 0, 30);
        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t3', 'occ-run',    '2024-05-09', 0, 45);
        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t4', 'occ-coding', '2024-05-08', 2, 0);
        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t5', 'occ-ghost',  '2024-05-09', 0, 20);
        INSERT INTO time_logs (id, occupation_id, date, hours, minutes) VALUES ('t6', 'occ-limbo',  '2024-04-01', 1, 0);
        "#,
    )
    .expect("seed data");
}

/// Position of `needle` in `haystack`, panicking with context when absent.
pub fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in:\n{haystack}"))
}
