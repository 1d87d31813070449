use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

const TABLES: [&str; 3] = ["categories", "occupations", "time_logs"];

/// Create the three tables the snapshot query reads. Idempotent.
///
/// Foreign keys are not enforced: dangling occupation/category references
/// are valid data for the analysis and must survive.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id     TEXT PRIMARY KEY,
            name   TEXT NOT NULL,
            color  TEXT
        );

        CREATE TABLE IF NOT EXISTS occupations (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            category_id  TEXT
        );

        CREATE TABLE IF NOT EXISTS time_logs (
            id             TEXT PRIMARY KEY,
            category_id    TEXT,
            occupation_id  TEXT NOT NULL,
            date           TEXT NOT NULL,
            hours          INTEGER NOT NULL DEFAULT 0 CHECK(hours >= 0),
            minutes        INTEGER NOT NULL DEFAULT 0 CHECK(minutes >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_time_logs_date ON time_logs(date);
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

/// Names of the required tables that are missing.
pub fn missing_tables(conn: &Connection) -> Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for t in TABLES {
        if !table_exists(conn, t)? {
            missing.push(t);
        }
    }
    Ok(missing)
}
