//! Where a record snapshot comes from.
//!
//! Two read-only sources: the SQLite database (tables `categories`,
//! `occupations`, `time_logs`) and a JSON file shaped like the joined
//! `time_logs` query result, i.e. each log carries a nullable `occupations`
//! object which in turn carries a nullable `categories` object.

use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::TimeLogRecord;
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Sqlite(PathBuf),
    Json(PathBuf),
}

impl SnapshotSource {
    /// `--snapshot` wins over the database; the database path is the
    /// `--db` override or the configured one.
    pub fn resolve(snapshot: Option<&str>, database: &str) -> Self {
        match snapshot {
            Some(p) => SnapshotSource::Json(expand_tilde(p)),
            None => SnapshotSource::Sqlite(expand_tilde(database)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            SnapshotSource::Sqlite(p) | SnapshotSource::Json(p) => p,
        }
    }

    pub fn load(&self) -> AppResult<Vec<TimeLogRecord>> {
        let path = self.path();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "snapshot source not found: {}",
                path.display()
            )));
        }

        let records = match self {
            SnapshotSource::Sqlite(p) => {
                let pool = DbPool::open_read_only(&p.to_string_lossy())?;
                load_snapshot(&pool)?
            }
            SnapshotSource::Json(p) => load_json(p)?,
        };

        tracing::debug!(source = %path.display(), records = records.len(), "snapshot loaded");
        Ok(records)
    }
}

fn load_json(path: &Path) -> AppResult<Vec<TimeLogRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<TimeLogRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}
