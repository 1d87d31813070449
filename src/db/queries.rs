use crate::db::initialize::missing_tables;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Occupation, TimeLogRecord};
use rusqlite::{Result, Row};

// LEFT JOINs: a dangling reference yields NULL columns, never a lost row.
const SNAPSHOT_SQL: &str = r#"
    SELECT CAST(t.id AS TEXT), CAST(t.occupation_id AS TEXT), t.date, t.hours, t.minutes,
           CAST(o.id AS TEXT), o.name, CAST(o.category_id AS TEXT),
           CAST(c.id AS TEXT), c.name, c.color
    FROM time_logs t
    LEFT JOIN occupations o ON o.id = t.occupation_id
    LEFT JOIN categories  c ON c.id = o.category_id
    ORDER BY t.date DESC, t.rowid ASC
"#;

/// Load every time log with its occupation and category joined in,
/// newest date first.
pub fn load_snapshot(pool: &DbPool) -> AppResult<Vec<TimeLogRecord>> {
    let missing = missing_tables(&pool.conn)?;
    if !missing.is_empty() {
        return Err(AppError::Config(format!(
            "database schema incomplete, missing table(s): {} (run `rtimelens init`)",
            missing.join(", ")
        )));
    }

    let mut stmt = pool.conn.prepare(SNAPSHOT_SQL)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<TimeLogRecord> {
    let category = match row.get::<_, Option<String>>(8)? {
        Some(id) => Some(Category {
            id,
            name: row.get(9)?,
            color: row.get(10)?,
        }),
        None => None,
    };

    let occupation = match row.get::<_, Option<String>>(5)? {
        Some(id) => Some(Occupation {
            id,
            name: row.get(6)?,
            category_id: row.get(7)?,
            category,
        }),
        None => None,
    };

    Ok(TimeLogRecord {
        id: row.get(0)?,
        occupation_id: row.get(1)?,
        date: row.get(2)?,
        hours: row.get(3)?,
        minutes: row.get(4)?,
        occupation,
    })
}
