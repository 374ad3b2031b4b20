use crate::errors::AppError;
use crate::models::TimeEntry;
use crate::utils::time::{parse_db_ts, to_db_ts};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> Result<i64> {
    conn.execute(
        "INSERT INTO time_entries
            (user_id, project_id, task_id, description, start_time, end_time, duration, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.user_id,
            entry.project_id,
            entry.task_id,
            entry.description,
            to_db_ts(entry.start_time),
            to_db_ts(entry.end_time),
            entry.duration,
            entry.date.format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> Result<usize> {
    conn.execute(
        "UPDATE time_entries
         SET project_id = ?1, task_id = ?2, description = ?3,
             start_time = ?4, end_time = ?5, duration = ?6, date = ?7
         WHERE id = ?8",
        params![
            entry.project_id,
            entry.task_id,
            entry.description,
            to_db_ts(entry.start_time),
            to_db_ts(entry.end_time),
            entry.duration,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.id,
        ],
    )
}

pub fn load_entry_by_id(conn: &Connection, id: i64) -> Result<Option<TimeEntry>> {
    conn.prepare("SELECT * FROM time_entries WHERE id = ?1")?
        .query_row([id], map_row)
        .optional()
}

/// Exact-match lookup on start_time; the commit idempotency guard.
/// Start timestamps are stored with fixed precision (see `to_db_ts`) so
/// text equality is equality of instants.
pub fn load_entry_by_start_time(
    conn: &Connection,
    user_id: &str,
    start: DateTime<Local>,
) -> Result<Option<TimeEntry>> {
    conn.prepare(
        "SELECT * FROM time_entries
         WHERE user_id = ?1 AND start_time = ?2",
    )?
    .query_row(params![user_id, to_db_ts(start)], map_row)
    .optional()
}

pub fn load_entries(conn: &Connection, user_id: &str) -> Result<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_entries
         WHERE user_id = ?1
         ORDER BY start_time ASC",
    )?;

    let rows = stmt.query_map([user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entry(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])
}

pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;
    let date_str: String = row.get("date")?;

    let start_time = parse_db_ts(&start_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(start_str.clone())),
        )
    })?;

    let end_time = parse_db_ts(&end_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(end_str.clone())),
        )
    })?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        project_id: row.get("project_id")?,
        task_id: row.get("task_id")?,
        description: row.get("description")?,
        start_time,
        end_time,
        duration: row.get("duration")?,
        date,
    })
}
