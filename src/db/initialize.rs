use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Safe to call repeatedly; every statement is idempotent.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            project_id  TEXT NOT NULL,
            task_id     TEXT,
            description TEXT NOT NULL DEFAULT '',
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            duration    REAL NOT NULL,
            date        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_start
            ON time_entries (user_id, start_time);

        CREATE INDEX IF NOT EXISTS idx_entries_user_date
            ON time_entries (user_id, date);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
