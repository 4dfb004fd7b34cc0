use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the plan-store schema. Idempotent; called on every open so the
/// commands never see a missing table.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS planned_days (
            date           TEXT PRIMARY KEY,
            office_minutes INTEGER NOT NULL,
            remote_minutes INTEGER NOT NULL,
            is_paid_leave  INTEGER NOT NULL,
            note           TEXT NOT NULL DEFAULT ''
        )",
    )?;
    Ok(())
}
