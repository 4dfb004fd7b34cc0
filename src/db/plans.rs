//! Plan-store queries: keyed read/write of user-authored planned days.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::PlannedDay;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn upsert_plan(conn: &Connection, plan: &PlannedDay) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO planned_days
         (date, office_minutes, remote_minutes, is_paid_leave, note)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            plan.date.format("%Y-%m-%d").to_string(),
            plan.office_minutes,
            plan.remote_minutes,
            if plan.is_paid_leave { 1 } else { 0 },
            plan.note,
        ],
    )?;
    Ok(())
}

pub fn get_plan(pool: &mut DbPool, target_date: NaiveDate) -> AppResult<Option<PlannedDay>> {
    let mut stmt = pool.conn.prepare(
        "SELECT date, office_minutes, remote_minutes, is_paid_leave, note
         FROM planned_days WHERE date = ?1",
    )?;

    let date_str = target_date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map([date_str], map_row)?;

    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// All plans for a month, date-ascending.
pub fn plans_for_month(pool: &mut DbPool, year: i32, month: u32) -> AppResult<Vec<PlannedDay>> {
    let start = date::first_of_month(year, month)?;
    let end = date::first_of_next_month(year, month)?;

    let mut stmt = pool.conn.prepare(
        "SELECT date, office_minutes, remote_minutes, is_paid_leave, note
         FROM planned_days WHERE date >= ?1 AND date < ?2 ORDER BY date",
    )?;

    let rows = stmt.query_map(
        [
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns true when a plan existed for the date.
pub fn delete_plan(conn: &Connection, target_date: NaiveDate) -> AppResult<bool> {
    let affected = conn.execute(
        "DELETE FROM planned_days WHERE date = ?1",
        [target_date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(affected > 0)
}

fn map_row(row: &Row) -> Result<PlannedDay> {
    let date_str: String = row.get("date")?;

    let plan_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(PlannedDay {
        date: plan_date,
        office_minutes: row.get("office_minutes")?,
        remote_minutes: row.get("remote_minutes")?,
        is_paid_leave: row.get::<_, i64>("is_paid_leave")? != 0,
        note: row.get("note")?,
    })
}
