pub mod merge;
pub mod month;
pub mod parse;
pub mod resolver;
pub mod stats;

use crate::calendar::HolidayCalendar;
use crate::chart::ChartRow;
use crate::errors::AppResult;
use crate::models::{DayRecord, Duration, MonthStats, PlannedDay};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub use parse::{ChartIssue, ParsedChart};

/// Everything one reconciliation pass produces for a month.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub records: Vec<DayRecord>,
    pub stats: MonthStats,
    pub daily_balances: BTreeMap<NaiveDate, i64>,
    pub issues: Vec<ChartIssue>,
}

/// Full pipeline: parse → merge → stats.
///
/// Pure with respect to its inputs; `today` and `now` carry the single
/// wall-clock read for the whole pass.
pub fn build_month_report(
    rows: &[ChartRow],
    plans: &[PlannedDay],
    year: i32,
    month: u32,
    today: NaiveDate,
    now: Duration,
    calendar: &dyn HolidayCalendar,
) -> AppResult<MonthReport> {
    let parsed = parse::parse_chart(rows, year, month, calendar, now)?;
    let records =
        merge::merge_actual_and_planned(&parsed.records, plans, year, month, today, calendar)?;
    let (stats, daily_balances) = stats::month_stats(year, month, &records, today, now);

    Ok(MonthReport {
        records,
        stats,
        daily_balances,
        issues: parsed.issues,
    })
}
