pub mod config;
pub mod export;
pub mod init;
pub mod plan;
pub mod show;
pub mod stats;

use crate::chart;
use crate::config::Config;
use crate::core::{self, MonthReport};
use crate::db;
use crate::errors::AppResult;
use crate::utils::{date, path::expand_tilde, time};
use chrono::{Datelike, NaiveDate};

fn resolve_today(today_arg: &Option<String>) -> AppResult<NaiveDate> {
    match today_arg {
        Some(t) => date::parse_date(t),
        None => Ok(time::today_jst()),
    }
}

fn resolve_month(month_arg: &Option<String>, today: NaiveDate) -> AppResult<(i32, u32)> {
    match month_arg {
        Some(m) => date::parse_month(m),
        None => Ok((today.year(), today.month())),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Assemble the full month report shared by `show`, `stats` and `export`:
/// chart rows from file (if any), plans from the store, holiday calendar
/// from config, one wall-clock read for the whole pass.
pub(crate) fn build_report(
    cfg: &Config,
    month_arg: &Option<String>,
    chart_arg: &Option<String>,
    today_arg: &Option<String>,
) -> AppResult<(MonthReport, NaiveDate)> {
    let today = resolve_today(today_arg)?;
    let now = time::time_of_day_jst();
    let (year, month) = resolve_month(month_arg, today)?;

    let rows = match chart_arg.as_deref().or_else(|| non_empty(&cfg.default_chart)) {
        Some(path) => chart::load_chart(&expand_tilde(path))?,
        None => Vec::new(),
    };

    let calendar = cfg.holiday_calendar()?;

    let mut pool = db::open(cfg)?;
    let plans = db::plans::plans_for_month(&mut pool, year, month)?;

    let report = core::build_month_report(&rows, &plans, year, month, today, now, &calendar)?;
    Ok((report, today))
}
