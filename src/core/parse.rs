//! Attendance parser: raw chart rows → typed day records.

use crate::calendar::{self, HolidayCalendar};
use crate::chart::{ChartEntry, ChartRow};
use crate::core::resolver;
use crate::errors::AppResult;
use crate::models::{DayRecord, DayType, Duration, WorkEntry, WorkplaceType};
use crate::utils::date;
use chrono::NaiveDate;

/// A chart row the parser had to reject. One bad row never aborts the rest
/// of the month; callers surface these as warnings.
#[derive(Debug, Clone)]
pub struct ChartIssue {
    pub day_of_month: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedChart {
    pub records: Vec<DayRecord>,
    pub issues: Vec<ChartIssue>,
}

/// Parse chart rows into day records for the given month.
///
/// Rows with a day-0 marker (summary rows) are skipped silently; rows that
/// fail to parse are reported per day in `issues`.
pub fn parse_chart(
    rows: &[ChartRow],
    year: i32,
    month: u32,
    calendar: &dyn HolidayCalendar,
    now: Duration,
) -> AppResult<ParsedChart> {
    let month_days = date::days_in_month(year, month)?;

    let mut parsed = ParsedChart::default();

    for row in rows {
        let day = row.day_of_month();
        if day == 0 {
            continue;
        }

        if day > month_days {
            parsed.issues.push(ChartIssue {
                day_of_month: day,
                reason: format!("day {day} outside {year}-{month:02}"),
            });
            continue;
        }

        let Some(target_date) = NaiveDate::from_ymd_opt(year, month, day) else {
            parsed.issues.push(ChartIssue {
                day_of_month: day,
                reason: format!("invalid date {year}-{month:02}-{day:02}"),
            });
            continue;
        };

        match parse_row(row, target_date, calendar, now) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.issues.push(ChartIssue {
                day_of_month: day,
                reason: e.to_string(),
            }),
        }
    }

    Ok(parsed)
}

fn parse_row(
    row: &ChartRow,
    target_date: NaiveDate,
    calendar: &dyn HolidayCalendar,
    now: Duration,
) -> AppResult<DayRecord> {
    let day_type = classify_day(row, target_date, calendar);

    let mut entries = Vec::with_capacity(row.entries.len());
    for entry in &row.entries {
        entries.push(parse_entry(entry, now)?);
    }

    Ok(DayRecord {
        date: target_date,
        day_type,
        entries,
        memo: row.memo.clone(),
    })
}

fn parse_entry(entry: &ChartEntry, now: Duration) -> AppResult<WorkEntry> {
    let workplace = WorkplaceType::from_portal_text(&entry.workplace);
    let clock_in = parse_clock(&entry.clock_in)?;
    let clock_out = parse_clock(&entry.clock_out)?;
    let duration = resolver::entry_duration(&entry.category, clock_in, clock_out, now);

    Ok(WorkEntry {
        workplace,
        clock_in,
        clock_out,
        duration,
        category: entry.category.clone(),
    })
}

fn parse_clock(text: &str) -> AppResult<Option<Duration>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    Duration::parse(text.trim()).map(Some)
}

/// Day-type classification, evaluated in priority order: the portal's color
/// signal wins, then leave categories, then the holiday lookup.
fn classify_day(row: &ChartRow, target_date: NaiveDate, calendar: &dyn HolidayCalendar) -> DayType {
    match row.color.as_str() {
        "red" => DayType::Holiday,
        "blue" => DayType::Weekend,
        _ => {
            let has_category = |needle: &str| {
                row.entries
                    .iter()
                    .any(|e| e.category.to_lowercase().contains(needle))
            };

            if has_category("unpaid") {
                DayType::UnpaidLeave
            } else if has_category("leave") {
                DayType::PaidLeave
            } else if calendar::is_working_day(calendar, target_date) {
                DayType::WorkingDay
            } else {
                DayType::Holiday
            }
        }
    }
}
