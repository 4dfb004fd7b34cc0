//! Month calendar baseline: one placeholder record per calendar day.

use crate::calendar::HolidayCalendar;
use crate::errors::AppResult;
use crate::models::{DayRecord, DayType};
use crate::utils::date;
use chrono::{Datelike, Weekday};

/// Generate the empty baseline for a month, classified by weekday and the
/// holiday lookup. Fails only on an invalid `(year, month)` pair.
pub fn month_calendar(
    year: i32,
    month: u32,
    calendar: &dyn HolidayCalendar,
) -> AppResult<Vec<DayRecord>> {
    let days = date::all_days_of_month(year, month)?;

    Ok(days
        .into_iter()
        .map(|day| {
            let day_type = if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                DayType::Weekend
            } else if calendar.is_public_holiday(day) {
                DayType::Holiday
            } else {
                DayType::WorkingDay
            };
            DayRecord::empty(day, day_type)
        })
        .collect())
}
