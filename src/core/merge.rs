//! Merge engine: actual records + stored plans + calendar baseline → one
//! authoritative month timeline.

use crate::calendar::HolidayCalendar;
use crate::core::month::month_calendar;
use crate::errors::AppResult;
use crate::models::{DayRecord, DayType, Duration, PlannedDay, WorkEntry, WorkplaceType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Default plan for a future working day nobody planned yet: a full office
/// day.
const DEFAULT_PLAN_MINUTES: i64 = 8 * 60;

/// Build the complete, date-ordered timeline for a month.
///
/// Precedence per date:
/// 1. elapsed dates: the portal record is authoritative, verbatim;
/// 2. future portal records that already carry real signal (positive
///    entries or a non-working day type) win over plans;
/// 3. a stored plan;
/// 4. future working days fall back to the default full office day;
/// 5. the bare calendar baseline (weekends, holidays, past days with no
///    data at all).
///
/// The output always has exactly one record per calendar day of the month.
pub fn merge_actual_and_planned(
    actual: &[DayRecord],
    planned: &[PlannedDay],
    year: i32,
    month: u32,
    today: NaiveDate,
    calendar: &dyn HolidayCalendar,
) -> AppResult<Vec<DayRecord>> {
    let actual_by_date: HashMap<NaiveDate, &DayRecord> =
        actual.iter().map(|r| (r.date, r)).collect();
    let planned_by_date: HashMap<NaiveDate, &PlannedDay> =
        planned.iter().map(|p| (p.date, p)).collect();

    let mut merged = Vec::new();

    for baseline in month_calendar(year, month, calendar)? {
        let target_date = baseline.date;

        let record = match actual_by_date.get(&target_date) {
            Some(actual) if target_date <= today => (*actual).clone(),
            Some(actual) if actual.is_meaningful() => (*actual).clone(),
            _ => match planned_by_date.get(&target_date) {
                Some(plan) => record_from_plan(plan, &baseline),
                None if target_date > today && baseline.day_type == DayType::WorkingDay => {
                    default_working_day(&baseline)
                }
                None => baseline,
            },
        };

        merged.push(record);
    }

    Ok(merged)
}

/// Synthesize a record from a stored plan. A paid-leave plan overrides the
/// baseline day type; office/remote minutes become "Planned" entries.
fn record_from_plan(plan: &PlannedDay, baseline: &DayRecord) -> DayRecord {
    let day_type = if plan.is_paid_leave {
        DayType::PaidLeave
    } else {
        baseline.day_type
    };

    let mut entries = Vec::new();
    if plan.office_minutes > 0 {
        entries.push(WorkEntry::planned(
            WorkplaceType::Office,
            Duration::from_minutes(plan.office_minutes),
        ));
    }
    if plan.remote_minutes > 0 {
        entries.push(WorkEntry::planned(
            WorkplaceType::Wfh,
            Duration::from_minutes(plan.remote_minutes),
        ));
    }

    DayRecord {
        date: plan.date,
        day_type,
        entries,
        memo: plan.note.clone(),
    }
}

fn default_working_day(baseline: &DayRecord) -> DayRecord {
    DayRecord {
        date: baseline.date,
        day_type: baseline.day_type,
        entries: vec![WorkEntry::planned(
            WorkplaceType::Office,
            Duration::from_minutes(DEFAULT_PLAN_MINUTES),
        )],
        memo: String::new(),
    }
}
