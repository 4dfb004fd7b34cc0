//! Balance and statistics: a single quota-aware chronological scan over the
//! merged month timeline.

use crate::models::{ClockOutHint, DayRecord, DayType, Duration, MonthStats};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const REQUIRED_MINUTES_PER_DAY: i64 = 8 * 60;
pub const WFH_QUOTA_MINUTES_PER_DAY: i64 = 60;

/// Compute monthly statistics and the per-day cumulative balance map.
///
/// `records` must be the full date-ordered month timeline produced by the
/// merge engine. `today` and `now` are the reference date and wall-clock
/// time, read once by the caller.
///
/// WFH counts toward the balance only up to the month's quota pool; the pool
/// is consumed chronologically by the raw remote amount and never goes below
/// zero. The raw (uncapped) office/WFH totals are kept for display.
pub fn month_stats(
    year: i32,
    month: u32,
    records: &[DayRecord],
    today: NaiveDate,
    now: Duration,
) -> (MonthStats, BTreeMap<NaiveDate, i64>) {
    let quota_pool = wfh_quota_pool(records);

    let mut working_days: u32 = 0;
    let mut paid_leave_days: u32 = 0;
    let mut total_office_minutes: i64 = 0;
    let mut total_wfh_minutes: i64 = 0;

    let mut remaining_quota = quota_pool;
    let mut running_balance: i64 = 0;
    let mut current_balance: i64 = 0;
    let mut daily_balances = BTreeMap::new();

    for record in records {
        if record.day_type.in_quota_pool() {
            working_days += 1;
        }
        if record.day_type == DayType::PaidLeave {
            paid_leave_days += 1;
        }

        let office = record.office_minutes();
        let remote = record.remote_minutes();
        total_office_minutes += office;
        total_wfh_minutes += remote;

        let capped_wfh = remote.min(remaining_quota);
        remaining_quota = (remaining_quota - remote).max(0);

        running_balance += office + capped_wfh - record.expected_minutes();
        daily_balances.insert(record.date, running_balance);

        if record.date <= today {
            current_balance = running_balance;
        }
    }

    // Paid leave reduces the requirement but not the quota pool.
    let actual_working_days = working_days - paid_leave_days;
    let total_required_hours = f64::from(actual_working_days * 8);
    let wfh_quota_hours = f64::from(working_days);
    let office_required_hours = total_required_hours - wfh_quota_hours;

    let suggested_clockout = suggested_clockout(records, &daily_balances, today, now);

    let stats = MonthStats {
        year,
        month,
        working_days,
        paid_leave_days,
        total_required_hours,
        wfh_quota_hours,
        office_required_hours,
        actual_office_hours: total_office_minutes as f64 / 60.0,
        actual_wfh_hours: total_wfh_minutes as f64 / 60.0,
        balance_minutes: running_balance,
        current_balance_minutes: current_balance,
        suggested_clockout,
    };

    (stats, daily_balances)
}

fn wfh_quota_pool(records: &[DayRecord]) -> i64 {
    let pool_days = records.iter().filter(|r| r.day_type.in_quota_pool()).count();
    WFH_QUOTA_MINUTES_PER_DAY * pool_days as i64
}

/// Project the clock-out time that closes today's requirement, for an
/// in-progress working day. `None` when today is outside the timeline or
/// not a working day.
fn suggested_clockout(
    records: &[DayRecord],
    daily_balances: &BTreeMap<NaiveDate, i64>,
    today: NaiveDate,
    now: Duration,
) -> Option<ClockOutHint> {
    let today_record = records.iter().find(|r| r.date == today)?;
    if today_record.day_type != DayType::WorkingDay {
        return None;
    }

    let yesterday_balance = today
        .pred_opt()
        .and_then(|d| daily_balances.get(&d).copied())
        .unwrap_or(0);
    let minutes_needed_today = REQUIRED_MINUTES_PER_DAY - yesterday_balance;

    // Quota left before today's remote work is counted: replay the
    // depletion over the records strictly before today.
    let mut remaining_quota = wfh_quota_pool(records);
    for record in records.iter().take_while(|r| r.date < today) {
        remaining_quota = (remaining_quota - record.remote_minutes()).max(0);
    }

    let capped_wfh = today_record.remote_minutes().min(remaining_quota);
    let worked_today = today_record.office_minutes() + capped_wfh;

    let remaining = minutes_needed_today - worked_today;
    if remaining <= 0 {
        Some(ClockOutHint::Done)
    } else {
        Some(ClockOutHint::LeaveAt(now + Duration::from_minutes(remaining)))
    }
}
