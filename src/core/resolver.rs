//! Effective worked duration for a single chart entry.

use crate::models::Duration;

/// Raw work time at or above this threshold triggers the mandatory break.
pub const MANDATORY_BREAK_THRESHOLD: i64 = 6 * 60;
pub const MANDATORY_BREAK_MINUTES: i64 = 60;

const HALF_DAY_LEAVE: [&str; 4] = [
    "Half Day Leave AM",
    "Half Day Leave PM",
    "Flexible Holiday AM",
    "Flexible Holiday PM",
];

const FULL_DAY_LEAVE: [&str; 8] = [
    "Paid Leave",
    "Unpaid Leave",
    "GW Substitute Leave",
    "Wedding Leave",
    "Paternity Leave",
    "Condolence Leave",
    "Special Leave",
    "Flexible Holiday",
];

/// Compute the effective duration of one entry.
///
/// Leave categories resolve to fixed allotments before any clock time is
/// considered; the half-day set must be checked first because the portal's
/// half-day labels contain the full-day ones. An entry with a clock-in but
/// no clock-out is the still-open entry of the current day and is closed at
/// `now` (wall-clock minutes since midnight, read once by the caller).
///
/// Malformed input can drive the result negative; that is passed through as
/// a data-quality signal rather than clamped.
pub fn entry_duration(
    category: &str,
    clock_in: Option<Duration>,
    clock_out: Option<Duration>,
    now: Duration,
) -> Duration {
    if HALF_DAY_LEAVE.iter().any(|c| category.contains(c)) {
        return Duration::from_hours(4);
    }

    // "Leagve" shows up in portal data next to the correct spelling.
    if FULL_DAY_LEAVE.iter().any(|c| category.contains(c))
        || category.ends_with("Leave")
        || category.ends_with("Leagve")
    {
        return Duration::from_hours(8);
    }

    let Some(clock_in) = clock_in else {
        return Duration::ZERO;
    };

    let mut clock_out = clock_out.unwrap_or(now);

    // After-midnight clock-out.
    if clock_out < clock_in {
        clock_out = clock_out + Duration::from_hours(24);
    }

    let mut work = clock_out - clock_in;

    if work.minutes() >= MANDATORY_BREAK_THRESHOLD {
        work = work - Duration::from_minutes(MANDATORY_BREAK_MINUTES);
    }

    work
}
