//! Reference-timezone clock reads.
//!
//! Everything downstream takes "today" and "now" as explicit parameters;
//! these helpers are called exactly once at the start of a computation so a
//! scan never sees two different wall-clock reads.

use crate::models::Duration;
use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// The portal runs on Japan Standard Time. Fixed offset, no DST.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("static UTC offset")
}

pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

pub fn today_jst() -> NaiveDate {
    now_jst().date_naive()
}

/// Current wall-clock time as minutes since midnight.
pub fn time_of_day_jst() -> Duration {
    let now = now_jst();
    Duration::from_minutes((now.hour() * 60 + now.minute()) as i64)
}
