use chrono::NaiveDate;
use serde::Serialize;

/// A user-authored forecast for a future day, one optional row per date.
/// Owned by the plan store; consumed read-only by the merge engine.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub office_minutes: i64,
    pub remote_minutes: i64,
    pub is_paid_leave: bool,
    pub note: String,
}
