use super::duration::Duration;
use serde::Serialize;

/// Same-day clock-out projection for an in-progress working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClockOutHint {
    /// Today's required minutes are already covered.
    Done,
    /// Wall-clock time at which the day's requirement will be met.
    LeaveAt(Duration),
}

/// Aggregated totals for one month of merged records.
/// Recomputed on every refresh, never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    /// Days owing hours or feeding the WFH quota pool (paid leave included).
    pub working_days: u32,
    pub paid_leave_days: u32,
    pub total_required_hours: f64,
    pub wfh_quota_hours: f64,
    pub office_required_hours: f64,
    pub actual_office_hours: f64,
    pub actual_wfh_hours: f64,
    /// Full-month running balance, WFH capped at quota day by day.
    pub balance_minutes: i64,
    /// Running balance as of the latest elapsed day.
    pub current_balance_minutes: i64,
    pub suggested_clockout: Option<ClockOutHint>,
}

impl MonthStats {
    /// How far WFH hours are over quota (negative if under).
    pub fn wfh_over_quota(&self) -> f64 {
        self.actual_wfh_hours - self.wfh_quota_hours
    }

    /// How far office hours are under the office requirement (negative if
    /// over).
    pub fn office_deficit(&self) -> f64 {
        self.office_required_hours - self.actual_office_hours
    }

    /// End-of-month shortfall. WFH contributes only up to quota; the excess
    /// never counts toward the requirement.
    pub fn total_deficit(&self) -> f64 {
        let wfh_contribution = self.actual_wfh_hours.min(self.wfh_quota_hours);
        self.total_required_hours - (self.actual_office_hours + wfh_contribution)
    }
}
