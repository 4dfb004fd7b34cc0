use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayType {
    WorkingDay,
    Weekend,
    Holiday,
    PaidLeave,
    UnpaidLeave,
}

impl DayType {
    pub fn code(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "W",
            DayType::Weekend => "E",
            DayType::Holiday => "H",
            DayType::PaidLeave => "P",
            DayType::UnpaidLeave => "U",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "Working",
            DayType::Weekend => "Weekend",
            DayType::Holiday => "Holiday",
            DayType::PaidLeave => "Paid leave",
            DayType::UnpaidLeave => "Unpaid leave",
        }
    }

    /// Export string (stable, lowercase with underscores).
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "working_day",
            DayType::Weekend => "weekend",
            DayType::Holiday => "holiday",
            DayType::PaidLeave => "paid_leave",
            DayType::UnpaidLeave => "unpaid_leave",
        }
    }

    /// Days owing the full 8 hours. Unpaid leave keeps the hours due.
    pub fn owes_hours(&self) -> bool {
        matches!(self, DayType::WorkingDay | DayType::UnpaidLeave)
    }

    /// Days feeding the WFH quota pool. Paid leave stays in the pool even
    /// though it owes no hours; that is workplace policy, not an oversight.
    pub fn in_quota_pool(&self) -> bool {
        matches!(
            self,
            DayType::WorkingDay | DayType::UnpaidLeave | DayType::PaidLeave
        )
    }
}
