use super::{duration::Duration, workplace::WorkplaceType};
use serde::Serialize;

/// One clock-in/clock-out pair or a leave allotment for a day.
#[derive(Debug, Clone, Serialize)]
pub struct WorkEntry {
    pub workplace: WorkplaceType,
    pub clock_in: Option<Duration>,
    pub clock_out: Option<Duration>,
    pub duration: Duration,
    pub category: String,
}

impl WorkEntry {
    /// Entry synthesized from a stored plan (no clock times).
    pub fn planned(workplace: WorkplaceType, duration: Duration) -> Self {
        Self {
            workplace,
            clock_in: None,
            clock_out: None,
            duration,
            category: "Planned".to_string(),
        }
    }

    /// Leave allotments carry a duration but no real work.
    pub fn is_leave(&self) -> bool {
        let category = self.category.to_lowercase();
        category.contains("leave") || category.contains("holiday")
    }
}
