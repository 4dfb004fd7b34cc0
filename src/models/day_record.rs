use super::{day_type::DayType, work_entry::WorkEntry, workplace::WorkplaceType};
use chrono::NaiveDate;
use serde::Serialize;

/// Record for a single calendar day. Any produced timeline holds exactly one
/// record per date.
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub entries: Vec<WorkEntry>,
    pub memo: String,
}

impl DayRecord {
    pub fn empty(date: NaiveDate, day_type: DayType) -> Self {
        Self {
            date,
            day_type,
            entries: Vec::new(),
            memo: String::new(),
        }
    }

    /// Office minutes for this day, leave allotments excluded.
    pub fn office_minutes(&self) -> i64 {
        self.workplace_minutes(WorkplaceType::Office)
    }

    /// Remote (WFH) minutes for this day, leave allotments excluded.
    pub fn remote_minutes(&self) -> i64 {
        self.workplace_minutes(WorkplaceType::Wfh)
    }

    fn workplace_minutes(&self, workplace: WorkplaceType) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.workplace == workplace && !e.is_leave())
            .map(|e| e.duration.minutes())
            .sum()
    }

    pub fn total_minutes(&self) -> i64 {
        self.entries.iter().map(|e| e.duration.minutes()).sum()
    }

    pub fn expected_minutes(&self) -> i64 {
        if self.day_type.owes_hours() { 8 * 60 } else { 0 }
    }

    /// A future-dated record that already carries real signal from the
    /// portal: at least one positive-duration entry, or a day type the
    /// portal set itself (leave, holiday, weekend). Such records must not
    /// be overridden by stored plans.
    pub fn is_meaningful(&self) -> bool {
        self.entries.iter().any(|e| e.duration.minutes() > 0)
            || self.day_type != DayType::WorkingDay
    }
}
