use crate::models::DayRecord;
use crate::utils::formatting::mins2readable;
use serde::Serialize;

/// Flat per-day row for CSV/JSON export of a merged timeline.
#[derive(Debug, Clone, Serialize)]
pub struct DayExport {
    pub date: String,
    pub day_type: &'static str,
    pub office: String,
    pub remote: String,
    pub total: String,
    pub expected: String,
    /// Cumulative balance up to and including this day.
    pub balance: String,
    pub memo: String,
}

impl DayExport {
    pub fn from_record(record: &DayRecord, running_balance: i64) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            day_type: record.day_type.as_str(),
            office: mins2readable(record.office_minutes(), false, true),
            remote: mins2readable(record.remote_minutes(), false, true),
            total: mins2readable(record.total_minutes(), false, true),
            expected: mins2readable(record.expected_minutes(), false, true),
            balance: mins2readable(running_balance, true, true),
            memo: record.memo.clone(),
        }
    }
}
