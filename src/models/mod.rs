pub mod day_record;
pub mod day_type;
pub mod duration;
pub mod month_stats;
pub mod planned_day;
pub mod work_entry;
pub mod workplace;

pub use day_record::DayRecord;
pub use day_type::DayType;
pub use duration::Duration;
pub use month_stats::{ClockOutHint, MonthStats};
pub use planned_day::PlannedDay;
pub use work_entry::WorkEntry;
pub use workplace::WorkplaceType;
