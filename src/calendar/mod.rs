//! Holiday calendar lookup.
//!
//! The reconciliation core only needs two answers per date: is it a public
//! holiday, and what is the holiday called. Both sit behind a trait so tests
//! can run against a fixed table.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::path::Path;

pub trait HolidayCalendar {
    fn is_public_holiday(&self, date: NaiveDate) -> bool;
    fn holiday_name(&self, date: NaiveDate) -> Option<&str>;
}

/// A weekday that is not a declared public holiday.
pub fn is_working_day(calendar: &dyn HolidayCalendar, date: NaiveDate) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    !calendar.is_public_holiday(date)
}

/// Holiday table backed by a date → name map, loaded from YAML.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    table: BTreeMap<NaiveDate, String>,
}

impl StaticHolidays {
    /// The Japanese national-holiday table shipped with the binary.
    pub fn bundled() -> Self {
        Self::from_yaml(include_str!("holidays_jp.yaml"))
            .expect("bundled holiday table is valid")
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(content)
            .map_err(|e| AppError::Calendar(e.to_string()))?;

        let mut table = BTreeMap::new();
        for (date_str, name) in raw {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
            table.insert(date, name);
        }

        Ok(Self { table })
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, String)>,
    {
        Self {
            table: pairs.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for StaticHolidays {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.table.contains_key(&date)
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.table.get(&date).map(String::as_str)
    }
}
