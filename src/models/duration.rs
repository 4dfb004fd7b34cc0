use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Signed minute count, the unit of every time computation.
/// Doubles as a clock time (minutes since midnight) when parsed from the
/// portal's `HH:MM` cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub fn from_minutes(minutes: i64) -> Self {
        Duration(minutes)
    }

    pub fn from_hours(hours: i64) -> Self {
        Duration(hours * 60)
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 as f64 / 60.0
    }

    /// Parse an `HH:MM` cell. The portal renders missing values as an empty
    /// string, which counts as zero.
    pub fn parse(text: &str) -> AppResult<Self> {
        if text.is_empty() {
            return Ok(Duration(0));
        }

        let (h, m) = text
            .split_once(':')
            .ok_or_else(|| AppError::InvalidTime(text.to_string()))?;

        let hours: i64 = h
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidTime(text.to_string()))?;
        let minutes: i64 = m
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidTime(text.to_string()))?;

        if !(0..60).contains(&minutes) {
            return Err(AppError::InvalidTime(text.to_string()));
        }

        Ok(Duration(hours * 60 + minutes))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let m = self.0.abs();
        write!(f, "{}{:02}:{:02}", sign, m / 60, m % 60)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration(self.0 * rhs)
    }
}
