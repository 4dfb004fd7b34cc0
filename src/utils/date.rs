use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM` month argument.
pub fn parse_month(text: &str) -> AppResult<(i32, u32)> {
    let invalid = || AppError::InvalidMonth(text.to_string());

    let (y, m) = text.split_once('-').ok_or_else(invalid)?;
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;

    // Rejecting a bad month here keeps calendar generation infallible.
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

    Ok((year, month))
}

pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(text.to_string()))
}

pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    Ok(all_days_of_month(year, month)?.len() as u32)
}

pub fn all_days_of_month(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let mut out = Vec::new();
    let mut d = first_of_month(year, month)?;

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

/// First day of the following month (used as an exclusive range bound).
pub fn first_of_next_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    // December rolls over to January of the next year.
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}
