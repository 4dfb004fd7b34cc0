//! Raw attendance chart rows, as exported from the time-tracking portal.
//!
//! The scraper that turns the portal's markup into these rows lives outside
//! this tool; we consume its JSON dump as already-structured input. All cell
//! values stay raw text here; typing happens in `core::parse`.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// One sub-row of the chart: a clock-in/out pair or a leave allotment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartEntry {
    #[serde(default)]
    pub workplace: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub clock_in: String,
    #[serde(default)]
    pub clock_out: String,
    #[serde(default)]
    pub memo: String,
}

/// One chart row: a day marker plus the day's entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRow {
    /// Day marker cell, e.g. `8/15(Fri)`. Summary rows carry free text.
    pub day: String,
    /// Cell color signal: `red` for holidays, `blue` for weekends.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub entries: Vec<ChartEntry>,
    #[serde(default)]
    pub memo: String,
}

fn day_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})\(.+\)$").expect("static regex"))
}

impl ChartRow {
    /// Day of month from the `M/D(weekday)` marker. Rows without a parsable
    /// marker (summary rows) report day 0 and are skipped by the parser.
    pub fn day_of_month(&self) -> u32 {
        day_marker_regex()
            .captures(self.day.trim())
            .and_then(|c| c.get(2))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }
}

/// Load chart rows from a JSON dump.
pub fn load_chart(path: &Path) -> AppResult<Vec<ChartRow>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Chart(format!("{}: {}", path.display(), e)))
}
