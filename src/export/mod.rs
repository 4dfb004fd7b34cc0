mod csv;
mod json;
mod model;

pub use model::DayExport;

use crate::core::MonthReport;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flatten a month report into export rows and write them out.
pub fn write_report(report: &MonthReport, format: &ExportFormat, path: &str) -> AppResult<()> {
    let rows: Vec<DayExport> = report
        .records
        .iter()
        .map(|record| {
            let balance = report
                .daily_balances
                .get(&record.date)
                .copied()
                .unwrap_or(0);
            DayExport::from_record(record, balance)
        })
        .collect();

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows)?,
        ExportFormat::Json => json::write_json(path, &rows)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        Path::new(path).display()
    ));
    Ok(())
}
