use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ui::messages;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        chart,
        today,
        force,
    } = cmd
    {
        if Path::new(file).exists() && !force {
            return Err(AppError::Export(format!(
                "{file} already exists (use --force to overwrite)"
            )));
        }

        let (report, _today) = super::build_report(cfg, month, chart, today)?;

        for issue in &report.issues {
            messages::warning(format!("day {}: {}", issue.day_of_month, issue.reason));
        }

        export::write_report(&report, format, file)?;
    }
    Ok(())
}
