use crate::calendar::HolidayCalendar;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::models::DayType;
use crate::ui::messages;
use crate::utils::colors::{BLUE, BOLD, MAGENTA, RED, RESET, YELLOW};
use crate::utils::formatting::mins2readable;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        chart,
        today,
    } = cmd
    {
        let (report, today) = super::build_report(cfg, month, chart, today)?;
        let calendar = cfg.holiday_calendar()?;

        for issue in &report.issues {
            messages::warning(format!("day {}: {}", issue.day_of_month, issue.reason));
        }

        let mut table = Table::new([
            "Date", "Day", "Clock", "Office", "WFH", "Expected", "Balance", "Memo",
        ]);

        for record in &report.records {
            let balance = report
                .daily_balances
                .get(&record.date)
                .copied()
                .unwrap_or(0);

            table.add_row(vec![
                record.date.format("%m-%d %a").to_string(),
                record.day_type.label().to_string(),
                clock_cell(record),
                minutes_cell(record.office_minutes()),
                minutes_cell(record.remote_minutes()),
                minutes_cell(record.expected_minutes()),
                mins2readable(balance, true, true),
                memo_cell(record, &calendar),
            ]);
        }

        println!();
        let lines = table.render_lines();
        for (i, line) in lines.iter().enumerate() {
            // first two lines are header and separator
            if i < 2 {
                println!("{line}");
                continue;
            }
            let record = &report.records[i - 2];
            let weight = if record.date == today { BOLD } else { "" };
            println!("{weight}{}{line}{RESET}", row_color(record));
        }

        println!();
        super::stats::print_stats(&report.stats);
    }
    Ok(())
}

/// Clock cell of the first clocked entry; `+` marks additional entries.
fn clock_cell(record: &DayRecord) -> String {
    let mut clocked = record.entries.iter().filter(|e| e.clock_in.is_some());

    let Some(first) = clocked.next() else {
        return String::new();
    };

    let clock_in = first.clock_in.map(|t| t.to_string()).unwrap_or_default();
    let clock_out = first
        .clock_out
        .map(|t| t.to_string())
        .unwrap_or_else(|| "--:--".to_string());

    let more = if clocked.next().is_some() { " +" } else { "" };
    format!("{clock_in}-{clock_out}{more}")
}

fn minutes_cell(minutes: i64) -> String {
    if minutes == 0 {
        String::new()
    } else {
        mins2readable(minutes, false, true)
    }
}

/// Plan note or portal memo; empty holiday rows fall back to the holiday
/// name from the calendar table.
fn memo_cell(record: &DayRecord, calendar: &dyn HolidayCalendar) -> String {
    if !record.memo.is_empty() {
        return record.memo.clone();
    }
    if record.day_type == DayType::Holiday {
        return holiday_name(calendar, record.date);
    }
    String::new()
}

fn holiday_name(calendar: &dyn HolidayCalendar, date: NaiveDate) -> String {
    calendar
        .holiday_name(date)
        .map(str::to_string)
        .unwrap_or_default()
}

fn row_color(record: &DayRecord) -> &'static str {
    match record.day_type {
        DayType::Weekend => BLUE,
        DayType::Holiday => RED,
        DayType::PaidLeave => MAGENTA,
        DayType::UnpaidLeave => YELLOW,
        DayType::WorkingDay => "",
    }
}
