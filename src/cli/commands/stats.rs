use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{ClockOutHint, MonthStats};
use crate::ui::messages;
use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, color_for_balance};
use crate::utils::formatting::{fmt_hours, mins2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        month,
        chart,
        today,
    } = cmd
    {
        let (report, _today) = super::build_report(cfg, month, chart, today)?;

        for issue in &report.issues {
            messages::warning(format!("day {}: {}", issue.day_of_month, issue.reason));
        }

        println!();
        print_stats(&report.stats);
    }
    Ok(())
}

pub(crate) fn print_stats(stats: &MonthStats) {
    println!("{BOLD}Statistics {}-{:02}{RESET}", stats.year, stats.month);
    println!(
        "{CYAN}• Working days:{RESET}    {} ({} paid leave)",
        stats.working_days, stats.paid_leave_days
    );
    println!(
        "{CYAN}• Required:{RESET}        {}",
        fmt_hours(stats.total_required_hours)
    );
    println!(
        "{CYAN}• WFH quota:{RESET}       {}",
        fmt_hours(stats.wfh_quota_hours)
    );
    println!(
        "{CYAN}• Office required:{RESET} {}",
        fmt_hours(stats.office_required_hours)
    );
    println!(
        "{CYAN}• Office done:{RESET}     {}",
        fmt_hours(stats.actual_office_hours)
    );
    println!(
        "{CYAN}• WFH done:{RESET}        {}",
        fmt_hours(stats.actual_wfh_hours)
    );

    let over_quota = stats.wfh_over_quota();
    if over_quota > 0.0 {
        println!("{RED}• WFH over quota:  {}{RESET}", fmt_hours(over_quota));
    } else {
        println!("{GREEN}• WFH left:        {}{RESET}", fmt_hours(-over_quota));
    }

    let current = stats.current_balance_minutes;
    println!(
        "{CYAN}• Balance to date:{RESET} {}{}{RESET}",
        color_for_balance(current),
        mins2readable(current, true, true)
    );

    let month_balance = stats.balance_minutes;
    println!(
        "{CYAN}• Month balance:{RESET}   {}{}{RESET}",
        color_for_balance(month_balance),
        mins2readable(month_balance, true, true)
    );

    match stats.suggested_clockout {
        Some(ClockOutHint::Done) => {
            println!("{GREEN}• Today's required hours are already covered{RESET}")
        }
        Some(ClockOutHint::LeaveAt(t)) => {
            println!("{CYAN}• Time to leave:{RESET}   {BOLD}{t}{RESET}")
        }
        None => {}
    }
}
