use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::models::{Duration, PlannedDay};
use crate::ui::messages;
use crate::utils::{date, time};
use ansi_term::Colour;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        date: date_arg,
        office,
        remote,
        paid_leave,
        note,
        clear,
        list,
        month,
    } = cmd
    {
        let mut pool = db::open(cfg)?;

        if *list {
            return list_plans(&mut pool, month);
        }

        let Some(date_arg) = date_arg else {
            return Err(AppError::InvalidDate(
                "missing DATE (or use --list)".to_string(),
            ));
        };
        let target_date = date::parse_date(date_arg)?;

        if *clear {
            if db::plans::delete_plan(&pool.conn, target_date)? {
                messages::success(format!("Plan for {target_date} removed"));
            } else {
                messages::info(format!("No plan stored for {target_date}"));
            }
            return Ok(());
        }

        let plan = PlannedDay {
            date: target_date,
            office_minutes: parse_minutes(office)?,
            remote_minutes: parse_minutes(remote)?,
            is_paid_leave: *paid_leave,
            note: note.clone().unwrap_or_default(),
        };

        db::plans::upsert_plan(&pool.conn, &plan)?;
        messages::success(format!(
            "Plan for {target_date}: office {}, remote {}{}",
            Duration::from_minutes(plan.office_minutes),
            Duration::from_minutes(plan.remote_minutes),
            if plan.is_paid_leave { ", paid leave" } else { "" },
        ));
    }
    Ok(())
}

fn parse_minutes(arg: &Option<String>) -> AppResult<i64> {
    match arg {
        Some(text) => Ok(Duration::parse(text)?.minutes()),
        None => Ok(0),
    }
}

fn list_plans(pool: &mut db::pool::DbPool, month_arg: &Option<String>) -> AppResult<()> {
    let (year, month) = match month_arg {
        Some(m) => date::parse_month(m)?,
        None => {
            let today = time::today_jst();
            (today.year(), today.month())
        }
    };

    let plans = db::plans::plans_for_month(pool, year, month)?;

    if plans.is_empty() {
        messages::info(format!("No plans stored for {year}-{month:02}"));
        return Ok(());
    }

    println!("Plans for {year}-{month:02}:\n");
    for plan in plans {
        let day = format!(
            "{} | office {} | remote {}",
            plan.date,
            Duration::from_minutes(plan.office_minutes),
            Duration::from_minutes(plan.remote_minutes),
        );

        let mut line = if plan.is_paid_leave {
            format!("{} | {}", day, Colour::Cyan.paint("paid leave"))
        } else {
            day
        };

        if !plan.note.is_empty() {
            line.push_str(&format!(" | {}", plan.note));
        }

        println!("- {line}");
    }

    Ok(())
}
