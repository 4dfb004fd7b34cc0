//! Formatting utilities used for CLI and export outputs.

/// Minutes → `HH:MM` (short) or `HHh MMm`, with an explicit sign when asked.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Hours as a compact decimal, e.g. `152h` or `7.5h`.
pub fn fmt_hours(hours: f64) -> String {
    if (hours - hours.round()).abs() < f64::EPSILON {
        format!("{}h", hours.round() as i64)
    } else {
        format!("{hours:.1}h")
    }
}
