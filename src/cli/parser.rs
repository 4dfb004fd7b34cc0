use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kintai
/// CLI application to reconcile portal attendance with planned days
#[derive(Parser)]
#[command(
    name = "kintai",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile portal attendance with planned days and track the monthly work-hour balance",
    long_about = None
)]
pub struct Cli {
    /// Override plan database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the plan database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Show the merged month timeline with the running balance
    Show {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Attendance chart JSON exported from the portal
        #[arg(long, value_name = "FILE")]
        chart: Option<String>,

        /// Override the reference date (YYYY-MM-DD, default: today in JST)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// Show monthly statistics only
    Stats {
        /// Month to analyze (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Attendance chart JSON exported from the portal
        #[arg(long, value_name = "FILE")]
        chart: Option<String>,

        /// Override the reference date (YYYY-MM-DD, default: today in JST)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },

    /// Set, clear or list planned days
    Plan {
        /// Date of the plan (YYYY-MM-DD)
        date: Option<String>,

        /// Planned office time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        office: Option<String>,

        /// Planned remote time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        remote: Option<String>,

        /// Mark the day as paid leave
        #[arg(long = "paid-leave")]
        paid_leave: bool,

        /// Free-form note shown in the timeline
        #[arg(long)]
        note: Option<String>,

        /// Remove the plan for the given date
        #[arg(long)]
        clear: bool,

        /// List stored plans instead of editing
        #[arg(long)]
        list: bool,

        /// Month filter for --list (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Export the merged month timeline
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Month to export (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Attendance chart JSON exported from the portal
        #[arg(long, value_name = "FILE")]
        chart: Option<String>,

        /// Override the reference date (YYYY-MM-DD, default: today in JST)
        #[arg(long, value_name = "DATE")]
        today: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}
