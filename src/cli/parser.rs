use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for crewledger
#[derive(Parser)]
#[command(
    name = "crewledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Crew timesheets and payroll hours for construction teams, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List settings missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing settings with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database schema
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Fail if the schema is not current")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Manage the worker registry
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Compute hours and cost for one shift without storing anything
    Calc {
        /// Clock-in time (HH:MM); defaults to the company work-day start
        #[arg(long = "in")]
        clock_in: Option<String>,

        /// Clock-out time (HH:MM); earlier than --in means an overnight shift
        #[arg(long = "out")]
        clock_out: Option<String>,

        /// Break in minutes; defaults to the company break time
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        /// Hourly rate, e.g. 27.50
        #[arg(long)]
        rate: String,

        /// Number of identical days
        #[arg(long, default_value_t = 1)]
        days: u32,
    },

    /// Log the same shift for several workers over a date range
    Bulk {
        /// Worker id (repeat for each worker)
        #[arg(long = "worker", short = 'w', required = true)]
        workers: Vec<String>,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last day (YYYY-MM-DD); defaults to --from
        #[arg(long)]
        to: Option<String>,

        /// Clock-in time (HH:MM); defaults to the company work-day start
        #[arg(long = "in")]
        clock_in: Option<String>,

        /// Clock-out time (HH:MM); defaults to the company work-day end
        #[arg(long = "out")]
        clock_out: Option<String>,

        /// Break in minutes; defaults to the company break time
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        /// Hourly rate for every listed worker instead of their own rate
        #[arg(long)]
        rate: Option<String>,

        /// Task description stored with each row
        #[arg(long)]
        task: Option<String>,

        /// Free-form notes stored with each row
        #[arg(long)]
        notes: Option<String>,

        /// Show the totals without storing anything
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// List stored timesheet rows
    List {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end in the same format.
        /// Defaults to the current pay period.
        #[arg(long, short)]
        period: Option<String>,

        /// Only rows for this worker
        #[arg(long, short = 'w')]
        worker: Option<String>,
    },

    /// Delete a stored timesheet row by id
    Del {
        /// Row id as shown by `list`
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Payroll report per worker for a period
    Report {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end in the same format.
        /// Defaults to the current pay period.
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Export the payroll report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "PERIOD")]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Register a worker
    Add {
        id: String,

        #[arg(long)]
        name: String,

        /// Hourly rate, e.g. 27.50
        #[arg(long)]
        rate: String,
    },

    /// List workers
    List {
        /// Include deactivated workers
        #[arg(long)]
        all: bool,
    },

    /// Change a worker's hourly rate (existing rows keep their rate)
    Rate { id: String, rate: String },

    /// Deactivate a worker; their rows stay in reports
    Deactivate { id: String },
}
