use crate::models::status::StatusScope;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// Attendance terminals backend: clock events, reports and provisioning on SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking: terminal clock-in/out API, CSV reports and provisioning on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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
    /// Initialize the database and configuration
    Init {
        #[arg(long = "seed", help = "Insert demo sites and employees into an empty database")]
        seed: bool,
    },

    /// Run the HTTP server (terminal API, terminal pages, reports)
    Serve {
        #[arg(long = "host", help = "Listen address (overrides the configuration)")]
        host: Option<String>,

        #[arg(long = "port", help = "Listen port (overrides the configuration)")]
        port: Option<u16>,
    },

    /// Record a clock event as a terminal would
    Clock {
        /// Personnel code of the employee
        personnel_code: String,

        /// Event kind: PRICHOD, ODCHOD, OBED_START, OBED_END, LEKAR_START,
        /// LEKAR_KONIEC, or arrival, departure, lunch-start, ...
        kind: String,

        #[arg(long = "site", help = "Site code of the terminal")]
        site: String,
    },

    /// Export the CSV attendance report to a file
    Export {
        #[arg(long = "file", help = "Output file, or a directory for the default file name")]
        file: String,

        /// Period: YYYY, YYYY-MM, YYYY-MM-DD, or a range like 2025-06-01:2025-06-10
        #[arg(long = "range", conflicts_with_all = ["from", "to", "today"])]
        range: Option<String>,

        #[arg(long = "from", requires = "to", help = "First day (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", requires = "from", help = "Last day (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "today", conflicts_with_all = ["from", "to"], help = "Export today's events")]
        today: bool,

        #[arg(long = "scope", value_enum, help = "Events feeding the status column")]
        scope: Option<StatusScope>,

        #[arg(long = "force", help = "Overwrite an existing file")]
        force: bool,
    },

    /// List the events of a day with the derived status
    List {
        #[arg(long = "date", help = "Day to list (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "employee", help = "Only this personnel code")]
        employee: Option<String>,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage sites
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an active employee
    Add {
        personnel_code: String,
        first_name: String,
        last_name: String,
    },
    /// Hide an employee from terminals; history is kept
    Deactivate { personnel_code: String },
    /// Re-enable a deactivated employee
    Activate { personnel_code: String },
    /// List all employees
    List,
}

#[derive(Subcommand)]
pub enum SiteAction {
    /// Add a site
    Add { code: String, name: String },
    /// List all sites
    List,
}
