use crate::export::{ExportFormat, ExportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import an employee roster, mark daily attendance and estimate monthly payroll",
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
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import the employee roster from a spreadsheet (xlsx, xls, ods) or CSV.
    ///
    /// Expected columns: "Card No", "Employee Name", "Place of Duty",
    /// "Salary Amount (Rs,)". The previous roster is replaced.
    Import {
        /// Roster file
        file: String,
    },

    /// Show the loaded roster
    Roster,

    /// Mark and save the attendance of a date.
    ///
    /// Entries are ID=STATUS pairs; STATUS is Present, LWP, Sick, Vacation
    /// or Holiday (or a grid code: A, N, S, V, H). Employees not listed keep
    /// the status already saved for the date, or Present.
    ///
    /// Examples:
    ///   rattendance mark 2025-03-04 17=LWP 21=Sick
    ///   rattendance mark 2025-03-04 --reset
    Mark {
        /// Date (YYYY-MM-DD)
        date: String,

        /// ID=STATUS entries
        entries: Vec<String>,

        #[arg(long, help = "Start from an empty record (everyone Present)")]
        reset: bool,
    },

    /// Show a saved attendance record with its statistics
    Show {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(
            long,
            short,
            help = "Filter rows by status: All, Present, LWP, Sick, Vacation, Holiday"
        )]
        filter: Option<String>,
    },

    /// List saved attendance dates, or move history in/out as JSON
    History {
        #[arg(
            long = "import",
            value_name = "FILE",
            conflicts_with = "export",
            help = "Merge a JSON history file (imported dates overwrite saved ones)"
        )]
        import: Option<String>,

        #[arg(long = "export", value_name = "FILE", help = "Write the history as JSON")]
        export: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the export file without confirmation")]
        force: bool,
    },

    /// Monthly payroll (LWP count and net pay per employee)
    Payroll {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Monthly calendar grid with status codes
    Grid {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Export attendance data.
    ///
    /// Examples:
    ///   rattendance export daily 2025-03-04
    ///   rattendance export past 2025-03-04 --format csv --file out.csv
    ///   rattendance export summary 2025-03
    Export {
        #[arg(value_enum)]
        kind: ExportKind,

        /// YYYY-MM-DD for daily/past, YYYY-MM for summary
        period: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
