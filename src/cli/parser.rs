use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDailyLog
#[derive(Parser)]
#[command(
    name = "rdailylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily work log: time-blocked entries, Jira references and a ready-to-paste status post",
    long_about = "Daily work log: time-blocked entries, Jira references and a ready-to-paste status post.\n\nRun without a subcommand to open the interactive window."
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom location)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is the given date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init,

    /// Open the interactive window (default when no subcommand is given)
    Ui,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        /// Print every line of the operation log
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Add a work log entry to today
    Add {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
        /// What was done
        #[arg(required = true, num_args = 1..)]
        desc: Vec<String>,
    },

    /// Edit a work log entry of today
    Edit {
        /// Position in the list shown by `show` (1-based, sorted by start time)
        position: usize,
        /// New start time (HH:MM)
        start: String,
        /// New end time (HH:MM)
        end: String,
        /// Replace the description too; without it only the times change
        #[arg(long = "desc")]
        desc: Option<String>,
    },

    /// Delete a work log entry of today
    Del {
        /// Position in the list shown by `show` (1-based, sorted by start time)
        position: usize,
    },

    /// Manage today's and the next working day's Jira references
    Jira {
        #[command(subcommand)]
        action: JiraAction,
    },

    /// Show or set the planned next working date
    NextDate {
        /// New date (YYYY-MM-DD); weekends and past dates are accepted as given
        date: Option<String>,
    },

    /// Show today's log, total hours, references and status post
    Show,

    /// Print the status post for today
    Post {
        /// Also copy it to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print all of today's descriptions, one per line
    Descs {
        /// Also copy them to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Remove records older than the retention window
    Prune {
        /// Retention window in days (default: `retention_days` from config)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },

    /// Export every stored work log entry
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum JiraAction {
    /// Add a reference
    Add {
        /// Issue key or link
        link: String,
        /// Add to the next working day's list instead of today's
        #[arg(long)]
        next: bool,
    },
    /// Delete a reference by its 1-based position
    Del {
        position: usize,
        /// Delete from the next working day's list instead of today's
        #[arg(long)]
        next: bool,
    },
    /// Copy references from the most recent earlier day with records
    Carry,
}
