use clap::{Parser, Subcommand};

/// Command-line interface definition for tracklet
/// CLI application to run one stopwatch per user and keep durations honest
#[derive(Parser)]
#[command(
    name = "tracklet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-stopwatch time tracker: durable sessions, precise durations, drift-healing reconciliation",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override session cache path (useful for tests)
    #[arg(global = true, long = "cache")]
    pub cache: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database schema
    Init,

    /// Start the stopwatch against a client/project(/task)
    Start {
        #[arg(long = "client", help = "Client id the work is billed to")]
        client: String,

        #[arg(long = "project", help = "Project id (must belong to the client)")]
        project: String,

        #[arg(long = "task", help = "Optional task id within the project")]
        task: Option<String>,

        #[arg(long = "desc", help = "Description for the eventual time entry")]
        desc: Option<String>,
    },

    /// Pause the running stopwatch (elapsed time is kept)
    Pause,

    /// Resume a paused stopwatch
    Resume,

    /// Stop the stopwatch and commit it as a time entry
    Stop,

    /// Discard the current session without committing it
    Discard,

    /// Show the stopwatch phase, elapsed time, and selection
    Status,

    /// Run the 1-second tick loop in the foreground
    Watch {
        #[arg(long = "limit", help = "Stop after this many ticks (default: run until interrupted)")]
        limit: Option<u64>,
    },

    /// Restart the stopwatch from a past entry's selection
    Continue {
        /// Id of the time entry to continue
        entry_id: i64,

        #[arg(long = "client", help = "Client id (defaults to the current selection)")]
        client: Option<String>,
    },

    /// Add a manual time entry
    Add {
        #[arg(long = "project", help = "Project id")]
        project: String,

        #[arg(long = "task", help = "Optional task id")]
        task: Option<String>,

        #[arg(long = "from", help = "Start timestamp (RFC3339 or 'YYYY-MM-DD HH:MM')")]
        from: String,

        #[arg(long = "to", help = "End timestamp, strictly after --from")]
        to: String,

        #[arg(long = "desc", help = "Entry description")]
        desc: Option<String>,
    },

    /// Edit an entry's times or description (duration and date are re-derived)
    Edit {
        /// Id of the time entry to edit
        entry_id: i64,

        #[arg(long = "from", help = "New start timestamp")]
        from: Option<String>,

        #[arg(long = "to", help = "New end timestamp")]
        to: Option<String>,

        #[arg(long = "desc", help = "New description")]
        desc: Option<String>,
    },

    /// List time entries (runs a reconciliation pass first)
    List {
        /// Restrict to one date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Delete a time entry
    Del {
        /// Id of the time entry to delete
        entry_id: i64,
    },

    /// Recompute stored durations from start/end timestamps
    Reconcile,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
