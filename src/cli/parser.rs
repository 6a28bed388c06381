use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDelaylogger
#[derive(Parser)]
#[command(
    name = "rdelaylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track delay events (start/stop with a reason) in SQLite and serve stats and CSV over HTTP",
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

    /// Run the HTTP server
    Serve {
        #[arg(long = "bind", value_name = "ADDR", help = "Listen address, e.g. 127.0.0.1:5000")]
        bind: Option<String>,
    },

    /// Open a delay event
    Start {
        /// One of: "out body", "out 1-dot battery", "out of 2 dot battery", "out of 3 dot battery"
        reason: String,
    },

    /// Close the open delay event
    End,

    /// List all delay events
    List,

    /// Show daily totals per reason
    Stats,

    /// Export all delay events to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", default_value = "delay_data.csv")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Delete every delay event (irreversible)
    Reset {
        #[arg(long = "password", help = "Reset password from the configuration")]
        password: String,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (secret masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
