use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for calorielog
#[derive(Parser)]
#[command(
    name = "calorielog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tally daily calories from a food catalog and log the daily total to an Excel workbook",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom workbook)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the desktop window is opened
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter workbook (catalog + log sheets) and the configuration
    Init {
        /// Overwrite an existing workbook without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Open the desktop window
    Gui,

    /// List the food catalog with its selection indexes
    Catalog,

    /// Add catalog entries to a running total, optionally saving it
    Tally {
        /// Catalog indexes to add, in order (an index may repeat)
        #[arg(required = true, value_name = "INDEX")]
        items: Vec<usize>,

        /// Save the final total to the log sheet
        #[arg(long)]
        save: bool,

        /// Update the last log row instead of appending a new one (with --save)
        #[arg(long, requires = "save")]
        overwrite: bool,
    },

    /// Show the daily totals stored in the log sheet
    History {
        /// Filter by period: YYYY, YYYY-MM, YYYY-MM-DD or all
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Export the daily totals in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter by period: YYYY, YYYY-MM, YYYY-MM-DD or all
        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
