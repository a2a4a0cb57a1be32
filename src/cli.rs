use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::error::Result;
use crate::table::{Action, MatchMode, ReturnMode};

/// Stepkit CLI - reusable UI test step helpers
#[derive(Parser)]
#[command(name = "stepkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a table row/cell and get, validate, or click it
    Table(TableArgs),

    /// Wait for a downloaded file, then validate its content
    WaitFile(WaitFileArgs),

    /// Scan a local log file for an error marker
    ScanLog {
        /// Path of the log file
        path: String,

        /// Marker that fails the step when found on a line
        #[arg(long, default_value = "ERROR")]
        marker: String,
    },

    /// Persist and read back small values between steps
    Kv {
        #[command(subcommand)]
        command: KvCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
pub struct TableArgs {
    /// HTML file containing the table ('-' reads stdin)
    #[arg(long)]
    pub html: String,

    /// Action to perform
    #[arg(long, value_enum)]
    pub action: Option<Action>,

    /// Target column: label, data-col key, or numeric index
    #[arg(long)]
    pub target_column: Option<String>,

    /// Column to search when --row-index is not given
    #[arg(long)]
    pub source_column: Option<String>,

    /// Value to search for in the source column
    #[arg(long)]
    pub search_value: Option<String>,

    /// Search comparison mode
    #[arg(long, value_enum)]
    pub match_type: Option<MatchMode>,

    /// Compare case-sensitively (default is case-insensitive)
    #[arg(long)]
    pub case_sensitive: bool,

    /// 1-based ordinal selecting the Nth matching row
    #[arg(long, alias = "occurence")]
    pub occurrence: Option<u32>,

    /// Explicit row index (takes precedence over the search fields)
    #[arg(long, allow_hyphen_values = true)]
    pub row_index: Option<i64>,

    /// Base for row indices: 0 or 1
    #[arg(long)]
    pub row_index_base: Option<u8>,

    /// Base for numeric column specifiers: 0 or 1
    #[arg(long)]
    pub column_index_base: Option<u8>,

    /// What to extract from the target cell
    #[arg(long, value_enum)]
    pub return_mode: Option<ReturnMode>,

    /// Expected value for the validate action
    #[arg(long)]
    pub expected_value: Option<String>,

    /// Comparison mode for the expected value (defaults to --match-type)
    #[arg(long, value_enum)]
    pub expected_match_type: Option<MatchMode>,

    /// CSS selector for a click target inside the cell (e.g. "a")
    #[arg(long)]
    pub click_query: Option<String>,

    /// Double-click instead of a single click
    #[arg(long)]
    pub double_click: bool,

    /// Skip the best-effort scroll-into-view before clicking
    #[arg(long)]
    pub no_scroll_into_view: bool,

    /// Output key for the cell value
    #[arg(long, default_value = "cellValue")]
    pub return_variable_name: String,

    /// Output key for the resolved row index
    #[arg(long, default_value = "rowIndex")]
    pub row_index_variable_name: String,
}

#[derive(Args)]
pub struct WaitFileArgs {
    /// Name of the file to wait for
    pub file_name: String,

    /// Directory to watch (default: configured or platform download dir)
    #[arg(long)]
    pub dir: Option<String>,

    /// Wait timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Poll interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Text that must appear in the document
    #[arg(long)]
    pub expected_text: Option<String>,

    /// Expected page count
    #[arg(long)]
    pub expected_pages: Option<u32>,
}

#[derive(Subcommand)]
pub enum KvCommands {
    /// Store a value (parsed as JSON when possible, else as a string)
    Set {
        /// Key
        key: String,
        /// Value
        value: String,
        /// Store name (default from config)
        #[arg(long)]
        store: Option<String>,
    },

    /// Read a value back
    Get {
        /// Key
        key: String,
        /// Store name (default from config)
        #[arg(long)]
        store: Option<String>,
    },

    /// Delete a key
    Delete {
        /// Key
        key: String,
        /// Store name (default from config)
        #[arg(long)]
        store: Option<String>,
    },

    /// List all entries of a store
    List {
        /// Store name (default from config)
        #[arg(long)]
        store: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Table(args) => commands::table::run(self, args).await,
            Commands::WaitFile(args) => commands::wait_file::run(self, args).await,
            Commands::ScanLog { path, marker } => {
                commands::scan_log::run(self, path, marker).await
            }
            Commands::Kv { command } => commands::kv::run(self, command).await,
            Commands::Config { command } => commands::config::run(self, command).await,
        }
    }
}
