//! Command-line interface definitions.
//!
//! Defines the CLI structure for zocli using `clap`: session management,
//! syncing the order history, and the analytics views over the local cache.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Food delivery order history and spending insights
#[derive(Parser, Debug)]
#[command(name = "zocli")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the zocli CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the saved session cookie
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Download the full order history into the local cache
    Sync(SyncArgs),

    /// List cached orders, newest first
    Orders(OrdersArgs),

    /// Spending summary and ordering patterns
    Stats(StatsArgs),

    /// Track how single-dish prices changed over time
    Inflation(InflationArgs),

    /// Suggest a restaurant weighted by how often you order there
    Suggest(SuggestArgs),

    /// Year-in-review highlights
    Wrapped(WrappedArgs),

    /// Export cached orders as CSV or JSON
    Export(ExportArgs),

    /// Show config and data file locations
    Config,
}

/// Subcommands for `zocli auth`.
#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Save a session cookie (prompts when no source is given)
    Set(AuthSetArgs),
    /// Check whether the saved session is still accepted
    Status(AuthStatusArgs),
    /// Forget the saved session cookie
    Logout,
}

#[derive(Parser, Debug)]
pub struct AuthSetArgs {
    /// Cookie header value copied from a logged-in browser session
    #[arg(long, conflicts_with = "cookie_file")]
    pub cookie: Option<String>,

    /// Read the cookie from a file
    #[arg(long, value_name = "PATH")]
    pub cookie_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AuthStatusArgs {
    /// Only report whether a cookie is saved; skip the network check
    #[arg(long)]
    pub offline: bool,
}

#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Store the bundled sample orders instead of contacting the service
    #[arg(long)]
    pub mock: bool,
}

#[derive(Parser, Debug)]
pub struct OrdersArgs {
    /// Number of orders to show (0 for all)
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,
}

/// Sections printed by `zocli stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsView {
    /// Period groups and the overall summary
    #[default]
    Basic,
    /// Spend per period and per weekday
    Spend,
    /// Orders by weekday and time of day
    Patterns,
    /// Favourite restaurants and dishes
    Personal,
    /// Everything above
    All,
}

impl StatsView {
    pub fn includes(self, other: StatsView) -> bool {
        self == StatsView::All || self == other
    }
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Grouping period: month, year or none
    #[arg(long, short, default_value = "month")]
    pub group: String,

    /// Which section to show
    #[arg(long, value_enum, default_value_t = StatsView::Basic)]
    pub view: StatsView,

    /// Number of entries in top lists
    #[arg(long, default_value = "5")]
    pub top: usize,
}

#[derive(Parser, Debug)]
pub struct InflationArgs {
    /// Dish name to follow; without one, the biggest trends are shown
    pub query: Vec<String>,

    /// Number of trends to show
    #[arg(long, default_value = "5")]
    pub limit: usize,
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Seed for a reproducible pick
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct WrappedArgs {
    /// Year to review (defaults to the year of the latest order)
    #[arg(long)]
    pub year: Option<i32>,
}

/// File formats for `zocli export`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
