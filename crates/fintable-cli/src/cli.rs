//! Command-line arguments.

use clap::{Parser, ValueEnum};
use fintable::{PeriodType, Symbol};

/// Show a company's income statements as a filterable, sortable table.
#[derive(Parser, Debug)]
#[command(name = "fintab", version)]
#[command(about = "Income statements as a filterable, sortable table")]
pub(crate) struct Cli {
    /// Base URL of the income-statement endpoint; the symbol is appended to it
    #[arg(
        long,
        env = "FMP_BASE_URL",
        default_value = fintable::FMP_BASE_URL,
        hide_env_values = true
    )]
    pub(crate) base_url: String,

    /// API key sent as the `apikey` query parameter
    #[arg(
        long,
        env = "FMP_API_KEY",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub(crate) api_key: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, env = "FINTABLE_TIMEOUT_SECS", default_value_t = 30)]
    pub(crate) timeout_secs: u64,

    /// Ticker to load
    #[arg(long, default_value = Symbol::DEFAULT)]
    pub(crate) symbol: Symbol,

    /// Reporting period (annual or quarter)
    #[arg(long, default_value = "annual")]
    pub(crate) period: PeriodType,

    /// First fiscal year shown (2020-2024)
    #[arg(long)]
    pub(crate) from_year: Option<i32>,

    /// Last fiscal year shown (2020-2024)
    #[arg(long)]
    pub(crate) to_year: Option<i32>,

    /// Minimum revenue; empty means 0
    #[arg(long, default_value = "")]
    pub(crate) revenue_min: String,

    /// Maximum revenue; empty means no limit
    #[arg(long, default_value = "")]
    pub(crate) revenue_max: String,

    /// Minimum net income; empty means 0
    #[arg(long, default_value = "")]
    pub(crate) net_income_min: String,

    /// Maximum net income; empty means no limit
    #[arg(long, default_value = "")]
    pub(crate) net_income_max: String,

    /// Column to sort by (date, revenue, net-income)
    #[arg(long, default_value = "date")]
    pub(crate) sort: String,

    /// Sort in descending order
    #[arg(long)]
    pub(crate) desc: bool,

    /// Print the active filters above the table
    #[arg(long)]
    pub(crate) show_filters: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,

    /// Read commands from stdin and redraw the table after each one
    #[arg(short, long)]
    pub(crate) interactive: bool,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Disable ANSI colors in log output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

/// How one-shot results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Formatted table.
    Table,
    /// Filtered and sorted records as JSON.
    Json,
}
