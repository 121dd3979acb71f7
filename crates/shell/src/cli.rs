//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::level_filters::LevelFilter;

use stocklist_inventory::{LOW_STOCK_THRESHOLD, SortDirection};
use stocklist_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "stocklist",
    version,
    about = "Interactive inventory list editor",
    long_about = "Edit an in-memory inventory list from the terminal.\n\n\
                  Type `help` at the prompt for the command list. Nothing is saved \
                  when the session ends."
)]
pub struct Cli {
    /// Start with an empty list instead of the demo records.
    #[arg(long)]
    pub empty: bool,

    /// Initial quantity sort direction.
    #[arg(long, value_enum, default_value = "desc")]
    pub sort: SortArg,

    /// Initial category filter.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Rows with a quantity below this are marked as low stock.
    #[arg(long = "low-stock", value_name = "N", default_value_t = LOW_STOCK_THRESHOLD)]
    pub low_stock: i64,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "text")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortDirection {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Asc => SortDirection::Ascending,
            SortArg::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Default `EnvFilter` directive derived from `-v`/`-q`.
    pub fn log_filter(&self) -> &'static str {
        let level = self.verbosity.tracing_level_filter();
        if level == LevelFilter::OFF {
            "off"
        } else if level == LevelFilter::ERROR {
            "error"
        } else if level == LevelFilter::WARN {
            "warn"
        } else if level == LevelFilter::INFO {
            "info"
        } else if level == LevelFilter::DEBUG {
            "debug"
        } else {
            "trace"
        }
    }
}

/// Session settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed_demo: bool,
    pub sort: SortDirection,
    pub category: Option<String>,
    pub low_stock_threshold: i64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            sort: SortDirection::default(),
            category: None,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

impl From<&Cli> for ShellConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            seed_demo: !cli.empty,
            sort: cli.sort.into(),
            category: cli.category.clone(),
            low_stock_threshold: cli.low_stock,
        }
    }
}
