use crate::config::Config;
use crate::core::filter::FilterState;
use crate::export::{ExportFormat, ReportKind};
use crate::models::{Grouping, TimeRange};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTimelens
#[derive(Parser, Debug)]
#[command(
    name = "rtimelens",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyse logged hours: filter by period, category and occupation, then total and chart them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Read records from a JSON snapshot instead of the database
    #[arg(global = true, long = "snapshot", value_name = "FILE")]
    pub snapshot: Option<String>,

    /// Reference date used as "today" (YYYY-MM-DD); defaults to the system clock
    #[arg(global = true, long = "now", value_name = "DATE")]
    pub now: Option<String>,

    /// Print diagnostic traces to stderr (filter with RUST_LOG)
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by every analysis command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Time window (defaults to the configured `default_range`)
    #[arg(long, short = 'r', value_enum)]
    pub range: Option<TimeRange>,

    /// Minimum duration of a single record, in minutes
    #[arg(long = "min", value_name = "MINUTES", allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Keep only records of this category id (repeatable)
    #[arg(long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Keep only records of this occupation id (repeatable)
    #[arg(long = "occupation", value_name = "ID")]
    pub occupations: Vec<String>,
}

impl FilterArgs {
    /// Flags override the configuration defaults.
    pub fn to_state(&self, cfg: &Config) -> FilterState {
        FilterState::new(self.range.unwrap_or(cfg.default_range))
            .with_minimum_duration(self.min.unwrap_or(cfg.min_duration))
            .with_categories(self.categories.iter().cloned())
            .with_occupations(self.occupations.iter().cloned())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Pie,
    Stacked,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database schema and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// List the records that pass the filters
    Logs {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Time totals per category and per occupation
    Totals {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Chart series: distribution (pie) or per-date stacked bars
    Chart {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "pie")]
        kind: ChartKind,

        #[arg(long = "group", short = 'g', value_enum)]
        group: Option<Grouping>,
    },

    /// Categories and occupations available as filter values
    Options,

    /// Today's total against the daily target
    Today {
        /// Daily target in minutes (defaults to the configured one)
        #[arg(long, value_name = "MINUTES")]
        target: Option<u64>,
    },

    /// Export an analysis view
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "group", short = 'g', value_enum)]
        group: Option<Grouping>,

        #[arg(long, value_enum, default_value = "totals")]
        report: ReportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_flags_override_config_defaults() {
        let cli = Cli::try_parse_from([
            "rtimelens",
            "totals",
            "--range",
            "last-two-days",
            "--category",
            "cat-1",
            "--category",
            "cat-2",
        ])
        .unwrap();

        let cfg = Config {
            min_duration: 15,
            ..Config::default()
        };

        let Commands::Totals { filters } = cli.command else {
            panic!("expected totals");
        };
        let state = filters.to_state(&cfg);
        assert_eq!(state.window, TimeRange::LastTwoDays);
        assert_eq!(state.minimum_duration_minutes, 15);
        assert_eq!(state.selected_category_ids, vec!["cat-1", "cat-2"]);
        assert!(state.selected_occupation_ids.is_empty());
    }

    #[test]
    fn negative_minimum_reaches_validation() {
        let cli = Cli::try_parse_from(["rtimelens", "logs", "--min", "-5"]).unwrap();
        let Commands::Logs { filters } = cli.command else {
            panic!("expected logs");
        };
        assert!(filters.to_state(&Config::default()).validate().is_err());
    }
}
