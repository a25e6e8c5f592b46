use clap::{Args, Parser, Subcommand};

use crate::types::{ChartArg, LogLevel, OutputFormat, RangeArg, ViewArg};

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Browse static JSON datasets as tables, lists, cards and charts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $TABULA_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dataset in one view
    Show(ShowArgs),

    /// List the fields discovered in a dataset
    Schema {
        #[arg(help = "Catalog key or path to a JSON file")]
        dataset: String,
    },

    /// Summary statistics for every numeric field
    Stats {
        #[arg(help = "Catalog key or path to a JSON file")]
        dataset: String,
    },

    /// List datasets registered in the config file
    Datasets,

    /// Interactive terminal browser
    Browse {
        #[arg(help = "Catalog key or path to a JSON file")]
        dataset: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    #[arg(help = "Catalog key or path to a JSON file")]
    pub dataset: String,

    #[arg(long, help = "View kind (default from config)")]
    pub view: Option<ViewArg>,

    #[arg(long, help = "Chart kind for chart views (default from config)")]
    pub chart: Option<ChartArg>,

    #[arg(long, value_name = "FIELD", help = "Sort rows by a field")]
    pub sort: Option<String>,

    #[arg(long, requires = "sort", help = "Sort descending")]
    pub desc: bool,

    #[arg(long, value_name = "TEXT", help = "Keep rows containing TEXT (case-insensitive)")]
    pub search: Option<String>,

    #[arg(
        long,
        value_name = "KEYS",
        value_delimiter = ',',
        help = "Chart series to show, comma-separated"
    )]
    pub series: Option<Vec<String>>,

    #[arg(long, default_value = "all", help = "Dashboard time range")]
    pub range: RangeArg,

    #[arg(long, value_name = "FIELD", help = "Date field for --range (default: date)")]
    pub date_field: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Reference day for --range")]
    pub today: Option<String>,
}
