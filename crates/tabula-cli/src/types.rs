use clap::ValueEnum;
use std::fmt;
use tabula_engine::TimeRange;
use tabula_types::{ChartKind, ViewKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewArg {
    Table,
    List,
    Card,
    Chart,
    Dashboard,
}

impl From<ViewArg> for ViewKind {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Table => ViewKind::Table,
            ViewArg::List => ViewKind::List,
            ViewArg::Card => ViewKind::Card,
            ViewArg::Chart => ViewKind::Chart,
            ViewArg::Dashboard => ViewKind::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ChartArg {
    Bar,
    Line,
    Area,
}

impl From<ChartArg> for ChartKind {
    fn from(chart: ChartArg) -> Self {
        match chart {
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Line => ChartKind::Line,
            ChartArg::Area => ChartKind::Area,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    #[value(name = "all")]
    All,
    #[value(name = "year")]
    Year,
    #[value(name = "6months")]
    SixMonths,
    #[value(name = "3months")]
    ThreeMonths,
    #[value(name = "month")]
    Month,
}

impl From<RangeArg> for TimeRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::All => TimeRange::All,
            RangeArg::Year => TimeRange::Year,
            RangeArg::SixMonths => TimeRange::SixMonths,
            RangeArg::ThreeMonths => TimeRange::ThreeMonths,
            RangeArg::Month => TimeRange::Month,
        }
    }
}

impl fmt::Display for RangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TimeRange::from(*self))
    }
}
