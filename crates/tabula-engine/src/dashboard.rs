//! Dashboard projection: headline figures, a default chart, an optional
//! correlation heatmap, and time-range filtering over a date field.

use chrono::{DateTime, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tabula_types::{Collection, Field, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::project::{
    ChartModel, DEFAULT_SERIES_COUNT, RenderModel, Series, chart_series, default_series,
    project_chart_rows,
};
use crate::stats::{FieldSummary, summarize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "month")]
    Month,
}

impl TimeRange {
    /// Length of the window, or `None` for no filtering.
    pub fn months(self) -> Option<u32> {
        match self {
            TimeRange::All => None,
            TimeRange::Year => Some(12),
            TimeRange::SixMonths => Some(6),
            TimeRange::ThreeMonths => Some(3),
            TimeRange::Month => Some(1),
        }
    }

    /// Earliest date kept when the window ends at `today`.
    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        self.months()
            .and_then(|m| today.checked_sub_months(Months::new(m)))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::All => write!(f, "all"),
            TimeRange::Year => write!(f, "year"),
            TimeRange::SixMonths => write!(f, "6months"),
            TimeRange::ThreeMonths => write!(f, "3months"),
            TimeRange::Month => write!(f, "month"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub time_range: TimeRange,
    pub date_field: Option<String>,
    pub today: NaiveDate,
    /// Series list of the unfiltered dataset. When unset, series come from
    /// the collection handed to [`project_dashboard`].
    pub series: Option<Vec<Series>>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            time_range: TimeRange::All,
            date_field: None,
            today: Local::now().date_naive(),
            series: None,
        }
    }
}

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Calendar date of a record value.
///
/// Text parses as RFC 3339 or `YYYY-MM-DD`; numbers are epoch milliseconds.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Text(text) => DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| parse_day(text).ok()),
        Value::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Keep records whose date falls on or after the range cutoff.
///
/// Without a date field, or with [`TimeRange::All`], every record is kept.
/// Records whose date cannot be parsed are dropped once filtering applies.
pub fn filter_by_time_range(collection: &Collection, options: &DashboardOptions) -> Collection {
    let (Some(field), Some(cutoff)) = (
        options.date_field.as_deref(),
        options.time_range.cutoff(options.today),
    ) else {
        return collection.clone();
    };

    let kept: Collection = collection
        .iter()
        .filter(|record| parse_date(record.get(field)).is_some_and(|date| date >= cutoff))
        .cloned()
        .collect();

    debug!(
        field,
        range = %options.time_range,
        %cutoff,
        kept = kept.len(),
        dropped = collection.len() - kept.len(),
        "applied time range"
    );
    kept
}

// --------------------------------------------------------
// Correlation heatmap
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationBand {
    StrongPositive,
    Positive,
    StrongNegative,
    Neutral,
}

impl CorrelationBand {
    pub fn of(value: f64) -> Self {
        if value > 0.5 {
            CorrelationBand::StrongPositive
        } else if value > 0.0 {
            CorrelationBand::Positive
        } else if value < -0.5 {
            CorrelationBand::StrongNegative
        } else {
            CorrelationBand::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub column: String,
    pub value: Option<f64>,
    pub band: CorrelationBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub label: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub columns: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

/// Heatmap of a square correlation matrix.
///
/// The collection qualifies when the labels in its first field are exactly
/// the names of its numeric fields, as in a `DataFrame.corr()` export.
pub fn correlation_heatmap(collection: &Collection, fields: &[Field]) -> Option<Heatmap> {
    let label_field = fields.first().filter(|f| !f.is_numeric())?;
    let columns: Vec<String> = fields
        .iter()
        .filter(|f| f.is_numeric())
        .map(|f| f.name.clone())
        .collect();
    if columns.is_empty() {
        return None;
    }

    let labels: Vec<String> = collection
        .iter()
        .map(|r| r.get(&label_field.name).as_text().map(str::to_string))
        .collect::<Option<_>>()?;

    let label_set: HashSet<&str> = labels.iter().map(String::as_str).collect();
    let column_set: HashSet<&str> = columns.iter().map(String::as_str).collect();
    if label_set != column_set || labels.len() != columns.len() {
        return None;
    }

    let rows = collection
        .iter()
        .zip(labels)
        .map(|(record, label)| HeatmapRow {
            label,
            cells: columns
                .iter()
                .map(|column| {
                    let value = record.get(column).as_number();
                    HeatmapCell {
                        column: column.clone(),
                        value,
                        band: value.map_or(CorrelationBand::Neutral, CorrelationBand::of),
                    }
                })
                .collect(),
        })
        .collect();

    Some(Heatmap { columns, rows })
}

// --------------------------------------------------------
// Dashboard
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardModel {
    /// Records remaining after the time range filter.
    pub record_count: usize,
    pub total_count: usize,
    pub time_range: TimeRange,
    pub summary: Vec<FieldSummary>,
    pub chart: ChartModel,
    pub default_series: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<Heatmap>,
}

/// Project the dashboard for a collection.
///
/// Returns [`RenderModel::Empty`] when nothing survives the time range.
pub fn project_dashboard(
    collection: &Collection,
    fields: &[Field],
    options: &DashboardOptions,
) -> RenderModel {
    let filtered = filter_by_time_range(collection, options);
    if filtered.is_empty() {
        return RenderModel::Empty;
    }

    let series = options
        .series
        .clone()
        .unwrap_or_else(|| chart_series(collection, fields));
    let chart = project_chart_rows(&filtered, fields, series);
    let summary = summarize(&chart, fields);
    let heatmap = correlation_heatmap(&filtered, fields);

    RenderModel::Dashboard(DashboardModel {
        record_count: filtered.len(),
        total_count: collection.len(),
        time_range: options.time_range,
        summary,
        default_series: default_series(fields, DEFAULT_SERIES_COUNT)
            .into_iter()
            .collect(),
        chart,
        heatmap,
    })
}
