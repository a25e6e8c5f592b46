//! View Projector
//!
//! Turns a collection plus its inferred fields into a view-specific
//! [`RenderModel`]. Projection only borrows its input; calling it twice on
//! the same collection yields equal models.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tabula_types::{Collection, Field, FieldKind, ID_FIELD, PLACEHOLDER, Record, Value, ViewKind};

use crate::dashboard::{DashboardModel, DashboardOptions, project_dashboard};
use crate::label::{Tone, humanize_label};

/// Series colors, assigned by series index modulo length.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#6366F1", // Indigo
    "#EC4899", // Pink
    "#10B981", // Emerald
    "#F59E0B", // Amber
    "#3B82F6", // Blue
    "#8B5CF6", // Violet
    "#EF4444", // Red
    "#14B8A6", // Teal
    "#F97316", // Orange
    "#06B6D4", // Cyan
    "#84CC16", // Lime
    "#D946EF", // Fuchsia
];

/// Number of numeric series selected when a view session starts.
pub const DEFAULT_SERIES_COUNT: usize = 3;

/// Suffix of the derived series that stands in for a nested field.
pub const AVERAGE_SUFFIX: &str = "_avg";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum RenderModel {
    /// Nothing to show; views render the empty-state notice.
    Empty,
    Table(TabularModel),
    List(TabularModel),
    Card(TabularModel),
    Chart(ChartModel),
    Dashboard(DashboardModel),
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderModel::Empty)
    }
}

// --------------------------------------------------------
// Tabular views (table / list / card)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularModel {
    pub fields: Vec<Field>,
    pub rows: Vec<RenderRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    /// 1-based position in the projected collection.
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub field: String,
    pub display: CellDisplay,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum CellDisplay {
    Scalar(String),
    /// Two-space indented JSON dump of a nested value.
    Structured(String),
    Placeholder,
}

impl CellDisplay {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Absent => CellDisplay::Placeholder,
            Value::Text(t) if t.is_empty() => CellDisplay::Placeholder,
            Value::Nested(_) | Value::List(_) => {
                CellDisplay::Structured(value.to_display_string())
            }
            Value::Number(_) | Value::Text(_) => CellDisplay::Scalar(value.to_display_string()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            CellDisplay::Scalar(text) | CellDisplay::Structured(text) => text,
            CellDisplay::Placeholder => PLACEHOLDER,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, CellDisplay::Structured(_))
    }
}

impl Cell {
    pub fn new(field: &str, value: &Value) -> Self {
        Self {
            field: field.to_string(),
            display: CellDisplay::from_value(value),
            tone: Tone::of(value),
        }
    }
}

pub fn project_tabular(collection: &Collection, fields: &[Field]) -> TabularModel {
    let rows = collection
        .iter()
        .enumerate()
        .map(|(index, record)| RenderRow {
            position: index + 1,
            id: match record.get(ID_FIELD) {
                Value::Absent => None,
                id => Some(id.to_display_string()),
            },
            cells: fields
                .iter()
                .map(|field| Cell::new(&field.name, record.get(&field.name)))
                .collect(),
        })
        .collect();

    TabularModel {
        fields: fields.to_vec(),
        rows,
    }
}

// --------------------------------------------------------
// Chart view
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesSource {
    /// Values copied from a numeric field.
    Field,
    /// Mean of a nested field's direct numeric sub-values.
    Average,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Key of the series inside each chart point.
    pub key: String,
    /// Field the series is derived from.
    pub field: String,
    pub label: String,
    pub source: SeriesSource,
    /// Position in the full series list; drives palette color.
    pub index: usize,
}

impl Series {
    pub fn color<'p, S: AsRef<str>>(&self, palette: &'p [S]) -> Option<&'p str> {
        palette_color(self.index, palette)
    }
}

pub fn palette_color<S: AsRef<str>>(index: usize, palette: &[S]) -> Option<&str> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()].as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Stringified value of the first field.
    pub name: String,
    pub values: IndexMap<String, f64>,
}

impl ChartPoint {
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Chart-ready projection.
///
/// Nested fields appear as `{field}_avg` series holding the mean of their
/// direct numeric sub-values. That reduction is an approximation meant to
/// keep nested data chartable; it is not an exact aggregate and must not be
/// presented as one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub series: Vec<Series>,
    pub points: Vec<ChartPoint>,
}

impl ChartModel {
    pub fn series_by_key(&self, key: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Selected series in series-list order.
    pub fn visible_series<'a>(
        &'a self,
        selected: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a Series> {
        self.series.iter().filter(move |s| selected.contains(&s.key))
    }

    pub fn values_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<f64>> + 'a {
        self.points.iter().map(move |p| p.value(key))
    }

    /// Largest absolute value across the given series, for axis scaling.
    pub fn max_abs<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> f64 {
        keys.into_iter()
            .flat_map(|key| self.values_of(key).flatten().collect::<Vec<_>>())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

pub fn project_chart(collection: &Collection, fields: &[Field]) -> ChartModel {
    project_chart_rows(collection, fields, chart_series(collection, fields))
}

/// Chart points for `rows`, keeping a series list derived beforehand.
///
/// Pass the series of the unfiltered collection so sorting, searching or
/// time filtering never shifts a series' `index`, and with it its color.
pub fn project_chart_rows(rows: &Collection, fields: &[Field], series: Vec<Series>) -> ChartModel {
    let numeric_names = numeric_names(fields);
    let points = rows
        .iter()
        .map(|record| chart_point(record, fields, &numeric_names))
        .collect();

    ChartModel { series, points }
}

/// Series list for a collection, in schema order.
///
/// An `_avg` series is kept only if some record has a numeric sub-value
/// for it and no numeric field already uses its key.
pub fn chart_series(collection: &Collection, fields: &[Field]) -> Vec<Series> {
    let numeric_names = numeric_names(fields);

    let mut series = Vec::new();
    for field in fields {
        let (key, source) = match field.kind {
            FieldKind::Numeric => (field.name.clone(), SeriesSource::Field),
            FieldKind::Nested => {
                let key = average_key(&field.name);
                if numeric_names.contains(key.as_str())
                    || !collection
                        .iter()
                        .any(|record| record.get(&field.name).numeric_mean().is_some())
                {
                    continue;
                }
                (key, SeriesSource::Average)
            }
            FieldKind::Categorical => continue,
        };

        series.push(Series {
            label: humanize_label(&key),
            key,
            field: field.name.clone(),
            source,
            index: series.len(),
        });
    }
    series
}

fn numeric_names(fields: &[Field]) -> HashSet<&str> {
    fields
        .iter()
        .filter(|f| f.is_numeric())
        .map(|f| f.name.as_str())
        .collect()
}

fn chart_point(record: &Record, fields: &[Field], numeric_names: &HashSet<&str>) -> ChartPoint {
    let name = match fields.first().map(|f| record.get(&f.name)) {
        Some(value) if !value.is_absent() => value.to_display_string(),
        _ => PLACEHOLDER.to_string(),
    };

    let mut values = IndexMap::new();
    for field in fields {
        let value = record.get(&field.name);
        match field.kind {
            FieldKind::Numeric => {
                if let Some(n) = value.as_number() {
                    values.insert(field.name.clone(), n);
                }
            }
            FieldKind::Nested => {
                let key = average_key(&field.name);
                if numeric_names.contains(key.as_str()) {
                    continue;
                }
                if let Some(mean) = value.numeric_mean() {
                    values.insert(key, mean);
                }
            }
            FieldKind::Categorical => {}
        }
    }

    ChartPoint { name, values }
}

fn average_key(field: &str) -> String {
    format!("{}{}", field, AVERAGE_SUFFIX)
}

/// First `count` numeric fields in schema order.
pub fn default_series(fields: &[Field], count: usize) -> BTreeSet<String> {
    fields
        .iter()
        .filter(|f| f.is_numeric())
        .take(count)
        .map(|f| f.name.clone())
        .collect()
}

// --------------------------------------------------------
// Entry point
// --------------------------------------------------------

/// Project a collection for one view kind.
///
/// An empty collection projects to [`RenderModel::Empty`] for every kind.
/// The dashboard uses default options (no time filtering); call
/// [`project_dashboard`] directly to filter by date.
pub fn project(collection: &Collection, fields: &[Field], view: ViewKind) -> RenderModel {
    if collection.is_empty() {
        return RenderModel::Empty;
    }

    match view {
        ViewKind::Table => RenderModel::Table(project_tabular(collection, fields)),
        ViewKind::List => RenderModel::List(project_tabular(collection, fields)),
        ViewKind::Card => RenderModel::Card(project_tabular(collection, fields)),
        ViewKind::Chart => RenderModel::Chart(project_chart(collection, fields)),
        ViewKind::Dashboard => project_dashboard(collection, fields, &DashboardOptions::default()),
    }
}
