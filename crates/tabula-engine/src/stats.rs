use serde::Serialize;
use tabula_types::Field;

use crate::project::ChartModel;

/// Aggregate figures for one numeric field across a whole chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub field: String,
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSummary {
    fn from_values(field: &str, values: impl Iterator<Item = f64>) -> Self {
        let mut summary = FieldSummary {
            field: field.to_string(),
            count: 0,
            sum: 0.0,
            mean: None,
            min: None,
            max: None,
        };

        for value in values.filter(|v| !v.is_nan()) {
            summary.count += 1;
            summary.sum += value;
            summary.min = Some(summary.min.map_or(value, |m| m.min(value)));
            summary.max = Some(summary.max.map_or(value, |m| m.max(value)));
        }

        if summary.count > 0 {
            summary.mean = Some(summary.sum / summary.count as f64);
        }
        summary
    }
}

/// Summaries for every numeric field, in schema order.
///
/// Pass the chart projected from the full collection: search and sort do
/// not affect these figures. Points without a number for a field do not
/// count toward it.
pub fn summarize(chart: &ChartModel, fields: &[Field]) -> Vec<FieldSummary> {
    fields
        .iter()
        .filter(|f| f.is_numeric())
        .map(|f| FieldSummary::from_values(&f.name, chart.values_of(&f.name).flatten()))
        .collect()
}
