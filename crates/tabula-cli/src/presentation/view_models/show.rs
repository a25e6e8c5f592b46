use serde::Serialize;
use tabula_engine::{FieldSummary, RenderModel, ViewState};
use tabula_types::{ChartKind, ViewKind};

use crate::dataset::DatasetSource;

#[derive(Debug, Serialize)]
pub struct ShowViewModel {
    pub dataset: DatasetSource,
    pub view: ViewKind,
    pub chart_kind: ChartKind,
    pub total_records: usize,
    /// Records left after search (and, for dashboards, the time range).
    pub shown_records: usize,
    pub state: ViewState,
    pub palette: Vec<String>,
    pub model: RenderModel,
    /// Figures over the full dataset, for the chart summary panel.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<FieldSummary>,
}
