use tabula_engine::{FieldSummary, RenderModel, ViewState};
use tabula_types::{ChartKind, ViewKind};

use super::dataset_arg;
use crate::dataset::DatasetSource;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ShowViewModel, StatusBadge,
};

pub struct ShowInput {
    pub source: DatasetSource,
    pub view: ViewKind,
    pub chart_kind: ChartKind,
    pub total_records: usize,
    pub state: ViewState,
    pub palette: Vec<String>,
    pub model: RenderModel,
    pub summary: Vec<FieldSummary>,
}

pub fn present_show(input: ShowInput) -> CommandResultViewModel<ShowViewModel> {
    let shown_records = match &input.model {
        RenderModel::Empty => 0,
        RenderModel::Table(t) | RenderModel::List(t) | RenderModel::Card(t) => t.rows.len(),
        RenderModel::Chart(c) => c.points.len(),
        RenderModel::Dashboard(d) => d.record_count,
    };
    let target = dataset_arg(&input.source);

    let badge = match &input.model {
        RenderModel::Empty if input.total_records == 0 => StatusBadge::warning("Dataset is empty"),
        RenderModel::Empty => StatusBadge::warning(format!(
            "No records match (0 of {})",
            input.total_records
        )),
        RenderModel::Chart(chart) => StatusBadge::info(format!(
            "{} records, {} of {} series",
            shown_records,
            chart.visible_series(&input.state.selected_series).count(),
            chart.series.len()
        )),
        _ => StatusBadge::info(format!(
            "{} of {} records",
            shown_records, input.total_records
        )),
    };

    let mut suggestions = Vec::new();
    match &input.model {
        RenderModel::Empty if input.total_records == 0 => {
            suggestions.push(
                Guidance::new("Check which datasets are configured").with_command("tabula datasets"),
            );
        }
        RenderModel::Empty => {
            suggestions.push(
                Guidance::new("Show every record").with_command(format!("tabula show {}", target)),
            );
        }
        RenderModel::Table(_) if input.state.sort.is_none() && shown_records > 1 => {
            suggestions.push(
                Guidance::new("Sort by a column")
                    .with_command(format!("tabula show {} --sort <FIELD>", target)),
            );
        }
        RenderModel::Chart(chart)
            if !chart.series.is_empty()
                && chart.visible_series(&input.state.selected_series).count() == 0 =>
        {
            suggestions.push(
                Guidance::new("Choose the series to plot").with_command(format!(
                    "tabula show {} --view chart --series {}",
                    target,
                    chart
                        .series
                        .iter()
                        .map(|s| s.key.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                )),
            );
        }
        _ => {}
    }

    let content = ShowViewModel {
        dataset: input.source,
        view: input.view,
        chart_kind: input.chart_kind,
        total_records: input.total_records,
        shown_records,
        state: input.state,
        palette: input.palette,
        model: input.model,
        summary: input.summary,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    for guide in suggestions {
        result = result.with_suggestion(guide);
    }
    result
}
