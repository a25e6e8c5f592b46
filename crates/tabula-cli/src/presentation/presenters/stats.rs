use tabula_engine::FieldSummary;

use crate::dataset::DatasetSource;
use crate::presentation::view_models::{CommandResultViewModel, StatsViewModel, StatusBadge};

pub fn present_stats(
    source: DatasetSource,
    record_count: usize,
    fields: Vec<FieldSummary>,
) -> CommandResultViewModel<StatsViewModel> {
    let badge = if fields.is_empty() {
        StatusBadge::warning("No numeric fields")
    } else {
        StatusBadge::info(format!(
            "{} numeric field(s) over {} record(s)",
            fields.len(),
            record_count
        ))
    };

    CommandResultViewModel::new(StatsViewModel {
        dataset: source,
        record_count,
        fields,
    })
    .with_badge(badge)
}
