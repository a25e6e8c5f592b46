use tabula_engine::humanize_label;
use tabula_types::{Collection, Field};

use super::dataset_arg;
use crate::dataset::DatasetSource;
use crate::presentation::view_models::{
    CommandResultViewModel, FieldEntry, Guidance, SchemaViewModel, StatusBadge,
};

pub fn present_schema(
    source: DatasetSource,
    collection: &Collection,
    fields: &[Field],
) -> CommandResultViewModel<SchemaViewModel> {
    let entries: Vec<FieldEntry> = fields
        .iter()
        .map(|field| FieldEntry {
            name: field.name.clone(),
            label: humanize_label(&field.name),
            kind: field.kind,
            mixed: field.mixed,
            present_in: collection
                .iter()
                .filter(|r| !r.get(&field.name).is_absent())
                .count(),
        })
        .collect();

    let mixed = entries.iter().filter(|e| e.mixed).count();
    let target = dataset_arg(&source);

    let content = SchemaViewModel {
        dataset: source,
        record_count: collection.len(),
        fields: entries,
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.fields.is_empty() {
        result = result.with_badge(StatusBadge::warning("No fields found"));
    } else if mixed > 0 {
        let badge = StatusBadge::warning(format!(
            "{} field(s), {} with mixed value kinds",
            result.content.fields.len(),
            mixed
        ));
        result = result
            .with_badge(badge)
            .with_suggestion(
                Guidance::new("Mixed fields use the majority kind; inspect them with")
                    .with_command(format!("tabula show {} --view list", target)),
            );
    } else {
        let badge = StatusBadge::success(format!(
            "{} field(s) across {} record(s)",
            result.content.fields.len(),
            result.content.record_count
        ));
        result = result.with_badge(badge);
    }
    result
}
