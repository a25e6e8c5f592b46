use serde::Serialize;
use tabula_types::FieldKind;

use crate::dataset::DatasetSource;

#[derive(Debug, Serialize)]
pub struct SchemaViewModel {
    pub dataset: DatasetSource,
    pub record_count: usize,
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub mixed: bool,
    /// Records holding a non-absent value for this field.
    pub present_in: usize,
}
