use serde::Serialize;
use tabula_engine::FieldSummary;

use crate::dataset::DatasetSource;

#[derive(Debug, Serialize)]
pub struct StatsViewModel {
    pub dataset: DatasetSource,
    pub record_count: usize,
    pub fields: Vec<FieldSummary>,
}
