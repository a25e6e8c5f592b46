pub mod catalog;
pub mod schema;
pub mod show;
pub mod stats;

pub use catalog::present_catalog;
pub use schema::present_schema;
pub use show::{ShowInput, present_show};
pub use stats::present_stats;

use crate::dataset::DatasetSource;

/// How to name a dataset in a suggested command.
fn dataset_arg(source: &DatasetSource) -> String {
    match &source.key {
        Some(key) => key.clone(),
        None => source.path.display().to_string(),
    }
}
