pub mod catalog;
pub mod common;
pub mod result;
pub mod schema;
pub mod show;
pub mod stats;

use std::fmt;

pub use catalog::{CatalogEntry, CatalogViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewOptions};
pub use result::CommandResultViewModel;
pub use schema::{FieldEntry, SchemaViewModel};
pub use show::ShowViewModel;
pub use stats::StatsViewModel;

/// Bridge from a view model (data) to its text layout (view).
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
