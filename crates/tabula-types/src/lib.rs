//! Core data model for tabula.
//!
//! A [`Collection`] is an ordered list of [`Record`]s, each an ordered
//! mapping from field name to a tagged [`Value`]. Records in one collection
//! are not required to share a shape; the engine discovers [`Field`]s
//! across all of them.

pub mod collection;
pub mod error;
pub mod field;
pub mod load;
pub mod value;
pub mod view;

pub use collection::Collection;
pub use error::{Error, Result};
pub use field::{Field, FieldKind, ID_FIELD};
pub use value::{PLACEHOLDER, Record, Value, format_number};
pub use view::{ChartKind, SortDirection, ViewKind};
