// Views turn view models into text layouts. Each view model gets its
// layout through `CreateView`, implemented next to the view.

pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod schema;
pub mod show;
pub mod stats;
pub mod tabular;

pub use chart::ChartView;
pub use dashboard::DashboardView;
pub use tabular::{CardView, EmptyStateView, ListView, TableView};
