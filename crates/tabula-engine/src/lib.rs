//! Schema inference, view projection and interaction state for tabular
//! datasets.
//!
//! Everything in this crate is a pure function over borrowed
//! [`tabula_types::Collection`]s; loading and presentation live elsewhere.

pub mod dashboard;
pub mod error;
pub mod interact;
pub mod label;
pub mod project;
pub mod schema;
pub mod stats;

pub use error::{Error, Result};

// Schema
pub use schema::{find_field, infer_schema, numeric_fields};

// Projection
pub use project::{
    AVERAGE_SUFFIX, Cell, CellDisplay, ChartModel, ChartPoint, DEFAULT_PALETTE,
    DEFAULT_SERIES_COUNT, RenderModel, RenderRow, Series, SeriesSource, TabularModel,
    chart_series, default_series, palette_color, project, project_chart, project_chart_rows,
    project_tabular,
};

// Interaction
pub use interact::{SortSpec, ViewState, apply_view_state};
pub use stats::{FieldSummary, summarize};

// Dashboard
pub use dashboard::{
    CorrelationBand, DashboardModel, DashboardOptions, Heatmap, HeatmapCell, HeatmapRow,
    TimeRange, correlation_heatmap, filter_by_time_range, parse_date, parse_day,
    project_dashboard,
};

// Labels
pub use label::{Tone, humanize_label};
