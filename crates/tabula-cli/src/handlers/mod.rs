mod context;

pub mod browse;
pub mod datasets;
pub mod schema;
pub mod show;
pub mod stats;

pub use context::HandlerContext;
