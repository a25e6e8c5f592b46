mod args;
mod commands;
pub mod config;
pub mod dataset;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ShowArgs};
pub use commands::run;
