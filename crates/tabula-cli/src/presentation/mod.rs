//! # Presentation Layer
//!
//! Output for every command follows the same one-way path:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ]
//! ```
//!
//! The interactive browser keeps data and UI state apart:
//!
//! ```text
//! [ Handler ] --> [ BrowseSession (router) ] --> [ Component ] <-- key input
//!                                                   (widget state)
//! ```
//!
//! ## Rules
//!
//! * View models hold raw data (numbers, enums, render models). JSON output
//!   is the full view model, so nothing in it is pre-formatted text.
//! * Presenters decide badges and tips. They never call `formatters`.
//! * Views do layout, color and number formatting.
//! * TUI components own scroll and column selection. Index state is clamped
//!   against the data before every render.
//! * Every change to sort, search or series selection goes through
//!   `tabula_engine::ViewState`; rows are re-derived afterwards.
//!
//! ## Where things go
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide when to show a tip | `presenters/` |
//! | Change a table or chart layout | `views/` |
//! | Format a number or pad a column | `formatters/` |
//! | Handle a key in the browser | `renderers/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{BrowseSession, ConsoleRenderer, Renderer};
pub use view_models::ViewOptions;
