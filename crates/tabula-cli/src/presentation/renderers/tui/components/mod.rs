use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, style::Color};

use super::app::{Action, AppState};
use crate::presentation::formatters::parse_hex;

pub(crate) trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState);

    fn handle_key(&mut self, _key: KeyEvent, _state: &AppState) -> Option<Action> {
        None
    }
}

pub(crate) mod chart;
pub(crate) mod status_bar;
pub(crate) mod summary;
pub(crate) mod table;

pub(crate) use chart::ChartComponent;
pub(crate) use status_bar::StatusBarComponent;
pub(crate) use summary::SummaryComponent;
pub(crate) use table::TableComponent;

pub(crate) fn hex_color(hex: Option<&str>) -> Color {
    hex.and_then(parse_hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

