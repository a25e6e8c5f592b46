use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, hex_color};
use crate::presentation::formatters::{format_optional, format_range};
use crate::presentation::renderers::tui::app::AppState;

/// Whole-dataset figures for the selected series.
pub(crate) struct SummaryComponent;

impl Component for SummaryComponent {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::new();
        for series in state.chart.visible_series(&state.view_state.selected_series) {
            let Some(summary) = state.summary.iter().find(|s| s.field == series.key) else {
                continue;
            };
            lines.push(Line::from(Span::styled(
                series.label.clone(),
                Style::default()
                    .fg(hex_color(series.color(&state.palette)))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("  avg   {}", format_optional(summary.mean))));
            lines.push(Line::from(format!(
                "  range {}",
                format_range(summary.min, summary.max)
            )));
        }

        let widget = Paragraph::new(lines).block(
            Block::default()
                .title("Summary")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(widget, area);
    }
}
