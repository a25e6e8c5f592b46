use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tabula_engine::humanize_label;

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, Tab};

pub(crate) struct StatusBarComponent;

impl StatusBarComponent {
    pub(crate) fn status_line(state: &AppState) -> String {
        let mut parts = vec![
            state.title.clone(),
            format!(
                "{} of {} records",
                state.shown_records(),
                state.collection.len()
            ),
        ];
        if let Some(sort) = &state.view_state.sort {
            parts.push(format!(
                "sort: {} {}",
                humanize_label(&sort.field),
                sort.direction.arrow()
            ));
        }
        if state.view_state.is_searching() && !state.searching {
            parts.push(format!("search: {}", state.view_state.search));
        }
        parts.join(" · ")
    }

    pub(crate) fn help_line(state: &AppState) -> &'static str {
        if state.searching {
            return "type to filter · Backspace delete · Enter/Esc done";
        }
        match state.tab {
            Tab::Table => "↑/↓ scroll · ←/→ column · s sort · / search · Tab chart · q quit",
            Tab::Chart => "1-9 series · c chart type · / search · Tab table · q quit",
        }
    }
}

impl Component for StatusBarComponent {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let first = if state.searching {
            Line::from(vec![
                Span::styled("/", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(state.view_state.search.clone()),
                Span::styled("█", Style::default().fg(Color::Gray)),
            ])
        } else {
            Line::from(Self::status_line(state))
        };
        let help = Line::from(Span::styled(
            Self::help_line(state),
            Style::default().fg(Color::DarkGray),
        ));

        let widget = Paragraph::new(vec![first, help]).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tui::app::Action;
    use tabula_engine::infer_schema;
    use tabula_types::{ChartKind, Collection, Record};

    #[test]
    fn test_status_line_reflects_view_state() {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon").with("ticketCount", 5),
            Record::new().with("day", "Tue").with("ticketCount", 2),
        ]);
        let fields = infer_schema(&collection);
        let mut state =
            AppState::new("days".to_string(), collection, fields, Vec::new(), ChartKind::Bar, 3);

        assert_eq!(StatusBarComponent::status_line(&state), "days · 2 of 2 records");

        state.apply(Action::SortBy("ticketCount".to_string()));
        state.apply(Action::SearchInput('m'));
        assert_eq!(
            StatusBarComponent::status_line(&state),
            "days · 1 of 2 records · sort: Ticket Count ▲ · search: m"
        );
    }
}
