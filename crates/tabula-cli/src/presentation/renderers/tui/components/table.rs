use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell as TableCell, Paragraph, Row, Table, TableState},
};
use tabula_engine::humanize_label;

use super::Component;
use crate::presentation::formatters::{single_line, truncate};
use crate::presentation::renderers::tui::app::{Action, AppState};

const MAX_COLUMN_WIDTH: usize = 28;

/// Scrollable record table. Left/right picks the sort column.
pub(crate) struct TableComponent {
    state: TableState,
    column: usize,
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
            column: 0,
        }
    }

    #[cfg(test)]
    pub fn column(&self) -> usize {
        self.column
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    fn clamp(&mut self, row_count: usize, column_count: usize) {
        self.column = self.column.min(column_count.saturating_sub(1));
        match self.state.selected() {
            _ if row_count == 0 => self.state.select(None),
            None => self.state.select(Some(0)),
            Some(i) if i >= row_count => self.state.select(Some(row_count - 1)),
            Some(_) => {}
        }
    }
}

impl Component for TableComponent {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let row_count = state.table.rows.len();
        let column_count = state.fields.len();
        self.clamp(row_count, column_count);

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some((i + 1).min(row_count.saturating_sub(1))));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.column = (self.column + 1).min(column_count.saturating_sub(1));
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.column = self.column.saturating_sub(1);
                None
            }
            KeyCode::Char('s') | KeyCode::Enter => state
                .fields
                .get(self.column)
                .map(|field| Action::SortBy(field.name.clone())),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        self.clamp(state.table.rows.len(), state.fields.len());

        let block = Block::default()
            .borders(Borders::NONE)
            .border_style(Style::default().fg(Color::DarkGray));

        if state.table.rows.is_empty() {
            let message = if state.collection.is_empty() {
                "No data available"
            } else {
                "No records match the search"
            };
            f.render_widget(Paragraph::new(message).block(block), area);
            return;
        }

        let headers: Vec<String> = state
            .fields
            .iter()
            .map(|field| {
                let label = humanize_label(&field.name);
                match &state.view_state.sort {
                    Some(sort) if sort.field == field.name => {
                        format!("{} {}", label, sort.direction.arrow())
                    }
                    _ => label,
                }
            })
            .collect();

        let rows: Vec<Vec<String>> = state
            .table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| truncate(&single_line(cell.display.text()), MAX_COLUMN_WIDTH))
                    .collect()
            })
            .collect();

        let widths: Vec<Constraint> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let width = rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH);
                Constraint::Length(width as u16)
            })
            .collect();

        let header = Row::new(headers.into_iter().enumerate().map(|(i, text)| {
            let style = if i == self.column {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            TableCell::from(text).style(style)
        }));

        let table = Table::new(rows.into_iter().map(Row::new), widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.state);
    }
}
