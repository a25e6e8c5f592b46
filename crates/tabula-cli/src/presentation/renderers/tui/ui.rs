use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Tabs,
};

use super::Browser;
use super::app::Tab;
use super::components::{Component, StatusBarComponent, SummaryComponent};

const SUMMARY_WIDTH: u16 = 32;

pub(crate) fn draw(f: &mut Frame, browser: &mut Browser) {
    let Browser { app, table, chart } = browser;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let tabs = Tabs::new(vec!["Table", "Chart"])
        .select(app.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, main_chunks[0]);

    match app.tab {
        Tab::Table => table.render(f, main_chunks[1], app),
        Tab::Chart => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(SUMMARY_WIDTH)])
                .split(main_chunks[1]);
            chart.render(f, body[0], app);
            SummaryComponent.render(f, body[1], app);
        }
    }

    StatusBarComponent.render(f, main_chunks[2], app);
}
