//! Interactive dataset browser.
//!
//! `AppState` owns the data and the [`tabula_engine::ViewState`]; components
//! own their widget state and translate keys into [`app::Action`]s. The
//! session loop routes global keys itself and hands the rest to whichever
//! component is on screen.

mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tabula_types::{ChartKind, Collection, Field};
use tracing::info;

use app::{Action, AppState, Tab};
use components::{ChartComponent, Component, TableComponent};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct BrowseSession {
    title: String,
    collection: Collection,
    fields: Vec<Field>,
    palette: Vec<String>,
    chart_kind: ChartKind,
    series_count: usize,
}

impl BrowseSession {
    pub fn new(title: impl Into<String>, collection: Collection, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            collection,
            fields,
            palette: Vec::new(),
            chart_kind: ChartKind::default(),
            series_count: tabula_engine::DEFAULT_SERIES_COUNT,
        }
    }

    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    pub fn with_series_count(mut self, series_count: usize) -> Self {
        self.series_count = series_count;
        self
    }

    fn into_browser(self) -> Browser {
        Browser {
            app: AppState::new(
                self.title,
                self.collection,
                self.fields,
                self.palette,
                self.chart_kind,
                self.series_count,
            ),
            table: TableComponent::new(),
            chart: ChartComponent,
        }
    }

    pub fn run(self) -> Result<()> {
        let mut browser = self.into_browser();
        info!(title = %browser.app.title, "starting browser");

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = run_loop(&mut terminal, &mut browser);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    browser: &mut Browser,
) -> Result<()> {
    while !browser.app.should_quit {
        terminal.draw(|f| ui::draw(f, browser))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    browser.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

pub(crate) struct Browser {
    pub(crate) app: AppState,
    pub(crate) table: TableComponent,
    pub(crate) chart: ChartComponent,
}

impl Browser {
    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.route_key(key) {
            self.app.apply(action);
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.app.searching {
            return match key.code {
                KeyCode::Char(c) => Some(Action::SearchInput(c)),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Enter | KeyCode::Esc => Some(Action::EndSearch),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab => Some(Action::SwitchTab),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('c') => Some(Action::CycleChart),
            _ => match self.app.tab {
                Tab::Table => self.table.handle_key(key, &self.app),
                Tab::Chart => self.chart.handle_key(key, &self.app),
            },
        }
    }
}
