use tabula_engine::{
    ChartModel, FieldSummary, Series, TabularModel, ViewState, apply_view_state, project_chart,
    project_chart_rows, project_tabular, summarize,
};
use tabula_types::{ChartKind, Collection, Field};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Table,
    Chart,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Table => 0,
            Tab::Chart => 1,
        }
    }
}

/// State changes requested by key handling. Every one of them is applied
/// through [`AppState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    SwitchTab,
    CycleChart,
    SortBy(String),
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
    ToggleSeries(usize),
}

pub(crate) struct AppState {
    pub title: String,
    pub collection: Collection,
    pub fields: Vec<Field>,
    pub palette: Vec<String>,
    pub tab: Tab,
    pub chart_kind: ChartKind,
    pub view_state: ViewState,
    pub searching: bool,
    pub should_quit: bool,

    /// Series of the full collection; fixes colors and toggle numbers.
    pub series: Vec<Series>,

    // Derived from `collection` and `view_state` by `refresh`.
    pub table: TabularModel,
    pub chart: ChartModel,

    /// Computed once over the full collection.
    pub summary: Vec<FieldSummary>,
}

impl AppState {
    pub fn new(
        title: String,
        collection: Collection,
        fields: Vec<Field>,
        palette: Vec<String>,
        chart_kind: ChartKind,
        series_count: usize,
    ) -> Self {
        let full = project_chart(&collection, &fields);
        let summary = summarize(&full, &fields);
        let mut state = Self {
            title,
            view_state: ViewState::for_schema_with(&fields, series_count),
            table: project_tabular(&Collection::empty(), &fields),
            chart: project_chart_rows(&Collection::empty(), &fields, full.series.clone()),
            series: full.series,
            collection,
            fields,
            palette,
            tab: Tab::Table,
            chart_kind,
            searching: false,
            should_quit: false,
            summary,
        };
        state.refresh();
        state
    }

    pub fn apply(&mut self, action: Action) {
        debug!(?action, "browse action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchTab => {
                self.tab = match self.tab {
                    Tab::Table => Tab::Chart,
                    Tab::Chart => Tab::Table,
                };
            }
            Action::CycleChart => self.chart_kind = self.chart_kind.next(),
            Action::SortBy(field) => {
                self.view_state = std::mem::take(&mut self.view_state).select_sort(&field);
                self.refresh();
            }
            Action::StartSearch => self.searching = true,
            Action::EndSearch => self.searching = false,
            Action::SearchInput(c) => {
                let mut search = self.view_state.search.clone();
                search.push(c);
                self.view_state = std::mem::take(&mut self.view_state).with_search(search);
                self.refresh();
            }
            Action::SearchBackspace => {
                let mut search = self.view_state.search.clone();
                search.pop();
                self.view_state = std::mem::take(&mut self.view_state).with_search(search);
                self.refresh();
            }
            Action::ToggleSeries(index) => {
                if let Some(series) = self.series.get(index) {
                    let key = series.key.clone();
                    self.view_state = std::mem::take(&mut self.view_state).toggle_series(&key);
                }
            }
        }
    }

    fn refresh(&mut self) {
        let rows = apply_view_state(&self.collection, &self.view_state);
        self.table = project_tabular(&rows, &self.fields);
        self.chart = project_chart_rows(&rows, &self.fields, self.series.clone());
    }

    pub fn shown_records(&self) -> usize {
        self.table.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_engine::{SortSpec, infer_schema};
    use tabula_types::Record;

    fn app() -> AppState {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon").with("count", 5).with("open", 1),
            Record::new().with("day", "Tue").with("count", -2).with("open", 4),
            Record::new().with("day", "Wed").with("count", 0).with("open", 2),
        ]);
        let fields = infer_schema(&collection);
        AppState::new(
            "busy days".to_string(),
            collection,
            fields,
            vec!["#6366F1".to_string()],
            ChartKind::Bar,
            3,
        )
    }

    fn days(app: &AppState) -> Vec<&str> {
        app.table
            .rows
            .iter()
            .map(|r| r.cells[0].display.text())
            .collect()
    }

    #[test]
    fn test_sort_action_rederives_rows() {
        let mut app = app();
        app.apply(Action::SortBy("count".to_string()));
        assert_eq!(days(&app), vec!["Tue", "Wed", "Mon"]);

        app.apply(Action::SortBy("count".to_string()));
        assert_eq!(app.view_state.sort, Some(SortSpec::descending("count")));
        assert_eq!(days(&app), vec!["Mon", "Wed", "Tue"]);
    }

    #[test]
    fn test_search_typing_and_backspace() {
        let mut app = app();
        app.apply(Action::StartSearch);
        app.apply(Action::SearchInput('t'));
        app.apply(Action::SearchInput('u'));
        assert_eq!(days(&app), vec!["Tue"]);
        assert_eq!(app.chart.points.len(), 1);

        app.apply(Action::SearchBackspace);
        app.apply(Action::SearchBackspace);
        app.apply(Action::EndSearch);
        assert!(!app.searching);
        assert_eq!(app.shown_records(), 3);
    }

    #[test]
    fn test_summary_ignores_search() {
        let mut app = app();
        app.apply(Action::SearchInput('x'));
        assert_eq!(app.shown_records(), 0);
        assert_eq!(app.summary[0].count, 3);
    }

    #[test]
    fn test_toggle_series_by_position() {
        let mut app = app();
        assert!(app.view_state.is_selected("open"));
        app.apply(Action::ToggleSeries(1));
        assert!(!app.view_state.is_selected("open"));
        app.apply(Action::ToggleSeries(9));
        assert!(app.view_state.is_selected("count"));
    }

    #[test]
    fn test_search_keeps_series_positions() {
        let collection = Collection::new(vec![
            Record::new()
                .with("day", "Mon")
                .with("a", 1)
                .with("n", Record::new().with("x", 2))
                .with("b", 3),
            Record::new()
                .with("day", "Tue")
                .with("a", 4)
                .with("n", Record::new().with("x", "none"))
                .with("b", 5),
        ]);
        let fields = infer_schema(&collection);
        let mut app = AppState::new(
            "nested".to_string(),
            collection,
            fields,
            vec![],
            ChartKind::Bar,
            3,
        );

        for c in "tue".chars() {
            app.apply(Action::SearchInput(c));
        }
        assert_eq!(app.shown_records(), 1);
        let keys: Vec<&str> = app.chart.series.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "n_avg", "b"]);

        app.apply(Action::ToggleSeries(2));
        assert!(!app.view_state.is_selected("b"));
        assert!(app.view_state.is_selected("a"));
    }

    #[test]
    fn test_tab_and_chart_cycle() {
        let mut app = app();
        app.apply(Action::SwitchTab);
        assert_eq!(app.tab, Tab::Chart);
        app.apply(Action::CycleChart);
        assert_eq!(app.chart_kind, ChartKind::Line);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
