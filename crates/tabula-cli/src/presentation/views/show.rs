use std::fmt;
use tabula_engine::RenderModel;

use super::{CardView, ChartView, DashboardView, EmptyStateView, ListView, TableView};
use crate::presentation::view_models::{CreateView, ShowViewModel, ViewOptions};

impl CreateView for ShowViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        match &self.model {
            RenderModel::Empty => Box::new(EmptyStateView::new(self.view)),
            RenderModel::Table(table) => {
                Box::new(TableView::new(table, self.state.sort.as_ref(), options))
            }
            RenderModel::List(list) => Box::new(ListView::new(list, options)),
            RenderModel::Card(cards) => Box::new(CardView::new(cards, options)),
            RenderModel::Chart(chart) => Box::new(ChartView::new(
                chart,
                self.chart_kind,
                &self.state.selected_series,
                &self.summary,
                &self.palette,
                options,
            )),
            RenderModel::Dashboard(dashboard) => Box::new(DashboardView::new(
                dashboard,
                self.chart_kind,
                &self.palette,
                options,
            )),
        }
    }
}
