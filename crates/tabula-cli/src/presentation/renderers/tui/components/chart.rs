use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use tabula_engine::Series;
use tabula_types::{ChartKind, format_number};

use super::{Component, hex_color};
use crate::presentation::renderers::tui::app::{Action, AppState};

// BarChart only takes integers; values are scaled so fractions keep their shape.
const BAR_SCALE: f64 = 1000.0;

pub(crate) struct ChartComponent;

impl ChartComponent {
    fn color(series: &Series, state: &AppState) -> Color {
        hex_color(series.color(&state.palette))
    }

    fn render_legend(f: &mut Frame, area: Rect, visible: &[&Series], state: &AppState) {
        let mut spans = Vec::new();
        for (i, series) in state.chart.series.iter().enumerate() {
            let shown = visible.iter().any(|s| s.key == series.key);
            let marker = if shown { "■" } else { "□" };
            spans.push(Span::styled(
                format!("{} ", marker),
                Style::default().fg(Self::color(series, state)),
            ));
            let label = format!("{} {}  ", i + 1, series.label);
            let style = if shown {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_bars(f: &mut Frame, area: Rect, visible: &[&Series], state: &AppState, block: Block) {
        let keys: Vec<&str> = visible.iter().map(|s| s.key.as_str()).collect();
        let max_abs = state.chart.max_abs(keys.iter().copied());
        let scale = if max_abs > 0.0 { BAR_SCALE / max_abs } else { 1.0 };

        let groups: Vec<(String, Vec<Bar>)> = state
            .chart
            .points
            .iter()
            .map(|point| {
                let bars = visible
                    .iter()
                    .map(|series| {
                        let value = point.value(&series.key);
                        Bar::default()
                            .value(value.map(|v| (v.max(0.0) * scale).round() as u64).unwrap_or(0))
                            .text_value(value.map(format_number).unwrap_or_default())
                            .style(Style::default().fg(Self::color(series, state)))
                    })
                    .collect();
                (point.name.clone(), bars)
            })
            .collect();

        let mut chart = BarChart::default()
            .block(block)
            .bar_width(3)
            .bar_gap(1)
            .group_gap(2);
        for (name, bars) in &groups {
            chart = chart.data(BarGroup::default().label(Line::from(name.as_str())).bars(bars));
        }
        f.render_widget(chart, area);
    }

    fn render_lines(f: &mut Frame, area: Rect, visible: &[&Series], state: &AppState, block: Block) {
        let graph_type = match state.chart_kind {
            ChartKind::Area => GraphType::Bar,
            _ => GraphType::Line,
        };

        let data: Vec<Vec<(f64, f64)>> = visible
            .iter()
            .map(|series| {
                state
                    .chart
                    .values_of(&series.key)
                    .enumerate()
                    .filter_map(|(x, v)| v.map(|v| (x as f64, v)))
                    .collect()
            })
            .collect();

        let (min, max) = data
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
                (lo.min(*y), hi.max(*y))
            });
        let (min, max) = if min.is_finite() {
            (min.min(0.0), max.max(min + 1.0))
        } else {
            (0.0, 1.0)
        };

        let datasets: Vec<Dataset> = visible
            .iter()
            .zip(&data)
            .map(|(series, points)| {
                Dataset::default()
                    .name(series.label.clone())
                    .marker(Marker::Braille)
                    .graph_type(graph_type)
                    .style(Style::default().fg(Self::color(series, state)))
                    .data(points)
            })
            .collect();

        let last = state.chart.points.len().saturating_sub(1);
        let x_labels: Vec<String> = match (state.chart.points.first(), state.chart.points.last()) {
            (Some(first), Some(end)) if last > 0 => vec![first.name.clone(), end.name.clone()],
            (Some(first), _) => vec![first.name.clone()],
            _ => Vec::new(),
        };

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, last.max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([min, max])
                    .labels(vec![format_number(min), format_number(max)]),
            );
        f.render_widget(chart, area);
    }
}

impl Component for ChartComponent {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Option<Action> {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => Some(Action::ToggleSeries(c as usize - '1' as usize)),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let visible: Vec<&Series> = state
            .chart
            .visible_series(&state.view_state.selected_series)
            .collect();
        let title = format!(
            "{} chart · {} of {} series",
            state.chart_kind,
            visible.len(),
            state.chart.series.len()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let message = if state.chart.points.is_empty() {
            Some("No data available for visualization")
        } else if state.chart.series.is_empty() {
            Some("No numeric fields to plot")
        } else if visible.is_empty() {
            Some("No series selected, press 1-9 to choose")
        } else {
            None
        };

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
        Self::render_legend(f, chunks[0], &visible, state);

        if let Some(message) = message {
            f.render_widget(Paragraph::new(message).block(block), chunks[1]);
            return;
        }

        match state.chart_kind {
            ChartKind::Bar => Self::render_bars(f, chunks[1], &visible, state, block),
            ChartKind::Line | ChartKind::Area => {
                Self::render_lines(f, chunks[1], &visible, state, block)
            }
        }
    }
}
