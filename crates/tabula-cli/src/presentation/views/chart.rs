use std::collections::BTreeSet;
use std::fmt;
use tabula_engine::{ChartModel, FieldSummary, Series};
use tabula_types::{ChartKind, PLACEHOLDER, format_number};

use crate::presentation::formatters::{format_optional, format_range, pad, truncate};
use crate::presentation::view_models::ViewOptions;

const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const AREA_HEIGHT: usize = 4;
const MAX_LABEL_WIDTH: usize = 24;

/// Rows of block characters plotting `values` bottom-up over `height` rows.
///
/// Present values always get at least the lowest block so they stay
/// visible; missing values leave a gap.
pub fn plot_rows(values: &[Option<f64>], height: usize) -> Vec<String> {
    let present: Vec<f64> = values.iter().flatten().copied().filter(|v| v.is_finite()).collect();
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let steps = height * 8;

    let levels: Vec<Option<usize>> = values
        .iter()
        .map(|v| {
            let v = v.filter(|v| v.is_finite())?;
            let scaled = if max > min {
                ((v - min) / (max - min) * steps as f64).round() as usize
            } else {
                steps
            };
            Some(scaled.clamp(1, steps))
        })
        .collect();

    (0..height)
        .rev()
        .map(|row| {
            levels
                .iter()
                .map(|level| match level {
                    Some(level) => EIGHTHS[level.saturating_sub(row * 8).min(8)],
                    None => ' ',
                })
                .collect()
        })
        .collect()
}

pub struct ChartView<'a> {
    data: &'a ChartModel,
    kind: ChartKind,
    selected: &'a BTreeSet<String>,
    summary: &'a [FieldSummary],
    palette: &'a [String],
    options: ViewOptions,
}

impl<'a> ChartView<'a> {
    pub fn new(
        data: &'a ChartModel,
        kind: ChartKind,
        selected: &'a BTreeSet<String>,
        summary: &'a [FieldSummary],
        palette: &'a [String],
        options: ViewOptions,
    ) -> Self {
        Self {
            data,
            kind,
            selected,
            summary,
            palette,
            options,
        }
    }

    fn paint(&self, text: &str, series: &Series) -> String {
        match series.color(self.palette) {
            Some(hex) => self.options.style.hex(text, hex),
            None => text.to_string(),
        }
    }

    fn render_legend(&self, f: &mut fmt::Formatter, visible: &[&Series]) -> fmt::Result {
        let legend = visible
            .iter()
            .map(|s| format!("{} {}", self.paint("■", s), s.label))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(f, "{}", legend)
    }

    fn render_bars(&self, f: &mut fmt::Formatter, visible: &[&Series]) -> fmt::Result {
        let keys: Vec<&str> = visible.iter().map(|s| s.key.as_str()).collect();
        let max_abs = self.data.max_abs(keys.iter().copied());
        let label_width = visible
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);
        let bar_width = self.options.width.saturating_sub(label_width + 16).max(10);

        for point in &self.data.points {
            writeln!(f, "{}", self.options.style.bold(&point.name))?;
            for series in visible {
                let bar = match point.value(&series.key) {
                    Some(v) if max_abs > 0.0 => {
                        let len = ((v.abs() / max_abs) * bar_width as f64).round() as usize;
                        let glyph = if v < 0.0 { "░" } else { "█" };
                        format!("{} {}", glyph.repeat(len), format_number(v))
                    }
                    Some(v) => format_number(v),
                    None => PLACEHOLDER.to_string(),
                };
                writeln!(
                    f,
                    "  {}  {}",
                    pad(&series.label, label_width),
                    self.paint(&bar, series)
                )?;
            }
        }
        Ok(())
    }

    fn render_plots(
        &self,
        f: &mut fmt::Formatter,
        visible: &[&Series],
        height: usize,
    ) -> fmt::Result {
        let label_width = visible
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);

        for series in visible {
            let values: Vec<Option<f64>> = self.data.values_of(&series.key).collect();
            let rows = plot_rows(&values, height);
            let present: Vec<f64> = values.iter().flatten().copied().collect();
            let min = present.iter().copied().reduce(f64::min);
            let max = present.iter().copied().reduce(f64::max);

            for (i, row) in rows.iter().enumerate() {
                let label = if i == 0 { series.label.as_str() } else { "" };
                let scale = if i == 0 { format_range(min, max) } else { String::new() };
                writeln!(
                    f,
                    "  {}  {}  {}",
                    pad(label, label_width),
                    self.paint(row, series),
                    self.options.style.dim(&scale)
                )?;
            }
        }

        if let (Some(first), Some(last)) = (self.data.points.first(), self.data.points.last()) {
            let axis = if self.data.points.len() > 1 {
                format!("{} → {}", first.name, last.name)
            } else {
                first.name.clone()
            };
            writeln!(
                f,
                "  {}  {}",
                " ".repeat(label_width),
                self.options.style.dim(&truncate(&axis, self.options.width))
            )?;
        }
        Ok(())
    }

    fn render_summary(&self, f: &mut fmt::Formatter, visible: &[&Series]) -> fmt::Result {
        let rows: Vec<(&Series, &FieldSummary)> = visible
            .iter()
            .filter_map(|s| {
                self.summary
                    .iter()
                    .find(|summary| summary.field == s.key)
                    .map(|summary| (*s, summary))
            })
            .collect();
        if rows.is_empty() {
            return Ok(());
        }

        let label_width = rows
            .iter()
            .map(|(s, _)| s.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", self.options.style.bold("Summary"))?;
        for (series, summary) in rows {
            writeln!(
                f,
                "  {}  avg {:<12} range {}",
                pad(&series.label, label_width),
                format_optional(summary.mean),
                format_range(summary.min, summary.max)
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ChartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: Vec<&Series> = self.data.visible_series(self.selected).collect();

        writeln!(
            f,
            "{}",
            self.options.style.bold(&format!(
                "{} chart · {} of {} series",
                capitalize(&self.kind.to_string()),
                visible.len(),
                self.data.series.len()
            ))
        )?;

        if self.data.series.is_empty() {
            return writeln!(f, "No numeric fields to plot");
        }
        if visible.is_empty() {
            return writeln!(f, "No series selected");
        }

        self.render_legend(f, &visible)?;
        writeln!(f)?;

        match self.kind {
            ChartKind::Bar => self.render_bars(f, &visible)?,
            ChartKind::Line => self.render_plots(f, &visible, 1)?,
            ChartKind::Area => self.render_plots(f, &visible, AREA_HEIGHT)?,
        }

        self.render_summary(f, &visible)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_engine::{infer_schema, project_chart, summarize};
    use tabula_types::{Collection, Record};

    #[test]
    fn test_plot_rows_single_line() {
        let rows = plot_rows(&[Some(0.0), Some(4.0), None, Some(8.0)], 1);
        assert_eq!(rows, vec!["▁▄ █".to_string()]);
    }

    #[test]
    fn test_plot_rows_area_fills_below() {
        let rows = plot_rows(&[Some(1.0), Some(2.0)], 2);
        assert_eq!(rows, vec![" █".to_string(), "▁█".to_string()]);
    }

    #[test]
    fn test_plot_rows_flat_series_is_full() {
        assert_eq!(plot_rows(&[Some(3.0), Some(3.0)], 1), vec!["██".to_string()]);
    }

    #[test]
    fn test_bar_chart_text() {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon").with("count", 5),
            Record::new().with("day", "Tue").with("count", -2),
            Record::new().with("day", "Wed").with("count", 0),
        ]);
        let fields = infer_schema(&collection);
        let chart = project_chart(&collection, &fields);
        let summary = summarize(&chart, &fields);
        let selected: BTreeSet<String> = ["count".to_string()].into_iter().collect();
        let palette = vec!["#6366F1".to_string()];

        let text = ChartView::new(
            &chart,
            ChartKind::Bar,
            &selected,
            &summary,
            &palette,
            ViewOptions::plain(40),
        )
        .to_string();

        assert!(text.starts_with("Bar chart · 1 of 1 series\n■ Count\n"));
        assert!(text.contains("Mon\n  Count  ███████████████████ 5\n"));
        assert!(text.contains("Tue\n  Count  ░░░░░░░░ -2\n"));
        assert!(text.contains("Wed\n  Count   0\n"));
        assert!(text.contains("Count  avg 1.00         range -2.00 - 5.00"));
    }

    #[test]
    fn test_no_selection_message() {
        let collection = Collection::new(vec![Record::new().with("day", "Mon").with("count", 5)]);
        let fields = infer_schema(&collection);
        let chart = project_chart(&collection, &fields);
        let selected = BTreeSet::new();
        let text = ChartView::new(&chart, ChartKind::Line, &selected, &[], &[], ViewOptions::plain(40))
            .to_string();
        assert!(text.ends_with("No series selected\n"));
    }
}
