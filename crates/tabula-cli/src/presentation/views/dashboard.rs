use std::collections::BTreeSet;
use std::fmt;
use tabula_engine::{DashboardModel, Heatmap, TimeRange, humanize_label};
use tabula_types::{ChartKind, PLACEHOLDER};

use super::chart::ChartView;
use crate::presentation::formatters::{format_fixed, format_optional, pad, truncate};
use crate::presentation::view_models::ViewOptions;

const HEATMAP_CELL_WIDTH: usize = 8;
const MAX_LABEL_WIDTH: usize = 20;

pub struct DashboardView<'a> {
    data: &'a DashboardModel,
    chart_kind: ChartKind,
    palette: &'a [String],
    options: ViewOptions,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        data: &'a DashboardModel,
        chart_kind: ChartKind,
        palette: &'a [String],
        options: ViewOptions,
    ) -> Self {
        Self {
            data,
            chart_kind,
            palette,
            options,
        }
    }

    fn render_headline(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scope = match self.data.time_range {
            TimeRange::All => String::new(),
            range => format!(" (range: {})", range),
        };
        writeln!(
            f,
            "{} {} of {}{}",
            self.options.style.bold("Records"),
            self.data.record_count,
            self.data.total_count,
            scope
        )?;

        let labels: Vec<String> = self
            .data
            .summary
            .iter()
            .map(|s| humanize_label(&s.field))
            .collect();
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);

        for (label, summary) in labels.iter().zip(&self.data.summary) {
            writeln!(
                f,
                "  {}  total {:<12} avg {}",
                pad(label, label_width),
                format_fixed(summary.sum),
                format_optional(summary.mean)
            )?;
        }
        Ok(())
    }

    fn render_heatmap(&self, f: &mut fmt::Formatter, heatmap: &Heatmap) -> fmt::Result {
        let label_width = heatmap
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);

        writeln!(f, "{}", self.options.style.bold("Correlation"))?;

        let header = heatmap
            .columns
            .iter()
            .map(|c| format!("{:>width$}", truncate(c, HEATMAP_CELL_WIDTH), width = HEATMAP_CELL_WIDTH))
            .collect::<Vec<_>>()
            .join("");
        writeln!(f, "  {}{}", " ".repeat(label_width), header)?;

        for row in &heatmap.rows {
            write!(f, "  {}", pad(&row.label, label_width))?;
            for cell in &row.cells {
                let text = match cell.value {
                    Some(v) => format!("{:>width$.2}", v, width = HEATMAP_CELL_WIDTH),
                    None => format!("{:>width$}", PLACEHOLDER, width = HEATMAP_CELL_WIDTH),
                };
                write!(f, "{}", self.options.style.band(&text, cell.band))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_headline(f)?;

        if let Some(heatmap) = &self.data.heatmap {
            writeln!(f)?;
            self.render_heatmap(f, heatmap)?;
        }

        let selected: BTreeSet<String> = self.data.default_series.iter().cloned().collect();
        writeln!(f)?;
        write!(
            f,
            "{}",
            ChartView::new(
                &self.data.chart,
                self.chart_kind,
                &selected,
                &[],
                self.palette,
                self.options,
            )
        )
    }
}
