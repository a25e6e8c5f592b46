use std::fmt;
use tabula_engine::humanize_label;

use crate::presentation::formatters::{format_fixed, format_optional, pad};
use crate::presentation::view_models::{CreateView, StatsViewModel, ViewOptions};

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView {
            data: self,
            options,
        })
    }
}

struct StatsView<'a> {
    data: &'a StatsViewModel,
    options: ViewOptions,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.fields.is_empty() {
            return writeln!(f, "No numeric fields");
        }

        let labels: Vec<String> = self
            .data
            .fields
            .iter()
            .map(|s| humanize_label(&s.field))
            .collect();
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(5))
            .max()
            .unwrap_or(5)
            .min(32);

        let header = format!(
            "{} {:>6} {:>12} {:>12} {:>12} {:>12}",
            pad("FIELD", label_width),
            "COUNT",
            "SUM",
            "MEAN",
            "MIN",
            "MAX"
        );
        writeln!(f, "{}", self.options.style.bold(&header))?;
        writeln!(f, "{}", "-".repeat(header.chars().count().min(self.options.width)))?;

        for (label, summary) in labels.iter().zip(&self.data.fields) {
            writeln!(
                f,
                "{} {:>6} {:>12} {:>12} {:>12} {:>12}",
                pad(label, label_width),
                summary.count,
                format_fixed(summary.sum),
                format_optional(summary.mean),
                format_optional(summary.min),
                format_optional(summary.max)
            )?;
        }
        Ok(())
    }
}
