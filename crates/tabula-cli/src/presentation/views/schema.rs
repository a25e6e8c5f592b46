use std::fmt;

use crate::presentation::formatters::pad;
use crate::presentation::view_models::{CreateView, SchemaViewModel, ViewOptions};

impl CreateView for SchemaViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(SchemaView {
            data: self,
            options,
        })
    }
}

struct SchemaView<'a> {
    data: &'a SchemaViewModel,
    options: ViewOptions,
}

impl<'a> fmt::Display for SchemaView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.fields.is_empty() {
            return writeln!(f, "No data available");
        }

        let name_width = self
            .data
            .fields
            .iter()
            .map(|e| e.name.chars().count())
            .chain(std::iter::once(5))
            .max()
            .unwrap_or(5)
            .min(32);

        let header = format!(
            "{} {:<12} {:<8} LABEL",
            pad("FIELD", name_width),
            "KIND",
            "PRESENT"
        );
        writeln!(f, "{}", self.options.style.bold(&header))?;
        writeln!(f, "{}", "-".repeat(header.chars().count().min(self.options.width)))?;

        for entry in &self.data.fields {
            let kind = if entry.mixed {
                format!("{}*", entry.kind)
            } else {
                entry.kind.to_string()
            };
            writeln!(
                f,
                "{} {:<12} {:<8} {}",
                pad(&entry.name, name_width),
                kind,
                format!("{}/{}", entry.present_in, self.data.record_count),
                entry.label
            )?;
        }

        if self.data.fields.iter().any(|e| e.mixed) {
            writeln!(f)?;
            writeln!(
                f,
                "{}",
                self.options.style.dim("* records disagree; majority kind shown")
            )?;
        }
        Ok(())
    }
}
