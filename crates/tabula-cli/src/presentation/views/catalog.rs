use std::fmt;

use crate::presentation::formatters::pad;
use crate::presentation::view_models::{CatalogViewModel, CreateView, ViewOptions};

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogView {
            data: self,
            options,
        })
    }
}

struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    options: ViewOptions,
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config: {}", self.data.config_path.display())?;
        if self.data.datasets.is_empty() {
            return Ok(());
        }
        writeln!(f)?;

        let key_width = self
            .data
            .datasets
            .iter()
            .map(|d| d.key.chars().count())
            .chain(std::iter::once(3))
            .max()
            .unwrap_or(3)
            .min(24);
        let title_width = self
            .data
            .datasets
            .iter()
            .filter_map(|d| d.title.as_ref().map(|t| t.chars().count()))
            .chain(std::iter::once(5))
            .max()
            .unwrap_or(5)
            .min(32);

        let header = format!(
            "{} {} {:<6} PATH",
            pad("KEY", key_width),
            pad("TITLE", title_width),
            "FOUND"
        );
        writeln!(f, "{}", self.options.style.bold(&header))?;
        writeln!(f, "{}", "-".repeat(header.chars().count().min(self.options.width)))?;

        for entry in &self.data.datasets {
            writeln!(
                f,
                "{} {} {:<6} {}",
                pad(&entry.key, key_width),
                pad(entry.title.as_deref().unwrap_or("-"), title_width),
                if entry.exists { "yes" } else { "no" },
                entry.path.display()
            )?;
        }
        Ok(())
    }
}
