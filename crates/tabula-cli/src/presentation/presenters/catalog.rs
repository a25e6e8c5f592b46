use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    CatalogEntry, CatalogViewModel, CommandResultViewModel, Guidance, StatusBadge,
};

pub fn present_catalog(config: &Config, config_path: &Path) -> CommandResultViewModel<CatalogViewModel> {
    let entries: Vec<CatalogEntry> = config
        .datasets
        .iter()
        .map(|(key, entry)| {
            let path = config
                .resolve_dataset(key, config_path)
                .unwrap_or_else(|| entry.path.clone());
            CatalogEntry {
                key: key.clone(),
                title: entry.title.clone(),
                exists: path.exists(),
                path,
            }
        })
        .collect();

    let missing = entries.iter().filter(|e| !e.exists).count();
    let content = CatalogViewModel {
        config_path: config_path.to_path_buf(),
        datasets: entries,
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.datasets.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No datasets configured"))
            .with_suggestion(Guidance::new(format!(
                "Add a [datasets.<key>] table with a path to {}",
                config_path.display()
            )))
            .with_suggestion(
                Guidance::new("Or open a file directly").with_command("tabula show data.json"),
            );
    } else if missing > 0 {
        let badge = StatusBadge::warning(format!(
            "{} dataset(s), {} missing on disk",
            result.content.datasets.len(),
            missing
        ));
        result = result.with_badge(badge);
    } else {
        let badge = StatusBadge::success(format!(
            "{} dataset(s)",
            result.content.datasets.len()
        ));
        result = result.with_badge(badge);
    }
    result
}
