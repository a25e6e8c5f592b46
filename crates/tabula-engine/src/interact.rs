//! Interaction Controller
//!
//! [`ViewState`] holds the transient sort, search and series selection of
//! one view session. Transitions return new values; [`apply_view_state`]
//! derives the rows to show from the unchanged source collection.

use serde::Serialize;
use std::collections::BTreeSet;
use tabula_types::{Collection, Field, ID_FIELD, Record, SortDirection};

use crate::project::{DEFAULT_SERIES_COUNT, default_series};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub sort: Option<SortSpec>,
    pub search: String,
    pub selected_series: BTreeSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a freshly loaded collection: no sort, no search,
    /// the first three numeric fields selected.
    pub fn for_schema(fields: &[Field]) -> Self {
        Self::for_schema_with(fields, DEFAULT_SERIES_COUNT)
    }

    pub fn for_schema_with(fields: &[Field], series_count: usize) -> Self {
        Self {
            selected_series: default_series(fields, series_count),
            ..Self::default()
        }
    }

    /// Sort by `field`. Selecting the current sort field flips its
    /// direction; any other field starts ascending.
    pub fn select_sort(self, field: &str) -> Self {
        let sort = match self.sort {
            Some(current) if current.field == field => SortSpec {
                direction: current.direction.flip(),
                field: current.field,
            },
            _ => SortSpec::ascending(field),
        };
        Self {
            sort: Some(sort),
            ..self
        }
    }

    pub fn sorted_by(self, sort: Option<SortSpec>) -> Self {
        Self { sort, ..self }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Add the series if absent, remove it if present.
    pub fn toggle_series(mut self, key: &str) -> Self {
        if !self.selected_series.remove(key) {
            self.selected_series.insert(key.to_string());
        }
        self
    }

    pub fn with_series<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_series: keys.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_series.contains(key)
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }
}

/// Rows to display under `state`: sorted first, then filtered by search.
///
/// The output is always a subsequence of a permutation of the input; the
/// source collection is left untouched.
pub fn apply_view_state(collection: &Collection, state: &ViewState) -> Collection {
    let mut records: Vec<&Record> = collection.iter().collect();

    if let Some(sort) = &state.sort {
        records.sort_by(|a, b| a.get(&sort.field).compare(b.get(&sort.field)));
        if sort.direction == SortDirection::Descending {
            records.reverse();
        }
    }

    let needle = state.search.to_lowercase();
    records
        .into_iter()
        .filter(|record| needle.is_empty() || matches_search(record, &needle))
        .cloned()
        .collect()
}

/// True if any visible, non-absent value's stringified form contains
/// `needle`. The hidden `id` key never matches. `needle` must already be
/// lowercase.
fn matches_search(record: &Record, needle: &str) -> bool {
    record
        .iter()
        .filter(|(name, v)| *name != ID_FIELD && !v.is_absent())
        .any(|(_, v)| v.to_display_string().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_types::Value;

    fn busy_days() -> Collection {
        Collection::new(vec![
            Record::new().with("day", "Mon").with("count", 5),
            Record::new().with("day", "Tue").with("count", -2),
            Record::new().with("day", "Wed").with("count", 0),
        ])
    }

    fn days(collection: &Collection) -> Vec<String> {
        collection
            .iter()
            .map(|r| r.get("day").to_display_string())
            .collect()
    }

    #[test]
    fn test_sort_ascending_by_count() {
        let state = ViewState::new().select_sort("count");
        let rows = apply_view_state(&busy_days(), &state);
        assert_eq!(days(&rows), vec!["Tue", "Wed", "Mon"]);
    }

    #[test]
    fn test_select_sort_flips_then_resets() {
        let state = ViewState::new().select_sort("count");
        assert_eq!(state.sort, Some(SortSpec::ascending("count")));

        let state = state.select_sort("count");
        assert_eq!(state.sort, Some(SortSpec::descending("count")));

        let state = state.select_sort("day");
        assert_eq!(state.sort, Some(SortSpec::ascending("day")));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = ViewState::new().with_search("tue");
        let rows = apply_view_state(&busy_days(), &state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.records()[0].get("count"), &Value::from(-2));
    }

    #[test]
    fn test_search_ignores_hidden_id() {
        let collection = Collection::new(vec![
            Record::new().with("id", 3).with("day", "Mon"),
            Record::new().with("id", 4).with("day", "Tue").with("count", 13),
        ]);
        let rows = apply_view_state(&collection, &ViewState::new().with_search("3"));
        assert_eq!(days(&rows), vec!["Tue"]);
    }

    #[test]
    fn test_search_matches_numbers_and_skips_absent() {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon").with("note", Value::Absent),
            Record::new().with("day", "Tue").with("count", 15),
        ]);
        let rows = apply_view_state(&collection, &ViewState::new().with_search("5"));
        assert_eq!(days(&rows), vec!["Tue"]);

        let rows = apply_view_state(&collection, &ViewState::new().with_search("-"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sort_then_filter() {
        let state = ViewState::new()
            .select_sort("count")
            .select_sort("count")
            .with_search("e");
        let rows = apply_view_state(&busy_days(), &state);
        assert_eq!(days(&rows), vec!["Wed", "Tue"]);
    }

    #[test]
    fn test_absent_sorts_last_ascending() {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon"),
            Record::new().with("day", "Tue").with("count", 3),
            Record::new().with("day", "Wed").with("count", "many"),
        ]);
        let rows = apply_view_state(&collection, &ViewState::new().select_sort("count"));
        assert_eq!(days(&rows), vec!["Tue", "Wed", "Mon"]);
    }

    #[test]
    fn test_source_is_unchanged() {
        let source = busy_days();
        let before = source.clone();
        let _ = apply_view_state(&source, &ViewState::new().select_sort("count").with_search("x"));
        assert_eq!(source, before);
    }

    #[test]
    fn test_toggle_series() {
        let fields = vec![
            Field::categorical("day"),
            Field::numeric("a"),
            Field::numeric("b"),
        ];
        let state = ViewState::for_schema(&fields);
        assert!(state.is_selected("a") && state.is_selected("b"));

        let state = state.toggle_series("a");
        assert!(!state.is_selected("a"));

        let state = state.toggle_series("a");
        assert!(state.is_selected("a"));
    }
}
