use std::path::Path;

use serde_json::json;
use tabula_engine::*;
use tabula_types::{Collection, FieldKind, Record, ViewKind, load};

fn load_fixture(name: &str) -> Collection {
    let path = Path::new("tests/fixtures").join(name);
    load::from_path(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn busy_days() -> Collection {
    Collection::new(vec![
        Record::new().with("day", "Mon").with("count", 5),
        Record::new().with("day", "Tue").with("count", -2),
        Record::new().with("day", "Wed").with("count", 0),
    ])
}

#[test]
fn test_busy_days_end_to_end() {
    let collection = busy_days();
    let fields = infer_schema(&collection);

    let numeric: Vec<&str> = numeric_fields(&fields).map(|f| f.name.as_str()).collect();
    assert_eq!(numeric, vec!["count"]);

    let summary = summarize(&project_chart(&collection, &fields), &fields);
    assert_eq!(summary[0].mean, Some(1.0));
    assert_eq!(summary[0].min, Some(-2.0));
    assert_eq!(summary[0].max, Some(5.0));
    assert_eq!(summary[0].count, 3);

    let sorted = apply_view_state(&collection, &ViewState::for_schema(&fields).select_sort("count"));
    let days: Vec<String> = sorted.iter().map(|r| r.get("day").to_display_string()).collect();
    assert_eq!(days, vec!["Tue", "Wed", "Mon"]);

    let found = apply_view_state(&collection, &ViewState::new().with_search("tue"));
    assert_eq!(serde_json::to_value(&found).unwrap(), json!([{ "day": "Tue", "count": -2 }]));
}

#[test]
fn test_wrapped_fixture_schema() {
    let collection = load_fixture("support_trends.json");
    let fields = infer_schema(&collection);

    let kinds: Vec<(&str, FieldKind)> = fields.iter().map(|f| (f.name.as_str(), f.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("month", FieldKind::Categorical),
            ("totalTickets", FieldKind::Numeric),
            ("avgResolutionTime", FieldKind::Numeric),
            ("satisfaction", FieldKind::Numeric),
            ("priority", FieldKind::Nested),
            ("notes", FieldKind::Categorical),
        ]
    );
}

#[test]
fn test_wrapped_fixture_chart() {
    let collection = load_fixture("support_trends.json");
    let fields = infer_schema(&collection);
    let RenderModel::Chart(chart) = project(&collection, &fields, ViewKind::Chart) else {
        panic!("expected chart");
    };

    let keys: Vec<&str> = chart.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["totalTickets", "avgResolutionTime", "satisfaction", "priority_avg"]
    );
    assert_eq!(chart.series[3].label, "Priority_avg");
    assert_eq!(chart.series[3].color(&DEFAULT_PALETTE), Some("#F59E0B"));

    assert_eq!(chart.points[0].name, "January");
    assert_eq!(chart.points[0].value("priority_avg"), Some(140.0));
    assert_eq!(chart.points[2].value("avgResolutionTime"), None);

    let summary = summarize(&chart, &fields);
    let resolution = summary.iter().find(|s| s.field == "avgResolutionTime").unwrap();
    assert_eq!(resolution.count, 2);
    assert_eq!(resolution.mean, Some(5.125));
}

#[test]
fn test_wrapped_fixture_table_cells() {
    let collection = load_fixture("support_trends.json");
    let fields = infer_schema(&collection);
    let RenderModel::Table(table) = project(&collection, &fields, ViewKind::Table) else {
        panic!("expected table");
    };

    let first = &table.rows[0];
    assert_eq!(first.id.as_deref(), Some("1"));
    assert_eq!(first.cells.len(), fields.len());
    assert!(first.cells[4].display.is_structured());
    assert_eq!(first.cells[5].display, CellDisplay::Placeholder);

    let third = &table.rows[2];
    assert_eq!(third.cells[2].display.text(), "-");
    assert_eq!(third.cells[5].display.text(), "system outage");
}

#[test]
fn test_projection_is_repeatable_and_pure() {
    let collection = load_fixture("support_trends.json");
    let before = collection.clone();
    let fields = infer_schema(&collection);

    for view in [
        ViewKind::Table,
        ViewKind::List,
        ViewKind::Card,
        ViewKind::Chart,
        ViewKind::Dashboard,
    ] {
        let first = project(&collection, &fields, view);
        let second = project(&collection, &fields, view);
        assert_eq!(first, second, "{} projection differs", view);
    }

    assert_eq!(collection, before);
    assert_eq!(infer_schema(&collection), fields);
}

#[test]
fn test_render_model_json_shape() {
    let collection = busy_days();
    let fields = infer_schema(&collection);

    let value = serde_json::to_value(project(&collection, &fields, ViewKind::List)).unwrap();
    assert_eq!(value["kind"], "list");
    assert_eq!(
        value["data"]["rows"][1]["cells"][1],
        json!({ "field": "count", "display": { "type": "scalar", "text": "-2" }, "tone": "negative" })
    );

    let empty = serde_json::to_value(project(&Collection::empty(), &[], ViewKind::Card)).unwrap();
    assert_eq!(empty, json!({ "kind": "empty" }));
}
