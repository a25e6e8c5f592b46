use anyhow::{Context, Result, bail};
use tabula_engine::{
    DashboardOptions, RenderModel, SortSpec, TimeRange, ViewState, apply_view_state, chart_series,
    find_field, infer_schema, parse_day, project, project_chart, project_chart_rows,
    project_dashboard, summarize,
};
use tabula_types::{Collection, Field, ViewKind};
use tracing::debug;

use super::HandlerContext;
use crate::args::ShowArgs;
use crate::presentation::presenters::{ShowInput, present_show};

/// Field consulted by `--range` when `--date-field` is not given.
pub const DEFAULT_DATE_FIELD: &str = "date";

pub fn handle(ctx: &HandlerContext, args: ShowArgs) -> Result<()> {
    let loaded = ctx.open_dataset(&args.dataset)?;
    let collection = &loaded.collection;
    let fields = infer_schema(collection);
    let display = &ctx.config.display;

    let view: ViewKind = args.view.map(Into::into).unwrap_or(display.default_view);
    let chart_kind = args.chart.map(Into::into).unwrap_or(display.default_chart);
    let state = build_view_state(&args, collection, &fields, display.default_series)?;
    debug!(?view, ?state, "show");

    let (model, summary) = match view {
        ViewKind::Chart => {
            let rows = apply_view_state(collection, &state);
            let full = project_chart(collection, &fields);
            let summary = summarize(&full, &fields);
            let model = if rows.is_empty() {
                RenderModel::Empty
            } else {
                RenderModel::Chart(project_chart_rows(&rows, &fields, full.series))
            };
            (model, summary)
        }
        ViewKind::Dashboard => {
            let mut options = dashboard_options(&args, &fields)?;
            options.series = Some(chart_series(collection, &fields));
            let rows = apply_view_state(collection, &state.clone().sorted_by(None));
            (project_dashboard(&rows, &fields, &options), Vec::new())
        }
        _ => {
            let rows = apply_view_state(collection, &state);
            (project(&rows, &fields, view), Vec::new())
        }
    };

    let result = present_show(ShowInput {
        total_records: collection.len(),
        source: loaded.source,
        view,
        chart_kind,
        state,
        palette: display.palette(),
        model,
        summary,
    });
    ctx.render(result)
}

fn build_view_state(
    args: &ShowArgs,
    collection: &Collection,
    fields: &[Field],
    series_count: usize,
) -> Result<ViewState> {
    let mut state = ViewState::for_schema_with(fields, series_count);

    if let Some(sort) = &args.sort {
        find_field(fields, sort)?;
        let spec = if args.desc {
            SortSpec::descending(sort)
        } else {
            SortSpec::ascending(sort)
        };
        state = state.sorted_by(Some(spec));
    }

    if let Some(search) = &args.search {
        state = state.with_search(search.clone());
    }

    if let Some(keys) = &args.series {
        let chart = project_chart(collection, fields);
        for key in keys {
            if chart.series_by_key(key).is_none() {
                bail!(
                    "Unknown series: {} (available: {})",
                    key,
                    chart
                        .series
                        .iter()
                        .map(|s| s.key.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
        state = state.with_series(keys.iter().cloned());
    }

    Ok(state)
}

fn dashboard_options(args: &ShowArgs, fields: &[Field]) -> Result<DashboardOptions> {
    let mut options = DashboardOptions {
        time_range: args.range.into(),
        ..DashboardOptions::default()
    };

    if let Some(today) = &args.today {
        options.today = parse_day(today).context("Invalid --today")?;
    }

    if options.time_range != TimeRange::All {
        let name = args.date_field.as_deref().unwrap_or(DEFAULT_DATE_FIELD);
        find_field(fields, name).context("--range needs a date field")?;
        options.date_field = Some(name.to_string());
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RangeArg;
    use tabula_types::Record;

    fn args() -> ShowArgs {
        ShowArgs {
            dataset: "days".to_string(),
            view: None,
            chart: None,
            sort: None,
            desc: false,
            search: None,
            series: None,
            range: RangeArg::All,
            date_field: None,
            today: None,
        }
    }

    fn trends() -> Collection {
        Collection::new(vec![
            Record::new().with("date", "2025-01-15").with("tickets", 40),
            Record::new().with("date", "2025-09-20").with("tickets", 20),
        ])
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let collection = trends();
        let fields = infer_schema(&collection);
        let args = ShowArgs {
            sort: Some("nope".to_string()),
            ..args()
        };
        let err = build_view_state(&args, &collection, &fields, 3).unwrap_err();
        assert_eq!(err.to_string(), "Unknown field: nope");
    }

    #[test]
    fn test_series_override_replaces_defaults() -> Result<()> {
        let collection = trends();
        let fields = infer_schema(&collection);
        let args = ShowArgs {
            series: Some(Vec::new()),
            sort: Some("tickets".to_string()),
            desc: true,
            ..args()
        };
        let state = build_view_state(&args, &collection, &fields, 3)?;
        assert!(state.selected_series.is_empty());
        assert_eq!(state.sort, Some(SortSpec::descending("tickets")));
        Ok(())
    }

    #[test]
    fn test_unknown_series_lists_available_keys() {
        let collection = trends();
        let fields = infer_schema(&collection);
        let args = ShowArgs {
            series: Some(vec!["volume".to_string()]),
            ..args()
        };
        let err = build_view_state(&args, &collection, &fields, 3).unwrap_err();
        assert_eq!(err.to_string(), "Unknown series: volume (available: tickets)");
    }

    #[test]
    fn test_range_defaults_to_date_field() -> Result<()> {
        let fields = infer_schema(&trends());
        let args = ShowArgs {
            range: RangeArg::Month,
            today: Some("2025-10-01".to_string()),
            ..args()
        };
        let options = dashboard_options(&args, &fields)?;
        assert_eq!(options.time_range, TimeRange::Month);
        assert_eq!(options.date_field.as_deref(), Some("date"));
        assert_eq!(options.today, parse_day("2025-10-01")?);
        Ok(())
    }

    #[test]
    fn test_range_without_date_field_fails() {
        let collection = Collection::new(vec![Record::new().with("tickets", 1)]);
        let fields = infer_schema(&collection);
        let args = ShowArgs {
            range: RangeArg::Year,
            ..args()
        };
        let err = dashboard_options(&args, &fields).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown field: date"));
    }
}
