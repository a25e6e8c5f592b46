use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tabula_engine::infer_schema;

use super::HandlerContext;
use crate::presentation::BrowseSession;
use crate::types::OutputFormat;

pub fn handle(ctx: &HandlerContext, target: &str) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        bail!("browse is interactive and has no JSON output; use `tabula show --format json`");
    }
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal");
    }

    let loaded = ctx.open_dataset(target)?;
    let fields = infer_schema(&loaded.collection);
    let display = &ctx.config.display;

    BrowseSession::new(loaded.source.title, loaded.collection, fields)
        .with_palette(display.palette())
        .with_chart_kind(display.default_chart)
        .with_series_count(display.default_series)
        .run()
}
