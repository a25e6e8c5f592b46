use anyhow::Result;
use tabula_engine::{infer_schema, project_chart, summarize};

use super::HandlerContext;
use crate::presentation::presenters::present_stats;

pub fn handle(ctx: &HandlerContext, target: &str) -> Result<()> {
    let loaded = ctx.open_dataset(target)?;
    let fields = infer_schema(&loaded.collection);
    let summary = summarize(&project_chart(&loaded.collection, &fields), &fields);
    ctx.render(present_stats(loaded.source, loaded.collection.len(), summary))
}
