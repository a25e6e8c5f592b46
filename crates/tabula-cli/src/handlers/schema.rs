use anyhow::Result;
use tabula_engine::infer_schema;

use super::HandlerContext;
use crate::presentation::presenters::present_schema;

pub fn handle(ctx: &HandlerContext, target: &str) -> Result<()> {
    let loaded = ctx.open_dataset(target)?;
    let fields = infer_schema(&loaded.collection);
    ctx.render(present_schema(loaded.source, &loaded.collection, &fields))
}
