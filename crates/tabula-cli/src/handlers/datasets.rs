use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters::present_catalog;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    ctx.render(present_catalog(&ctx.config, &ctx.config_path))
}
