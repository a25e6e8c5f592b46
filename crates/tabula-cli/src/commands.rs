use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::debug;

use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::presentation::ViewOptions;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), datasets = config.datasets.len(), "config loaded");

    let color = !cli.no_color
        && config.display.color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    let ctx = HandlerContext {
        options: ViewOptions::new(color),
        format: cli.format,
        config,
        config_path,
    };

    match cli.command {
        Commands::Show(args) => handlers::show::handle(&ctx, args),
        Commands::Schema { dataset } => handlers::schema::handle(&ctx, &dataset),
        Commands::Stats { dataset } => handlers::stats::handle(&ctx, &dataset),
        Commands::Datasets => handlers::datasets::handle(&ctx),
        Commands::Browse { dataset } => handlers::browse::handle(&ctx, &dataset),
    }
}
