use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::dataset::{self, LoadedDataset};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewOptions};
use crate::types::OutputFormat;

/// Everything a handler needs besides its own arguments.
pub struct HandlerContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub options: ViewOptions,
}

impl HandlerContext {
    pub fn open_dataset(&self, target: &str) -> Result<LoadedDataset> {
        dataset::open(&self.config, &self.config_path, target)
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.options);
        renderer.render(view_model)
    }
}
