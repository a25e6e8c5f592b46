use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    pub config_path: PathBuf,
    pub datasets: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub key: String,
    pub title: Option<String>,
    pub path: PathBuf,
    pub exists: bool,
}
