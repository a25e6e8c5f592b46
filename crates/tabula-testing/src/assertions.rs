//! Checks over the JSON that `--format json` prints.
//!
//! Every command wraps its payload as `{badge, content, suggestions}`;
//! `show` puts the projected view under `content.model` as `{kind, data}`.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert the kind of render model `show` produced.
pub fn assert_model_kind(json: &Value, expected: &str) -> Result<()> {
    let kind = json["content"]["model"]["kind"]
        .as_str()
        .context("Expected 'content.model.kind' in JSON")?;

    if kind != expected {
        bail!("Expected model kind {}, got {}", expected, kind);
    }
    Ok(())
}

/// Text of one column across the rows of a table, list or card model.
pub fn column_texts(json: &Value, field: &str) -> Result<Vec<String>> {
    let rows = json["content"]["model"]["data"]["rows"]
        .as_array()
        .context("Expected 'content.model.data.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cell = row["cells"]
                .as_array()
                .with_context(|| format!("Row {} has no cells", i))?
                .iter()
                .find(|c| c["field"] == field)
                .with_context(|| format!("Row {} has no '{}' cell", i, field))?;
            Ok(cell["display"]["text"].as_str().unwrap_or("-").to_string())
        })
        .collect()
}

/// Assert one column's texts, in row order.
pub fn assert_column(json: &Value, field: &str, expected: &[&str]) -> Result<()> {
    let texts = column_texts(json, field)?;
    if texts != expected {
        bail!("Expected column {} to be {:?}, got {:?}", field, expected, texts);
    }
    Ok(())
}

/// Assert the keys of the chart series, in order.
pub fn assert_series_keys(json: &Value, expected: &[&str]) -> Result<()> {
    let series = json["content"]["model"]["data"]["series"]
        .as_array()
        .context("Expected 'content.model.data.series' array in JSON")?;

    let keys: Vec<&str> = series.iter().filter_map(|s| s["key"].as_str()).collect();
    if keys != expected {
        bail!("Expected series {:?}, got {:?}", expected, keys);
    }
    Ok(())
}

/// Assert the number of datasets `datasets` listed.
pub fn assert_catalog_count(json: &Value, expected: usize) -> Result<()> {
    let datasets = json["content"]["datasets"]
        .as_array()
        .context("Expected 'content.datasets' array in JSON")?;

    if datasets.len() != expected {
        bail!("Expected {} datasets, got {}", expected, datasets.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> Value {
        json!({
            "content": {
                "model": {
                    "kind": "table",
                    "data": {
                        "fields": [],
                        "rows": [
                            {"position": 1, "cells": [
                                {"field": "day", "display": {"type": "scalar", "text": "Tue"}}
                            ]},
                            {"position": 2, "cells": [
                                {"field": "day", "display": {"type": "placeholder"}}
                            ]}
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_assert_model_kind() {
        assert!(assert_model_kind(&table(), "table").is_ok());
        assert!(assert_model_kind(&table(), "chart").is_err());
    }

    #[test]
    fn test_column_texts_fill_placeholders() -> Result<()> {
        assert_eq!(column_texts(&table(), "day")?, vec!["Tue", "-"]);
        assert!(assert_column(&table(), "day", &["Tue", "-"]).is_ok());
        assert!(column_texts(&table(), "count").is_err());
        Ok(())
    }
}
