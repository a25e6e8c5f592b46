use std::io::Read;
use std::path::Path;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::value::{Record, Value};

// Key of the wrapped form `{ "items": [...] }`.
const ITEMS_KEY: &str = "items";

/// Parse a collection from JSON text.
///
/// Accepts a bare array of objects or an object holding an `items` array.
pub fn from_json_str(text: &str) -> Result<Collection> {
    let value: Value = serde_json::from_str(text)?;
    into_collection(value)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Collection> {
    let value: Value = serde_json::from_reader(reader)?;
    into_collection(value)
}

pub fn from_path(path: &Path) -> Result<Collection> {
    let file = std::fs::File::open(path)?;
    from_reader(std::io::BufReader::new(file))
}

fn into_collection(value: Value) -> Result<Collection> {
    let items = match value {
        Value::List(items) => items,
        Value::Nested(record) => match record.get(ITEMS_KEY) {
            Value::List(items) => items.clone(),
            _ => {
                return Err(Error::InvalidShape(format!(
                    "expected an array of records or an object with an `{}` array",
                    ITEMS_KEY
                )));
            }
        },
        _ => {
            return Err(Error::InvalidShape(
                "expected an array of records".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| into_record(index, item))
        .collect::<Result<Vec<_>>>()
        .map(Collection::new)
}

fn into_record(index: usize, item: Value) -> Result<Record> {
    match item {
        Value::Nested(record) => Ok(record),
        other => Err(Error::InvalidShape(format!(
            "record {} is not an object (found {})",
            index,
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "a number",
        Value::Text(_) => "text",
        Value::Nested(_) => "an object",
        Value::List(_) => "an array",
        Value::Absent => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bare_array() {
        let collection = from_json_str(r#"[{"day": "Mon", "count": 5}, {"day": "Tue"}]"#).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.records()[0].get("count"), &Value::Number(5.0));
        assert!(collection.records()[1].get("count").is_absent());
    }

    #[test]
    fn test_wrapped_items() {
        let collection = from_json_str(r#"{"items": [{"id": 1, "name": "alpha"}]}"#).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_empty_array() {
        let collection = from_json_str("[]").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_rejects_scalar_records() {
        let err = from_json_str(r#"[{"a": 1}, 42]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidShape(_)));
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_rejects_object_without_items() {
        let err = from_json_str(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidShape(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = from_json_str("[{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"[{{"season": "winter", "tickets": 120}}]"#)?;

        let collection = from_path(file.path())?;
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records()[0].get("tickets"), &Value::Number(120.0));
        Ok(())
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = from_path(Path::new("/nonexistent/tabula/data.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
