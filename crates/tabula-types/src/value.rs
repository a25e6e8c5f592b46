use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::cmp::Ordering;
use std::fmt;

use crate::field::FieldKind;

/// Rendered in place of an absent value, and of any statistic that has no input.
pub const PLACEHOLDER: &str = "-";

static ABSENT: Value = Value::Absent;

// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A single cell value.
///
/// JSON `null` maps to `Absent`, booleans map to `Text("true" | "false")`,
/// arrays map to `List`. Every consumer matches on the tag; there is no
/// implicit coercion between tags.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Nested(Record),
    List(Vec<Value>),
    Absent,
}

impl Value {
    /// Kind this value votes for during schema inference. `Absent` does not vote.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Value::Number(_) => Some(FieldKind::Numeric),
            Value::Text(_) => Some(FieldKind::Categorical),
            Value::Nested(_) | Value::List(_) => Some(FieldKind::Nested),
            Value::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Nested(_) | Value::List(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Stringified form shared by every view and by search.
    ///
    /// Scalars print their plain value, structured values print as
    /// two-space indented JSON, absent values print [`PLACEHOLDER`].
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Number(n) => format_number(*n),
            Value::Text(t) => t.clone(),
            Value::Nested(_) | Value::List(_) => {
                serde_json::to_string_pretty(self).unwrap_or_else(|_| PLACEHOLDER.to_string())
            }
            Value::Absent => PLACEHOLDER.to_string(),
        }
    }

    /// Mean of the direct numeric children of a structured value.
    ///
    /// Only one level deep; text and nested children are skipped.
    pub fn numeric_mean(&self) -> Option<f64> {
        let numbers: Vec<f64> = match self {
            Value::Nested(record) => record.values().filter_map(Value::as_number).collect(),
            Value::List(items) => items.iter().filter_map(Value::as_number).collect(),
            _ => return None,
        };

        if numbers.is_empty() {
            None
        } else {
            Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
        }
    }

    /// Total order used for sorting.
    ///
    /// Values with the same tag compare natively (numbers by `total_cmp`,
    /// text lexicographically, structured values by their stringified form).
    /// Differing tags order by rank: Number < Text < Nested < List < Absent.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Nested(_), Value::Nested(_)) | (Value::List(_), Value::List(_)) => {
                self.to_display_string().cmp(&other.to_display_string())
            }
            (Value::Absent, Value::Absent) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Text(_) => 1,
            Value::Nested(_) => 2,
            Value::List(_) => 3,
            Value::Absent => 4,
        }
    }
}

/// Format a number the way a reader expects: integral values drop the
/// fractional part (`5`, not `5.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Text(t.to_string())
    }
}

impl From<String> for Value {
    fn from(t: String) -> Self {
        Value::Text(t)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Nested(record)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Text(b.to_string()),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Absent),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Nested(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(t) => serializer.serialize_str(t),
            Value::Nested(record) => record.serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Absent => serializer.serialize_unit(),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v))
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Absent)
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            record.insert(key, value);
        }
        Ok(Value::Nested(record))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// One row of a collection: an insertion-ordered mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Value of `name`, or `Value::Absent` when the record does not define it.
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Nested(record) => Ok(record),
            _ => Err(de::Error::custom("expected a JSON object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_drops_integral_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_display_string_per_tag() {
        assert_eq!(Value::from(3).to_display_string(), "3");
        assert_eq!(Value::from("Tue").to_display_string(), "Tue");
        assert_eq!(Value::Absent.to_display_string(), PLACEHOLDER);

        let nested = Value::from(Record::new().with("a", 1));
        assert_eq!(nested.to_display_string(), "{\n  \"a\": 1\n}");

        let list = Value::from(vec![Value::from(1), Value::from(2.5)]);
        assert_eq!(list.to_display_string(), "[\n  1,\n  2.5\n]");
    }

    #[test]
    fn test_deserialize_preserves_key_order() {
        let record: Record = serde_json::from_str(r#"{"zeta": 1, "alpha": "x", "mid": null}"#)
            .unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.get("mid"), &Value::Absent);
    }

    #[test]
    fn test_deserialize_booleans_become_text() {
        let value: Value = serde_json::from_str("true").unwrap();
        assert_eq!(value, Value::Text("true".to_string()));
    }

    #[test]
    fn test_missing_key_reads_absent() {
        let record = Record::new().with("day", "Mon");
        assert!(record.get("count").is_absent());
        assert!(!record.contains("count"));
    }

    #[test]
    fn test_numeric_mean_uses_direct_numbers_only() {
        let nested = Value::from(
            Record::new()
                .with("low", 2)
                .with("high", 4)
                .with("label", "x")
                .with("deep", Record::new().with("n", 100)),
        );
        assert_eq!(nested.numeric_mean(), Some(3.0));

        let no_numbers = Value::from(Record::new().with("label", "x"));
        assert_eq!(no_numbers.numeric_mean(), None);
        assert_eq!(Value::from(7).numeric_mean(), None);
    }

    #[test]
    fn test_compare_same_tag_is_native() {
        assert_eq!(Value::from(-2).compare(&Value::from(5)), Ordering::Less);
        assert_eq!(Value::from("b").compare(&Value::from("a")), Ordering::Greater);
        assert_eq!(Value::Absent.compare(&Value::Absent), Ordering::Equal);
    }

    #[test]
    fn test_compare_mixed_tags_is_total() {
        let values = [
            Value::Absent,
            Value::from("x"),
            Value::from(1),
            Value::from(vec![Value::from(1)]),
            Value::from(Record::new().with("a", 1)),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse());
            }
        }
        assert_eq!(Value::from(1).compare(&Value::from("1")), Ordering::Less);
        assert_eq!(Value::Absent.compare(&Value::from(0)), Ordering::Greater);
    }

    #[test]
    fn test_serialize_integral_numbers_as_integers() {
        let record = Record::new().with("count", 5).with("rate", 0.25);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"count":5,"rate":0.25}"#);
    }
}
