use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tabula_types::Value;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])").expect("valid regex"));

/// Turn a camelCase field name into a header label.
///
/// `avgResolutionTime` becomes `Avg Resolution Time`. Names without ASCII
/// capitals only lose surrounding whitespace and gain a capital first letter.
pub fn humanize_label(name: &str) -> String {
    let spaced = UPPERCASE.replace_all(name, " $1");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sign of a numeric value, used for card indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    None,
}

impl Tone {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(n) if *n > 0.0 => Tone::Positive,
            Value::Number(n) if *n < 0.0 => Tone::Negative,
            Value::Number(_) => Tone::Neutral,
            _ => Tone::None,
        }
    }

    pub fn indicator(self) -> Option<&'static str> {
        match self {
            Tone::Positive => Some("↑"),
            Tone::Negative => Some("↓"),
            Tone::Neutral => Some("−"),
            Tone::None => None,
        }
    }
}
