use tabula_types::PLACEHOLDER;

/// Two decimals, as used by summary figures.
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_fixed).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `min - max`, or the placeholder when there is no data.
pub fn format_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", format_fixed(min), format_fixed(max)),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_formatting() {
        assert_eq!(format_fixed(1.0), "1.00");
        assert_eq!(format_optional(Some(126.6666)), "126.67");
        assert_eq!(format_optional(None), "-");
        assert_eq!(format_range(Some(-2.0), Some(5.0)), "-2.00 - 5.00");
        assert_eq!(format_range(None, None), "-");
    }
}
