use owo_colors::OwoColorize;
use tabula_engine::{CorrelationBand, Tone};

/// Parse `#RRGGBB` into its components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Terminal styling that degrades to plain text when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Paint with a palette color; invalid colors leave the text plain.
    pub fn hex(&self, text: &str, hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) if self.color => text.truecolor(r, g, b).to_string(),
            _ => text.to_string(),
        }
    }

    pub fn tone(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Positive => text.green().to_string(),
            Tone::Negative => text.red().to_string(),
            Tone::Neutral => text.yellow().to_string(),
            Tone::None => text.to_string(),
        }
    }

    pub fn band(&self, text: &str, band: CorrelationBand) -> String {
        if !self.color {
            return text.to_string();
        }
        match band {
            CorrelationBand::StrongPositive => text.green().bold().to_string(),
            CorrelationBand::Positive => text.blue().to_string(),
            CorrelationBand::StrongNegative => text.red().bold().to_string(),
            CorrelationBand::Neutral => text.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#6366F1"), Some((0x63, 0x66, 0xF1)));
        assert_eq!(parse_hex("6366F1"), None);
        assert_eq!(parse_hex("#12"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_plain_style_passes_text_through() {
        let style = TextStyle::plain();
        assert_eq!(style.bold("x"), "x");
        assert_eq!(style.hex("x", "#EC4899"), "x");
        assert_eq!(style.tone("5", Tone::Positive), "5");
    }

    #[test]
    fn test_colored_style_emits_escapes() {
        let style = TextStyle::colored();
        assert!(style.hex("x", "#EC4899").contains("\u{1b}["));
        assert_eq!(style.hex("x", "not-a-color"), "x");
    }
}
