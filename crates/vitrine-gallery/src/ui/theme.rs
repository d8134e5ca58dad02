//! App palette for the Vitrine gallery
//!
//! The accent color is configurable as a hex string (e.g. "#4DB3E6") in
//! config.yaml; invalid values fall back to the widget default.

use iced::Color;
use thiserror::Error;

/// Hex color parse failure
#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    /// Not a #RRGGBB string
    #[error("invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// Parse a "#RRGGBB" hex string into a Color
pub fn parse_hex(hex: &str) -> Result<Color, PaletteError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| PaletteError::InvalidHex(hex.to_string()))?;

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex(hex.to_string()));
    }

    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| PaletteError::InvalidHex(hex.to_string()))
    };

    Ok(Color::from_rgb8(parse(0..2)?, parse(2..4)?, parse(4..6)?))
}

/// Accent color from config, falling back to the widget default on bad input
pub fn accent_from_config(hex: &str) -> Color {
    match parse_hex(hex) {
        Ok(color) => color,
        Err(e) => {
            log::warn!("{}, using default accent", e);
            vitrine_widgets::ACCENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hex() {
        let color = parse_hex("#4DB3E6").unwrap();
        assert_eq!(color, Color::from_rgb8(0x4D, 0xB3, 0xE6));
        assert_eq!(parse_hex("#000000").unwrap(), Color::from_rgb8(0, 0, 0));
        assert_eq!(
            parse_hex("#ffffff").unwrap(),
            Color::from_rgb8(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            parse_hex("4DB3E6"),
            Err(PaletteError::InvalidHex("4DB3E6".to_string()))
        );
        assert!(parse_hex("#4DB3").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_accent_falls_back_on_bad_input() {
        assert_eq!(accent_from_config("oops"), vitrine_widgets::ACCENT);
        assert_eq!(
            accent_from_config("#112233"),
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
    }
}
