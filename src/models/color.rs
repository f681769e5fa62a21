//! Fill / background colour tokens.

use crate::error::{Error, Result};
use image::Rgba;

/// Opaque black
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Opaque white
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Fully transparent
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("navy", [0, 0, 128]),
];

/// Parse a colour name or `#rgb` / `#rrggbb` hex string into an opaque RGBA value
pub fn parse_color(token: &str) -> Result<Rgba<u8>> {
    let trimmed = token.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::InvalidColor(token.to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b])| Rgba([*r, *g, *b, 255]))
        .ok_or_else(|| Error::InvalidColor(token.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("black").unwrap(), BLACK);
        assert_eq!(parse_color(" White ").unwrap(), WHITE);
        assert_eq!(parse_color("orange").unwrap(), Rgba([255, 165, 0, 255]));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#000").unwrap(), BLACK);
        assert_eq!(parse_color("#fff").unwrap(), WHITE);
        assert_eq!(parse_color("#1a2B3c").unwrap(), Rgba([0x1a, 0x2b, 0x3c, 255]));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(parse_color("chartreuse-ish"), Err(Error::InvalidColor(_))));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("transparent").is_err());
    }
}
