use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::foundation::error::{RsvpError, RsvpResult};

/// Color names accepted on the command line, with the RGB values `ffmpeg` assigns them.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00]),
    ("green", [0x00, 0x80, 0x00]),
    ("blue", [0x00, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00]),
    ("cyan", [0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF]),
    ("orange", [0xFF, 0xA5, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("pink", [0xFF, 0xC0, 0xCB]),
    ("brown", [0xA5, 0x2A, 0x2A]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("silver", [0xC0, 0xC0, 0xC0]),
    ("gold", [0xFF, 0xD7, 0x00]),
    ("lime", [0x00, 0xFF, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("teal", [0x00, 0x80, 0x80]),
    ("olive", [0x80, 0x80, 0x00]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("aqua", [0x00, 0xFF, 0xFF]),
    ("fuchsia", [0xFF, 0x00, 0xFF]),
    ("darkred", [0x8B, 0x00, 0x00]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("darkblue", [0x00, 0x00, 0x8B]),
    ("lightgreen", [0x90, 0xEE, 0x90]),
    ("lightblue", [0xAD, 0xD8, 0xE6]),
    ("darkgray", [0xA9, 0xA9, 0xA9]),
    ("darkgrey", [0xA9, 0xA9, 0xA9]),
    ("lightgray", [0xD3, 0xD3, 0xD3]),
    ("lightgrey", [0xD3, 0xD3, 0xD3]),
    ("dimgray", [0x69, 0x69, 0x69]),
    ("dimgrey", [0x69, 0x69, 0x69]),
];

/// A resolved straight-alpha RGBA8 color.
///
/// `Display` yields the canonical form handed to `ffmpeg`: `0xRRGGBB` for opaque colors and
/// `0xRRGGBBAA` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (`255` is opaque).
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = RsvpError;

    fn from_str(s: &str) -> RsvpResult<Self> {
        ColorSpec::parse(s).map(ColorSpec::resolve)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A color as the user wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// A known color name, e.g. `red` or `lightgrey`.
    Named {
        /// Lowercase name from the built-in table.
        name: &'static str,
        /// RGB value of the name.
        rgb: [u8; 3],
    },
    /// `#RRGGBB`, `#RRGGBBAA`, `0xRRGGBB` or `0xRRGGBBAA`.
    Hex(Color),
    /// `rgb(r, g, b)` with 0..=255 channels.
    RgbTriple(u8, u8, u8),
}

impl ColorSpec {
    /// Classify and validate a color string.
    pub fn parse(input: &str) -> RsvpResult<Self> {
        let s = input.trim();
        let lower = s.to_ascii_lowercase();

        if let Some(hex) = lower
            .strip_prefix('#')
            .or_else(|| lower.strip_prefix("0x"))
        {
            return parse_hex(hex).map(Self::Hex).map_err(|msg| {
                RsvpError::invalid_color(format!("'{input}': {msg}"))
            });
        }

        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let [r, g, b] = parse_triple(body)
                .map_err(|msg| RsvpError::invalid_color(format!("'{input}': {msg}")))?;
            return Ok(Self::RgbTriple(r, g, b));
        }

        if let Some((name, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(Self::Named {
                name: *name,
                rgb: *rgb,
            });
        }

        Err(RsvpError::invalid_color(format!(
            "'{input}' is not a color. Use a name (white, black, red, ...), \
             hex (#FF0000 or 0xFF0000) or rgb(255,0,0)"
        )))
    }

    /// Resolve to the canonical color value.
    pub fn resolve(self) -> Color {
        match self {
            Self::Named { rgb: [r, g, b], .. } => Color::rgb(r, g, b),
            Self::Hex(c) => c,
            Self::RgbTriple(r, g, b) => Color::rgb(r, g, b),
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("\"{s}\" is not a hex number"));
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

fn parse_triple(body: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("rgb() takes 3 channels, got {}", parts.len()));
    };

    let channel = |v: &str| {
        v.parse::<u8>()
            .map_err(|_| format!("rgb channel \"{v}\" must be an integer in 0..=255"))
    };
    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
