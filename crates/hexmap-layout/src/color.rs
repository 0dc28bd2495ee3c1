//! Deterministic domain colors.
//!
//! A domain's color is its index in the run's ordered domain list, taken
//! modulo a fixed blue-to-teal palette. Colors are stable within one layout
//! run only: a different domain set may shift a domain's index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `amount` to every channel, clamping to 0-255.
    pub fn shade(self, amount: i32) -> Self {
        let channel = |c: u8| i32::from(c).saturating_add(amount).clamp(0, 255) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Packed `0xRRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rrggbb`; the leading `#` is optional and case is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Cluster palette, darkest blue to lightest teal.
pub const PALETTE: [Rgb; 16] = [
    Rgb::new(0x1a, 0x2e, 0x5a),
    Rgb::new(0x1f, 0x3b, 0x73),
    Rgb::new(0x23, 0x48, 0x8c),
    Rgb::new(0x28, 0x56, 0xa5),
    Rgb::new(0x2d, 0x63, 0xbe),
    Rgb::new(0x35, 0x71, 0xd1),
    Rgb::new(0x3f, 0x7f, 0xdb),
    Rgb::new(0x4a, 0x8d, 0xe0),
    Rgb::new(0x3f, 0x9b, 0xd6),
    Rgb::new(0x35, 0xa6, 0xcb),
    Rgb::new(0x2b, 0xb0, 0xbf),
    Rgb::new(0x22, 0xb8, 0xb0),
    Rgb::new(0x1f, 0xbf, 0xa3),
    Rgb::new(0x2c, 0xc6, 0xa0),
    Rgb::new(0x45, 0xcf, 0xa9),
    Rgb::new(0x62, 0xd8, 0xb5),
];

/// Palette entry for `index`, wrapping past the end.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Color of `domain` given every domain seen this run, in order.
///
/// A domain missing from `all_domains` gets the color it would receive if it
/// were appended to the list.
pub fn domain_color<S: AsRef<str>>(domain: &str, all_domains: &[S]) -> Rgb {
    let index = all_domains
        .iter()
        .position(|d| d.as_ref() == domain)
        .unwrap_or(all_domains.len());
    palette_color(index)
}

/// Shade a `#rrggbb` string by `amount` per channel.
pub fn shade_variant(hex_color: &str, amount: i32) -> Result<String> {
    let color: Rgb = hex_color.parse()?;
    Ok(color.shade(amount).to_string())
}
