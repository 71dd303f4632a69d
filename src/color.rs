//! RGB color values and hex-string parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An opaque RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string.
    ///
    /// Accepts a 3-digit shorthand (`fff`) or a full 6-digit triplet
    /// (`ffffff`), each with an optional leading `#`. Shorthand digits are
    /// doubled, so `#fff` and `#ffffff` parse to the same color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let channel = |pair: &str| {
            u8::from_str_radix(pair, 16).map_err(|_| {
                Error::Validation(format!("\"{hex}\" is not a valid hex color"))
            })
        };

        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    out[i] = channel(&format!("{c}{c}"))?;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(Error::Validation(format!(
                "\"{hex}\" is not a valid hex color (expected 3 or 6 hex digits)"
            ))),
        }
    }

    /// Returns the channels in `[r, g, b]` order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_triplet() {
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn parses_shorthand() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hex("000").unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_hex("f80").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn shorthand_matches_full_form() {
        assert_eq!(
            Rgb::from_hex("#fff").unwrap(),
            Rgb::from_hex("#ffffff").unwrap()
        );
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ffff").is_err());
        assert!(Rgb::from_hex("gggggg").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
    }

    #[test]
    fn display_round_trips() {
        let color = Rgb::new(255, 128, 0);
        assert_eq!(color.to_string(), "#ff8000");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }
}
