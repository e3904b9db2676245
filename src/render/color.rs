use serde::Deserialize;
use std::{fmt, str::FromStr};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend this color towards `other` by `amount`, where 0 is this color and 1 is `other`.
    pub fn mix(self, other: Self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * amount).round() as u8;
        Self::new(channel(self.r, other.r), channel(self.g, other.g), channel(self.b, other.b))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 {
            return Err(ColorError::Format(input.to_string()));
        }
        let mut bytes = [0; 3];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| ColorError::Hex(input.to_string(), e))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        Self::Rgb { r: color.r, g: color.g, b: color.b }
    }
}

/// Errors that can occur when parsing a color.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("color '{0}' must look like #RRGGBB")]
    Format(String),

    #[error("invalid hex in color '{0}': {1}")]
    Hex(String, hex::FromHexError),
}
