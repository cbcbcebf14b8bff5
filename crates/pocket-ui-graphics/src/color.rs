use std::fmt;
use std::str::FromStr;

/// Linear RGBA colour with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parses a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::new(hex))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::new(hex))
        };
        Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha)
    }

    /// Moves each channel towards white by `amount` (0.0 keeps the colour).
    pub fn lighten(self, amount: f32) -> Self {
        let lift = |c: f32| c + (1.0 - c) * amount.clamp(0.0, 1.0);
        Color(lift(self.0), lift(self.1), lift(self.2), self.3)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_byte(self.0), to_byte(self.1), to_byte(self.2), to_byte(self.3)]
    }

    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a #RRGGBB colour", self.input)
    }
}

impl std::error::Error for ParseColorError {}
