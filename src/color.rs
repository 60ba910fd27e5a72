//! Defines the `Rgb` color value and the standard console palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit RGB color.
///
/// Cell colors compare by exact channel equality; there is no tolerance and
/// no color-space conversion anywhere in the render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // The 16 standard console colors, using the sRGB values common to most
    // terminals.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(205, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 205, 0);
    pub const YELLOW: Rgb = Rgb::new(205, 205, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 238);
    pub const MAGENTA: Rgb = Rgb::new(205, 0, 205);
    pub const CYAN: Rgb = Rgb::new(0, 205, 205);
    pub const WHITE: Rgb = Rgb::new(229, 229, 229);
    pub const BRIGHT_BLACK: Rgb = Rgb::new(127, 127, 127);
    pub const BRIGHT_RED: Rgb = Rgb::new(255, 0, 0);
    pub const BRIGHT_GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BRIGHT_YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const BRIGHT_BLUE: Rgb = Rgb::new(92, 92, 255);
    pub const BRIGHT_MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const BRIGHT_CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const BRIGHT_WHITE: Rgb = Rgb::new(255, 255, 255);
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
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
    use test_log::test;

    #[test]
    fn exact_channel_equality() {
        assert_eq!(Rgb::new(10, 20, 30), Rgb::from((10, 20, 30)));
        assert_ne!(Rgb::new(10, 20, 30), Rgb::new(10, 20, 31));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }
}
