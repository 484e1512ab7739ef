use std::fmt;

use macroquad::prelude::Color;
use ::rand::Rng;

use crate::config;

/// 8-bit RGB color with a float alpha, as cells carry it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl CellColor {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color with uniformly random channels.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen(), 1.0)
    }

    /// Scale every channel by `factor` (saturating at 255) and replace alpha.
    pub fn adjust(self, factor: f32, alpha: f32) -> Self {
        let scale = |channel: u8| (factor * channel as f32).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.red), scale(self.green), scale(self.blue), alpha)
    }

    pub fn darken(self, alpha: f32) -> Self {
        self.adjust(config::COLOR_DARKEN, alpha)
    }

    pub fn lighten(self, alpha: f32) -> Self {
        self.adjust(config::COLOR_LIGHTEN, alpha)
    }
}

impl From<CellColor> for Color {
    fn from(c: CellColor) -> Self {
        Color::new(
            c.red as f32 / 255.0,
            c.green as f32 / 255.0,
            c.blue as f32 / 255.0,
            c.alpha,
        )
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.red, self.green, self.blue, self.alpha)
    }
}
