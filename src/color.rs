//! Linear RGB color with unclamped accumulation.

use std::ops::{Add, AddAssign, Mul};

use image::Rgb;
use serde::{Deserialize, Deserializer};

/// Channels are nominally in `[0, 1]` but may exceed it while light
/// contributions are being summed. Clamping happens only in [`Color::to_rgb`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb([to_byte(self.r), to_byte(self.g), to_byte(self.b)])
    }

    pub fn is_black(&self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }
}

fn to_byte(c: f64) -> u8 {
    (c.max(0.0).min(1.0) * 255.0).round() as u8
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, o: Color) {
        *self = *self + o;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(rgb: Rgb<u8>) -> Self {
        Color::from_bytes(rgb[0], rgb[1], rgb[2])
    }
}

/// Scene files spell colors as `[r, g, b]` byte triples.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (r, g, b): (u8, u8, u8) = Deserialize::deserialize(de)?;

        Ok(Color::from_bytes(r, g, b))
    }
}

/// A handful of named colors used by the reference scene.
pub mod named {
    use super::Color;

    pub fn light_gray() -> Color {
        Color::from_bytes(211, 211, 211)
    }

    pub fn gray() -> Color {
        Color::from_bytes(128, 128, 128)
    }

    pub fn purple() -> Color {
        Color::from_bytes(128, 0, 128)
    }

    pub fn dark_blue() -> Color {
        Color::from_bytes(0, 0, 139)
    }

    pub fn dark_olive_green() -> Color {
        Color::from_bytes(85, 107, 47)
    }
}

#[test]
fn accumulation_clamps_only_on_output() {
    let c = Color::new(0.8, 0.1, 0.0) + Color::new(0.7, 0.1, 0.0);
    assert!(c.r > 1.0);
    assert_eq!(Rgb([255, 51, 0]), c.to_rgb());
}

#[test]
fn negative_channels_clamp_to_zero() {
    assert_eq!(Rgb([0, 0, 0]), Color::new(-0.5, -1.0, 0.0).to_rgb());
}

#[test]
fn deserialize_byte_triple() {
    let c: Color = serde_json::from_str("[255, 0, 51]").unwrap();
    assert_eq!(Rgb([255, 0, 51]), c.to_rgb());
}
