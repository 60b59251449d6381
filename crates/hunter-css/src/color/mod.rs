//! Color notations: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, and keywords.
//!
//! Colors in a gradient model are kept as the text the author wrote. This
//! module resolves that text to [`Rgba`] and renders it back in any
//! [`Notation`], which is what lets a stop move between notations.

mod parse;

use std::fmt;
use std::str::FromStr;

use crate::value::format_number;

pub use parse::parse_color;

// ── Errors ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid color function `{0}`")]
    InvalidFunction(String),
    #[error("unknown color keyword `{0}`")]
    UnknownKeyword(String),
    /// Valid CSS, but depends on context this crate does not have
    /// (`currentcolor`, `var()`, system colors).
    #[error("color `{0}` cannot be resolved outside a document")]
    Unresolvable(String),
}

impl ColorError {
    /// The offending color text (empty for [`ColorError::Empty`]).
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::InvalidHex(s)
            | Self::InvalidFunction(s)
            | Self::UnknownKeyword(s)
            | Self::Unresolvable(s) => s,
        }
    }
}

// ── Notation ─────────────────────────────────────────────────────────────

/// Textual color notation used when rendering colors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Notation {
    #[default]
    Rgb,
    Hex,
    Hsl,
}

impl Notation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Ok(Self::Rgb),
            "hex" => Ok(Self::Hex),
            "hsl" | "hsla" => Ok(Self::Hsl),
            _ => Err(ColorError::UnknownKeyword(s.to_owned())),
        }
    }
}

// ── Rgba ─────────────────────────────────────────────────────────────────

/// Straight-alpha sRGB color: 8-bit channels, alpha in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Builds a color from straight RGBA bytes, as found in decoded images.
    #[inline]
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, f32::from(a) / 255.0)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when not fully opaque.
    pub fn to_rgb_string(self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_number(f64::from(self.a), 3)
            )
        }
    }

    /// HSL components of this color.
    ///
    /// Achromatic colors get hue and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let channel = |v: u8| f64::from(v) / 255.0;
        let color = csscolorparser::Color::new(
            channel(self.r),
            channel(self.g),
            channel(self.b),
            f64::from(self.a),
        );
        let (h, s, l, _) = color.to_hsla();
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Hsl::new(finite(h).rem_euclid(360.0), finite(s) * 100.0, finite(l) * 100.0, self.a)
    }

    pub fn to_notation(self, notation: Notation) -> String {
        match notation {
            Notation::Rgb => self.to_rgb_string(),
            Notation::Hex => self.to_hex(),
            Notation::Hsl => self.to_hsl().to_string(),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

// ── Hsl ──────────────────────────────────────────────────────────────────

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f32,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn to_rgba(self) -> Rgba {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let [r, g, b, _] =
            csscolorparser::Color::from_hsla(self.h.rem_euclid(360.0), s, l, 1.0).to_rgba8();
        Rgba::new(r, g, b, self.a)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One decimal keeps text round-trips within one channel step.
        let h = format_number(self.h, 1);
        let s = format_number(self.s, 1);
        let l = format_number(self.l, 1);
        if self.a >= 1.0 {
            write!(f, "hsl({h}, {s}%, {l}%)")
        } else {
            write!(f, "hsla({h}, {s}%, {l}%, {})", format_number(f64::from(self.a), 3))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formats_opaque_and_translucent() {
        assert_eq!(Rgba::opaque(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(Rgba::new(0, 0, 0, 0.5).to_hex(), "#00000080");
    }

    #[test]
    fn rgb_string_switches_to_rgba() {
        assert_eq!(Rgba::opaque(1, 2, 3).to_rgb_string(), "rgb(1, 2, 3)");
        assert_eq!(Rgba::new(1, 2, 3, 0.25).to_rgb_string(), "rgba(1, 2, 3, 0.25)");
    }

    #[test]
    fn hsl_of_primaries() {
        assert_eq!(Rgba::opaque(255, 0, 0).to_hsl().to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Rgba::opaque(0, 255, 0).to_hsl().to_string(), "hsl(120, 100%, 50%)");
        assert_eq!(Rgba::opaque(0, 0, 255).to_hsl().to_string(), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn hsl_of_gray_has_no_nan() {
        let hsl = Rgba::opaque(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(hsl.l.is_finite());
    }

    #[test]
    fn rgb_hsl_rgb_within_one() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let src = Rgba::opaque(r as u8, g as u8, b as u8);
                    let back = src.to_hsl().to_rgba();
                    assert!((i16::from(src.r) - i16::from(back.r)).abs() <= 1, "{src:?} -> {back:?}");
                    assert!((i16::from(src.g) - i16::from(back.g)).abs() <= 1, "{src:?} -> {back:?}");
                    assert!((i16::from(src.b) - i16::from(back.b)).abs() <= 1, "{src:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn hsl_text_round_trip_within_one() {
        let src = Rgba::opaque(37, 142, 201);
        let text = src.to_hsl().to_string();
        let back = parse_color(&text).unwrap();
        assert!((i16::from(src.r) - i16::from(back.r)).abs() <= 1);
        assert!((i16::from(src.g) - i16::from(back.g)).abs() <= 1);
        assert!((i16::from(src.b) - i16::from(back.b)).abs() <= 1);
    }

    #[test]
    fn notation_from_str() {
        assert_eq!("HEX".parse::<Notation>().unwrap(), Notation::Hex);
        assert_eq!("hsla".parse::<Notation>().unwrap(), Notation::Hsl);
        assert!("cmyk".parse::<Notation>().is_err());
    }
}
