//! Numeric CSS values: angles and lengths.

use std::fmt;

// ── Number formatting ────────────────────────────────────────────────────

/// Formats `value` with at most `decimals` fractional digits, dropping
/// trailing zeros (`12.50` → `12.5`, `3.00` → `3`).
pub fn format_number(value: f64, decimals: usize) -> String {
    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

// ── Angle ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    pub fn from_suffix(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "deg" => Some(Self::Deg),
            "grad" => Some(Self::Grad),
            "rad" => Some(Self::Rad),
            "turn" => Some(Self::Turn),
            _ => None,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Grad => "grad",
            Self::Rad => "rad",
            Self::Turn => "turn",
        }
    }
}

/// A CSS `<angle>`, kept in the unit it was written in.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Angle {
    pub value: f32,
    pub unit: AngleUnit,
}

impl Angle {
    #[inline]
    pub const fn new(value: f32, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn deg(value: f32) -> Self {
        Self::new(value, AngleUnit::Deg)
    }

    /// The angle in degrees, not wrapped.
    pub fn to_degrees(self) -> f32 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Grad => self.value * 0.9,
            AngleUnit::Rad => self.value.to_degrees(),
            AngleUnit::Turn => self.value * 360.0,
        }
    }

    /// The angle in degrees wrapped into `[0, 360)`.
    pub fn normalized_degrees(self) -> f32 {
        let d = self.to_degrees().rem_euclid(360.0);
        if d >= 360.0 { 0.0 } else { d }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

// ── Length ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    Percent,
    Px,
    Em,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Ch,
    Ex,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    /// Maps a dimension suffix (`px`, `em`, ...) to a unit. `%` is handled by
    /// the lexer as its own token and maps through [`LengthUnit::Percent`].
    pub fn from_suffix(unit: &str) -> Option<Self> {
        let unit = match unit.to_ascii_lowercase().as_str() {
            "%" => Self::Percent,
            "px" => Self::Px,
            "em" => Self::Em,
            "rem" => Self::Rem,
            "vw" => Self::Vw,
            "vh" => Self::Vh,
            "vmin" => Self::Vmin,
            "vmax" => Self::Vmax,
            "ch" => Self::Ch,
            "ex" => Self::Ex,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            _ => return None,
        };
        Some(unit)
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Ch => "ch",
            Self::Ex => "ex",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
        }
    }
}

/// A CSS `<length-percentage>`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    #[inline]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}
