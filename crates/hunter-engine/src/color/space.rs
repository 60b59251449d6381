use std::ops::Sub;

use hunter_css::Rgba;

/// D65 reference white in XYZ, scaled to `Y = 100`.
pub const D65_WHITE: Xyz = Xyz { x: 95.047, y: 100.0, z: 108.883 };

/// CIE XYZ tristimulus values, scaled 0–100.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L\*a\*b\* color.
///
/// Also used as a difference vector between two Lab colors (see the `Sub`
/// impl), which is how change direction along a sample line is measured.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    #[inline]
    pub fn dot(self, other: Lab) -> f64 {
        self.l * other.l + self.a * other.a + self.b * other.b
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// `true` when both chromatic axes lie strictly within `±limit`.
    #[inline]
    pub fn is_neutral(self, limit: f64) -> bool {
        self.a.abs() < limit && self.b.abs() < limit
    }
}

impl Sub for Lab {
    type Output = Lab;

    #[inline]
    fn sub(self, rhs: Lab) -> Lab {
        Lab::new(self.l - rhs.l, self.a - rhs.a, self.b - rhs.b)
    }
}

impl From<Rgba> for Lab {
    /// Alpha is ignored.
    fn from(c: Rgba) -> Self {
        rgb_to_lab(c.r, c.g, c.b)
    }
}

/// sRGB inverse companding of one channel in `[0, 1]`.
#[inline]
fn linearize(v: f64) -> f64 {
    if v > 0.04045 { ((v + 0.055) / 1.055).powf(2.4) } else { v / 12.92 }
}

/// Converts 8-bit sRGB to XYZ (D65, 0–100 scale).
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    let r = linearize(f64::from(r) / 255.0);
    let g = linearize(f64::from(g) / 255.0);
    let b = linearize(f64::from(b) / 255.0);

    Xyz {
        x: (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0,
        y: (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0,
        z: (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0,
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 { t.cbrt() } else { 7.787 * t + 16.0 / 116.0 }
}

/// Converts XYZ to Lab relative to [`D65_WHITE`].
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    // ── XYZ ──────────────────────────────────────────────────────────────

    #[test]
    fn white_maps_to_reference_white() {
        let w = rgb_to_xyz(255, 255, 255);
        assert!(close(w.x, 95.05, 0.01), "{w:?}");
        assert!(close(w.y, 100.0, 0.01), "{w:?}");
        assert!(close(w.z, 108.9, 0.01), "{w:?}");
    }

    #[test]
    fn black_is_origin() {
        assert_eq!(rgb_to_xyz(0, 0, 0), Xyz::default());
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 = 0.039 is below the 0.04045 knee.
        let xyz = rgb_to_xyz(10, 10, 10);
        let v = 10.0 / 255.0 / 12.92;
        assert!(close(xyz.y, v * 100.0, 1e-9));
    }

    // ── Lab ──────────────────────────────────────────────────────────────

    #[test]
    fn primaries() {
        let red = rgb_to_lab(255, 0, 0);
        assert!(close(red.l, 53.24, 0.05) && close(red.a, 80.09, 0.1) && close(red.b, 67.20, 0.1), "{red:?}");

        let blue = rgb_to_lab(0, 0, 255);
        assert!(close(blue.l, 32.30, 0.05) && close(blue.a, 79.19, 0.1) && close(blue.b, -107.86, 0.1), "{blue:?}");
    }

    #[test]
    fn grays_are_neutral() {
        for v in [0u8, 64, 128, 200, 255] {
            let lab = rgb_to_lab(v, v, v);
            assert!(lab.is_neutral(0.05), "{v}: {lab:?}");
        }
        assert!(close(rgb_to_lab(255, 255, 255).l, 100.0, 0.01));
        assert!(close(rgb_to_lab(0, 0, 0).l, 0.0, 1e-9));
    }

    #[test]
    fn from_rgba_ignores_alpha() {
        assert_eq!(Lab::from(Rgba::new(0, 128, 0, 0.2)), rgb_to_lab(0, 128, 0));
    }

    #[test]
    fn vector_ops() {
        let d = Lab::new(3.0, 4.0, 0.0) - Lab::new(0.0, 0.0, 0.0);
        assert_eq!(d.magnitude(), 5.0);
        assert_eq!(d.dot(Lab::new(1.0, 1.0, 1.0)), 7.0);
        assert_eq!(Lab::new(50.0, 3.0, 4.0).chroma(), 5.0);
    }
}
