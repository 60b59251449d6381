use super::space::Lab;

const POW25_7: f64 = 6_103_515_625.0; // 25^7

/// Perceptual distance between two Lab colors.
///
/// CIEDE2000 chroma correction (`G`, `a'`, `C'`, `h'`) with unit weights,
/// without the rotation term or the `SL`/`SC`/`SH` scale factors. Hue
/// difference is taken directly from `h2' - h1'` in radians and is 0 when
/// either adjusted chroma is 0.
///
/// Symmetric, non-negative, and 0 for identical inputs.
pub fn delta_e(lab1: Lab, lab2: Lab) -> f64 {
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c7 / (c7 + POW25_7)).sqrt());

    let a1p = lab1.a * (1.0 + g);
    let a2p = lab2.a * (1.0 + g);
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);

    let dl = lab2.l - lab1.l;
    let dc = c2p - c1p;

    let chroma_product = c1p * c2p;
    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        let h1p = lab1.b.atan2(a1p);
        let h2p = lab2.b.atan2(a2p);
        2.0 * chroma_product.sqrt() * ((h2p - h1p) / 2.0).sin()
    };

    (dl * dl + dc * dc + dh * dh).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_lab;

    const SWATCHES: [[u8; 3]; 8] = [
        [255, 0, 0],
        [0, 0, 255],
        [0, 255, 0],
        [128, 128, 128],
        [0, 0, 0],
        [255, 255, 255],
        [250, 128, 114],
        [30, 144, 255],
    ];

    fn labs() -> Vec<Lab> {
        SWATCHES.iter().map(|&[r, g, b]| rgb_to_lab(r, g, b)).collect()
    }

    #[test]
    fn identity() {
        for lab in labs() {
            assert_eq!(delta_e(lab, lab), 0.0, "{lab:?}");
        }
    }

    #[test]
    fn symmetry() {
        let labs = labs();
        for &a in &labs {
            for &b in &labs {
                let ab = delta_e(a, b);
                let ba = delta_e(b, a);
                assert!((ab - ba).abs() < 1e-9, "{a:?} {b:?}: {ab} vs {ba}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn zero_chroma_has_no_hue_term() {
        // Black vs white: only lightness differs.
        let d = delta_e(rgb_to_lab(0, 0, 0), rgb_to_lab(255, 255, 255));
        assert!((d - 100.0).abs() < 0.01, "{d}");

        // Exact neutral vs chromatic color must not produce NaN.
        let d = delta_e(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, 20.0, 0.0));
        assert!(d.is_finite() && d > 0.0);
    }

    #[test]
    fn red_blue_is_large() {
        let d = delta_e(rgb_to_lab(255, 0, 0), rgb_to_lab(0, 0, 255));
        assert!(d > 100.0, "{d}");
    }

    #[test]
    fn near_colors_are_close() {
        let d = delta_e(rgb_to_lab(200, 10, 10), rgb_to_lab(201, 10, 10));
        assert!(d < 1.0, "{d}");
    }
}
