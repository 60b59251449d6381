//! End-to-end inference: sample, pick a direction, extract stops.

use hunter_css::{Angle, ColorStop, Gradient, GradientKind, Length, LinearOrientation, Notation, to_css};

use crate::analysis::{AxisScores, InferredStop, detect_direction, extract_stops};
use crate::config::InferenceConfig;
use crate::error::InferError;
use crate::sample::{Axis, PixelBuffer, sample_axes};

/// Why no gradient was inferred.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NotFound {
    /// Every sample on the winning axis was transparent or neutral gray.
    NoSampleableColor,
}

/// Outcome of a successful [`infer`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "result", rename_all = "snake_case"))]
pub enum Inference {
    Found(InferredGradient),
    NotFound(NotFound),
}

impl Inference {
    pub fn found(&self) -> Option<&InferredGradient> {
        match self {
            Inference::Found(g) => Some(g),
            Inference::NotFound(_) => None,
        }
    }
}

/// A linear gradient reconstructed from an image.
///
/// Image inference only ever produces linear gradients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InferredGradient {
    pub axis: Axis,
    /// Degrees in `[0, 360)`.
    pub angle: f64,
    pub stops: Vec<InferredStop>,
    pub scores: AxisScores,
}

impl InferredGradient {
    /// Gradient model with stop colors written in `notation`.
    pub fn to_gradient(&self, notation: Notation) -> Gradient {
        let orientation = LinearOrientation::Angle(Angle::deg(self.angle as f32));
        let stops = self
            .stops
            .iter()
            .map(|s| ColorStop::new(s.info.get(notation), Some(Length::percent(s.position as f32).into())))
            .collect();
        Gradient::new(GradientKind::Linear(orientation), stops)
    }

    /// `linear-gradient(<angle>deg, <color> <pos>%, ...)`.
    pub fn css(&self, notation: Notation) -> String {
        to_css(&self.to_gradient(notation))
    }
}

/// Infers a linear gradient from `buffer`.
///
/// # Errors
///
/// [`InferError::InvalidConfig`] and [`InferError::EmptyImage`]. An image
/// without usable color is `Ok(Inference::NotFound(..))`.
pub fn infer(buffer: &PixelBuffer, config: &InferenceConfig) -> Result<Inference, InferError> {
    config.validate()?;
    if buffer.is_empty() {
        return Err(InferError::EmptyImage);
    }

    let samples = sample_axes(buffer, config.sample_count);
    let direction = detect_direction(&samples, config);
    let stops = extract_stops(samples.axis(direction.axis), config);

    if stops.is_empty() {
        log::debug!("no gradient: {} axis has no sampleable color", direction.axis);
        return Ok(Inference::NotFound(NotFound::NoSampleableColor));
    }

    log::debug!("inferred {} stop(s) along {} axis", stops.len(), direction.axis);
    Ok(Inference::Found(InferredGradient {
        axis: direction.axis,
        angle: direction.angle,
        stops,
        scores: direction.scores,
    }))
}

#[cfg(test)]
mod tests {
    use hunter_css::{Rgba, parse};
    use pretty_assertions::assert_eq;

    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    fn found(buffer: &PixelBuffer) -> InferredGradient {
        match infer(buffer, &InferenceConfig::default()).unwrap() {
            Inference::Found(g) => g,
            other => panic!("expected a gradient, got {other:?}"),
        }
    }

    // ── examples ─────────────────────────────────────────────────────────

    #[test]
    fn red_blue_left_right() {
        let buf = PixelBuffer::from_fn(120, 40, |x, _| if x < 60 { RED } else { BLUE });
        let g = found(&buf);

        assert_eq!(g.axis, Axis::Horizontal);
        assert_eq!(g.angle, 90.0);
        assert!((2..=3).contains(&g.stops.len()), "{:?}", g.stops);
        assert_eq!(g.stops.first().map(|s| (s.color, s.position)), Some((RED, 0.0)));
        assert_eq!(g.stops.last().map(|s| (s.color, s.position)), Some((BLUE, 100.0)));
        assert_eq!(
            g.css(Notation::Rgb),
            "linear-gradient(90deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 53%, rgb(0, 0, 255) 100%)"
        );
    }

    #[test]
    fn gray_image_is_not_found() {
        let buf = PixelBuffer::from_fn(50, 50, |_, _| Rgba::opaque(128, 128, 128));
        let result = infer(&buf, &InferenceConfig::default()).unwrap();
        assert_eq!(result, Inference::NotFound(NotFound::NoSampleableColor));
        assert!(result.found().is_none());
    }

    #[test]
    fn transparent_image_is_not_found() {
        let buf = PixelBuffer::from_fn(30, 30, |_, _| Rgba::new(255, 0, 0, 0.0));
        let result = infer(&buf, &InferenceConfig::default()).unwrap();
        assert_eq!(result, Inference::NotFound(NotFound::NoSampleableColor));
    }

    #[test]
    fn corner_triangle_is_diagonal() {
        let buf = PixelBuffer::from_fn(100, 100, |x, y| if x + y < 50 { RED } else { BLUE });
        let g = found(&buf);
        assert_eq!(g.axis, Axis::Diagonal);
        assert_eq!(g.angle, 120.0);
        assert_eq!(
            g.css(Notation::Rgb),
            "linear-gradient(120deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 26%, rgb(0, 0, 255) 100%)"
        );
    }

    #[test]
    fn red_blue_top_bottom() {
        let buf = PixelBuffer::from_fn(40, 120, |_, y| if y < 60 { RED } else { BLUE });
        let g = found(&buf);
        assert_eq!(g.axis, Axis::Vertical);
        assert_eq!(g.angle, 180.0);
        assert_eq!(g.css(Notation::Hex), "linear-gradient(180deg, #ff0000 0%, #0000ff 53%, #0000ff 100%)");
    }

    // ── rendering ────────────────────────────────────────────────────────

    #[test]
    fn rendered_css_parses_back() {
        let buf = PixelBuffer::from_fn(64, 64, |x, _| Rgba::opaque(255 - (x * 4) as u8, 60, (x * 4) as u8));
        let g = found(&buf);
        for notation in [Notation::Rgb, Notation::Hex, Notation::Hsl] {
            let css = g.css(notation);
            let model = parse(&css).unwrap();
            assert_eq!(model, g.to_gradient(notation), "{css}");
            assert_eq!(model.stops.len(), g.stops.len());
        }
    }

    // ── errors ───────────────────────────────────────────────────────────

    #[test]
    fn empty_image_is_an_error() {
        let buf = PixelBuffer::from_fn(0, 0, |_, _| RED);
        assert!(matches!(infer(&buf, &InferenceConfig::default()), Err(InferError::EmptyImage)));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let buf = PixelBuffer::from_fn(4, 4, |_, _| RED);
        let cfg = InferenceConfig { sample_count: 0, ..Default::default() };
        assert!(matches!(infer(&buf, &cfg), Err(InferError::InvalidConfig(_))));
    }

    #[test]
    fn sample_count_is_respected() {
        let buf = PixelBuffer::from_fn(100, 10, |x, _| if x < 50 { RED } else { BLUE });
        let cfg = InferenceConfig { sample_count: 5, ..Default::default() };
        let g = match infer(&buf, &cfg).unwrap() {
            Inference::Found(g) => g,
            other => panic!("{other:?}"),
        };
        // Samples at 0, 25, 50, 75, 99: blue first appears at 50%.
        assert_eq!(g.stops.iter().map(|s| s.position).collect::<Vec<_>>(), vec![0.0, 50.0, 100.0]);
    }
}
