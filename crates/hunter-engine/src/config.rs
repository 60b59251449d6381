//! Tunable parameters of the inference pipeline.
//!
//! Every value here is a heuristic. Defaults reproduce the behavior of the
//! browser extension the pipeline was first written for.

use crate::error::InferError;
use crate::sample::Axis;

/// Weights of the per-axis score terms.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreWeights {
    pub smoothness: f64,
    pub consistency: f64,
    pub delta_e: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { smoothness: 0.4, consistency: 0.4, delta_e: 0.2 }
    }
}

/// Angle (degrees) reported for a winning axis whose change direction is not
/// consistent enough to compute one.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FallbackAngles {
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
}

impl Default for FallbackAngles {
    fn default() -> Self {
        Self { horizontal: 90.0, vertical: 180.0, diagonal: 120.0 }
    }
}

impl FallbackAngles {
    pub fn for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Diagonal => self.diagonal,
        }
    }
}

/// Parameters passed to every [`infer`](crate::infer) call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InferenceConfig {
    /// Samples taken along each axis.
    pub sample_count: usize,
    /// Delta-E between consecutive samples above which a stop is considered.
    pub breakpoint_delta_e: f64,
    /// Stops required before the final `100%` stop; short lists get a
    /// synthetic `50%` stop. Must be below `max_stops`.
    pub min_stops: usize,
    /// Upper bound on emitted stops, the final `100%` stop included.
    pub max_stops: usize,
    /// Samples at or below this alpha are ignored.
    pub min_alpha: f32,
    /// Samples with `|a|` and `|b|` both below this are treated as neutral.
    pub neutral_chroma: f64,
    /// Consistency above which the angle is computed from the Lab deltas.
    pub consistency_threshold: f64,
    pub weights: ScoreWeights,
    pub fallback_angles: FallbackAngles,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_count: 20,
            breakpoint_delta_e: 5.0,
            min_stops: 2,
            max_stops: 4,
            min_alpha: 0.1,
            neutral_chroma: 5.0,
            consistency_threshold: 0.8,
            weights: ScoreWeights::default(),
            fallback_angles: FallbackAngles::default(),
        }
    }
}

impl InferenceConfig {
    /// Checks that the config can drive the pipeline.
    pub fn validate(&self) -> Result<(), InferError> {
        if self.sample_count < 2 {
            return Err(invalid(format!("sample_count must be at least 2, got {}", self.sample_count)));
        }
        if self.max_stops < 2 {
            return Err(invalid(format!("max_stops must be at least 2, got {}", self.max_stops)));
        }
        // min_stops does not count the final stop
        if self.min_stops >= self.max_stops {
            return Err(invalid(format!(
                "min_stops ({}) must be below max_stops ({})",
                self.min_stops, self.max_stops
            )));
        }

        let values = [
            ("breakpoint_delta_e", self.breakpoint_delta_e),
            ("min_alpha", f64::from(self.min_alpha)),
            ("neutral_chroma", self.neutral_chroma),
            ("consistency_threshold", self.consistency_threshold),
            ("weights.smoothness", self.weights.smoothness),
            ("weights.consistency", self.weights.consistency),
            ("weights.delta_e", self.weights.delta_e),
            ("fallback_angles.horizontal", self.fallback_angles.horizontal),
            ("fallback_angles.vertical", self.fallback_angles.vertical),
            ("fallback_angles.diagonal", self.fallback_angles.diagonal),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be finite and non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> InferError {
    InferError::InvalidConfig(reason)
}
