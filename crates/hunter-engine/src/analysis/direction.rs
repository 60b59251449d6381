use crate::color::{Lab, delta_e};
use crate::config::InferenceConfig;
use crate::sample::{Axis, Sample, SampleSet};

/// Color-change statistics of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFeatures {
    pub labs: Vec<Lab>,
    /// Delta-E between consecutive samples; one shorter than `labs`.
    pub delta_e: Vec<f64>,
    /// Mean of `exp(-|Δ delta_e|)`; 1 for perfectly even change.
    pub smoothness: f64,
    /// Mean cosine similarity of consecutive Lab delta vectors, mapped to `[0, 1]`.
    pub consistency: f64,
    pub avg_delta_e: f64,
}

impl AxisFeatures {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let labs: Vec<Lab> = samples.iter().map(|s| Lab::from(s.color)).collect();
        let delta_e: Vec<f64> = labs.windows(2).map(|w| delta_e(w[0], w[1])).collect();

        Self {
            smoothness: smoothness(&delta_e),
            consistency: consistency(&labs),
            avg_delta_e: mean(delta_e.iter().copied()),
            labs,
            delta_e,
        }
    }

    /// Weighted sum of the three features.
    pub fn score(&self, config: &InferenceConfig) -> f64 {
        let w = &config.weights;
        w.smoothness * self.smoothness + w.consistency * self.consistency + w.delta_e * self.avg_delta_e
    }

    /// Sum of the consecutive Lab deltas, i.e. last minus first.
    fn net_change(&self) -> Lab {
        self.labs
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(Lab::default(), |acc, d| Lab::new(acc.l + d.l, acc.a + d.a, acc.b + d.b))
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 { 0.0 } else { values.sum::<f64>() / n as f64 }
}

fn smoothness(delta_e: &[f64]) -> f64 {
    if delta_e.len() < 2 {
        return 0.0;
    }
    mean(delta_e.windows(2).map(|w| (-(w[1] - w[0]).abs()).exp()))
}

fn consistency(labs: &[Lab]) -> f64 {
    if labs.len() < 3 {
        return 0.0;
    }
    let vectors: Vec<Lab> = labs.windows(2).map(|w| w[1] - w[0]).collect();
    let cosine = mean(vectors.windows(2).map(|w| {
        let m = w[0].magnitude() * w[1].magnitude();
        if m == 0.0 { 0.0 } else { w[0].dot(w[1]) / m }
    }));
    (cosine + 1.0) / 2.0
}

/// Score of every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisScores {
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
}

impl AxisScores {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Diagonal => self.diagonal,
        }
    }
}

/// Winning axis and the angle of the gradient along it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionEstimate {
    pub axis: Axis,
    /// Degrees in `[0, 360)`.
    pub angle: f64,
    pub scores: AxisScores,
}

/// Picks the axis whose samples change most like a linear gradient.
///
/// Ties go to the earlier axis in [`Axis::ALL`].
pub fn detect_direction(samples: &SampleSet, config: &InferenceConfig) -> DirectionEstimate {
    let features = Axis::ALL.map(|axis| AxisFeatures::from_samples(samples.axis(axis)));
    let [h, v, d] = &features;
    let scores = AxisScores {
        horizontal: h.score(config),
        vertical: v.score(config),
        diagonal: d.score(config),
    };

    let mut best = 0;
    for i in 1..Axis::ALL.len() {
        if scores.get(Axis::ALL[i]) > scores.get(Axis::ALL[best]) {
            best = i;
        }
    }
    let axis = Axis::ALL[best];
    let winner = &features[best];

    let angle = if winner.consistency > config.consistency_threshold {
        let net = winner.net_change();
        let degrees = net.b.atan2(net.l).to_degrees().rem_euclid(360.0).round();
        if degrees >= 360.0 { 0.0 } else { degrees }
    } else {
        config.fallback_angles.for_axis(axis)
    };

    log::debug!(
        "axis scores: horizontal={:.3} vertical={:.3} diagonal={:.3}",
        scores.horizontal,
        scores.vertical,
        scores.diagonal
    );
    log::debug!(
        "chose {axis} (consistency {:.3}), angle {angle}deg",
        winner.consistency
    );

    DirectionEstimate { axis, angle, scores }
}
