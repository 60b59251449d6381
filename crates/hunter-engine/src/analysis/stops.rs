use hunter_css::{Notation, Rgba};

use crate::color::{Lab, delta_e};
use crate::config::InferenceConfig;
use crate::sample::Sample;

/// A stop color rendered in every supported notation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorInfo {
    pub rgb: String,
    pub hex: String,
    pub hsl: String,
}

impl ColorInfo {
    pub fn new(color: Rgba) -> Self {
        Self {
            rgb: color.to_rgb_string(),
            hex: color.to_hex(),
            hsl: color.to_hsl().to_string(),
        }
    }

    pub fn get(&self, notation: Notation) -> &str {
        match notation {
            Notation::Rgb => &self.rgb,
            Notation::Hex => &self.hex,
            Notation::Hsl => &self.hsl,
        }
    }
}

/// A color stop inferred from samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InferredStop {
    pub color: Rgba,
    pub info: ColorInfo,
    /// Whole percent, `0..=100`.
    pub position: f64,
}

impl InferredStop {
    fn new(color: Rgba, position: f64) -> Self {
        Self { color, info: ColorInfo::new(color), position }
    }
}

#[derive(Debug, Copy, Clone)]
struct Candidate {
    sample: Sample,
    lab: Lab,
}

/// Reduces one axis of samples to a short list of stops.
///
/// Transparent and near-neutral samples are skipped. The first remaining
/// sample becomes the `0%` stop and the last the `100%` stop. In between,
/// each sample differing from its predecessor by more than
/// `breakpoint_delta_e` becomes a stop at its own position while the list is
/// under `max_stops`. A list shorter than `min_stops` before the final stop
/// gets a `50%` stop from the largest breakpoint, or from the middle sample
/// if there was none, unless that would exceed `max_stops`. Positions stay
/// non-decreasing.
///
/// Returns an empty list when no sample survives filtering.
pub fn extract_stops(samples: &[Sample], config: &InferenceConfig) -> Vec<InferredStop> {
    let candidates: Vec<Candidate> = samples
        .iter()
        .filter_map(|&sample| {
            let lab = Lab::from(sample.color);
            let keep = sample.color.a > config.min_alpha && !lab.is_neutral(config.neutral_chroma);
            if !keep {
                log::trace!("skipping sample at {:.3}: {}", sample.position, sample.color);
            }
            keep.then_some(Candidate { sample, lab })
        })
        .collect();

    let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
        log::debug!("no sampleable color among {} samples", samples.len());
        return Vec::new();
    };

    let mut stops = vec![InferredStop::new(first.sample.color, 0.0)];
    let mut largest: Option<(f64, usize)> = None;

    let interior = candidates.len().saturating_sub(1);
    for i in 1..interior {
        let current = candidates[i];
        let de = delta_e(candidates[i - 1].lab, current.lab);
        if de <= config.breakpoint_delta_e {
            continue;
        }

        log::trace!("breakpoint at {:.3}: delta-e {de:.2}", current.sample.position);
        if largest.is_none_or(|(best, _)| de > best) {
            largest = Some((de, i));
        }
        if stops.len() < config.max_stops.saturating_sub(1) {
            let position = (current.sample.position * 100.0).round();
            stops.push(InferredStop::new(current.sample.color, position));
        }
    }

    // room for the synthetic stop and the final one
    if stops.len() < config.min_stops && stops.len() + 2 <= config.max_stops {
        let index = largest.map_or(candidates.len() / 2, |(_, i)| i);
        let at = stops.partition_point(|s| s.position <= 50.0);
        stops.insert(at, InferredStop::new(candidates[index].sample.color, 50.0));
    }

    stops.push(InferredStop::new(last.sample.color, 100.0));
    stops
}
