//! Scoring of sampled axes and reduction of samples to color stops.

mod direction;
mod stops;

pub use direction::{AxisFeatures, AxisScores, DirectionEstimate, detect_direction};
pub use stops::{ColorInfo, InferredStop, extract_stops};
