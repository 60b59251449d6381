//! Pixel buffers and sparse sampling along the three gradient axes.

mod buffer;
mod sampler;

pub use buffer::{Pixel, PixelBuffer, load_image};
pub use sampler::{Axis, Sample, SampleSet, sample_axes};
