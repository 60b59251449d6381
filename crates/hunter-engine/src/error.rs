//! Failures of the inference pipeline.
//!
//! An image with no usable color is not a failure; it is reported as
//! [`Inference::NotFound`](crate::Inference::NotFound).

#[derive(Debug, thiserror::Error)]
pub enum InferError {
    #[error("image has no pixels")]
    EmptyImage,

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("invalid inference config: {0}")]
    InvalidConfig(String),

    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),
}
