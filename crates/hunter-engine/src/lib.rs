//! Gradient inference from raster images.
//!
//! Samples an image along its middle row, middle column and main diagonal,
//! scores each line by how gradient-like its Lab color changes are, and
//! reduces the winning line to a few color stops. The result renders as a
//! `linear-gradient(...)` through `hunter-css`.
//!
//! ```rust
//! use hunter_css::{Notation, Rgba};
//! use hunter_engine::{Inference, InferenceConfig, PixelBuffer, infer};
//!
//! let image = PixelBuffer::from_fn(80, 20, |x, _| {
//!     if x < 40 { Rgba::opaque(255, 0, 0) } else { Rgba::opaque(0, 0, 255) }
//! });
//! let Inference::Found(gradient) = infer(&image, &InferenceConfig::default()).unwrap() else {
//!     panic!("expected a gradient");
//! };
//! assert!(gradient.css(Notation::Hex).starts_with("linear-gradient(90deg, #ff0000 0%"));
//! ```

pub mod analysis;
pub mod color;
pub mod config;
pub mod error;
pub mod infer;
pub mod logging;
pub mod sample;

pub use analysis::{ColorInfo, InferredStop};
pub use config::{FallbackAngles, InferenceConfig, ScoreWeights};
pub use error::InferError;
pub use infer::{Inference, InferredGradient, NotFound, infer};
pub use sample::{Axis, PixelBuffer, load_image};
