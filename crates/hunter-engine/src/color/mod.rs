//! Color spaces and perceptual difference.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Xyz`], [`Lab`] | CIE color values derived from sRGB |
//! | [`rgb_to_xyz`], [`xyz_to_lab`], [`rgb_to_lab`] | conversions (D65) |
//! | [`delta_e`] | simplified CIEDE2000 distance |

mod difference;
mod space;

pub use difference::delta_e;
pub use space::{D65_WHITE, Lab, Xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab};
