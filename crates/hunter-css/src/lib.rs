//! Parser, serializer, and model for **CSS gradient functions**.
//!
//! Reads `linear-gradient`, `radial-gradient` and `conic-gradient` (each
//! optionally `repeating-`) into a structured [`Gradient`] and writes it back
//! in canonical form. Color stops are split with paren-depth awareness, so
//! `rgba(0,0,0,0.5)` stays one color.
//!
//! This crate has no image or engine dependencies so that editors and batch
//! tools can use the codec on its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Gradient`, `GradientKind`, `ColorStop`, descriptors |
//! | [`background`] | multi-gradient values, extraction from `background` |
//! | [`color`] | `Rgba`, `Hsl`, `Notation`, `parse_color` |
//! | [`error`] | `ParseError`, `ErrorKind` |
//! | [`parser`] | `parse`, `parse_with`, `parse_many` |
//! | [`serializer`] | `to_css` and `Display` impls |
//! | [`value`] | `Angle`, `Length` |
//!
//! # Quick start
//!
//! ```rust
//! use hunter_css::{parse, to_css};
//!
//! let g = parse("linear-gradient(45deg, #ff0000 0%, rgba(0,0,255,0.5) 100%)").unwrap();
//! assert_eq!(g.stops.len(), 2);
//! assert_eq!(to_css(&g), "linear-gradient(45deg, #ff0000 0%, rgba(0,0,255,0.5) 100%)");
//! ```

pub mod ast;
pub mod background;
pub mod color;
pub mod edit;
pub mod error;
mod lexer;
pub mod parser;
pub mod serializer;
pub mod value;

pub use ast::{
    ColorStop, ConicDescriptor, Gradient, GradientKind, LinearOrientation, Position,
    PositionComponent, PositionKeyword, RadialDescriptor, RadialShape, RadialSize, SideOrCorner,
    StopPosition,
};
pub use background::{extract_gradients, parse_background, split_gradients};
pub use color::{ColorError, Hsl, Notation, Rgba, parse_color};
pub use error::{ErrorKind, ParseError};
pub use parser::{ParseOptions, parse, parse_many, parse_with};
pub use serializer::to_css;
pub use value::{Angle, AngleUnit, Length, LengthUnit};
