//! Canonical text form of a [`Gradient`].
//!
//! Output shape: `[repeating-]<type>-gradient(<descriptor>, <stop>, ...)`.
//! The descriptor comes first when there is one; stops keep model order.
//! Linear gradients always carry an orientation, so their descriptor is
//! always written.

use std::fmt::{self, Write as _};

use crate::ast::{
    ColorStop, ConicDescriptor, Gradient, GradientKind, LinearOrientation, Position,
    PositionComponent, RadialDescriptor, StopPosition,
};

/// Serializes `gradient` to CSS text.
pub fn to_css(gradient: &Gradient) -> String {
    gradient.to_string()
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        write!(f, "{}-gradient(", self.kind.name())?;

        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(", ")
            }
        };

        if let Some(descriptor) = descriptor(&self.kind) {
            sep(f)?;
            f.write_str(&descriptor)?;
        }
        for stop in &self.stops {
            sep(f)?;
            write!(f, "{stop}")?;
        }

        f.write_char(')')
    }
}

/// Text before the first stop, or `None` when the gradient uses defaults.
fn descriptor(kind: &GradientKind) -> Option<String> {
    match kind {
        GradientKind::Linear(orientation) => Some(orientation.to_string()),
        GradientKind::Radial(radial) => radial_descriptor(radial),
        GradientKind::Conic(conic) => conic_descriptor(conic),
    }
}

fn radial_descriptor(radial: &RadialDescriptor) -> Option<String> {
    if radial.is_empty() {
        return None;
    }
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(shape) = radial.shape {
        parts.push(shape.as_str().to_owned());
    }
    if let Some(size) = radial.size {
        parts.push(size.as_str().to_owned());
    }
    if let Some(position) = radial.position {
        parts.push(format!("at {position}"));
    }
    Some(parts.join(" "))
}

fn conic_descriptor(conic: &ConicDescriptor) -> Option<String> {
    if conic.is_empty() {
        return None;
    }
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if let Some(angle) = conic.from_angle {
        parts.push(format!("from {angle}"));
    }
    if let Some(position) = conic.position {
        parts.push(format!("at {position}"));
    }
    Some(parts.join(" "))
}

impl fmt::Display for LinearOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearOrientation::Angle(a) => write!(f, "{a}"),
            LinearOrientation::Direction(d) => f.write_str(d.as_str()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl fmt::Display for PositionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionComponent::Keyword(k) => f.write_str(k.as_str()),
            PositionComponent::Length(l) => write!(f, "{l}"),
        }
    }
}

impl fmt::Display for StopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopPosition::Length(l) => write!(f, "{l}"),
            StopPosition::Angle(a) => write!(f, "{a}"),
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color)?;
        if let Some(position) = self.position {
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse;

    /// Inputs covering every descriptor form the parser accepts.
    const CORPUS: &[&str] = &[
        "linear-gradient(45deg, #ff0000 0%, #0000ff 100%)",
        "linear-gradient(red, blue)",
        "linear-gradient(to right, red, blue)",
        "linear-gradient(to bottom left, red 10%, rgb(0 0 255 / 50%) 90%)",
        "linear-gradient(-0.25turn, hsl(120, 50%, 50%), #abc 3.5em)",
        "repeating-linear-gradient(45deg, black 0px, black 10px, white 10px, white 20px)",
        "radial-gradient(circle at center, red, blue)",
        "radial-gradient(red, blue)",
        "radial-gradient(closest-corner, red, blue)",
        "radial-gradient(ellipse farthest-corner at 10px 20%, red, blue)",
        "radial-gradient(at bottom, red, blue)",
        "repeating-radial-gradient(circle closest-side, red 0px, blue 12px)",
        "conic-gradient(red, blue)",
        "conic-gradient(from 0.5turn, red, blue)",
        "conic-gradient(from 45deg at left top, red 0deg, blue 90deg, red 1turn)",
        "conic-gradient(at 25% 75%, rgba(0,0,0,0.5), transparent)",
    ];

    #[test]
    fn parse_serialize_round_trip() {
        for src in CORPUS {
            let model = parse(src).unwrap();
            let text = to_css(&model);
            assert_eq!(parse(&text).unwrap(), model, "{src} -> {text}");
        }
    }

    #[test]
    fn serialize_is_idempotent() {
        for src in CORPUS {
            let model = parse(src).unwrap();
            let once = to_css(&model);
            let twice = to_css(&parse(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn corpus_parses() {
        let failed: Vec<&str> = CORPUS.iter().copied().filter(|s| parse(s).is_err()).collect();
        assert_eq!(failed, Vec::<&str>::new());
    }

    #[test]
    fn canonical_text() {
        let css = |s: &str| to_css(&parse(s).unwrap());
        assert_eq!(css("linear-gradient(red,blue)"), "linear-gradient(180deg, red, blue)");
        assert_eq!(css("linear-gradient(TO RIGHT TOP, red, blue)"), "linear-gradient(to top right, red, blue)");
        assert_eq!(css("radial-gradient(circle at center, red, blue)"), "radial-gradient(circle at center center, red, blue)");
        assert_eq!(css("radial-gradient(at top, red, blue)"), "radial-gradient(at center top, red, blue)");
        assert_eq!(css("radial-gradient( red , blue )"), "radial-gradient(red, blue)");
        assert_eq!(css("conic-gradient(from 90.0deg, red, blue)"), "conic-gradient(from 90deg, red, blue)");
        assert_eq!(
            css("repeating-linear-gradient(0deg, rgba(0,0,0,0.5) 10%, red 20%)"),
            "repeating-linear-gradient(0deg, rgba(0,0,0,0.5) 10%, red 20%)"
        );
    }
}
