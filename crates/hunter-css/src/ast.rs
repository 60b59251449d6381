//! Structured model of a CSS gradient function.
//!
//! Values are immutable in spirit: the editing helpers in [`crate::edit`]
//! return new models instead of mutating in place.

use crate::color::{ColorError, Rgba, parse_color};
use crate::value::{Angle, Length};

/// A parsed `[repeating-](linear|radial|conic)-gradient(...)`.
///
/// Invariant (upheld by the parser and the editing helpers):
/// - `stops` is never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    pub repeating: bool,
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
}

/// Gradient shape plus the descriptor that only makes sense for that shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "descriptor", rename_all = "lowercase"))]
pub enum GradientKind {
    Linear(LinearOrientation),
    Radial(RadialDescriptor),
    Conic(ConicDescriptor),
}

impl GradientKind {
    /// `linear`, `radial` or `conic`.
    pub fn name(&self) -> &'static str {
        match self {
            GradientKind::Linear(_) => "linear",
            GradientKind::Radial(_) => "radial",
            GradientKind::Conic(_) => "conic",
        }
    }
}

// ── Linear ───────────────────────────────────────────────────────────────

/// Either an explicit angle or a `to <side-or-corner>` keyword, never both.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinearOrientation {
    Angle(Angle),
    Direction(SideOrCorner),
}

impl LinearOrientation {
    /// Equivalent angle in degrees, treating corners as 45° diagonals.
    pub fn to_degrees(self) -> f32 {
        match self {
            LinearOrientation::Angle(a) => a.to_degrees(),
            LinearOrientation::Direction(d) => d.to_angle().value,
        }
    }
}

/// The eight `to <side> [<side>]` targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SideOrCorner {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl SideOrCorner {
    /// Resolves one or two side keywords, accepting either order for corners.
    pub fn from_sides(first: &str, second: Option<&str>) -> Option<Self> {
        use SideOrCorner::*;

        let side = |s: &str| -> Option<Self> {
            match s.to_ascii_lowercase().as_str() {
                "top" => Some(Top),
                "right" => Some(Right),
                "bottom" => Some(Bottom),
                "left" => Some(Left),
                _ => None,
            }
        };

        let a = side(first)?;
        let Some(second) = second else { return Some(a) };
        let b = side(second)?;

        match (a, b) {
            (Top, Right) | (Right, Top) => Some(TopRight),
            (Top, Left) | (Left, Top) => Some(TopLeft),
            (Bottom, Right) | (Right, Bottom) => Some(BottomRight),
            (Bottom, Left) | (Left, Bottom) => Some(BottomLeft),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SideOrCorner::Top => "to top",
            SideOrCorner::Right => "to right",
            SideOrCorner::Bottom => "to bottom",
            SideOrCorner::Left => "to left",
            SideOrCorner::TopRight => "to top right",
            SideOrCorner::TopLeft => "to top left",
            SideOrCorner::BottomRight => "to bottom right",
            SideOrCorner::BottomLeft => "to bottom left",
        }
    }

    pub fn to_angle(self) -> Angle {
        let deg = match self {
            SideOrCorner::Top => 0.0,
            SideOrCorner::TopRight => 45.0,
            SideOrCorner::Right => 90.0,
            SideOrCorner::BottomRight => 135.0,
            SideOrCorner::Bottom => 180.0,
            SideOrCorner::BottomLeft => 225.0,
            SideOrCorner::Left => 270.0,
            SideOrCorner::TopLeft => 315.0,
        };
        Angle::deg(deg)
    }
}

// ── Radial ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadialDescriptor {
    pub shape: Option<RadialShape>,
    pub size: Option<RadialSize>,
    pub position: Option<Position>,
}

impl RadialDescriptor {
    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.size.is_none() && self.position.is_none()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RadialShape {
    Circle,
    Ellipse,
}

impl RadialShape {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RadialSize {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

impl RadialSize {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "closest-side" => Some(Self::ClosestSide),
            "closest-corner" => Some(Self::ClosestCorner),
            "farthest-side" => Some(Self::FarthestSide),
            "farthest-corner" => Some(Self::FarthestCorner),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClosestSide => "closest-side",
            Self::ClosestCorner => "closest-corner",
            Self::FarthestSide => "farthest-side",
            Self::FarthestCorner => "farthest-corner",
        }
    }
}

// ── Conic ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConicDescriptor {
    pub from_angle: Option<Angle>,
    pub position: Option<Position>,
}

impl ConicDescriptor {
    pub fn is_empty(&self) -> bool {
        self.from_angle.is_none() && self.position.is_none()
    }
}

// ── Position ─────────────────────────────────────────────────────────────

/// `at <x> <y>`, resolved so that `x` is horizontal and `y` vertical.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub x: PositionComponent,
    pub y: PositionComponent,
}

impl Position {
    pub const CENTER: Position = Position {
        x: PositionComponent::Keyword(PositionKeyword::Center),
        y: PositionComponent::Keyword(PositionKeyword::Center),
    };
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PositionComponent {
    Keyword(PositionKeyword),
    Length(Length),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PositionKeyword {
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl PositionKeyword {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Some(Self::Center),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

// ── Color stops ──────────────────────────────────────────────────────────

/// One `<color> [<position>]` entry.
///
/// `color` is the color text as written (validated by the parser), so the
/// author's notation survives a round trip. Use [`ColorStop::rgba`] to
/// resolve it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorStop {
    pub color: String,
    pub position: Option<StopPosition>,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, position: Option<StopPosition>) -> Self {
        Self { color: color.into(), position }
    }

    pub fn rgba(&self) -> Result<Rgba, ColorError> {
        parse_color(&self.color)
    }
}

/// Stop position: a length/percentage for linear and radial gradients, an
/// angle for conic ones.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StopPosition {
    Length(Length),
    Angle(Angle),
}

impl From<Length> for StopPosition {
    fn from(l: Length) -> Self {
        StopPosition::Length(l)
    }
}

impl From<Angle> for StopPosition {
    fn from(a: Angle) -> Self {
        StopPosition::Angle(a)
    }
}

impl Gradient {
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>) -> Self {
        Self { repeating: false, kind, stops }
    }

    pub fn with_repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Whether stop positions never go backwards.
    ///
    /// Stops without a position, and positions in a different unit than the
    /// previous positioned stop, are skipped: they cannot be compared without
    /// layout information.
    pub fn has_ordered_positions(&self) -> bool {
        let mut last: Option<StopPosition> = None;
        for pos in self.stops.iter().filter_map(|s| s.position) {
            if let Some(prev) = last {
                let backwards = match (prev, pos) {
                    (StopPosition::Length(a), StopPosition::Length(b)) => {
                        a.unit == b.unit && b.value < a.value
                    }
                    (StopPosition::Angle(a), StopPosition::Angle(b)) => {
                        b.to_degrees() < a.to_degrees()
                    }
                    _ => false,
                };
                if backwards {
                    return false;
                }
            }
            last = Some(pos);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_accept_either_order() {
        assert_eq!(SideOrCorner::from_sides("right", Some("top")), Some(SideOrCorner::TopRight));
        assert_eq!(SideOrCorner::from_sides("top", Some("right")), Some(SideOrCorner::TopRight));
        assert_eq!(SideOrCorner::from_sides("top", Some("bottom")), None);
        assert_eq!(SideOrCorner::from_sides("middle", None), None);
    }

    #[test]
    fn direction_angles() {
        assert_eq!(LinearOrientation::Direction(SideOrCorner::Right).to_degrees(), 90.0);
        assert_eq!(LinearOrientation::Direction(SideOrCorner::BottomLeft).to_degrees(), 225.0);
    }

    #[test]
    fn ordered_positions() {
        let stop = |p: f32| ColorStop::new("red", Some(Length::percent(p).into()));
        let g = Gradient::new(
            GradientKind::Linear(LinearOrientation::Angle(Angle::deg(90.0))),
            vec![stop(0.0), ColorStop::new("blue", None), stop(40.0), stop(100.0)],
        );
        assert!(g.has_ordered_positions());

        let g = Gradient::new(g.kind.clone(), vec![stop(60.0), stop(10.0)]);
        assert!(!g.has_ordered_positions());
    }
}
