use crate::ast::{
    ColorStop, ConicDescriptor, Gradient, GradientKind, LinearOrientation, Position,
    PositionComponent, PositionKeyword, RadialDescriptor, RadialShape, RadialSize, SideOrCorner,
    StopPosition,
};
use crate::color::parse_color;
use crate::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Token, TokenWithPos, matching_paren};
use crate::value::{Angle, AngleUnit, Length, LengthUnit};

// ── Options ───────────────────────────────────────────────────────────────

/// Knobs for [`parse_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Orientation given to a linear gradient that does not state one.
    /// CSS draws top to bottom, i.e. `180deg`.
    pub default_linear_angle: Angle,
    /// Accept `-webkit-`, `-moz-`, `-ms-` and `-o-` prefixed function names.
    pub strip_vendor_prefixes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_linear_angle: Angle::deg(180.0),
            strip_vendor_prefixes: true,
        }
    }
}

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

// ── Header ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
enum GradientType {
    Linear,
    Radial,
    Conic,
}

/// Outer shape of the input: `[repeating-]<type>-gradient(<payload>)`.
struct Header<'a> {
    ty: GradientType,
    repeating: bool,
    payload: &'a str,
    /// Byte offset of `payload` inside the raw input.
    payload_offset: usize,
}

fn read_header<'a>(input: &'a str, options: &ParseOptions) -> Result<Header<'a>, (ErrorKind, usize)> {
    let lead = input.len() - input.trim_start().len();
    let s = input.trim();
    if s.is_empty() {
        return Err((ErrorKind::malformed("empty input"), 0));
    }

    // ASCII lowercasing keeps byte offsets aligned with `s`.
    let lower = s.to_ascii_lowercase();
    let mut cursor = 0;

    if options.strip_vendor_prefixes {
        if let Some(prefix) = VENDOR_PREFIXES.iter().find(|p| lower.starts_with(**p)) {
            cursor += prefix.len();
        }
    }

    let repeating = lower[cursor..].starts_with("repeating-");
    if repeating {
        cursor += "repeating-".len();
    }

    let Some(open) = lower[cursor..].find('(').map(|i| cursor + i) else {
        return Err((ErrorKind::malformed("expected `-gradient(`"), lead + s.len()));
    };

    let name = &lower[cursor..open];
    let Some(type_name) = name.strip_suffix("-gradient") else {
        return Err((
            ErrorKind::malformed(format!("`{}` is not a gradient function", &s[cursor..open])),
            lead + cursor,
        ));
    };
    let ty = match type_name {
        "linear" => GradientType::Linear,
        "radial" => GradientType::Radial,
        "conic" => GradientType::Conic,
        _ => {
            return Err((
                ErrorKind::UnknownGradientType(s[cursor..cursor + type_name.len()].to_owned()),
                lead + cursor,
            ));
        }
    };

    let close = matching_paren(s, open).ok_or((ErrorKind::UnbalancedParentheses, lead + open))?;
    let trailing = s[close + 1..].trim();
    if !trailing.is_empty() {
        let kind = if trailing.contains(')') {
            ErrorKind::UnbalancedParentheses
        } else {
            ErrorKind::malformed(format!("unexpected `{trailing}` after `)`"))
        };
        return Err((kind, lead + close + 1));
    }

    Ok(Header {
        ty,
        repeating,
        payload: &s[open + 1..close],
        payload_offset: lead + open + 1,
    })
}

// ── Parser ────────────────────────────────────────────────────────────────

type Segment<'t> = &'t [TokenWithPos];

struct Parser<'a> {
    raw: &'a str,
    payload: &'a str,
    base: usize,
    tokens: Vec<TokenWithPos>,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    fn err(&self, kind: ErrorKind, payload_pos: usize) -> ParseError {
        ParseError::new(self.raw, kind, self.base + payload_pos)
    }

    fn text(&self, seg: &[TokenWithPos]) -> &'a str {
        match (seg.first(), seg.last()) {
            (Some(first), Some(last)) => &self.payload[first.start..last.end],
            _ => "",
        }
    }

    /// Splits the token stream at commas. The lexer folds parenthesised
    /// arguments into single tokens, so every comma seen here is at depth 0.
    fn segments(&self) -> Result<Vec<Segment<'_>>, ParseError> {
        let body = &self.tokens[..self.tokens.len().saturating_sub(1)]; // drop Eof
        if body.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        let mut start = 0;
        for (i, t) in body.iter().enumerate() {
            if t.token == Token::Comma {
                if i == start {
                    return Err(self.err(ErrorKind::malformed("empty argument"), t.start));
                }
                out.push(&body[start..i]);
                start = i + 1;
            }
        }
        if start == body.len() {
            let last = &body[body.len() - 1];
            return Err(self.err(ErrorKind::malformed("trailing comma"), last.start));
        }
        out.push(&body[start..]);
        Ok(out)
    }

    fn parse_gradient(&self, ty: GradientType, repeating: bool) -> Result<Gradient, ParseError> {
        let segments = self.segments()?;
        let mut rest: &[Segment<'_>] = &segments;

        let kind = match ty {
            GradientType::Linear => {
                let orientation = match rest.first() {
                    Some(seg) => self.linear_orientation(seg)?,
                    None => None,
                };
                if orientation.is_some() {
                    rest = &rest[1..];
                }
                GradientKind::Linear(
                    orientation.unwrap_or(LinearOrientation::Angle(self.options.default_linear_angle)),
                )
            }
            GradientType::Radial => {
                let descriptor = match rest.first() {
                    Some(seg) => self.radial_descriptor(seg)?,
                    None => None,
                };
                if descriptor.is_some() {
                    rest = &rest[1..];
                }
                GradientKind::Radial(descriptor.unwrap_or_default())
            }
            GradientType::Conic => {
                let descriptor = match rest.first() {
                    Some(seg) => self.conic_descriptor(seg)?,
                    None => None,
                };
                if descriptor.is_some() {
                    rest = &rest[1..];
                }
                GradientKind::Conic(descriptor.unwrap_or_default())
            }
        };

        if rest.is_empty() {
            return Err(self.err(ErrorKind::EmptyColorStopList, self.payload.len()));
        }

        let stops = rest
            .iter()
            .map(|seg| self.color_stop(seg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Gradient { repeating, kind, stops })
    }

    // ── Linear ────────────────────────────────────────────────────────────

    /// `<angle>` or `to <side> [<side>]`. Returns `None` when the segment is
    /// not a direction at all (it is then the first color stop).
    fn linear_orientation(&self, seg: &[TokenWithPos]) -> Result<Option<LinearOrientation>, ParseError> {
        match &seg[0].token {
            Token::Dimension { value, unit } => {
                let Some(unit) = AngleUnit::from_suffix(unit) else { return Ok(None) };
                if seg.len() != 1 {
                    return Err(self.err(ErrorKind::malformed("unexpected value after angle"), seg[1].start));
                }
                Ok(Some(LinearOrientation::Angle(Angle::new(*value, unit))))
            }
            Token::Ident(word) if word.eq_ignore_ascii_case("to") => {
                let sides: Vec<&str> = seg[1..]
                    .iter()
                    .map(|t| match &t.token {
                        Token::Ident(s) => s.as_str(),
                        _ => "",
                    })
                    .collect();
                let direction = match sides.as_slice() {
                    [first] => SideOrCorner::from_sides(first, None),
                    [first, second] => SideOrCorner::from_sides(first, Some(second)),
                    _ => None,
                };
                direction
                    .map(|d| Some(LinearOrientation::Direction(d)))
                    .ok_or_else(|| {
                        self.err(
                            ErrorKind::malformed(format!("invalid direction `{}`", self.text(seg))),
                            seg[0].start,
                        )
                    })
            }
            _ => Ok(None),
        }
    }

    // ── Radial ────────────────────────────────────────────────────────────

    fn radial_descriptor(&self, seg: &[TokenWithPos]) -> Result<Option<RadialDescriptor>, ParseError> {
        let starts_descriptor = match &seg[0].token {
            Token::Ident(w) => {
                RadialShape::from_keyword(w).is_some()
                    || RadialSize::from_keyword(w).is_some()
                    || w.eq_ignore_ascii_case("at")
            }
            _ => false,
        };
        if !starts_descriptor {
            return Ok(None);
        }

        let mut descriptor = RadialDescriptor::default();
        for (i, t) in seg.iter().enumerate() {
            let word = match &t.token {
                Token::Ident(w) => w.as_str(),
                _ => "",
            };
            if word.eq_ignore_ascii_case("at") {
                descriptor.position = Some(self.position(&seg[i + 1..], t)?);
                break;
            } else if let Some(shape) = RadialShape::from_keyword(word) {
                if descriptor.shape.replace(shape).is_some() {
                    return Err(self.err(ErrorKind::malformed("radial shape given twice"), t.start));
                }
            } else if let Some(size) = RadialSize::from_keyword(word) {
                if descriptor.size.replace(size).is_some() {
                    return Err(self.err(ErrorKind::malformed("radial size given twice"), t.start));
                }
            } else {
                return Err(self.err(
                    ErrorKind::malformed(format!(
                        "unexpected `{}` in radial descriptor",
                        &self.payload[t.start..t.end]
                    )),
                    t.start,
                ));
            }
        }

        Ok(Some(descriptor))
    }

    // ── Conic ─────────────────────────────────────────────────────────────

    fn conic_descriptor(&self, seg: &[TokenWithPos]) -> Result<Option<ConicDescriptor>, ParseError> {
        let keyword = |t: &TokenWithPos, kw: &str| matches!(&t.token, Token::Ident(w) if w.eq_ignore_ascii_case(kw));

        if !keyword(&seg[0], "from") && !keyword(&seg[0], "at") {
            return Ok(None);
        }

        let mut descriptor = ConicDescriptor::default();
        let mut i = 0;
        if keyword(&seg[0], "from") {
            let angle = match seg.get(1).map(|t| &t.token) {
                Some(Token::Dimension { value, unit }) => {
                    AngleUnit::from_suffix(unit).map(|u| Angle::new(*value, u))
                }
                _ => None,
            };
            let Some(angle) = angle else {
                return Err(self.err(ErrorKind::malformed("expected an angle after `from`"), seg[0].end));
            };
            descriptor.from_angle = Some(angle);
            i = 2;
        }

        if let Some(t) = seg.get(i) {
            if !keyword(t, "at") {
                return Err(self.err(
                    ErrorKind::malformed(format!(
                        "unexpected `{}` in conic descriptor",
                        &self.payload[t.start..t.end]
                    )),
                    t.start,
                ));
            }
            descriptor.position = Some(self.position(&seg[i + 1..], t)?);
        }

        Ok(Some(descriptor))
    }

    // ── Position ──────────────────────────────────────────────────────────

    /// Resolves the 1–2 values after `at` into horizontal/vertical parts.
    fn position(&self, values: &[TokenWithPos], at: &TokenWithPos) -> Result<Position, ParseError> {
        use PositionComponent::Keyword as Kw;

        let invalid = |pos: usize| {
            self.err(
                ErrorKind::malformed(format!("invalid position `{}`", self.text(values))),
                pos,
            )
        };

        let component = |t: &TokenWithPos| -> Result<PositionComponent, ParseError> {
            match &t.token {
                Token::Ident(w) => PositionKeyword::from_keyword(w).map(Kw).ok_or_else(|| invalid(t.start)),
                Token::Percentage(v) => Ok(PositionComponent::Length(Length::percent(*v))),
                Token::Dimension { value, unit } => LengthUnit::from_suffix(unit)
                    .map(|u| PositionComponent::Length(Length::new(*value, u)))
                    .ok_or_else(|| invalid(t.start)),
                _ => Err(invalid(t.start)),
            }
        };

        let center = Kw(PositionKeyword::Center);
        let is_vertical = |c: &PositionComponent| matches!(c, Kw(k) if k.is_vertical());
        let is_horizontal = |c: &PositionComponent| matches!(c, Kw(k) if k.is_horizontal());

        match values {
            [] => Err(self.err(ErrorKind::malformed("expected a position after `at`"), at.end)),
            [only] => {
                let c = component(only)?;
                Ok(if is_vertical(&c) {
                    Position { x: center, y: c }
                } else {
                    Position { x: c, y: center }
                })
            }
            [first, second] => {
                let (mut x, mut y) = (component(first)?, component(second)?);
                if is_vertical(&x) || is_horizontal(&y) {
                    std::mem::swap(&mut x, &mut y);
                }
                if is_vertical(&x) || is_horizontal(&y) {
                    return Err(invalid(first.start));
                }
                Ok(Position { x, y })
            }
            [_, _, third, ..] => Err(self.err(
                ErrorKind::malformed("positions with more than two values are not supported"),
                third.start,
            )),
        }
    }

    // ── Color stops ───────────────────────────────────────────────────────

    /// `<color> [<length-percentage> | <angle>]`. The trailing position, when
    /// present, is peeled off; everything before it is the color.
    fn color_stop(&self, seg: &[TokenWithPos]) -> Result<ColorStop, ParseError> {
        let last = &seg[seg.len() - 1];
        let position = match &last.token {
            Token::Percentage(v) => Some(StopPosition::Length(Length::percent(*v))),
            Token::Dimension { value, unit } => LengthUnit::from_suffix(unit)
                .map(|u| StopPosition::Length(Length::new(*value, u)))
                .or_else(|| AngleUnit::from_suffix(unit).map(|u| StopPosition::Angle(Angle::new(*value, u)))),
            _ => None,
        };

        let color_tokens = if position.is_some() { &seg[..seg.len() - 1] } else { seg };
        if color_tokens.is_empty() {
            return Err(self.err(ErrorKind::malformed("color stop is missing a color"), last.start));
        }

        let color = self.text(color_tokens);
        parse_color(color).map_err(|e| self.err(e.into(), color_tokens[0].start))?;

        Ok(ColorStop { color: color.to_owned(), position })
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a CSS gradient function with default [`ParseOptions`].
pub fn parse(input: &str) -> Result<Gradient, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Parse a CSS gradient function.
///
/// # Errors
///
/// Returns a [`ParseError`] echoing `input` when the text is not a valid
/// linear, radial or conic gradient.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Gradient, ParseError> {
    let header = read_header(input, options).map_err(|(kind, offset)| ParseError::new(input, kind, offset))?;

    let tokens = Lexer::new(header.payload)
        .tokenize()
        .map_err(|e| ParseError::new(input, e.kind, header.payload_offset + e.offset))?;

    let parser = Parser {
        raw: input,
        payload: header.payload,
        base: header.payload_offset,
        tokens,
        options,
    };
    parser.parse_gradient(header.ty, header.repeating)
}

/// Parse every input independently; one bad string does not stop the rest.
pub fn parse_many<I, S>(inputs: I, options: &ParseOptions) -> Vec<Result<Gradient, ParseError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| {
            let result = parse_with(input.as_ref(), options);
            if let Err(e) = &result {
                log::debug!("rejected gradient: {e}");
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kind_of(src: &str) -> ErrorKind {
        parse(src).unwrap_err().kind
    }

    // ── Header ────────────────────────────────────────────────────────────

    #[test]
    fn header_flags() {
        let g = parse("repeating-radial-gradient(red, blue 20px)").unwrap();
        assert!(g.repeating);
        assert_eq!(g.kind.name(), "radial");

        let g = parse("Linear-Gradient(red, blue)").unwrap();
        assert!(!g.repeating);
    }

    #[test]
    fn vendor_prefix_is_stripped() {
        let g = parse("-webkit-linear-gradient(45deg, red, blue)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear(LinearOrientation::Angle(Angle::deg(45.0))));

        let strict = ParseOptions { strip_vendor_prefixes: false, ..ParseOptions::default() };
        assert!(parse_with("-webkit-linear-gradient(red, blue)", &strict).is_err());
    }

    #[test]
    fn unknown_type() {
        assert_eq!(kind_of("diagonal-gradient(red, blue)"), ErrorKind::UnknownGradientType("diagonal".into()));
    }

    #[test]
    fn not_a_gradient() {
        assert!(matches!(kind_of("url(a.png)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("linear-gradient"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of(""), ErrorKind::MalformedGradientSyntax(_)));
    }

    #[test]
    fn unbalanced() {
        assert_eq!(kind_of("linear-gradient(red, rgb(0,0,0)"), ErrorKind::UnbalancedParentheses);
        assert_eq!(kind_of("linear-gradient(red, blue))"), ErrorKind::UnbalancedParentheses);
    }

    #[test]
    fn trailing_text() {
        let err = parse("linear-gradient(red, blue) no-repeat").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MalformedGradientSyntax(_)));
        assert_eq!(err.offset, 26);
    }

    // ── Linear ────────────────────────────────────────────────────────────

    #[test]
    fn linear_default_angle() {
        let g = parse("linear-gradient(red, blue)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear(LinearOrientation::Angle(Angle::deg(180.0))));
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn linear_direction_keywords() {
        let g = parse("linear-gradient(to left top, red, blue)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear(LinearOrientation::Direction(SideOrCorner::TopLeft)));

        assert!(matches!(kind_of("linear-gradient(to top bottom, red, blue)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("linear-gradient(to, red, blue)"), ErrorKind::MalformedGradientSyntax(_)));
    }

    #[test]
    fn linear_angle_units() {
        let g = parse("linear-gradient(0.25turn, red, blue)").unwrap();
        assert_eq!(g.kind, GradientKind::Linear(LinearOrientation::Angle(Angle::new(0.25, AngleUnit::Turn))));
    }

    // ── Radial ────────────────────────────────────────────────────────────

    #[test]
    fn radial_full_descriptor() {
        let g = parse("radial-gradient(ellipse farthest-side at 30% 40px, red, blue)").unwrap();
        assert_eq!(
            g.kind,
            GradientKind::Radial(RadialDescriptor {
                shape: Some(RadialShape::Ellipse),
                size: Some(RadialSize::FarthestSide),
                position: Some(Position {
                    x: PositionComponent::Length(Length::percent(30.0)),
                    y: PositionComponent::Length(Length::px(40.0)),
                }),
            })
        );
    }

    #[test]
    fn radial_position_keywords_resolve_axes() {
        let pos = |src: &str| match parse(src).unwrap().kind {
            GradientKind::Radial(r) => r.position.unwrap(),
            other => panic!("unexpected {other:?}"),
        };
        let kw = PositionComponent::Keyword;

        assert_eq!(pos("radial-gradient(at top, red, blue)"), Position { x: kw(PositionKeyword::Center), y: kw(PositionKeyword::Top) });
        assert_eq!(pos("radial-gradient(at right, red, blue)"), Position { x: kw(PositionKeyword::Right), y: kw(PositionKeyword::Center) });
        assert_eq!(pos("radial-gradient(at top left, red, blue)"), Position { x: kw(PositionKeyword::Left), y: kw(PositionKeyword::Top) });
        assert_eq!(pos("radial-gradient(at center, red, blue)"), Position::CENTER);
    }

    #[test]
    fn radial_rejects_bad_descriptors() {
        assert!(matches!(kind_of("radial-gradient(circle circle, red)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("radial-gradient(circle at, red)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("radial-gradient(at left right, red)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("radial-gradient(at left 10% top 5%, red)"), ErrorKind::MalformedGradientSyntax(_)));
    }

    // ── Conic ─────────────────────────────────────────────────────────────

    #[test]
    fn conic_from_and_at() {
        let g = parse("conic-gradient(from 90deg at 25% 75%, red 0deg, blue 180deg)").unwrap();
        assert_eq!(
            g.kind,
            GradientKind::Conic(ConicDescriptor {
                from_angle: Some(Angle::deg(90.0)),
                position: Some(Position {
                    x: PositionComponent::Length(Length::percent(25.0)),
                    y: PositionComponent::Length(Length::percent(75.0)),
                }),
            })
        );
        assert_eq!(g.stops[1].position, Some(StopPosition::Angle(Angle::deg(180.0))));
    }

    #[test]
    fn conic_without_descriptor() {
        let g = parse("conic-gradient(red, yellow, blue)").unwrap();
        assert_eq!(g.kind, GradientKind::Conic(ConicDescriptor::default()));
        assert_eq!(g.stops.len(), 3);
    }

    #[test]
    fn conic_from_requires_angle() {
        assert!(matches!(kind_of("conic-gradient(from red, blue)"), ErrorKind::MalformedGradientSyntax(_)));
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    #[test]
    fn stops_keep_nested_commas() {
        let g = parse("linear-gradient(rgba(0,0,0,0.5) 10%, rgba(255,255,255,0.8) 90%)").unwrap();
        assert_eq!(
            g.stops,
            vec![
                ColorStop::new("rgba(0,0,0,0.5)", Some(Length::percent(10.0).into())),
                ColorStop::new("rgba(255,255,255,0.8)", Some(Length::percent(90.0).into())),
            ]
        );
    }

    #[test]
    fn stop_without_color() {
        assert!(matches!(kind_of("linear-gradient(red, 50%, blue)"), ErrorKind::MalformedGradientSyntax(_)));
    }

    #[test]
    fn empty_stop_list() {
        assert_eq!(kind_of("linear-gradient()"), ErrorKind::EmptyColorStopList);
        assert_eq!(kind_of("linear-gradient(45deg)"), ErrorKind::EmptyColorStopList);
        assert_eq!(kind_of("radial-gradient(circle)"), ErrorKind::EmptyColorStopList);
    }

    #[test]
    fn empty_arguments() {
        assert!(matches!(kind_of("linear-gradient(red,,blue)"), ErrorKind::MalformedGradientSyntax(_)));
        assert!(matches!(kind_of("linear-gradient(red, blue,)"), ErrorKind::MalformedGradientSyntax(_)));
    }

    #[test]
    fn unsupported_color() {
        let err = parse("linear-gradient(red, bluish 50%)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedColorNotation("bluish".into()));
        assert_eq!(err.offset, 21);
    }

    // ── Numbers and comments ──────────────────────────────────────────────

    #[test]
    fn overflowing_angle_is_malformed() {
        let src = format!("linear-gradient(1{}deg, red, blue)", "0".repeat(40));
        let err = parse(&src).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MalformedGradientSyntax(_)));
        assert_eq!(err.offset, 16);
    }

    #[test]
    fn overflowing_stop_position_is_malformed() {
        let src = format!("linear-gradient(red, blue 1{}%)", "0".repeat(40));
        assert!(matches!(kind_of(&src), ErrorKind::MalformedGradientSyntax(_)));
    }

    #[test]
    fn comments_between_arguments() {
        let g = parse("linear-gradient(/* x */ to right /* (dir) */, red 10%, /* end */ blue)").unwrap();
        assert_eq!(g, parse("linear-gradient(to right, red 10%, blue)").unwrap());
    }

    #[test]
    fn comment_hides_closing_paren() {
        let g = parse("radial-gradient(circle /* ) */, red, blue)").unwrap();
        assert_eq!(g.stops.len(), 2);
        assert_eq!(kind_of("linear-gradient(red, blue /* )"), ErrorKind::UnbalancedParentheses);
    }

    #[test]
    fn error_echoes_raw_input() {
        let raw = "linear-gradient(45deg red)";
        let err = parse(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn many_continues_after_failure() {
        let results = parse_many(
            ["linear-gradient(red, blue)", "nonsense", "conic-gradient(red, blue)"],
            &ParseOptions::default(),
        );
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
