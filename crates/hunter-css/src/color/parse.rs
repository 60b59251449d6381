use super::{ColorError, Rgba};

/// Keywords and functions that are valid CSS colors but only resolve inside a
/// document.
const UNRESOLVABLE_FUNCTIONS: [&str; 4] = ["var", "env", "color-mix", "light-dark"];

/// Parse a CSS color.
///
/// Hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, named colors and
/// `transparent` are handled by `csscolorparser`. `currentcolor` and the
/// context-dependent functions are rejected as [`ColorError::Unresolvable`].
pub fn parse_color(text: &str) -> Result<Rgba, ColorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    let lower = text.to_ascii_lowercase();
    let function = lower.find('(').map(|open| lower[..open].trim());
    if lower == "currentcolor" || function.is_some_and(|name| UNRESOLVABLE_FUNCTIONS.contains(&name)) {
        return Err(ColorError::Unresolvable(text.to_owned()));
    }

    // csscolorparser slices by byte and also reads bare `fed` as `#ffeedd`.
    if !text.is_ascii() || is_bare_hex(text) {
        return Err(rejected(text, function.is_some()));
    }

    let color = csscolorparser::parse(text).map_err(|err| {
        log::trace!("color `{text}` rejected: {err}");
        rejected(text, function.is_some())
    })?;

    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgba::new(r, g, b, color.a.clamp(0.0, 1.0) as f32))
}

fn is_bare_hex(text: &str) -> bool {
    matches!(text.len(), 3 | 4 | 6 | 8) && text.bytes().all(|b| b.is_ascii_hexdigit())
}

fn rejected(text: &str, is_function: bool) -> ColorError {
    if text.starts_with('#') {
        ColorError::InvalidHex(text.to_owned())
    } else if is_function {
        ColorError::InvalidFunction(text.to_owned())
    } else {
        ColorError::UnknownKeyword(text.to_owned())
    }
}
