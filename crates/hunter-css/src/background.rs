//! Helpers for CSS values that hold several gradients, such as a computed
//! `background-image`.

use crate::ast::Gradient;
use crate::error::ParseError;
use crate::lexer::matching_paren;
use crate::parser::{ParseOptions, parse_with};

const GRADIENT_NAMES: [&str; 3] = ["linear-gradient(", "radial-gradient(", "conic-gradient("];

/// Splits a comma-separated list at paren depth 0.
///
/// `linear-gradient(red, blue), url(a.png)` yields the two top-level items;
/// commas inside function arguments never split. Empty items are dropped.
pub fn split_top_level(value: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, b) in value.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                items.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(value[start..].trim());
    items.retain(|s| !s.is_empty());
    items
}

/// Top-level items of `value` that name a gradient function.
pub fn split_gradients(value: &str) -> Vec<&str> {
    split_top_level(value)
        .into_iter()
        .filter(|item| item.to_ascii_lowercase().contains("-gradient("))
        .collect()
}

/// Finds every gradient function inside an arbitrary background value,
/// including ones surrounded by other layer syntax
/// (`url(x.png) no-repeat, linear-gradient(...) fixed`).
///
/// Each returned slice runs from the function name (with any `repeating-` or
/// vendor prefix) to its matching `)`. An unterminated function is returned
/// up to the end of the input so the parser can report it.
pub fn extract_gradients(background: &str) -> Vec<&str> {
    let lower = background.to_ascii_lowercase();
    let mut found = Vec::new();
    let mut cursor = 0;

    while cursor < lower.len() {
        let next = GRADIENT_NAMES
            .iter()
            .filter_map(|name| lower[cursor..].find(name).map(|i| (cursor + i, name.len())))
            .min_by_key(|(i, _)| *i);
        let Some((at, name_len)) = next else { break };

        let start = function_start(&lower, at);
        let open = at + name_len - 1;
        match matching_paren(background, open) {
            Some(close) => {
                found.push(&background[start..=close]);
                cursor = close + 1;
            }
            None => {
                found.push(&background[start..]);
                break;
            }
        }
    }

    found
}

/// Walks back from a `linear-gradient(`-style match over `repeating-` and a
/// vendor prefix so they stay part of the extracted function.
fn function_start(lower: &str, at: usize) -> usize {
    let mut start = at;
    if lower[..start].ends_with("repeating-") {
        start -= "repeating-".len();
    }
    for prefix in ["-webkit-", "-moz-", "-ms-", "-o-"] {
        if lower[..start].ends_with(prefix) {
            start -= prefix.len();
            break;
        }
    }
    start
}

/// Extracts and parses every gradient in a background value. One result per
/// gradient, in source order.
pub fn parse_background(background: &str, options: &ParseOptions) -> Vec<Result<Gradient, ParseError>> {
    let gradients = extract_gradients(background);
    log::debug!("found {} gradient(s) in background value", gradients.len());
    crate::parser::parse_many(gradients, options)
}
