use std::fmt;

use crate::color::ColorError;

/// What went wrong while reading a gradient string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("malformed gradient syntax: {0}")]
    MalformedGradientSyntax(String),

    #[error("unknown gradient type `{0}`")]
    UnknownGradientType(String),

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("gradient has no color stops")]
    EmptyColorStopList,

    #[error("unsupported color notation `{0}`")]
    UnsupportedColorNotation(String),
}

impl ErrorKind {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGradientSyntax(reason.into())
    }
}

/// A rejected gradient string.
///
/// This is the structured "invalid" result: it echoes the raw input so a
/// batch of parses can report every failure next to the text that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub raw: String,
    pub kind: ErrorKind,
    /// Byte offset into `raw` where the problem was detected.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(raw: &str, kind: ErrorKind, offset: usize) -> Self {
        Self { raw: raw.to_owned(), kind, offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid gradient at byte {}: {} (in `{}`)", self.offset, self.kind, self.raw)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Failure while parsing text that sits inside a gradient (lexer level).
///
/// Offsets are relative to the text handed to the lexer; the parser shifts
/// them into the coordinates of the full input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LexError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl LexError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl From<ColorError> for ErrorKind {
    fn from(err: ColorError) -> Self {
        ErrorKind::UnsupportedColorNotation(err.text().to_owned())
    }
}
