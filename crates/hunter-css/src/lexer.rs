use crate::error::{ErrorKind, LexError};

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: `to`, `circle`, `red`, `closest-side`.
    Ident(String),
    /// A function call including its balanced argument list, e.g.
    /// `rgba(0,0,0,0.5)`. Arguments are not tokenized further; a color
    /// function is a single unit to the gradient grammar.
    Function { name: String, args: String },
    /// `#` followed by name characters (hex colors).
    Hash(String),
    Number(f32),
    Percentage(f32),
    /// Number with a unit suffix: `45deg`, `10px`.
    Dimension { value: f32, unit: String },
    Comma,
    // Sentinel
    Eof,
}

/// A token plus the byte range it covers in the lexed text.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Tokenizer for the argument list of a gradient function.
///
/// Whitespace and `/* */` comments separate tokens and are otherwise
/// dropped. Parentheses only
/// appear as part of a [`Token::Function`], so the token stream is flat and a
/// comma token is always at paren depth 0.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn tokenize(mut self) -> Result<Vec<TokenWithPos>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let start = self.pos;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, start, end: self.pos });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if !self.src[self.pos..].starts_with("/*") {
                return Ok(());
            }
            let Some(end) = self.src[self.pos + 2..].find("*/") else {
                return Err(self.err(ErrorKind::malformed("unterminated comment")));
            };
            self.pos += 2 + end + 2;
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ',' => {
                self.advance();
                Ok(Token::Comma)
            }
            '#' => {
                self.advance();
                let name = self.read_name();
                if name.is_empty() {
                    return Err(self.err(ErrorKind::malformed("expected hex digits after '#'")));
                }
                Ok(Token::Hash(name.to_owned()))
            }
            '(' => Err(self.err(ErrorKind::malformed("unexpected '(' without a function name"))),
            ')' => Err(self.err(ErrorKind::UnbalancedParentheses)),
            c if self.starts_number(c) => self.read_numeric(),
            c if is_name_start(c) || (c == '-' && self.peek_at(1).is_some_and(is_name_start)) => {
                let name = self.read_name().to_owned();
                if self.peek() == Some('(') {
                    let args = self.read_args()?;
                    Ok(Token::Function { name, args })
                } else {
                    Ok(Token::Ident(name))
                }
            }
            other => Err(self.err(ErrorKind::malformed(format!("unexpected character {other:?}")))),
        }
    }

    fn err(&self, kind: ErrorKind) -> LexError {
        LexError::new(kind, self.pos)
    }

    fn starts_number(&self, c: char) -> bool {
        let digit_at = |i: usize| self.peek_at(i).is_some_and(|c| c.is_ascii_digit());
        match c {
            '0'..='9' => true,
            '.' => digit_at(1),
            '+' | '-' => digit_at(1) || (self.peek_at(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn read_name(&mut self) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_name_char(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn read_numeric(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.src[start..self.pos];
        let value: f32 = text
            .parse()
            .map_err(|_| LexError::new(ErrorKind::malformed(format!("invalid number `{text}`")), start))?;
        // Long digit runs overflow to infinity, which has no CSS spelling.
        if !value.is_finite() {
            return Err(LexError::new(ErrorKind::malformed(format!("number `{text}` is out of range")), start));
        }

        if self.peek() == Some('%') {
            self.advance();
            return Ok(Token::Percentage(value));
        }
        if self.peek().is_some_and(is_name_start) {
            let unit = self.read_name().to_owned();
            return Ok(Token::Dimension { value, unit });
        }
        Ok(Token::Number(value))
    }

    /// Consumes `( ... )` with nesting and returns the text between the outer
    /// parentheses.
    fn read_args(&mut self) -> Result<String, LexError> {
        let open = self.pos;
        let close = matching_paren(self.src, open).ok_or_else(|| LexError::new(ErrorKind::UnbalancedParentheses, open))?;
        self.pos = close + 1;
        Ok(self.src[open + 1..close].to_owned())
    }
}

/// Index of the `)` that closes the `(` at `open`. Parentheses inside
/// `/* */` comments are not counted.
pub(crate) fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                // land on the closing `/`
                i += 2 + s[i + 2..].find("*/")? + 1;
            }
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}
