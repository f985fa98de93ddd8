//! List-literal parser for suggestion-stage model output.
//!
//! The model is asked for a nested list such as
//! `[["Name", "Artist", "1889", "MoMA", "https://..."], ...]`. This module
//! reads that text as data and never evaluates it.
//!
//! Grammar:
//!
//! ```text
//! document := ws list ws EOF
//! list     := '[' ws ( value ( ws ',' ws value )* ( ws ',' )? )? ws ']'
//! value    := list | string | number | word
//! string   := '"' chars '"' | '\'' chars '\''     (backslash escapes)
//! number   := '-'? digit+ ( '.' digit+ )?
//! word     := [A-Za-z_][A-Za-z0-9_]*              (None, True, null, ...)
//! ```

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    List(Vec<Literal>),
    Str(String),
    /// Kept as written so "1889" and 1889 read back the same.
    Number(String),
    Word(String),
}

impl Literal {
    /// Text of a scalar value; `None` for lists.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Str(s) | Literal::Number(s) | Literal::Word(s) => Some(s),
            Literal::List(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at byte {position}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// Remove Markdown code fences (```` ```python ````, ```` ```json ````,
/// bare ```` ``` ````) wherever they appear, then trim.
pub fn strip_code_fences(text: &str) -> String {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE
        .get_or_init(|| Regex::new(r"```[A-Za-z0-9_+-]*[ \t]*\r?\n?").expect("fence pattern is valid"));
    fence.replace_all(text.trim(), "").trim().to_string()
}

/// Parse a whole document and return the items of its outer list.
pub fn parse(text: &str) -> Result<Vec<Literal>, ParseError> {
    let mut parser = Parser { src: text, pos: 0 };
    parser.skip_ws();
    match parser.peek() {
        Some('[') => {}
        Some(c) => return Err(parser.error(format!("expected '[' but found '{}'", c))),
        None => return Err(parser.error("empty input")),
    }
    let items = parser.list(0)?;
    parser.skip_ws();
    if parser.pos < parser.src.len() {
        return Err(parser.error("unexpected text after list"));
    }
    Ok(items)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.pos, message)
    }

    /// Called with the cursor on '['.
    fn list(&mut self, depth: usize) -> Result<Vec<Literal>, ParseError> {
        if depth >= MAX_DEPTH {
            return Err(self.error("lists nested too deeply"));
        }
        self.bump();
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(items);
        }
        loop {
            items.push(self.value(depth)?);
            self.skip_ws();
            match self.bump() {
                Some(',') => {
                    self.skip_ws();
                    if self.peek() == Some(']') {
                        self.bump();
                        return Ok(items);
                    }
                }
                Some(']') => return Ok(items),
                Some(c) => {
                    self.pos -= c.len_utf8();
                    return Err(self.error(format!("expected ',' or ']' but found '{}'", c)));
                }
                None => return Err(self.error("unterminated list")),
            }
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal, ParseError> {
        match self.peek() {
            Some('[') => self.list(depth + 1).map(Literal::List),
            Some(q @ ('"' | '\'')) => self.string(q).map(Literal::Str),
            Some(c) if c == '-' || c.is_ascii_digit() => self.number().map(Literal::Number),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => Ok(Literal::Word(self.word())),
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn string(&mut self, quote: char) -> Result<String, ParseError> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => break,
                },
                Some(c) => out.push(c),
                None => break,
            }
        }
        Err(ParseError::new(start, "unterminated string"))
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        self.pos - start
    }

    fn number(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        if self.digits() == 0 {
            return Err(self.error("expected digits"));
        }
        if self.peek() == Some('.') {
            self.bump();
            if self.digits() == 0 {
                return Err(self.error("expected digits after '.'"));
            }
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }
}
