/*!
 * Decoder for permissive literal-object word files.
 *
 * Some transcripts are dumped with single-quoted or prefixed (`u'..'`,
 * `r'..'`) strings, `None`/`True`/`False`, tuples and trailing commas
 * instead of strict JSON. This module
 * reads that syntax into a `serde_json::Value` so the rest of the pipeline
 * only ever sees JSON values.
 */

use std::iter::Peekable;
use std::str::Chars;

use serde_json::{Map, Number, Value};

use crate::errors::TranscriptError;

/// Deepest container nesting accepted, matching serde_json's default limit
pub const MAX_NESTING_DEPTH: usize = 128;

/// Decode a literal-object document into a JSON value
pub fn parse_literal(input: &str) -> Result<Value, TranscriptError> {
    let mut parser = LiteralParser::new(input);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if let Some(c) = parser.chars.peek().copied() {
        return Err(parser.error(&format!("unexpected trailing '{}'", c)));
    }
    Ok(value)
}

struct LiteralParser<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    depth: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            offset: 0,
            depth: 0,
        }
    }

    fn error(&self, message: &str) -> TranscriptError {
        TranscriptError::Decode(format!("{} at character {}", message, self.offset))
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '#' {
                // Comment runs to end of line
                while let Some(&next) = self.chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Enter a container, failing past the nesting limit
    fn descend(&mut self) -> Result<(), TranscriptError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error(&format!("nesting too deep (more than {} levels)", MAX_NESTING_DEPTH)));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn expect(&mut self, expected: char) -> Result<(), TranscriptError> {
        self.skip_whitespace();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(&format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<Value, TranscriptError> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_sequence('[', ']'),
            Some('(') => self.parse_sequence('(', ')'),
            Some('\'') | Some('"') => self.parse_string(false).map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.parse_number(),
            Some(c) if c.is_alphabetic() => self.parse_keyword(),
            Some(c) => Err(self.error(&format!("unexpected '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_object(&mut self) -> Result<Value, TranscriptError> {
        self.descend()?;
        let result = self.parse_object_entries();
        self.ascend();
        result
    }

    fn parse_object_entries(&mut self) -> Result<Value, TranscriptError> {
        self.expect('{')?;
        let mut map = Map::new();

        loop {
            self.skip_whitespace();
            if self.chars.peek() == Some(&'}') {
                self.bump();
                return Ok(Value::Object(map));
            }

            let key = match self.parse_value()? {
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.expect(':')?;
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(map)),
                Some(c) => return Err(self.error(&format!("expected ',' or '}}', found '{}'", c))),
                None => return Err(self.error("unterminated object")),
            }
        }
    }

    fn parse_sequence(&mut self, open: char, close: char) -> Result<Value, TranscriptError> {
        self.descend()?;
        let result = self.parse_sequence_items(open, close);
        self.ascend();
        result
    }

    fn parse_sequence_items(&mut self, open: char, close: char) -> Result<Value, TranscriptError> {
        self.expect(open)?;
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.chars.peek() == Some(&close) {
                self.bump();
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(Value::Array(items)),
                Some(c) => {
                    return Err(self.error(&format!("expected ',' or '{}', found '{}'", close, c)));
                }
                None => return Err(self.error("unterminated sequence")),
            }
        }
    }

    /// Read a quoted string; raw strings keep each backslash and the character after it
    fn parse_string(&mut self, raw: bool) -> Result<String, TranscriptError> {
        let quote = self.bump().ok_or_else(|| self.error("expected string"))?;
        let mut out = String::new();

        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') if raw => {
                    out.push('\\');
                    if let Some(next) = self.bump() {
                        out.push(next);
                    }
                }
                Some('\\') => {
                    let escaped = self.bump().ok_or_else(|| self.error("unterminated escape"))?;
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '0' => out.push('\0'),
                        'u' => out.push(self.parse_hex_escape(4)?),
                        'x' => out.push(self.parse_hex_escape(2)?),
                        other => out.push(other),
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_hex_escape(&mut self, digits: usize) -> Result<char, TranscriptError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid hex escape"))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error("invalid code point"))
    }

    fn parse_number(&mut self) -> Result<Value, TranscriptError> {
        let mut literal = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_') {
                if c != '_' {
                    literal.push(c);
                }
                self.bump();
            } else {
                break;
            }
        }

        if let Ok(int) = literal.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.error(&format!("invalid number '{}'", literal)))
    }

    fn parse_keyword(&mut self) -> Result<Value, TranscriptError> {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if is_string_prefix(&word) && matches!(self.chars.peek().copied(), Some('\'') | Some('"')) {
            let raw = word.contains(['r', 'R']);
            return self.parse_string(raw).map(Value::String);
        }

        match word.as_str() {
            "None" | "null" => Ok(Value::Null),
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            // nan/inf are not representable as JSON numbers
            "nan" | "NaN" | "inf" | "Infinity" => Ok(Value::Null),
            _ => Err(self.error(&format!("unknown keyword '{}'", word))),
        }
    }
}

/// `u`, `b`, `r` and their two-letter combinations, in either case
fn is_string_prefix(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "u" | "b" | "r" | "ur" | "br" | "rb"
    )
}
