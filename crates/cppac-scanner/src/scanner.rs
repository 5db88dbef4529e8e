//! Tokenizer over raw document text.
//!
//! The scanner never fails: characters it does not understand become
//! `SyntaxKind::Unknown` tokens and unterminated literals end at the line
//! break. Comments and whitespace are skipped. A `#` that is the first
//! non-blank character of a line starts a `Directive` token covering the whole
//! logical line, so the preprocessor can interpret it without re-scanning.

use cppac_common::Span;
use serde::{Deserialize, Serialize};

use crate::SyntaxKind;

/// A token with its byte span in the document text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: SyntaxKind, start: usize, end: usize) -> Token {
        Token {
            kind,
            span: Span::new(start as u32, end as u32),
        }
    }

    /// The source text this token covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

pub struct ScannerState<'a> {
    source: &'a str,
    pos: usize,
    /// Only blanks have been seen since the last line break.
    at_line_start: bool,
}

impl<'a> ScannerState<'a> {
    pub fn new(source: &'a str) -> Self {
        ScannerState {
            source,
            pos: 0,
            at_line_start: true,
        }
    }

    #[inline]
    fn peek_byte(&self, ahead: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + ahead).copied()
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.source.get(self.pos..)?.chars().next()
    }

    fn skip_trivia(&mut self) {
        while let Some(byte) = self.peek_byte(0) {
            match byte {
                b'\n' => {
                    self.pos += 1;
                    self.at_line_start = true;
                }
                b' ' | b'\t' | b'\r' | 0x0b | 0x0c => self.pos += 1,
                // Line splice outside a directive
                b'\\' if matches!(self.peek_byte(1), Some(b'\n')) => self.pos += 2,
                b'/' if self.peek_byte(1) == Some(b'/') => {
                    while let Some(b) = self.peek_byte(0) {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                b'/' if self.peek_byte(1) == Some(b'*') => {
                    self.pos += 2;
                    loop {
                        match self.peek_byte(0) {
                            None => break,
                            Some(b'*') if self.peek_byte(1) == Some(b'/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(b'\n') => {
                                self.pos += 1;
                                self.at_line_start = true;
                            }
                            Some(_) => self.pos += 1,
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan the next token. Returns an `EndOfFile` token at the end of input.
    pub fn scan(&mut self) -> Token {
        self.skip_trivia();
        let start = self.pos;
        let at_line_start = std::mem::replace(&mut self.at_line_start, false);

        let Some(ch) = self.peek_char() else {
            return Token::new(SyntaxKind::EndOfFile, start, start);
        };

        if ch == '#' && at_line_start {
            self.scan_directive();
            // The directive swallowed its line break
            self.at_line_start = true;
            return Token::new(SyntaxKind::Directive, start, self.pos);
        }

        if ch == '_' || ch.is_alphabetic() {
            self.scan_word();
            let kind = SyntaxKind::keyword(&self.source[start..self.pos])
                .unwrap_or(SyntaxKind::Identifier);
            return Token::new(kind, start, self.pos);
        }

        if ch.is_ascii_digit()
            || (ch == '.' && self.peek_byte(1).is_some_and(|b| b.is_ascii_digit()))
        {
            self.scan_number();
            return Token::new(SyntaxKind::NumericLiteral, start, self.pos);
        }

        if ch == '"' || ch == '\'' {
            self.scan_quoted(ch as u8);
            let kind = if ch == '"' {
                SyntaxKind::StringLiteral
            } else {
                SyntaxKind::CharLiteral
            };
            return Token::new(kind, start, self.pos);
        }

        let kind = self.scan_punctuation();
        if kind == SyntaxKind::Unknown {
            self.pos += ch.len_utf8();
        }
        Token::new(kind, start, self.pos)
    }

    fn scan_directive(&mut self) {
        while let Some(byte) = self.peek_byte(0) {
            match byte {
                b'\\' if self.peek_byte(1) == Some(b'\n') => self.pos += 2,
                b'\\' if self.peek_byte(1) == Some(b'\r') && self.peek_byte(2) == Some(b'\n') => {
                    self.pos += 3
                }
                b'\n' => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn scan_word(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '_' || ch.is_alphanumeric() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn scan_number(&mut self) {
        while let Some(byte) = self.peek_byte(0) {
            let exponent_sign = matches!(byte, b'+' | b'-')
                && self.pos > 0
                && matches!(self.source.as_bytes()[self.pos - 1], b'e' | b'E' | b'p' | b'P');
            if byte.is_ascii_alphanumeric()
                || byte == b'.'
                || byte == b'_'
                || byte == b'\''
                || exponent_sign
            {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(byte) = self.peek_byte(0) {
            match byte {
                b'\\' => {
                    self.pos += 1;
                    // Skip the escaped character, whatever its width
                    if let Some(ch) = self.peek_char()
                        && ch != '\n'
                    {
                        self.pos += ch.len_utf8();
                    }
                }
                b'\n' => return,
                b if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => {
                    let width = self.peek_char().map_or(1, char::len_utf8);
                    self.pos += width;
                }
            }
        }
    }

    /// Longest-match punctuation. Advances past the token unless it returns
    /// `Unknown`.
    fn scan_punctuation(&mut self) -> SyntaxKind {
        let first = self.peek_byte(0).unwrap_or(0);
        let second = self.peek_byte(1);
        let third = self.peek_byte(2);

        let (kind, width) = match (first, second, third) {
            (b'.', Some(b'.'), Some(b'.')) => (SyntaxKind::Ellipsis, 3),
            (b'<', Some(b'<'), Some(b'=')) => (SyntaxKind::LessLessEquals, 3),
            (b'>', Some(b'>'), Some(b'=')) => (SyntaxKind::GreaterGreaterEquals, 3),
            (b'-', Some(b'>'), _) => (SyntaxKind::Arrow, 2),
            (b':', Some(b':'), _) => (SyntaxKind::ColonColon, 2),
            (b'+', Some(b'+'), _) => (SyntaxKind::PlusPlus, 2),
            (b'+', Some(b'='), _) => (SyntaxKind::PlusEquals, 2),
            (b'-', Some(b'-'), _) => (SyntaxKind::MinusMinus, 2),
            (b'-', Some(b'='), _) => (SyntaxKind::MinusEquals, 2),
            (b'*', Some(b'='), _) => (SyntaxKind::AsteriskEquals, 2),
            (b'/', Some(b'='), _) => (SyntaxKind::SlashEquals, 2),
            (b'%', Some(b'='), _) => (SyntaxKind::PercentEquals, 2),
            (b'&', Some(b'&'), _) => (SyntaxKind::AmpersandAmpersand, 2),
            (b'&', Some(b'='), _) => (SyntaxKind::AmpersandEquals, 2),
            (b'|', Some(b'|'), _) => (SyntaxKind::BarBar, 2),
            (b'|', Some(b'='), _) => (SyntaxKind::BarEquals, 2),
            (b'^', Some(b'='), _) => (SyntaxKind::CaretEquals, 2),
            (b'!', Some(b'='), _) => (SyntaxKind::ExclamationEquals, 2),
            (b'=', Some(b'='), _) => (SyntaxKind::EqualsEquals, 2),
            (b'<', Some(b'='), _) => (SyntaxKind::LessEquals, 2),
            (b'<', Some(b'<'), _) => (SyntaxKind::LessLess, 2),
            (b'>', Some(b'='), _) => (SyntaxKind::GreaterEquals, 2),
            (b'>', Some(b'>'), _) => (SyntaxKind::GreaterGreater, 2),
            (b'(', _, _) => (SyntaxKind::OpenParen, 1),
            (b')', _, _) => (SyntaxKind::CloseParen, 1),
            (b'{', _, _) => (SyntaxKind::OpenBrace, 1),
            (b'}', _, _) => (SyntaxKind::CloseBrace, 1),
            (b'[', _, _) => (SyntaxKind::OpenBracket, 1),
            (b']', _, _) => (SyntaxKind::CloseBracket, 1),
            (b';', _, _) => (SyntaxKind::Semicolon, 1),
            (b',', _, _) => (SyntaxKind::Comma, 1),
            (b':', _, _) => (SyntaxKind::Colon, 1),
            (b'?', _, _) => (SyntaxKind::Question, 1),
            (b'.', _, _) => (SyntaxKind::Dot, 1),
            (b'+', _, _) => (SyntaxKind::Plus, 1),
            (b'-', _, _) => (SyntaxKind::Minus, 1),
            (b'*', _, _) => (SyntaxKind::Asterisk, 1),
            (b'/', _, _) => (SyntaxKind::Slash, 1),
            (b'%', _, _) => (SyntaxKind::Percent, 1),
            (b'&', _, _) => (SyntaxKind::Ampersand, 1),
            (b'|', _, _) => (SyntaxKind::Bar, 1),
            (b'^', _, _) => (SyntaxKind::Caret, 1),
            (b'~', _, _) => (SyntaxKind::Tilde, 1),
            (b'!', _, _) => (SyntaxKind::Exclamation, 1),
            (b'=', _, _) => (SyntaxKind::Equals, 1),
            (b'<', _, _) => (SyntaxKind::Less, 1),
            (b'>', _, _) => (SyntaxKind::Greater, 1),
            _ => return SyntaxKind::Unknown,
        };

        self.pos += width;
        kind
    }
}

/// Scan `source` into tokens, excluding the trailing `EndOfFile`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = ScannerState::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        if token.kind == SyntaxKind::EndOfFile {
            break;
        }
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod scanner_tests;
