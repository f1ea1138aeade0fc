//! Character classes for the first character of a token.

use super::TokenKind;

/// How a lookahead character starts the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Class {
    /// A character that is always a token of its own.
    Punctuation(TokenKind),
    /// `{`: curly bracket, or the start of a table.
    CurlyOpen,
    /// `|`: pipe, or the start of a row separator or table close.
    Pipe,
    Whitespace,
    /// Anything else is literal text.
    Text,
}

impl Class {
    pub(super) fn of(c: char) -> Self {
        match c {
            '[' => Class::Punctuation(TokenKind::SquareOpen),
            ']' => Class::Punctuation(TokenKind::SquareClose),
            '}' => Class::Punctuation(TokenKind::CurlyClose),
            '<' => Class::Punctuation(TokenKind::AngleOpen),
            '>' => Class::Punctuation(TokenKind::AngleClose),
            '=' => Class::Punctuation(TokenKind::EqualSign),
            '\'' => Class::Punctuation(TokenKind::Apostrophe),
            '*' => Class::Punctuation(TokenKind::Asterisk),
            ':' => Class::Punctuation(TokenKind::Colon),
            ';' => Class::Punctuation(TokenKind::Semicolon),
            '#' => Class::Punctuation(TokenKind::Hash),
            '{' => Class::CurlyOpen,
            '|' => Class::Pipe,
            c if c.is_whitespace() => Class::Whitespace,
            _ => Class::Text,
        }
    }
}

/// Only line feeds count towards a paragraph break.
pub(super) fn is_newline(c: char) -> bool {
    c == '\n'
}
