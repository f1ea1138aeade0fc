//! Token types produced by the lexer.

use std::borrow::Cow;
use std::fmt;

/// The kind of a wikitext token.
///
/// The set of kinds is fixed; the parser relies on the names and payload shapes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Text,
    SquareOpen,
    SquareClose,
    /// `|`. Its payload is always absent.
    Pipe,
    EqualSign,
    Apostrophe,
    Asterisk,
    Colon,
    Semicolon,
    Hash,
    CurlyOpen,
    CurlyClose,
    AngleOpen,
    AngleClose,
    /// A whitespace run with two or more newlines.
    NewParagraph,
    TableOpen,
    TableRowSeparator,
    TableClose,
    /// A whitespace run with at most one newline.
    Whitespace,
    EndOfInput,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Text,
        TokenKind::SquareOpen,
        TokenKind::SquareClose,
        TokenKind::Pipe,
        TokenKind::EqualSign,
        TokenKind::Apostrophe,
        TokenKind::Asterisk,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Hash,
        TokenKind::CurlyOpen,
        TokenKind::CurlyClose,
        TokenKind::AngleOpen,
        TokenKind::AngleClose,
        TokenKind::NewParagraph,
        TokenKind::TableOpen,
        TokenKind::TableRowSeparator,
        TokenKind::TableClose,
        TokenKind::Whitespace,
        TokenKind::EndOfInput,
    ];

    /// Stable identifier of the kind, as used by wikitext parsers.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "TEXT",
            TokenKind::SquareOpen => "SQRE_OPEN",
            TokenKind::SquareClose => "SQRE_CLOSE",
            TokenKind::Pipe => "PIPE",
            TokenKind::EqualSign => "EQUAL_SIGN",
            TokenKind::Apostrophe => "APOSTROPHE",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Hash => "HASH",
            TokenKind::CurlyOpen => "CURL_OPEN",
            TokenKind::CurlyClose => "CURL_CLOSE",
            TokenKind::AngleOpen => "ANGL_OPEN",
            TokenKind::AngleClose => "ANGL_CLOSE",
            TokenKind::NewParagraph => "NEWPAR",
            TokenKind::TableOpen => "TAB_OPEN",
            TokenKind::TableRowSeparator => "TAB_NEWLINE",
            TokenKind::TableClose => "TAB_CLOSE",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::EndOfInput => "EOF",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TokenKind::Text => "Text data",
            TokenKind::SquareOpen => "Square bracket open",
            TokenKind::SquareClose => "Square bracket close",
            TokenKind::Pipe => "Pipe symbol",
            TokenKind::EqualSign => "Equal sign",
            TokenKind::Apostrophe => "Apostrophe",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Hash => "Hash symbol",
            TokenKind::CurlyOpen => "Curly bracket open",
            TokenKind::CurlyClose => "Curly bracket close",
            TokenKind::AngleOpen => "Angular bracket open",
            TokenKind::AngleClose => "Angular bracket close",
            TokenKind::NewParagraph => "New paragraph",
            TokenKind::TableOpen => "Table opening symbol",
            TokenKind::TableRowSeparator => "Table new row symbol",
            TokenKind::TableClose => "Table closing symbol",
            TokenKind::Whitespace => "Whitespace with max 1 newline",
            TokenKind::EndOfInput => "End of file",
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Text, whitespace and end-of-input have no fixed text.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::SquareOpen => "[",
            TokenKind::SquareClose => "]",
            TokenKind::Pipe => "|",
            TokenKind::EqualSign => "=",
            TokenKind::Apostrophe => "'",
            TokenKind::Asterisk => "*",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Hash => "#",
            TokenKind::CurlyOpen => "{",
            TokenKind::CurlyClose => "}",
            TokenKind::AngleOpen => "<",
            TokenKind::AngleClose => ">",
            TokenKind::TableOpen => "{|",
            TokenKind::TableRowSeparator => "|-",
            TokenKind::TableClose => "|}",
            TokenKind::Text
            | TokenKind::NewParagraph
            | TokenKind::Whitespace
            | TokenKind::EndOfInput => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<T_{}>", self.name())
    }
}

/// A token: its kind, and the text it carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<Cow<'static, str>>,
}

impl Token {
    /// A token carrying text read from the input.
    pub fn new(kind: TokenKind, text: impl Into<Cow<'static, str>>) -> Self {
        Token {
            kind,
            text: Some(text.into()),
        }
    }

    /// A token of a kind with fixed text.
    ///
    /// Pipe and end-of-input carry no text at all.
    pub(crate) fn fixed(kind: TokenKind) -> Self {
        let text = match kind {
            TokenKind::Pipe | TokenKind::EndOfInput => None,
            _ => kind.lexeme().map(Cow::Borrowed),
        };
        Token { kind, text }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The input this token consumed.
    ///
    /// Unlike [`Token::text`], this includes the `|` of a Pipe token.
    /// Concatenating the source of every token reproduces the input.
    pub fn source(&self) -> &str {
        match (self.kind, self.text()) {
            (_, Some(text)) => text,
            (TokenKind::Pipe, None) => "|",
            (_, None) => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "({}, {:?})", self.kind, text),
            None => write!(f, "({}, None)", self.kind),
        }
    }
}
