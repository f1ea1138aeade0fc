//! Lexer for MediaWiki markup.
//!
//! Turns raw wikitext into a lazy stream of [`Token`]s for a markup parser.
//! The lexer never fails: every input, including malformed markup, has a token stream.

pub mod lexer;

pub use lexer::{produce_tokens, tokenize, Token, TokenKind, Tokenizer};
