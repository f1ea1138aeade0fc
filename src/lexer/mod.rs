//! Support for splitting wikitext into tokens.
//!
//! The lexer is pull-based: [`Tokenizer`] reads characters only as far as it needs
//! to decide the boundary of the next token.
//! Every stream ends with exactly one [`TokenKind::EndOfInput`];
//! pulling past it returns `None`.

mod class;
mod token;
mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Start tokenizing the input.
///
/// No characters are read until the first token is requested.
pub fn produce_tokens<I>(input: I) -> Tokenizer<I::IntoIter>
where
    I: IntoIterator<Item = char>,
{
    Tokenizer::new(input.into_iter())
}

/// Split the whole input into tokens, including the trailing EndOfInput.
pub fn tokenize(input: &str) -> Vec<Token> {
    produce_tokens(input.chars()).collect()
}
