//! The tokenizer state machine.

use std::iter::{Fuse, FusedIterator};

use super::class::{is_newline, Class};
use super::{Token, TokenKind};

/// Pull-based tokenizer over a character iterator.
///
/// Holds at most one character that has been read but not yet classified,
/// plus the text accumulated since the last token.
/// After EndOfInput has been returned, the iterator is exhausted.
pub struct Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    input: Fuse<I>,
    lookahead: Option<char>,
    text: String,
    finished: bool,
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(input: I) -> Self {
        Tokenizer {
            input: input.fuse(),
            lookahead: None,
            text: String::new(),
            finished: false,
        }
    }

    /// The next unclassified character, reading one from the input if none is held.
    fn peek(&mut self) -> Option<char> {
        if self.lookahead.is_none() {
            self.lookahead = self.input.next();
        }
        self.lookahead
    }

    /// Consume the held character, if it is `want`.
    fn take_if(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.lookahead = None;
            true
        } else {
            false
        }
    }

    /// After a `{`: table open, or a lone curly bracket.
    fn curly(&mut self) -> Token {
        if self.take_if('|') {
            Token::fixed(TokenKind::TableOpen)
        } else {
            Token::fixed(TokenKind::CurlyOpen)
        }
    }

    /// After a `|`: row separator, table close, or a pipe.
    fn pipe(&mut self) -> Token {
        if self.take_if('-') {
            Token::fixed(TokenKind::TableRowSeparator)
        } else if self.take_if('}') {
            Token::fixed(TokenKind::TableClose)
        } else {
            Token::fixed(TokenKind::Pipe)
        }
    }

    /// Consume the rest of a whitespace run starting with `first`.
    fn whitespace(&mut self, first: char) -> Token {
        let mut run = String::from(first);
        let mut newlines = usize::from(is_newline(first));
        while let Some(c) = self.peek() {
            if Class::of(c) != Class::Whitespace {
                break;
            }
            run.push(c);
            newlines += usize::from(is_newline(c));
            self.lookahead = None;
        }

        if newlines > 1 {
            Token::new(TokenKind::NewParagraph, run)
        } else {
            Token::new(TokenKind::Whitespace, run)
        }
    }
}

fn emit(token: Token) -> Option<Token> {
    tracing::trace!("token {}", token);
    Some(token)
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // Literal text runs until the next character that starts some other token.
        while let Some(c) = self.peek() {
            if Class::of(c) != Class::Text {
                break;
            }
            self.text.push(c);
            self.lookahead = None;
        }
        if !self.text.is_empty() {
            // The character that ended the text stays held for the next pull.
            let text = std::mem::take(&mut self.text);
            return emit(Token::new(TokenKind::Text, text));
        }

        let Some(c) = self.lookahead.take() else {
            self.finished = true;
            tracing::trace!("end of input");
            return emit(Token::fixed(TokenKind::EndOfInput));
        };
        let token = match Class::of(c) {
            Class::Punctuation(kind) => Token::fixed(kind),
            Class::CurlyOpen => self.curly(),
            Class::Pipe => self.pipe(),
            Class::Whitespace => self.whitespace(c),
            Class::Text => unreachable!("internal error: text character {:?} left unconsumed", c),
        };
        emit(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<I> FusedIterator for Tokenizer<I> where I: Iterator<Item = char> {}
