//! Token cursor and low-level operations.

use std::collections::HashMap;

use super::lexer::{Token, TokenKind, token_text};
use crate::{Error, RawGrammar, Result};

/// Recursive-descent state over a trivia-free token stream.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) raw: RawGrammar,
    /// Block text to synthesized rule name.
    pub(super) blocks: HashMap<String, String>,
    pub(super) block_count: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            raw: RawGrammar::default(),
            blocks: HashMap::new(),
            block_count: 0,
        }
    }

    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> TokenKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    /// Whether the current token is the identifier `keyword`.
    pub(super) fn at_keyword(&self, keyword: &str) -> bool {
        self.at(TokenKind::Ident) && self.current_text() == keyword
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.text_at(self.pos)
    }

    pub(super) fn text_at(&self, index: usize) -> &'src str {
        self.tokens
            .get(index)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn bump(&mut self) -> &'src str {
        let text = self.current_text();
        if !self.eof() {
            self.pos += 1;
        }
        text
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<&'src str> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.error(format!("expected {what}, found {}", self.describe_current())))
    }

    /// Skip tokens through the next top-level `;`.
    pub(super) fn skip_past_semi(&mut self) {
        let mut depth = 0usize;
        while !self.eof() {
            match self.current() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Semi if depth == 0 => {
                    self.pos += 1;
                    return;
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Index of the `)` closing the `(` at `open`.
    pub(super) fn matching_paren(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, token) in self.tokens.iter().enumerate().skip(open) {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Concatenated token texts in `start..=end`, without trivia.
    pub(super) fn joined_text(&self, start: usize, end: usize) -> String {
        (start..=end).map(|i| self.text_at(i)).collect()
    }

    pub(super) fn error(&self, message: String) -> Error {
        Error::Syntax {
            line: self.current_line(),
            message,
        }
    }

    fn current_line(&self) -> usize {
        let offset = self
            .tokens
            .get(self.pos)
            .map_or(self.source.len(), |t| t.span.start);
        self.source[..offset].matches('\n').count() + 1
    }

    fn describe_current(&self) -> String {
        match self.current() {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.current_text()),
        }
    }
}
