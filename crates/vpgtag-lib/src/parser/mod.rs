//! Text front end for ANTLR-style grammar definitions.
//!
//! # Architecture
//!
//! - `lexer` - logos tokens; action and bracket blocks lexed as opaque units
//! - `core` - token cursor
//! - `grammar` - rule productions building a [`RawGrammar`]
//!
//! Parenthesized blocks become synthesized rules named `_new_rule_N`.
//! Textually identical blocks share one rule.

mod core;
mod grammar;
mod lexer;

#[cfg(test)]
mod lexer_tests;

pub use lexer::{Token, TokenKind, lex, token_text};

use crate::{RawGrammar, Result};

/// Parse grammar-definition text into a name-level grammar.
///
/// The first parser rule is the start symbol.
pub fn parse_grammar(source: &str) -> Result<RawGrammar> {
    let tokens = lex(source);
    let raw = core::Parser::new(source, tokens).parse()?;
    tracing::debug!(
        rules = raw.rules.len(),
        terminals = raw.terminals.len(),
        "parsed grammar definition"
    );
    Ok(raw)
}
