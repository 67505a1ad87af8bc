//! Lexer for the grammar-definition notation.
//!
//! Produces span-based tokens; text is sliced from source only when needed.
//! Brace and bracket blocks are lexed as single opaque tokens because their
//! contents (target-language code, argument lists, character sets) carry no
//! grammar structure.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters coalesce into one `Garbage` token.
//! Trivia (whitespace, comments) is dropped before the parser sees it.

use std::ops::Range;

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// `{ ... }` with balanced nesting; also `{ ... }?` predicates minus the `?`.
    #[token("{", balanced_braces)]
    ActionBlock,

    /// `[ ... ]` argument, return, locals or character-set block.
    #[token("[", balanced_brackets)]
    BracketBlock,

    #[token("::")]
    ColonColon,

    #[token(":")]
    Colon,

    #[token(";")]
    Semi,

    #[token("|")]
    Pipe,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("=")]
    Assign,

    #[token("+=")]
    PlusAssign,

    #[token("#")]
    Pound,

    #[token("..")]
    Range,

    #[token(".")]
    Dot,

    #[token("~")]
    Tilde,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    #[token("->")]
    Arrow,

    #[token("@")]
    At,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    StringLiteral,

    /// Rule names, token names and keywords; keywords are matched by text.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters.
    Garbage,

    /// End of input; never produced by the lexer.
    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Tokens that may close an element sequence.
    pub fn ends_alternative(self) -> bool {
        matches!(
            self,
            TokenKind::Pipe | TokenKind::Semi | TokenKind::RParen | TokenKind::Pound | TokenKind::Eof
        )
    }
}

fn balanced_braces(lex: &mut Lexer<TokenKind>) -> bool {
    balanced(lex, '{', '}')
}

fn balanced_brackets(lex: &mut Lexer<TokenKind>) -> bool {
    balanced(lex, '[', ']')
}

/// Extend the current token to the delimiter that closes the opening one.
///
/// Quoted characters and escapes inside the block do not count toward nesting.
fn balanced(lex: &mut Lexer<TokenKind>, open: char, close: char) -> bool {
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in lex.remainder().char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') if open == '{' => quote = Some('"'),
            (None, '\'') if open == '{' => quote = Some('\''),
            (None, c) if c == open => depth += 1,
            (None, c) if c == close => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(i + ch.len_utf8());
                    return true;
                }
            }
            _ => {}
        }
    }

    false
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into significant tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Drops trivia
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..lexer.span().start));
                }
                if !kind.is_trivia() {
                    tokens.push(Token::new(kind, lexer.span()));
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}
