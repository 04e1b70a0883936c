//! # Lexer - Tokenizing Source Buffers
//!
//! Breaks source text into tokens using the [Logos] lexer generator. The
//! token stream is what the engine's leaf builder segments into leaves: every
//! non-trivia token becomes one leaf, and the trivia in front of it becomes
//! that leaf's leading whitespace.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token**. Nothing is
//! skipped, so token spans tile the input and leaf offsets line up with the
//! document the engine measures lines against:
//!
//! ```
//! use cellseg_syntax::lexer::lex;
//!
//! let input = "fn main() {\n\tlet x = 1;\n}\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are kept language-agnostic. Brackets and separators get their own
//! kinds because layout cares about them (a lone `}` ends a code block);
//! double-quoted strings are one token so that tabs and spaces inside them
//! stay part of the leaf text; everything else is grouped into `Text` runs.

use std::ops::Range;

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs, form feeds)
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    /// Double-quoted string literal on a single line
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    Str,

    /// Anything not matched by other rules
    #[regex(r#"[^\s{}()\[\];,"]+"#)]
    Text,
}

impl TokenKind {
    /// Whitespace and line endings: the material between leaves.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}

/// A lexed token with its kind, text slice and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        // Logos error means an unrecognized sequence (e.g. an unterminated
        // string quote) - keep it as text.
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push(Token { kind, text, span });
    }

    tokens
}
