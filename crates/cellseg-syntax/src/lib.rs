//! # cellseg-syntax
//!
//! A lossless, language-agnostic tokenizer built on [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! The engine's leaf builder consumes this token stream:
//!
//! ```text
//! Source Text → Lexer → Tokens → LeafChain::build → Leaf chain
//!               (Logos)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cellseg_syntax::{lex, TokenKind};
//!
//! let tokens = lex("a {\n}");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[4].kind, TokenKind::RBrace);
//! ```

pub mod lexer;

pub use lexer::{Token, TokenKind, lex};
