//! Lexical analysis module.
//!
//! The parser consumes pre-lexed tokens and never calls into this module.
//! It exists for hosts without a lexer of their own, and for the CLI:
//!
//! - Token kinds and the `Token` type shared with the parser
//! - Tokenization of expression text using anchored regex patterns
//! - Whitespace skipping and byte offsets for unrecognised characters

pub mod lexer;
pub mod tokens;
