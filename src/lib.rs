#![allow(clippy::module_inception)]

//! Precedence-climbing parser for C-like expressions.
//!
//! Tokens go in, a single [`ast::ast::Expr`] tree comes out. The engine lives in
//! [`parser`]; [`lexer`] is a small tokenizer for hosts that don't bring their own.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Expr;
pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::tokens::{Token, TokenKind};
pub use parser::options::{NumberLiterals, ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::parser::{parse, parse_with_options, Parser};

/// Tokenizes `source` and parses the result in one go.
pub fn parse_source(source: &str, options: ParseOptions) -> Result<Option<Expr>, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parse_with_options(tokens, options)
}
