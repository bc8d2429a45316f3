//! Utility macros for the parser.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed symbols
//!
//! These macros reduce boilerplate in the lexer and in hand-built token streams.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text (anything `String::from` accepts)
///
/// # Example
///
/// ```
/// use expr_parser::{lexer::tokens::TokenKind, MK_TOKEN};
///
/// let token = MK_TOKEN!(TokenKind::Number, "42");
/// assert_eq!(token.lexeme, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: String::from($lexeme),
        }
    };
}

/// Creates a default lexer handler for a fixed-symbol token.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the symbol's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal symbol (used for the lexeme and its length)
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer<'_>, _regex: &::regex::Regex| {
            lexer.push($crate::MK_TOKEN!($kind, $value));
            lexer.advance_n($value.len());
        }
    };
}
