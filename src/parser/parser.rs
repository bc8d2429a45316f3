//! Parser state and entry points.
//!
//! This module contains the `Parser` struct, which owns the token stream and
//! the cursor into it, and the `parse` functions that drive one expression
//! parse from start to finish.
//!
//! The cursor only moves through `advance` and `expect`. A `Parser` serves a
//! single parse; build a new one per input.

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{binding_power, BindingPower},
    options::ParseOptions,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// Options fixed at construction
    options: ParseOptions,
    /// Number of `parse_expr` calls currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `tokens` with default options.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Parser {
            tokens,
            pos: 0,
            options,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Infix binding power of the current token, `Default` at the end of input.
    pub fn current_binding_power(&self) -> BindingPower {
        self.current_token_kind()
            .map_or(BindingPower::Default, binding_power)
    }

    /// Advances past the current token and returns it.
    ///
    /// Running out of tokens here means an expression was cut short.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                let token = token.clone();
                log::trace!("advance: {} at {}", token, self.pos);
                self.pos += 1;
                Ok(token)
            }
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("expression"),
                },
                self.pos,
            )),
        }
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, `UnexpectedEndOfInput` when no token remains, or
    /// `TokenMismatch` when the current token is of another kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => self.advance(),
            Some(token) => Err(Error::new(
                ErrorImpl::TokenMismatch {
                    expected: expected_kind,
                    received: token.lexeme.clone(),
                },
                self.pos,
            )),
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: format!("`{}`", expected_kind),
                },
                self.pos,
            )),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> usize {
        self.pos
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Current nesting depth of `parse_expr`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Opens one nesting level, or fails with `NestingTooDeep` at the current
    /// token once `max_depth` levels are open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            log::debug!("nesting limit {} reached at {}", self.options.max_depth, self.pos);
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.pos,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses the whole token stream as one expression.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for an empty stream, the root expression when every token was
    /// consumed, or the first error met. Leftover tokens after a complete
    /// expression are an `UnexpectedToken` error.
    pub fn parse(&mut self) -> Result<Option<Expr>, Error> {
        if !self.has_tokens() {
            log::debug!("parse: empty token stream");
            return Ok(None);
        }

        let expr = parse_expr(self, BindingPower::Default)?;

        if let Some(token) = self.current_token() {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.clone(),
                },
                self.pos,
            ));
        }

        log::debug!("parse: {}", expr);
        Ok(Some(expr))
    }
}

/// Parses a stream of tokens into an expression tree with default options.
pub fn parse(tokens: Vec<Token>) -> Result<Option<Expr>, Error> {
    Parser::new(tokens).parse()
}

pub fn parse_with_options(tokens: Vec<Token>, options: ParseOptions) -> Result<Option<Expr>, Error> {
    Parser::with_options(tokens, options).parse()
}
