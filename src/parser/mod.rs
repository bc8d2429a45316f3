//! Parser module for building an expression tree.
//!
//! This module contains the precedence-climbing (Pratt) parser that turns a
//! token sequence into a single `Expr`. It handles:
//!
//! - Prefix operators, grouping and literals through NUD (null denotation) rules
//! - Binary, assignment, ternary, indexing and postfix operators through LED
//!   (left denotation) rules
//! - Binding powers that decide precedence and associativity
//! - Stop-at-first-error reporting
//!
//! The rule registries and the binding power table are plain `match` functions
//! over `TokenKind`, so they are fixed at compile time.

pub mod expr;
pub mod lookups;
pub mod options;
pub mod parser;

#[cfg(test)]
mod tests;
