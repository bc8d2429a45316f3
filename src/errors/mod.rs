//! Error types and error handling for the parser.
//!
//! This module defines the error types used by the lexer and the parser.
//! It includes:
//!
//! - An error structure carrying the token index (or byte offset) of the failure
//! - Specific error variants for each way an expression can be malformed
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
