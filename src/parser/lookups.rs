use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::{Token, TokenKind}};

use super::{expr::*, parser::Parser};

/// Binding powers from loosest to tightest.
///
/// Only the order matters. Prefix operators share `Call` with indexing and the
/// postfix operators.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    Ternary,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Call,
}

impl BindingPower {
    /// The next looser level; `Default` is its own looser level.
    pub fn looser(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Ternary => BindingPower::Assignment,
            BindingPower::LogicalOr => BindingPower::Ternary,
            BindingPower::LogicalAnd => BindingPower::LogicalOr,
            BindingPower::Equality => BindingPower::LogicalAnd,
            BindingPower::Relational => BindingPower::Equality,
            BindingPower::Additive => BindingPower::Relational,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Call => BindingPower::Multiplicative,
        }
    }

    /// Numeric rank, `Default` = 0; shown in the parse trace.
    pub fn level(self) -> u8 {
        self as u8
    }
}

pub type NUDHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, Token, BindingPower) -> Result<Expr, Error>;

/// Binding power of `kind` in infix position.
///
/// Closing delimiters, `:` and operands are `Default`, which is what stops the
/// parse loop in front of them.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Assignment => BindingPower::Assignment,
        TokenKind::Question => BindingPower::Ternary,
        TokenKind::Or => BindingPower::LogicalOr,
        TokenKind::And => BindingPower::LogicalAnd,
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen
        | TokenKind::OpenBracket
        | TokenKind::PlusPlus
        | TokenKind::MinusMinus => BindingPower::Call,
        TokenKind::Ampersand
        | TokenKind::Colon
        | TokenKind::CloseParen
        | TokenKind::CloseBracket
        | TokenKind::Number
        | TokenKind::Identifier => BindingPower::Default,
    }
}

/// Binding power of `kind` as a prefix operator, if it is one.
pub fn prefix_binding_power(kind: TokenKind) -> Option<BindingPower> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Ampersand
        | TokenKind::PlusPlus
        | TokenKind::MinusMinus => Some(BindingPower::Call),
        _ => None,
    }
}

/// Prefix (null denotation) rule for a token starting an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        TokenKind::Number => Some(parse_number_expr),
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Ampersand
        | TokenKind::PlusPlus
        | TokenKind::MinusMinus => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::Slash
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::And
        | TokenKind::Or
        | TokenKind::Question
        | TokenKind::Colon
        | TokenKind::CloseParen
        | TokenKind::OpenBracket
        | TokenKind::CloseBracket => None,
    }
}

/// Infix (left denotation) rule for a token following a complete operand.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::And
        | TokenKind::Or => Some(parse_binary_expr),
        TokenKind::Assignment => Some(parse_assignment_expr),
        TokenKind::Question => Some(parse_ternary_expr),
        TokenKind::OpenBracket => Some(parse_index_expr),
        TokenKind::PlusPlus | TokenKind::MinusMinus => Some(parse_postfix_expr),
        // `(` binds tightly but there is no call syntax.
        TokenKind::OpenParen
        | TokenKind::Ampersand
        | TokenKind::Colon
        | TokenKind::CloseParen
        | TokenKind::CloseBracket
        | TokenKind::Number
        | TokenKind::Identifier => None,
    }
}
