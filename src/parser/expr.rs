//! Precedence-climbing loop and the prefix/infix rules it dispatches to.
//!
//! Associativity is decided entirely by the binding power each rule passes to
//! its recursive `parse_expr` call:
//!
//! - left-associative binary operators recurse at their own power, so an equal
//!   operator to the right stops the recursion and folds into the outer loop
//! - assignment recurses one level looser, so a second `=` is absorbed by the
//!   recursive call and the chain nests to the right
//! - prefix operators recurse just below `Call`, so postfix and indexing still
//!   reach the innermost operand while every binary operator stays outside
//! - delimited sub-expressions (`( )`, `[ ]`, both ternary branches) restart at
//!   `Default`

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binding_power, led_lookup, nud_lookup, prefix_binding_power, BindingPower},
    options::NumberLiterals,
    parser::Parser,
};

/// Parses one expression whose infix operators all bind tighter than `bp`.
///
/// Stops in front of the first token that binds no tighter than `bp` or has no
/// infix rule; that token is left for the caller. This includes `(` in infix
/// position: it binds at `Call` but has no rule, and it is *not* consumed, so
/// the enclosing rule or `Parser::parse` reports it. `x ? a ( : b` therefore
/// fails with `TokenMismatch` at index 3 instead of parsing as `(? x a b)`.
///
/// Each call opens one nesting level on the parser; past
/// `ParseOptions::max_depth` levels it fails with `NestingTooDeep`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = climb(parser, bp);
    parser.leave_nesting();

    result
}

fn climb(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let position = parser.get_position();
    let token = parser.advance()?;

    // First parse NUD
    let nud = match nud_lookup(token.kind) {
        Some(nud) => nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    token: token.lexeme,
                },
                position,
            ))
        }
    };

    log::trace!("parse_expr({:?}/{}): prefix {}", bp, bp.level(), token);
    let mut left = nud(parser, token)?;

    // While the next token binds tighter than bp, fold it into lhs
    while parser.current_binding_power() > bp {
        let Some(kind) = parser.current_token_kind() else {
            break;
        };
        let Some(led) = led_lookup(kind) else {
            log::debug!("parse_expr({:?}): no infix rule for {}, stopping", bp, kind);
            break;
        };

        let operator = parser.advance()?;
        let operator_bp = binding_power(kind);
        log::trace!(
            "parse_expr({:?}/{}): infix {} at {}",
            bp,
            bp.level(),
            operator,
            operator_bp.level()
        );
        left = led(parser, left, operator, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_number_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let value = match parser.options().number_literals {
        NumberLiterals::Lenient => parse_number_lenient(&token.lexeme),
        NumberLiterals::Strict => match token.lexeme.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme,
                    },
                    parser.get_position() - 1,
                ))
            }
        },
    };

    Ok(Expr::Number(value))
}

/// Longest leading decimal float literal in `lexeme`, or `0` if there is none.
///
/// Follows the decimal grammar of `strtod` only: optional sign, digits with an
/// optional fraction, and an exponent when digits follow the `e`. Hex literals
/// stop after their leading `0`.
fn parse_number_lenient(lexeme: &str) -> f64 {
    let trimmed = lexeme.trim_start();
    let len = decimal_prefix_len(trimmed.as_bytes());

    trimmed[..len].parse::<f64>().unwrap_or(0.0)
}

/// Length of the longest decimal float literal at the start of `bytes`.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    end
}

pub fn parse_identifier_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Identifier(token.lexeme))
}

pub fn parse_prefix_expr(parser: &mut Parser, operator: Token) -> Result<Expr, Error> {
    let bp = match prefix_binding_power(operator.kind) {
        Some(bp) => bp,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    token: operator.lexeme,
                },
                parser.get_position() - 1,
            ))
        }
    };

    let operand = parse_expr(parser, bp.looser())?;

    Ok(Expr::prefix(operator.kind, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser, _open: Token) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    operator: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator.kind, left, right))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    operator: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let value = parse_expr(parser, bp.looser())?;

    Ok(Expr::binary(operator.kind, left, value))
}

pub fn parse_ternary_expr(
    parser: &mut Parser,
    condition: Expr,
    operator: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let then_branch = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    let else_branch = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::ternary(operator.kind, condition, then_branch, else_branch))
}

pub fn parse_index_expr(
    parser: &mut Parser,
    base: Expr,
    operator: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::binary(operator.kind, base, index))
}

pub fn parse_postfix_expr(
    _parser: &mut Parser,
    operand: Expr,
    operator: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    Ok(Expr::postfix(operator.kind, operand))
}

#[cfg(test)]
mod tests {
    use super::{decimal_prefix_len, parse_number_lenient};

    #[test]
    fn test_lenient_number_prefix() {
        assert_eq!(parse_number_lenient("42"), 42.0);
        assert_eq!(parse_number_lenient("3.5abc"), 3.5);
        assert_eq!(parse_number_lenient("1e"), 1.0);
        assert_eq!(parse_number_lenient("  7"), 7.0);
    }

    #[test]
    fn test_lenient_number_fallback() {
        assert_eq!(parse_number_lenient("abc"), 0.0);
        assert_eq!(parse_number_lenient(""), 0.0);
        assert_eq!(parse_number_lenient("-"), 0.0);
        assert_eq!(parse_number_lenient("."), 0.0);
    }

    #[test]
    fn test_lenient_number_is_decimal_only() {
        // Only the leading `0` of a hex literal is a decimal prefix.
        assert_eq!(parse_number_lenient("0x10"), 0.0);
        assert_eq!(parse_number_lenient("inf"), 0.0);
    }

    #[test]
    fn test_lenient_number_dangling_exponent() {
        assert_eq!(parse_number_lenient("1e+"), 1.0);
        assert_eq!(parse_number_lenient("2E-x"), 2.0);
        assert_eq!(parse_number_lenient("-2.5e3x"), -2500.0);
        assert_eq!(parse_number_lenient("1.e2"), 100.0);
        assert_eq!(parse_number_lenient(".5."), 0.5);
    }

    #[test]
    fn test_decimal_prefix_len() {
        assert_eq!(decimal_prefix_len(b"3.5abc"), 3);
        assert_eq!(decimal_prefix_len(b"+12e3"), 5);
        assert_eq!(decimal_prefix_len(b"1e"), 1);
        assert_eq!(decimal_prefix_len(b"e5"), 0);
        assert_eq!(decimal_prefix_len(b"-.e1"), 0);
    }
}
