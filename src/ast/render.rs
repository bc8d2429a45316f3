//! Canonical text form of an expression tree.
//!
//! `(op child ...)` for prefix, binary and ternary nodes, `(operand op)` for
//! postfix nodes, bare text for leaves.

use std::fmt::Display;

use super::ast::Expr;

/// Significant digits used for numbers, matching a default C++ stream.
const SIGNIFICANT_DIGITS: usize = 6;

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", format_number(*value)),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::PrefixUnary { operator, operand } => write!(f, "({} {})", operator, operand),
            Expr::PostfixUnary { operator, operand } => write!(f, "({} {})", operand, operator),
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),
            Expr::Ternary {
                operator,
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "({} {} {} {})",
                operator, condition, then_branch, else_branch
            ),
        }
    }
}

/// Formats `value` the way `printf("%g")` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the target precision first decides between fixed and exponent form.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}

fn strip_trailing_zeros(digits: &str) -> String {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        digits.to_string()
    }
}
