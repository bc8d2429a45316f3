//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The binding power table and its ordering
//! - The prefix and infix registries
//! - Cursor behaviour of `Parser`
//! - Individual rules through `parse_expr`

use std::sync::Once;

use pretty_assertions::assert_eq;

use super::{
    expr::parse_expr,
    lookups::{binding_power, led_lookup, nud_lookup, prefix_binding_power, BindingPower},
    options::{ParseOptions, DEFAULT_MAX_DEPTH},
    parser::{parse, parse_with_options, Parser},
};
use crate::{
    ast::ast::Expr,
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    MK_TOKEN,
};

static INIT: Once = Once::new();

fn setup_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn render(source: &str) -> String {
    setup_test_logger();
    let tokens = tokenize(source).unwrap();
    parse(tokens).unwrap().unwrap().to_string()
}

#[test]
fn test_binding_power_order() {
    let levels = [
        BindingPower::Default,
        BindingPower::Assignment,
        BindingPower::Ternary,
        BindingPower::LogicalOr,
        BindingPower::LogicalAnd,
        BindingPower::Equality,
        BindingPower::Relational,
        BindingPower::Additive,
        BindingPower::Multiplicative,
        BindingPower::Call,
    ];

    for pair in levels.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[1].looser(), pair[0]);
        assert_eq!(pair[1].looser().level() + 1, pair[1].level());
    }
    assert_eq!(BindingPower::Default.looser(), BindingPower::Default);
    assert_eq!(BindingPower::Call.level(), 9);
}

#[test]
fn test_binding_power_table() {
    assert_eq!(binding_power(TokenKind::Assignment), BindingPower::Assignment);
    assert_eq!(binding_power(TokenKind::Question), BindingPower::Ternary);
    assert_eq!(binding_power(TokenKind::Or), BindingPower::LogicalOr);
    assert_eq!(binding_power(TokenKind::And), BindingPower::LogicalAnd);
    assert_eq!(binding_power(TokenKind::NotEquals), BindingPower::Equality);
    assert_eq!(binding_power(TokenKind::GreaterEquals), BindingPower::Relational);
    assert_eq!(binding_power(TokenKind::Minus), BindingPower::Additive);
    assert_eq!(binding_power(TokenKind::Slash), BindingPower::Multiplicative);
    assert_eq!(binding_power(TokenKind::OpenBracket), BindingPower::Call);
    assert_eq!(binding_power(TokenKind::MinusMinus), BindingPower::Call);
}

#[test]
fn test_terminators_have_no_binding_power() {
    for kind in [
        TokenKind::Colon,
        TokenKind::CloseParen,
        TokenKind::CloseBracket,
        TokenKind::Number,
        TokenKind::Identifier,
    ] {
        assert_eq!(binding_power(kind), BindingPower::Default);
        assert!(led_lookup(kind).is_none());
    }
}

#[test]
fn test_prefix_binding_power() {
    for kind in [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Ampersand,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
    ] {
        assert_eq!(prefix_binding_power(kind), Some(BindingPower::Call));
        assert!(nud_lookup(kind).is_some());
    }
    assert_eq!(prefix_binding_power(TokenKind::Slash), None);
}

#[test]
fn test_registries() {
    assert!(nud_lookup(TokenKind::Number).is_some());
    assert!(nud_lookup(TokenKind::Identifier).is_some());
    assert!(nud_lookup(TokenKind::OpenParen).is_some());
    assert!(nud_lookup(TokenKind::CloseParen).is_none());
    assert!(nud_lookup(TokenKind::Question).is_none());

    assert!(led_lookup(TokenKind::Question).is_some());
    assert!(led_lookup(TokenKind::OpenBracket).is_some());
    assert!(led_lookup(TokenKind::Assignment).is_some());
    assert!(led_lookup(TokenKind::OpenParen).is_none());
}

#[test]
fn test_parser_cursor() {
    let mut parser = Parser::new(vec![
        MK_TOKEN!(TokenKind::Identifier, "a"),
        MK_TOKEN!(TokenKind::CloseParen, ")"),
    ]);

    assert!(parser.has_tokens());
    assert_eq!(parser.current_binding_power(), BindingPower::Default);
    assert_eq!(parser.advance().unwrap().lexeme, "a");
    assert_eq!(parser.get_position(), 1);

    let error = parser.expect(TokenKind::CloseBracket).unwrap_err();
    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(parser.get_position(), 1);

    assert_eq!(parser.expect(TokenKind::CloseParen).unwrap().lexeme, ")");
    assert!(!parser.has_tokens());
    assert!(parser.remaining().is_empty());

    let error = parser.expect(TokenKind::CloseParen).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(parser.advance().unwrap_err().get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_parse_expr_leaves_terminator() {
    setup_test_logger();
    let mut parser = Parser::new(tokenize("a + b ] c").unwrap());

    let expr = parse_expr(&mut parser, BindingPower::Default).unwrap();

    assert_eq!(expr.to_string(), "(+ a b)");
    assert_eq!(parser.current_token_kind(), Some(TokenKind::CloseBracket));
    assert_eq!(parser.remaining().len(), 2);
}

#[test]
fn test_parse_expr_respects_min_binding_power() {
    let mut parser = Parser::new(tokenize("a * b + c").unwrap());

    let expr = parse_expr(&mut parser, BindingPower::Additive).unwrap();

    assert_eq!(expr.to_string(), "(* a b)");
    assert_eq!(parser.current_token_kind(), Some(TokenKind::Plus));
}

#[test]
fn test_rule_less_infix_token_is_not_consumed() {
    let mut parser = Parser::new(tokenize("a (b)").unwrap());

    let expr = parse_expr(&mut parser, BindingPower::Default).unwrap();

    assert_eq!(expr, Expr::Identifier("a".to_string()));
    assert_eq!(parser.current_token_kind(), Some(TokenKind::OpenParen));

    let error = parse(tokenize("a (b)").unwrap()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position(), 1);
}

#[test]
fn test_rule_less_infix_token_inside_ternary() {
    let error = parse(tokenize("x ? a ( : b").unwrap()).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TokenMismatch {
            expected: TokenKind::Colon,
            received: "(".to_string()
        }
    );
    assert_eq!(error.get_position(), 3);
}

#[test]
fn test_left_associative_levels() {
    assert_eq!(render("a || b || c"), "(|| (|| a b) c)");
    assert_eq!(render("a && b && c"), "(&& (&& a b) c)");
    assert_eq!(render("a == b != c"), "(!= (== a b) c)");
    assert_eq!(render("a < b >= c"), "(>= (< a b) c)");
    assert_eq!(render("a * b / c"), "(/ (* a b) c)");
}

#[test]
fn test_precedence_between_levels() {
    assert_eq!(render("a || b && c"), "(|| a (&& b c))");
    assert_eq!(render("a == b < c"), "(== a (< b c))");
    assert_eq!(render("a < b + c"), "(< a (+ b c))");
    assert_eq!(render("a + b * c"), "(+ a (* b c))");
    assert_eq!(render("a = b || c ? d : e"), "(= a (? (|| b c) d e))");
}

#[test]
fn test_ternary_else_nests_right() {
    assert_eq!(render("a ? b : c ? d : e"), "(? a b (? c d e))");
}

#[test]
fn test_assignment_inside_ternary_branches() {
    assert_eq!(render("a ? b = 1 : c = 2"), "(? a (= b 1) (= c 2))");
}

#[test]
fn test_grouping_has_no_node() {
    assert_eq!(render("((a))"), "a");
    assert_eq!(render("(a + b) * c"), "(* (+ a b) c)");
}

#[test]
fn test_prefix_binds_tighter_than_binary() {
    assert_eq!(render("-a * b"), "(* (- a) b)");
    assert_eq!(render("&a[0]"), "(& ([ a 0))");
    assert_eq!(render("++a++"), "(++ (a ++))");
}

#[test]
fn test_postfix_chain() {
    assert_eq!(render("a++--"), "((a ++) --)");
}

#[test]
fn test_number_literals() {
    assert_eq!(render("1.5 + 2"), "(+ 1.5 2)");
    assert_eq!(render("1e6"), "1e+06");
}

#[test]
fn test_lenient_numbers() {
    let tokens = vec![MK_TOKEN!(TokenKind::Number, "12abc")];

    assert_eq!(parse(tokens).unwrap(), Some(Expr::Number(12.0)));
}

#[test]
fn test_strict_numbers() {
    let tokens = vec![
        MK_TOKEN!(TokenKind::Identifier, "a"),
        MK_TOKEN!(TokenKind::Plus, "+"),
        MK_TOKEN!(TokenKind::Number, "1.2.3"),
    ];

    let error = parse_with_options(tokens, ParseOptions::strict()).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position(), 2);
}

#[test]
fn test_error_positions() {
    let error = parse(tokenize("a + )").unwrap()).unwrap_err();
    assert_eq!(error.get_error_name(), "NoPrefixRule");
    assert_eq!(error.get_position(), 2);

    let error = parse(tokenize("a[1").unwrap()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.get_position(), 3);

    let error = parse(tokenize("a ? b ] c").unwrap()).unwrap_err();
    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(error.get_position(), 3);
}

#[test]
fn test_default_max_depth() {
    assert_eq!(ParseOptions::default().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(ParseOptions::strict().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(ParseOptions::strict().with_max_depth(8).max_depth, 8);
}

#[test]
fn test_nesting_within_limit() {
    setup_test_logger();
    let options = ParseOptions::default().with_max_depth(3);

    let expr = parse_with_options(tokenize("--a").unwrap(), options).unwrap().unwrap();
    assert_eq!(expr.to_string(), "(- (- a))");

    let expr = parse_with_options(tokenize("((a))").unwrap(), options).unwrap().unwrap();
    assert_eq!(expr.to_string(), "a");
}

#[test]
fn test_nesting_past_limit() {
    let options = ParseOptions::default().with_max_depth(3);

    let error = parse_with_options(tokenize("---a").unwrap(), options).unwrap_err();
    assert_eq!(error.get_internal_error(), &ErrorImpl::NestingTooDeep { limit: 3 });
    assert_eq!(error.get_position(), 3);

    let error = parse_with_options(tokenize("a ? b : (((c)))").unwrap(), options).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position(), 6);
}

#[test]
fn test_nesting_depth_is_released() {
    let mut parser = Parser::with_options(
        tokenize("a + (b) * -c").unwrap(),
        ParseOptions::default().with_max_depth(4),
    );

    assert!(parser.parse().unwrap().is_some());
    assert_eq!(parser.depth(), 0);

    let mut parser = Parser::with_options(
        tokenize("--a").unwrap(),
        ParseOptions::default().with_max_depth(2),
    );

    assert!(parser.parse().is_err());
    assert_eq!(parser.depth(), 0);
}
