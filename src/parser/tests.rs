//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Identifiers, negation and grouping
//! - Equal precedence, left-associative binary operators
//! - Assignments
//! - Malformed input

use test_log::test;

use crate::{
    ast::ast::{BinaryOperator, Expr, UnaryOperator},
    errors::errors::ErrorImpl,
    registry::registry::IdentifierRegistry,
};

use super::{
    lookups::{create_token_lookups, BindingPower},
    parser::{parse, Parser},
};

fn parse_ok(source: &str) -> (Expr, IdentifierRegistry) {
    let mut registry = IdentifierRegistry::new();
    let expr = parse(source, &mut registry).unwrap();
    (expr, registry)
}

fn parse_err(source: &str) -> ErrorImpl {
    let mut registry = IdentifierRegistry::new();
    parse(source, &mut registry)
        .unwrap_err()
        .get_internal_error()
        .clone()
}

fn binary_parts(expr: &Expr) -> (BinaryOperator, &Expr, &Expr) {
    match expr {
        Expr::Binary {
            operator,
            left,
            right,
            ..
        } => (*operator, &**left, &**right),
        other => panic!("expected binary expression, found {:?}", other),
    }
}

fn identifier_name(expr: &Expr) -> &str {
    match expr {
        Expr::Identifier { name, .. } => name,
        other => panic!("expected identifier, found {:?}", other),
    }
}

#[test]
fn test_parse_identifier() {
    let (expr, registry) = parse_ok("p");

    assert_eq!(identifier_name(&expr), "p");
    assert_eq!(expr.get_span().start.0, 0);
    assert_eq!(expr.get_span().end.0, 1);
    assert_eq!(registry.names(), ["p"]);
}

#[test]
fn test_parse_negation() {
    let (expr, _) = parse_ok("~~p");

    match expr {
        Expr::Unary {
            operator: UnaryOperator::Not,
            operand,
            ..
        } => match *operand {
            Expr::Unary {
                operator: UnaryOperator::Not,
                operand,
                ..
            } => assert_eq!(identifier_name(&operand), "p"),
            other => panic!("expected nested negation, found {:?}", other),
        },
        other => panic!("expected negation, found {:?}", other),
    }
}

#[test]
fn test_parse_negation_binds_tighter_than_binary() {
    let (expr, _) = parse_ok("~p ∧ q");
    let (operator, left, right) = binary_parts(&expr);

    assert_eq!(operator, BinaryOperator::And);
    assert!(matches!(left, Expr::Unary { .. }));
    assert_eq!(identifier_name(right), "q");
}

#[test]
fn test_parse_binary_operators() {
    for (source, expected) in [
        ("p ∧ q", BinaryOperator::And),
        ("p ∨ q", BinaryOperator::Or),
        ("p ⇒ q", BinaryOperator::Implies),
    ] {
        let (expr, registry) = parse_ok(source);
        let (operator, left, right) = binary_parts(&expr);

        assert_eq!(operator, expected);
        assert_eq!(identifier_name(left), "p");
        assert_eq!(identifier_name(right), "q");
        assert_eq!(registry.names(), ["p", "q"]);
    }
}

#[test]
fn test_parse_mixed_operators_are_left_associative() {
    let (expr, _) = parse_ok("p ∧ q ∨ r");
    let (operator, left, right) = binary_parts(&expr);

    assert_eq!(operator, BinaryOperator::Or);
    assert_eq!(identifier_name(right), "r");

    let (operator, left, right) = binary_parts(left);
    assert_eq!(operator, BinaryOperator::And);
    assert_eq!(identifier_name(left), "p");
    assert_eq!(identifier_name(right), "q");
}

#[test]
fn test_parse_implication_is_left_associative() {
    let (expr, _) = parse_ok("p ⇒ q ⇒ r");
    let (_, left, right) = binary_parts(&expr);

    assert!(matches!(left, Expr::Binary { .. }));
    assert_eq!(identifier_name(right), "r");
}

#[test]
fn test_parse_grouping() {
    let (expr, registry) = parse_ok("p ∧ (q ∨ r)");
    let (operator, left, right) = binary_parts(&expr);

    assert_eq!(operator, BinaryOperator::And);
    assert_eq!(identifier_name(left), "p");
    match right {
        Expr::Grouped { inner, span } => {
            assert_eq!(binary_parts(inner).0, BinaryOperator::Or);
            assert_eq!(span.start.0, 6);
        }
        other => panic!("expected group, found {:?}", other),
    }
    assert_eq!(registry.names(), ["p", "q", "r"]);
    assert_eq!(expr.to_string(), "p ∧ (q ∨ r)");
}

#[test]
fn test_parse_assignment() {
    let (expr, registry) = parse_ok("p = q ∧ r");

    match &expr {
        Expr::Assignment { target, value, .. } => {
            assert_eq!(identifier_name(target), "p");
            assert_eq!(binary_parts(value).0, BinaryOperator::And);
        }
        other => panic!("expected assignment, found {:?}", other),
    }
    assert_eq!(expr.get_node_name(), "Assignment");
    assert_eq!(registry.names(), ["p", "q", "r"]);
}

#[test]
fn test_parse_assignment_is_right_associative() {
    let (expr, _) = parse_ok("p = q = r");

    match expr {
        Expr::Assignment { target, value, .. } => {
            assert_eq!(identifier_name(&target), "p");
            assert!(matches!(*value, Expr::Assignment { .. }));
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn test_parse_assignment_inside_group() {
    let (expr, _) = parse_ok("(p = q)");

    match expr {
        Expr::Grouped { inner, .. } => assert!(matches!(*inner, Expr::Assignment { .. })),
        other => panic!("expected group, found {:?}", other),
    }
}

#[test]
fn test_parse_assignment_requires_identifier_target() {
    assert_eq!(
        parse_err("p ∧ q = r"),
        ErrorImpl::UnexpectedToken {
            token: "=".to_string()
        }
    );
    assert_eq!(
        parse_err("~p = q"),
        ErrorImpl::UnexpectedToken {
            token: "=".to_string()
        }
    );
    assert_eq!(parse_err("(p ∧ q = r)"), ErrorImpl::UnmatchedParenthesis);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_err(""), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(parse_err("   "), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_parse_dangling_operator() {
    assert_eq!(parse_err("p ∧"), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(parse_err("~"), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(parse_err("p ="), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_parse_operator_in_primary_position() {
    assert_eq!(
        parse_err("∧ p"),
        ErrorImpl::UnexpectedToken {
            token: "∧".to_string()
        }
    );
    assert_eq!(
        parse_err(")"),
        ErrorImpl::UnexpectedToken {
            token: ")".to_string()
        }
    );
    assert_eq!(
        parse_err("p ∨ ∨ q"),
        ErrorImpl::UnexpectedToken {
            token: "∨".to_string()
        }
    );
}

#[test]
fn test_parse_adjacent_identifiers() {
    let mut registry = IdentifierRegistry::new();
    let error = parse("p q", &mut registry).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "q".to_string()
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_unmatched_parenthesis() {
    let mut registry = IdentifierRegistry::new();
    let error = parse("(p", &mut registry).unwrap_err();

    assert_eq!(error.get_internal_error(), &ErrorImpl::UnmatchedParenthesis);
    assert_eq!(error.get_position().0, 2);

    assert_eq!(parse_err("(p q)"), ErrorImpl::UnmatchedParenthesis);
    assert_eq!(parse_err("((p ∧ q)"), ErrorImpl::UnmatchedParenthesis);
}

#[test]
fn test_parse_trailing_close_parenthesis() {
    assert_eq!(
        parse_err("(p))"),
        ErrorImpl::UnexpectedToken {
            token: ")".to_string()
        }
    );
}

#[test]
fn test_parse_resets_registry() {
    let mut registry = IdentifierRegistry::new();
    parse("a ∧ b", &mut registry).unwrap();
    parse("c", &mut registry).unwrap();

    assert_eq!(registry.names(), ["c"]);
}

#[test]
fn test_parser_lookups() {
    let mut registry = IdentifierRegistry::new();
    let mut parser = Parser::new(&mut registry);
    create_token_lookups(&mut parser);
    parser.reset("p ∧ q");

    assert_eq!(parser.get_led_lookup().len(), 4);
    assert_eq!(parser.get_nud_lookup().len(), 3);
    assert_eq!(parser.get_lookahead_position().0, 0);

    parser.advance().unwrap();
    assert_eq!(parser.get_lookahead_position().0, 2);
    assert_eq!(parser.get_registry().names(), ["p"]);
    assert!(parser.get_binding_power(crate::lexer::tokens::TokenKind::And) > BindingPower::Assignment);
}
