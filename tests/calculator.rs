use tally::{
    error::{ParseError, RuntimeError},
    evaluate,
    interpreter::evaluator::core::Environment,
    ops::apply,
};

fn eval_fresh(src: &str) -> f64 {
    let mut env = Environment::new();
    evaluate(src, &mut env).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                           .unwrap_or_else(|| panic!("'{src}' produced no value"))
}

fn assert_eval(src: &str, expected: f64) {
    let got = eval_fresh(src);
    assert_eq!(got, expected, "'{src}' evaluated to {got}, expected {expected}");
}

#[test]
fn named_operations() {
    let cases = [("add", 2.0, 3.0, 5.0),
                 ("+", 2.0, 3.0, 5.0),
                 ("subtract", 8.0, 5.0, 3.0),
                 ("multiply", 7.0, 9.0, 63.0),
                 ("divide", 10.0, 4.0, 2.5),
                 ("^", 2.0, 3.0, 8.0),
                 ("^^", 6.0, 3.0, 5.0),
                 ("sigma", 1.0, 5.0, 15.0),
                 ("Σ", 1.0, 5.0, 15.0),
                 ("&", 6.0, 3.0, 2.0),
                 ("|", 6.0, 3.0, 7.0),
                 ("pow", 2.0, 10.0, 1024.0),
                 ("xor", 10.0, 3.0, 9.0),
                 ("sum", 5.0, 3.0, 12.0)];

    for (alias, a, b, expected) in cases {
        let got = apply(alias, a, b).unwrap_or_else(|e| panic!("apply({alias}, {a}, {b}): {e}"));
        assert_eq!(got, expected, "apply({alias}, {a}, {b})");
    }
}

#[test]
fn power_follows_ieee_semantics() {
    assert_eq!(apply("power", 9.0, 0.5).unwrap(), 3.0);
    assert_eq!(apply("pow", 2.0, -1.0).unwrap(), 0.5);
    assert!(apply("**", -1.0, 0.5).unwrap().is_nan());
}

#[test]
fn power_and_xor_aliases_stay_distinct() {
    // '^' is power in the dispatcher; bitwise XOR is '^^' or 'xor'.
    assert_eq!(apply("^", 10.0, 3.0).unwrap(), 1000.0);
    assert_eq!(apply("^^", 10.0, 3.0).unwrap(), 9.0);
    assert_eq!(apply("xor", 10.0, 3.0).unwrap(), 9.0);
}

#[test]
fn sigma_is_symmetric_in_its_bounds() {
    for (a, b) in [(1.0, 5.0), (5.0, 1.0), (-3.0, 2.0), (0.0, 100.0), (-10.0, -4.0)] {
        assert_eq!(apply("sigma", a, b).unwrap(), apply("sigma", b, a).unwrap());
    }
    assert_eq!(apply("sigma", -3.0, 2.0).unwrap(), -3.0);
}

#[test]
fn sigma_with_equal_bounds_is_a_single_term() {
    for a in [-7.0, 0.0, 1.0, 42.0] {
        assert_eq!(apply("sigma", a, a).unwrap(), a);
    }
}

#[test]
fn bitwise_uses_twos_complement() {
    assert_eq!(apply("&", -1.0, 6.0).unwrap(), 6.0);
    assert_eq!(apply("|", -8.0, 7.0).unwrap(), -1.0);
    assert_eq!(apply("xor", -1.0, 0.0).unwrap(), -1.0);
}

#[test]
fn strict_divide_reports_division_by_zero() {
    for a in [1.0, -2.5, 0.0] {
        let err = apply("divide", a, 0.0).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero));
    }
}

#[test]
fn bitwise_and_sigma_require_integers() {
    let err = apply("and", 2.5, 3.0).unwrap_err();
    assert!(matches!(err, RuntimeError::NonIntegerOperand { value } if value == 2.5));

    assert!(matches!(apply("or", 1.0, 0.5).unwrap_err(),
                     RuntimeError::NonIntegerOperand { .. }));
    assert!(matches!(apply("xor", 1.5, 2.0).unwrap_err(),
                     RuntimeError::NonIntegerOperand { .. }));
    assert!(matches!(apply("sigma", 1.5, 4.0).unwrap_err(),
                     RuntimeError::NonIntegerOperand { .. }));
}

#[test]
fn unknown_and_wrong_case_aliases_fail() {
    assert!(matches!(apply("frobnicate", 1.0, 2.0).unwrap_err(),
                     RuntimeError::UnknownOperation { .. }));
    // Aliases are case-sensitive.
    assert!(matches!(apply("ADD", 1.0, 2.0).unwrap_err(),
                     RuntimeError::UnknownOperation { .. }));
    assert!(matches!(apply("Pow", 2.0, 3.0).unwrap_err(),
                     RuntimeError::UnknownOperation { .. }));
}

#[test]
fn simple_expressions() {
    assert_eval("2 + 3", 5.0);
    assert_eval("8 - 5", 3.0);
    assert_eval("7 * 9", 63.0);
    assert_eval("10 / 4", 2.5);
    assert_eval("2 ** 10", 1024.0);
    assert_eval("6 & 3", 2.0);
    assert_eval("6 | 3", 7.0);
    assert_eval("10 ^ 3", 9.0);
}

#[test]
fn expression_precedence() {
    assert_eval("2 + 3 * 4", 14.0);
    assert_eval("(2 + 3) * 4", 20.0);
    // '**' is right-associative and binds tighter than unary minus.
    assert_eval("2 ** 3 ** 2", 512.0);
    assert_eval("-2 ** 2", -4.0);
    assert_eval("2 ** -1", 0.5);
    // Bitwise operators bind looser than arithmetic.
    assert_eval("2 + 3 & 6", 4.0);
    assert_eval("6 & 3 | 8", 10.0);
    assert_eval("2 * 3 ^ 1", 7.0);
}

#[test]
fn unary_signs() {
    assert_eval("-5", -5.0);
    assert_eval("+5", 5.0);
    assert_eval("--5", 5.0);
    assert_eval("-(2 + 3)", -5.0);
}

#[test]
fn assignment_and_reuse() {
    let mut env = Environment::new();
    let result = evaluate("x = 10\nx * 2", &mut env).unwrap();
    assert_eq!(result, Some(20.0));
    assert_eq!(env.get("x"), Some(10.0));
    assert_eq!(env.len(), 1);

    // An assignment statement yields the assigned value.
    let mut env = Environment::new();
    assert_eq!(evaluate("x = 5", &mut env).unwrap(), Some(5.0));
}

#[test]
fn environment_persists_across_calls() {
    let mut env = Environment::new();
    evaluate("x = 2", &mut env).unwrap();
    assert_eq!(evaluate("x * x", &mut env).unwrap(), Some(4.0));

    // Re-assignment overwrites.
    evaluate("x = 7", &mut env).unwrap();
    assert_eq!(env.get("x"), Some(7.0));
}

#[test]
fn prior_environment_entries_are_preserved() {
    let mut env = Environment::new();
    env.assign("keep", 7.0);

    let result = evaluate("x = 1\nx", &mut env).unwrap();
    assert_eq!(result, Some(1.0));
    assert_eq!(env.get("keep"), Some(7.0));
    assert_eq!(env.get("x"), Some(1.0));
}

#[test]
fn undefined_variable_fails() {
    let mut env = Environment::new();
    let err = evaluate("y", &mut env).unwrap_err();
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UndefinedVariable { name, .. }) if name == "y"));
}

#[test]
fn empty_input_yields_nothing() {
    let mut env = Environment::new();
    env.assign("x", 1.0);

    assert_eq!(evaluate("", &mut env).unwrap(), None);
    assert_eq!(evaluate("  \n\n  ", &mut env).unwrap(), None);
    assert_eq!(env.len(), 1);
}

#[test]
fn expression_division_by_zero_is_permissive() {
    // Unlike the strict 'divide' operation, expression division follows
    // IEEE-754 semantics.
    assert_eval("1 / 0", f64::INFINITY);
    assert_eval("-1 / 0", f64::NEG_INFINITY);
    assert!(eval_fresh("0 / 0").is_nan());
}

#[test]
fn expression_bitwise_truncates_silently() {
    // The dispatcher rejects fractional bitwise operands, but expression
    // evaluation truncates them without complaint. The asymmetry is
    // intentional and pinned here.
    assert_eval("2.5 & 3", 2.0);
    assert_eval("2.5 | 0", 2.0);
    assert_eval("1.9 ^ 0", 1.0);
    assert!(matches!(apply("and", 2.5, 3.0).unwrap_err(),
                     RuntimeError::NonIntegerOperand { .. }));
}

#[test]
fn unsupported_constructs_are_named() {
    let cases = [("sin(1)", "function call"),
                 ("1 < 2", "comparison"),
                 ("2 == 2", "comparison"),
                 ("x, y = 1", "comma-separated"),
                 ("2 = 3", "non-identifier")];

    for (src, needle) in cases {
        let mut env = Environment::new();
        env.assign("x", 1.0);
        let err = evaluate(src, &mut env).unwrap_err();
        match err.downcast_ref::<ParseError>() {
            Some(ParseError::UnsupportedConstruct { construct, .. }) => {
                assert!(construct.contains(needle),
                        "'{src}': construct '{construct}' does not mention '{needle}'");
            },
            other => panic!("'{src}': expected UnsupportedConstruct, got {other:?}"),
        }
    }
}

#[test]
fn malformed_expressions_fail_to_parse() {
    let mut env = Environment::new();

    assert!(matches!(evaluate("1 +", &mut env).unwrap_err()
                                              .downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(evaluate("(1 + 2", &mut env).unwrap_err()
                                                 .downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(evaluate("2 3", &mut env).unwrap_err()
                                              .downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(evaluate("$", &mut env).unwrap_err()
                                            .downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedToken { .. })));
}

#[test]
fn multiple_statements_run_in_order() {
    let mut env = Environment::new();
    let result = evaluate("a = 1\nb = a + 1\na + b\n", &mut env).unwrap();
    assert_eq!(result, Some(3.0));
    assert_eq!(env.get("a"), Some(1.0));
    assert_eq!(env.get("b"), Some(2.0));
}

#[test]
fn literal_forms() {
    assert_eval("3.14 * 0 + 1", 1.0);
    assert_eval(".5 * 4", 2.0);
    assert_eval("2e3", 2000.0);
    assert_eval("1.5e-1 * 10", 1.5);
}
