use rootcalc::{
    error::{CalcError, ParseError, RuntimeError},
    evaluate_line,
    interpreter::{
        evaluator::core::{Context, Statement},
        lexer::tokenize,
        parser::core::{Cursor, MAX_NESTING_DEPTH},
    },
};

fn eval(src: &str) -> Result<f64, CalcError> {
    evaluate_line(src, &mut Context::new())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(v) => assert_eq!(v, expected, "'{src}' evaluated to {v}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    let v = eval(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
    assert!((v - expected).abs() < 1e-12,
            "'{src}' evaluated to {v}, expected {expected}");
}

fn expect_failure(src: &str) -> CalcError {
    match eval(src) {
        Ok(v) => panic!("'{src}' evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn numeric_literals() {
    assert_value("42", 42.0);
    assert_value("0", 0.0);
    assert_value("3.25", 3.25);
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("007", 7.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 4", 2.5);
    assert_value("2 ^ 10", 1024.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 / 2", 8.0);
    assert_value("2 * 3 ^ 2", 36.0);
    assert_value("1 + 2 ^ 3", 9.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
    assert_value("2 ^ (3 ^ 2)", 512.0);
}

#[test]
fn nested_parentheses() {
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("(((5)))", 5.0);
}

fn nested(open: &str, depth: usize) -> String {
    format!("{}1{}", open.repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit() {
    assert_value(&nested("(", MAX_NESTING_DEPTH), 1.0);
    assert_value(&nested("root(", MAX_NESTING_DEPTH), 1.0);
}

#[test]
fn nesting_too_deep() {
    for depth in [MAX_NESTING_DEPTH + 1, 10_000] {
        let e = expect_failure(&nested("(", depth));
        assert_eq!(e,
                   CalcError::Parse(ParseError::NestingTooDeep { position: MAX_NESTING_DEPTH }));
    }

    let e = expect_failure(&nested("root(", 10_000));
    assert!(matches!(e, CalcError::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn sibling_groups_do_not_accumulate_depth() {
    let line = vec!["(1)"; MAX_NESTING_DEPTH * 2].join(" + ");
    assert_value(&line, (MAX_NESTING_DEPTH * 2) as f64);

    let tokens = tokenize("(1) * root(4)");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(Context::new().evaluate_statement(&mut cursor).unwrap().value, 2.0);
    assert_eq!(cursor.depth(), 0);
}

#[test]
fn root_function() {
    assert_value("root(9)", 3.0);
    assert_value("root(2+7)", 3.0);
    assert_value("root(0)", 0.0);
    assert_value("root(root(16))", 2.0);
    assert_value("1 + root(4) * 3", 7.0);
    assert_close("root(2)", std::f64::consts::SQRT_2);
}

#[test]
fn floating_point_semantics() {
    assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
    assert_eq!(eval("0 - 1 / 0").unwrap(), f64::NEG_INFINITY);
    assert!(eval("0 / 0").unwrap().is_nan());
    assert!(eval("(0 - 8) ^ 0.5").unwrap().is_nan());
    assert_value("2 ^ (0 - 1)", 0.5);
    assert_value("4 ^ 0.5", 2.0);
    assert!(eval("root(0 / 0)").unwrap().is_nan());
}

#[test]
fn assignment_and_overwrite() {
    let mut context = Context::new();

    assert_eq!(evaluate_line("x = 5", &mut context).unwrap(), 5.0);
    assert_eq!(evaluate_line("x", &mut context).unwrap(), 5.0);
    assert_eq!(evaluate_line("x = 3", &mut context).unwrap(), 3.0);
    assert_eq!(evaluate_line("x", &mut context).unwrap(), 3.0);
    assert_eq!(context.variables().len(), 1);
}

#[test]
fn assignment_uses_previous_values() {
    let mut context = Context::new();

    evaluate_line("a = 2", &mut context).unwrap();
    evaluate_line("b = a * 10", &mut context).unwrap();
    evaluate_line("a = a + b", &mut context).unwrap();

    assert_eq!(context.get_variable("a"), Some(22.0));
    assert_eq!(context.get_variable("b"), Some(20.0));
}

#[test]
fn variables_are_case_sensitive() {
    let mut context = Context::new();

    evaluate_line("Rate = 2", &mut context).unwrap();
    assert_eq!(evaluate_line("Rate * 3", &mut context).unwrap(), 6.0);
    assert!(matches!(evaluate_line("rate", &mut context),
                     Err(CalcError::Runtime(RuntimeError::UndefinedVariable { .. }))));
}

#[test]
fn print_statement() {
    let mut context = Context::new();
    context.set_variable("n", 4.0);

    let tokens = tokenize("print n * 2");
    let mut cursor = Cursor::new(&tokens);
    let evaluation = context.evaluate_statement(&mut cursor).unwrap();

    assert_eq!(evaluation.statement, Statement::Print);
    assert_eq!(evaluation.value, 8.0);
    assert!(cursor.at_end());
}

#[test]
fn statement_forms() {
    let mut context = Context::new();

    let tokens = tokenize("total = 1 + 1");
    let evaluation = context.evaluate_statement(&mut Cursor::new(&tokens)).unwrap();
    assert_eq!(evaluation.statement,
               Statement::Assignment { name: "total".to_string() });

    let tokens = tokenize("total");
    let evaluation = context.evaluate_statement(&mut Cursor::new(&tokens)).unwrap();
    assert_eq!(evaluation.statement, Statement::Expression);
    assert_eq!(evaluation.value, 2.0);
}

#[test]
fn read_only_evaluation_is_idempotent() {
    let mut context = Context::new();
    evaluate_line("x = 7", &mut context).unwrap();
    let before = context.variables().clone();

    let first = evaluate_line("x * 2 + root(x + 2)", &mut context).unwrap();
    let second = evaluate_line("x * 2 + root(x + 2)", &mut context).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, 17.0);
    assert_eq!(context.variables(), &before);
}

#[test]
fn undefined_variable() {
    let e = expect_failure("y + 1");
    assert_eq!(e,
               CalcError::Runtime(RuntimeError::UndefinedVariable { name:     "y".to_string(),
                                                                    position: 0, }));
}

#[test]
fn undefined_variable_in_assignment_leaves_state_untouched() {
    let mut context = Context::new();

    assert!(evaluate_line("x = y", &mut context).is_err());
    assert_eq!(context.get_variable("x"), None);
}

#[test]
fn negative_root() {
    let e = expect_failure("root(0-4)");
    assert!(matches!(e,
                     CalcError::Runtime(RuntimeError::NegativeRoot { value, position: 0 })
                     if value == -4.0));
}

#[test]
fn unclosed_parenthesis() {
    let e = expect_failure("(1+2");
    assert_eq!(e,
               CalcError::Parse(ParseError::UnclosedParenthesis { position: 4 }));

    let e = expect_failure("root(4");
    assert!(matches!(e, CalcError::Parse(ParseError::UnclosedParenthesis { .. })));
}

#[test]
fn expected_open_paren() {
    let e = expect_failure("root 9");
    assert_eq!(e,
               CalcError::Parse(ParseError::ExpectedOpenParen { function: "root".to_string(),
                                                                position: 1, }));
}

#[test]
fn unexpected_token() {
    for src in ["+ 1", "1 +", "1 * * 2", ")", "()", "x = ", "print", "= 3", "$ 3"] {
        let e = expect_failure(src);
        assert!(matches!(e, CalcError::Parse(ParseError::UnexpectedToken { .. })),
                "'{src}' failed with {e:?}");
    }
}

#[test]
fn invalid_character_is_reported_where_reached() {
    let e = expect_failure("1 + #");
    assert_eq!(e,
               CalcError::Parse(ParseError::UnexpectedToken { token:    "'#'".to_string(),
                                                              position: 2, }));
}

#[test]
fn malformed_numbers() {
    for src in ["1.2.3", ".", "..", "4..2"] {
        let e = expect_failure(src);
        assert!(matches!(e, CalcError::Parse(ParseError::NumberFormat { .. })),
                "'{src}' failed with {e:?}");
    }

    let e = expect_failure("2 * 1.2.3");
    assert_eq!(e,
               CalcError::Parse(ParseError::NumberFormat { literal:  "1.2.3".to_string(),
                                                           position: 2, }));
}

#[test]
fn trailing_tokens_are_left_unconsumed() {
    let mut context = Context::new();
    let tokens = tokenize("1 + 2 3 4");
    let mut position = 0;

    assert_eq!(context.evaluate(&tokens, &mut position).unwrap(), 3.0);
    assert_eq!(position, 3);

    assert_value("(1) (2)", 1.0);
    assert_value("2 #", 2.0);
}

#[test]
fn cursor_rests_on_end_after_complete_line() {
    let mut context = Context::new();
    let tokens = tokenize("v = (1 + 2) * root(4)");
    let mut position = 0;

    assert_eq!(context.evaluate(&tokens, &mut position).unwrap(), 6.0);
    assert_eq!(position, tokens.len() - 1);
}

#[test]
fn evaluation_can_start_mid_line() {
    let mut context = Context::new();
    let tokens = tokenize("ignored 2 * 21");
    let mut position = 1;

    assert_eq!(context.evaluate(&tokens, &mut position).unwrap(), 42.0);
}

#[test]
fn error_positions() {
    assert_eq!(expect_failure("1 + (2 * 3").position(), 6);
    assert_eq!(expect_failure("1 + 2 * z").position(), 4);
    assert_eq!(expect_failure("root(1 - 2)").position(), 0);
}
