use pretty_assertions::assert_eq;
use rpn_calc::*;

#[test]
fn valid_expressions_evaluate() {
    let cases = [
        ("2 + 3", 5.0),
        ("2 + 3 * 4", 14.0),
        ("(2 + 3) * 4", 20.0),
        ("10 / 4", 2.5),
        ("10 : 3", 3.0),
        ("10 % 3", 1.0),
        ("2 ^ 3 ^ 2", 512.0),
        ("(2 ^ 3) ^ 2", 64.0),
        ("-5 + 3", -2.0),
        ("5 --3", 8.0),
        ("(2) - 3", -1.0),
        ("2 * -3", -6.0),
        ("8 - 3 - 1", 4.0),
        ("((2 + 3) * (4 - (1 + 1)))", 10.0),
        ("5.5 * 2.0 + 1", 12.0),
        ("-7 : 2", -4.0),
        ("-7 % 2", 1.0),
        ("7 % -2", -1.0),
    ];
    for (expression, expected) in cases {
        assert_eq!(calculate(expression), Ok(expected), "{}", expression);
    }
}

#[test]
fn floor_identity_holds_for_mixed_signs() {
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (9, 3)] {
        let quotient = calculate(&format!("{} : {}", a, b)).unwrap();
        let remainder = calculate(&format!("{} % {}", a, b)).unwrap();
        assert_eq!(b as f64 * quotient + remainder, a as f64);
    }
}

#[test]
fn invalid_expressions_fail() {
    let cases = [
        ("", CalcError::empty_expression),
        ("2 + a", CalcError::invalid_character('a')),
        ("(2 + 3", CalcError::unbalanced_parentheses),
        ("2..5 + 1", CalcError::invalid_number_format("2..5".into())),
        ("2 3", CalcError::consecutive_numbers),
        ("3 + * 2", CalcError::consecutive_operators('*')),
        ("* 2", CalcError::leading_operator('*')),
        ("2 *", CalcError::trailing_operator('*')),
        ("2(3)", CalcError::missing_operator_before_paren),
        ("(2 + )", CalcError::empty_or_dangling_group),
        ("(+2)", CalcError::insufficient_operands),
        ("(2)(3)", CalcError::excess_operands),
        ("(2)-3", CalcError::excess_operands),
        ("5.5 : 2", CalcError::non_integer_operand(':')),
        ("3.3 % 2", CalcError::non_integer_operand('%')),
        ("5 / 0", CalcError::division_by_zero),
        ("5 / (2 - 2)", CalcError::division_by_zero),
        ("0 ^ -1", CalcError::division_by_zero),
    ];
    for (expression, expected) in cases {
        assert_eq!(calculate(expression), Err(expected), "{}", expression);
    }
}

#[test]
fn repeated_runs_agree() {
    for expression in ["1 + 2 * 3", "2 ^ 0.5", "(1 - 4) : 2", "7 / 0"] {
        assert_eq!(calculate(expression), calculate(expression));
    }
}

#[test]
fn stages_compose() {
    let tokens = tokenize("(1 + 2) * 3").unwrap();
    let postfix = to_postfix(&tokens).unwrap();
    let rendered: Vec<String> = postfix.iter().map(Token::to_string).collect();
    assert_eq!(rendered, ["1", "2", "+", "3", "*"]);
    assert_eq!(evaluate(&postfix), Ok(9.0));
}

#[test]
fn report_always_shows_a_fraction() {
    assert_eq!(report(12.0), "Operation completed successfully.\n12.0");
    assert_eq!(report(-2.0), "Operation completed successfully.\n-2.0");
    assert_eq!(report(2.5), "Operation completed successfully.\n2.5");
}

#[test]
fn zero_results_carry_the_floor_sign() {
    assert_eq!(report(calculate("-6 % 3").unwrap()), "Operation completed successfully.\n0.0");
    assert_eq!(report(calculate("6 % -3").unwrap()), "Operation completed successfully.\n-0.0");
    assert_eq!(report(calculate("-0 : 5").unwrap()), "Operation completed successfully.\n-0.0");
}
