use crate::rules::arithmetic::helpers::{BinOp, render_value};
use crate::rules::arithmetic::rules::{DIVIDE_BY_ZERO_REPLY, extract};
use crate::{Context, UniformSelect, respond_with};

#[test]
fn extraction_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(&str, &str)> = vec![
        ("8", "5 + 3"),
        ("8", "5+3"),
        ("8", "what is 5 + 3?"),
        ("2", "5 - 3"),
        ("20", "10 * 2"),
        ("3.5", "7 / 2"),
        ("4", "2.5 + 1.5"),
        ("0.75", "0.5 + 0.25"),
        ("0", "0 + 0"),
        ("0", "5 - 5"),
        ("0", "0 / 5"),
        ("2469.134", "1234.567 * 2"),
        // First pattern in fixed order wins, not the leftmost operator.
        ("3", "1 + 2 - 3"),
        ("8", "10 - 2 * 3"),
        // Within a pattern, the leftmost match wins.
        ("5", "2 + 3 and 4 + 5"),
    ];

    for (expected, input) in cases {
        let result = extract(input);
        assert_eq!(result, Some(format!("The answer is: {expected}")), "for input '{input}'");
    }
}

#[test]
fn division_by_zero_gets_the_dedicated_reply() {
    assert_eq!(extract("9 / 0"), Some(DIVIDE_BY_ZERO_REPLY.to_string()));
    assert_eq!(extract("9 / 0.0"), Some(DIVIDE_BY_ZERO_REPLY.to_string()));
    // Zero numerator is an ordinary division.
    assert_eq!(extract("0 / 9"), Some("The answer is: 0".to_string()));
}

#[test]
fn no_expression_means_no_result() {
    for input in ["no math here", "five plus three", "7 %% 3", "+ 3", "5 +", "what is -"] {
        assert_eq!(extract(input), None, "for input '{input}'");
    }
}

#[test]
fn apply_is_plain_arithmetic() {
    assert_eq!(BinOp::Add.apply(5.0, 3.0), 8.0);
    assert_eq!(BinOp::Sub.apply(5.0, 3.0), 2.0);
    assert_eq!(BinOp::Mul.apply(10.0, 2.0), 20.0);
    assert_eq!(BinOp::Div.apply(7.0, 2.0), 3.5);
}

#[test]
fn integral_results_render_without_a_fraction() {
    assert_eq!(render_value(8.0), "8");
    assert_eq!(render_value(20.0), "20");
    assert_eq!(render_value(0.0), "0");
    assert_eq!(render_value(-4.0), "-4");
    assert_eq!(render_value(3.5), "3.5");
    assert_eq!(render_value(0.25), "0.25");
}

#[test]
fn arithmetic_sits_between_joke_and_gratitude() {
    let ctx = Context::default();

    // A joke request with digits in it: joke outranks arithmetic.
    let reply = respond_with("joke about 2 + 2", &ctx, &UniformSelect);
    assert!(!reply.starts_with("The answer is:"), "expected a joke, got: {reply}");

    // Arithmetic outranks gratitude.
    let reply = respond_with("thanks, now 2 + 2", &ctx, &UniformSelect);
    assert_eq!(reply, "The answer is: 4");
}
