use calcexpr::{
    EvalError, Session, evaluate,
    error::{ParseError, RuntimeError},
};
use pretty_assertions::assert_eq;

fn message(src: &str) -> String {
    let mut session = Session::new();
    let value = session.evaluate(src);
    assert!(value.is_nan(), "{src} should fail but gave {value}");
    session.last_error().to_string()
}

#[test]
fn unexpected_closing_parenthesis() {
    assert_eq!(evaluate("1 + 3 + )"),
               Err(EvalError::Parse(ParseError::UnexpectedToken { token:    ")".to_string(),
                                                                  position: 8, })));
    assert_eq!(message("1 + 3 + )"), "Error! Unexpected token: ')' (at position 8)");
}

#[test]
fn division_by_zero_messages() {
    assert_eq!(message("2/0"), "Error! Divide by zero (at position 1)");
    assert_eq!(message("mod(7,0)"), "Error! Divide by zero in mod (at position 0)");
    assert_eq!(message("a=1, a /= 0"), "Error! Divide by zero (at position 7)");
}

#[test]
fn end_of_input_messages() {
    assert_eq!(message("2 *"), "Error! Unexpected end of expression (at position 3)");
    assert_eq!(message("   "), "Error! Unexpected end of expression (at position 3)");
}

#[test]
fn missing_punctuation_messages() {
    assert_eq!(message("(1 + 2"),
               "Error! expected ')' but found '<end of expression>' (at position 6)");
    assert_eq!(message("min(1; 2)"), "Error! Unexpected character ';' (at position 5)");
    assert_eq!(message("min(1 2)"), "Error! expected ',' but found '2' (at position 6)");
}

#[test]
fn trailing_text_message() {
    assert_eq!(message("2 + 3 4 + 5"),
               "Error! Unexpected text at end of expression: '4 + 5' (at position 6)");
}

#[test]
fn lexical_error_messages() {
    assert_eq!(message("1.2.3 + 1"), "Error! Bad numeric literal: 1.2.3 (at position 0)");
    assert_eq!(message("3 @ 4"), "Error! Unexpected character '@' (at position 2)");
    assert_eq!(message("3 \u{1} 4"), "Error! Unexpected character 0x01 (at position 2)");
}

#[test]
fn unknown_function_message() {
    assert_eq!(evaluate("nope(1)"),
               Err(EvalError::Runtime(RuntimeError::UnknownFunction { name:     "nope".to_string(),
                                                                      position: 0, })));
    assert_eq!(message("nope(1)"), "Error! Function 'nope' not implemented (at position 0)");
}

#[test]
fn errors_report_their_kind_and_position() {
    let err = evaluate("1 + (2 * 3").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), 10);

    let err = evaluate("10 / (5 - 5)").unwrap_err();
    assert!(!err.is_syntax());
    assert_eq!(err.position(), 3);
}
