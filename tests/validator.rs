use pretty_assertions::assert_eq;
use scicalc::{
    AngleMode, EvalError, evaluate_expression,
    interpreter::validator::validate,
};

fn assert_rejected(src: &str) {
    match evaluate_expression(src, AngleMode::Degrees) {
        Err(EvalError::InvalidInput { .. }) => {},
        other => panic!("'{src}' was expected to be rejected as invalid input, got {other:?}"),
    }
}

fn rejection(src: &str) -> (String, usize) {
    let err = validate(src).expect_err("input should be rejected");
    (err.token, err.position)
}

#[test]
fn vocabulary_is_accepted() {
    for src in ["2*sqrt(9)", "atan2(1,1)", "-pi+e^2", "1e-3", "log(8,2)", "tau/2"] {
        assert_eq!(validate(src).unwrap(), src);
    }
}

#[test]
fn grammar_is_not_checked() {
    assert_eq!(validate("2+").unwrap(), "2+");
    assert_eq!(validate(")(").unwrap(), ")(");
    assert_eq!(validate("sin").unwrap(), "sin");
}

#[test]
fn code_is_rejected() {
    assert_rejected("os.system('rm -rf /')");
    assert_rejected("__import__('os')");
    assert_rejected("exec(1)");
    assert_rejected("eval(1)");
    assert_rejected("open('/etc/passwd')");
    assert_rejected("lambda: 0");
    assert_rejected("\"abc\"");
    assert_rejected("a=1");
    assert_rejected("2;3");
    assert_rejected("[1]");
    assert_rejected("{}");
    assert_rejected("1 % 2");
    assert_rejected("1_000");
    assert_rejected("$x");
}

#[test]
fn unknown_names_are_rejected_anywhere() {
    assert_rejected("x");
    assert_rejected("(exit)");
    assert_rejected("2+os");
    assert_rejected("sin(x)");
    assert_rejected("max(1, y)");
    assert_rejected("2*(3+(quit))");
    assert_rejected("-exit");
}

#[test]
fn names_are_case_sensitive() {
    assert_rejected("PI");
    assert_rejected("Sin(30)");
    assert_rejected("SQRT(4)");
    assert_rejected("E");
}

#[test]
fn unknown_name_followed_by_digits_is_rejected() {
    assert_rejected("sin 30");
    assert_rejected("sqrt9");
}

#[test]
fn first_offending_token_is_reported() {
    assert_eq!(rejection("2+os"), ("os".to_string(), 2));
    assert_eq!(rejection("(exit)"), ("exit".to_string(), 1));
    assert_eq!(rejection("sin(x)"), ("x".to_string(), 4));
    assert_eq!(rejection("1+2;3"), (";".to_string(), 3));
    assert_eq!(rejection("1+ä"), ("ä".to_string(), 2));
}

#[test]
fn rejection_carries_position_through_the_entry_point() {
    let err = evaluate_expression("2+os", AngleMode::Degrees).unwrap_err();
    assert_eq!(err, EvalError::InvalidInput { token:    "os".to_string(),
                                              position: 2, });
    assert_eq!(err.to_string(), "Error at position 2: Disallowed input 'os'.");
}
