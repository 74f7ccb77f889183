use pretty_assertions::assert_eq;
use scicalc::{
    AngleMode, Calculator, EvalError,
    error::ErrorKind,
    util::display::format_result,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn calculator_starts_in_degrees() {
    let calc = Calculator::new();
    assert_eq!(calc.mode(), AngleMode::Degrees);
    assert_eq!(Calculator::default(), calc);
    assert!(close(calc.evaluate("sin(30)").unwrap(), 0.5));
}

#[test]
fn mode_persists_until_changed() {
    let mut calc = Calculator::with_mode(AngleMode::Radians);
    assert!(close(calc.evaluate("sin(pi/2)").unwrap(), 1.0));
    assert!(close(calc.evaluate("cos(0)").unwrap(), 1.0));

    calc.set_mode(AngleMode::Degrees);
    assert!(close(calc.evaluate("sin(90)").unwrap(), 1.0));

    assert_eq!(calc.toggle_mode(), AngleMode::Radians);
    assert_eq!(calc.toggle_mode(), AngleMode::Degrees);
}

#[test]
fn failed_evaluation_keeps_the_mode() {
    let calc = Calculator::with_mode(AngleMode::Radians);
    assert!(calc.evaluate("1/0").is_err());
    assert_eq!(calc.mode(), AngleMode::Radians);
}

#[test]
fn angle_mode_parses_and_displays() {
    assert_eq!("deg".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
    assert_eq!("Degrees".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
    assert_eq!("RAD".parse::<AngleMode>().unwrap(), AngleMode::Radians);
    assert_eq!("radian".parse::<AngleMode>().unwrap(), AngleMode::Radians);
    assert!("grad".parse::<AngleMode>().is_err());

    assert_eq!(AngleMode::Degrees.to_string(), "DEG");
    assert_eq!(AngleMode::Radians.to_string(), "RAD");
    assert_eq!(AngleMode::default(), AngleMode::Degrees);
}

#[test]
fn error_kinds_round_trip_through_names() {
    for kind in [ErrorKind::InvalidInput,
                 ErrorKind::Syntax,
                 ErrorKind::Arity,
                 ErrorKind::Domain,
                 ErrorKind::DivisionByZero]
    {
        assert_eq!(kind.to_string().parse::<ErrorKind>().unwrap(), kind);
    }
    assert_eq!("SyntaxError".parse::<ErrorKind>().unwrap(), ErrorKind::Syntax);
    assert!("Panic".parse::<ErrorKind>().is_err());
}

#[test]
fn errors_report_positions() {
    let calc = Calculator::new();

    let err = calc.evaluate("1+2/0").unwrap_err();
    assert_eq!(err, EvalError::DivisionByZero { position: 3 });
    assert_eq!(err.to_string(), "Error at position 3: Division by zero.");

    let err = calc.evaluate("(1+2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), Some(4));

    let err = calc.evaluate("1)").unwrap_err();
    assert_eq!(err.position(), Some(1));

    let err = calc.evaluate("2+").unwrap_err();
    assert_eq!(err.position(), Some(2));
}

#[test]
fn division_by_zero_in_pow_points_at_the_call() {
    let err = Calculator::new().evaluate("1+pow(0,-2)").unwrap_err();
    assert_eq!(err, EvalError::DivisionByZero { position: 2 });
}

#[test]
fn arity_errors_describe_the_expected_count() {
    let calc = Calculator::new();

    let err = calc.evaluate("atan2(1)").unwrap_err();
    assert_eq!(err.to_string(), "Function 'atan2' expects 2 argument(s), but 1 were given.");

    let err = calc.evaluate("log(1,2,3)").unwrap_err();
    assert_eq!(err.to_string(), "Function 'log' expects 1 or 2 argument(s), but 3 were given.");
    assert_eq!(err.position(), None);
}

#[test]
fn results_display_like_a_calculator() {
    assert_eq!(format_result(14.0), "14");
    assert_eq!(format_result(-3.0), "-3");
    assert_eq!(format_result(0.5), "0.5");
    assert_eq!(format_result(0.1 + 0.2), "0.3");
    assert_eq!(format_result(2.0_f64.sqrt()), "1.41421356237");
    assert_eq!(format_result(std::f64::consts::PI), "3.14159265359");
    assert_eq!(format_result(1e-3), "0.001");
    assert_eq!(format_result(1.5e-7), "1.5e-07");
    assert_eq!(format_result(123_456.789), "123456.789");
    assert_eq!(format_result(1e20), "1e+20");
    assert_eq!(format_result(1e13), "10000000000000");
}

#[test]
fn exponent_form_starts_below_one_ten_thousandth() {
    assert_eq!(format_result(1e-4), "0.0001");
    assert_eq!(format_result(1.25e-4), "0.000125");
    assert_eq!(format_result(5e-5), "5e-05");
    assert_eq!(format_result(99_999_999_999.5), "99999999999.5");
    assert_eq!(format_result(1_234_567_890_123.5), "1.23456789012e+12");
}

#[test]
fn display_hides_conversion_noise() {
    let calc = Calculator::new();
    assert_eq!(format_result(calc.evaluate("sin(30)").unwrap()), "0.5");
    assert_eq!(format_result(calc.evaluate("sin(180)").unwrap()), "0");
    assert_eq!(format_result(calc.evaluate("cos(90)").unwrap()), "0");
    assert_eq!(format_result(calc.evaluate("asin(0.5)").unwrap()), "30");
}
