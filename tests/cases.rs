use std::fs;

use scicalc::{AngleMode, error::ErrorKind, evaluate_expression};
use walkdir::WalkDir;

/// What a case line expects.
enum Expected {
    Value(f64),
    Failure(ErrorKind),
}

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut mode = AngleMode::Degrees;
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if let Some(name) = line.strip_prefix("# mode:") {
                mode = name.trim()
                           .parse()
                           .unwrap_or_else(|e| panic!("{path:?}:{}: {e}", i + 1));
                continue;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            count += 1;
            let (expr, expected) = parse_case(line).unwrap_or_else(|| {
                                                       panic!("{path:?}:{}: malformed case '{line}'",
                                                              i + 1)
                                                   });
            check_case(expr, &expected, mode, &format!("{path:?}:{}", i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_case(line: &str) -> Option<(&str, Expected)> {
    let (expr, expected) = line.rsplit_once("=>")?;
    let expected = expected.trim();

    let expected = match expected.strip_prefix('!') {
        Some(kind) => Expected::Failure(kind.parse().ok()?),
        None => Expected::Value(expected.parse().ok()?),
    };
    Some((expr.trim(), expected))
}

fn check_case(expr: &str, expected: &Expected, mode: AngleMode, location: &str) {
    let result = evaluate_expression(expr, mode);
    match (expected, result) {
        (Expected::Value(want), Ok(got)) => {
            assert!((got - want).abs() <= 1e-9 * want.abs().max(1.0),
                    "{location}: '{expr}' evaluated to {got}, expected {want}");
        },
        (Expected::Value(want), Err(e)) => {
            panic!("{location}: '{expr}' failed with '{e}', expected {want}")
        },
        (Expected::Failure(kind), Ok(got)) => {
            panic!("{location}: '{expr}' evaluated to {got}, expected {kind}")
        },
        (Expected::Failure(kind), Err(e)) => {
            assert_eq!(e.kind(), *kind, "{location}: '{expr}' failed with '{e}'");
        },
    }
}
