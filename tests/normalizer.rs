use pretty_assertions::assert_eq;
use scicalc::interpreter::normalizer::normalize;

fn assert_normalizes(raw: &str, expected: &str) {
    assert_eq!(normalize(raw), expected, "normalizing '{raw}'");
}

#[test]
fn whitespace_is_removed() {
    assert_normalizes("2 + 3", "2+3");
    assert_normalizes(" sin ( 30 ) ", "sin(30)");
    assert_normalizes("\t1\n*\r2", "1*2");
    assert_normalizes("", "");
}

#[test]
fn symbols_are_spelled_out() {
    assert_normalizes("2×3", "2*3");
    assert_normalizes("8÷2", "8/2");
    assert_normalizes("π", "pi");
    assert_normalizes("√(9)", "sqrt(9)");
}

#[test]
fn implicit_multiplication_is_inserted() {
    assert_normalizes("2(3+4)", "2*(3+4)");
    assert_normalizes("(1+2)3", "(1+2)*3");
    assert_normalizes("(2)(3)", "(2)*(3)");
    assert_normalizes("2π", "2*pi");
    assert_normalizes("π2", "pi*2");
    assert_normalizes("2pi", "2*pi");
    assert_normalizes("pi(2)", "pi*(2)");
    assert_normalizes("(2)pi", "(2)*pi");
    assert_normalizes("e(pi)", "e*(pi)");
    assert_normalizes("2e", "2*e");
}

#[test]
fn scientific_notation_is_kept_whole() {
    assert_normalizes("1e-3", "1e-3");
    assert_normalizes("2.5E+4", "2.5E+4");
    assert_normalizes("6.02e23", "6.02e23");
    assert_normalizes("2e3e", "2e3*e");
    assert_normalizes("1e-3pi", "1e-3*pi");
    assert_normalizes("2e+", "2*e+");
}

#[test]
fn function_names_are_not_multiplied() {
    assert_normalizes("sin(30)", "sin(30)");
    assert_normalizes("2sin(30)", "2sin(30)");
    assert_normalizes("atan2(1,1)", "atan2(1,1)");
    assert_normalizes("log2(8)", "log2(8)");
}

#[test]
fn square_root_wraps_bare_operands() {
    assert_normalizes("√9", "sqrt(9)");
    assert_normalizes("√2.25", "sqrt(2.25)");
    assert_normalizes("√π", "sqrt(pi)");
    assert_normalizes("√e", "sqrt(e)");
    assert_normalizes("√√16", "sqrt(sqrt(16))");
    assert_normalizes("√sin(30)", "sqrt(sin(30))");
    assert_normalizes("√9π", "sqrt(9)*pi");
    assert_normalizes("√(9)2", "sqrt(9)*2");
}

#[test]
fn square_root_after_a_value_is_multiplied() {
    assert_normalizes("2√(9)", "2*sqrt(9)");
    assert_normalizes("2√9", "2*sqrt(9)");
    assert_normalizes("π√4", "pi*sqrt(4)");
    assert_normalizes("(1)√4", "(1)*sqrt(4)");
    assert_normalizes("1+√4", "1+sqrt(4)");
}

#[test]
fn square_root_without_operand_is_left_for_the_parser() {
    assert_normalizes("√", "sqrt");
    assert_normalizes("√-4", "sqrt-4");
}

#[test]
fn adjacent_constant_names_are_split() {
    assert_normalizes("pi e", "pi*e");
    assert_normalizes("pie", "pi*e");
    assert_normalizes("pipi", "pi*pi");
    assert_normalizes("pie2", "pi*e*2");
    assert_normalizes("2taue", "2*tau*e");
    assert_normalizes("√pie", "sqrt(pi*e)");
}

#[test]
fn words_only_partly_made_of_constants_pass_through() {
    assert_normalizes("exec(1)", "exec(1)");
    assert_normalizes("pipe", "pipe");
    assert_normalizes("eval", "eval");
}

#[test]
fn long_square_root_runs_are_expanded() {
    let depth = 100_000;
    let raw = format!("{}9", "√".repeat(depth));
    let out = normalize(&raw);
    assert!(out.starts_with("sqrt(sqrt(sqrt("));
    assert!(out.ends_with(&format!("9{}", ")".repeat(depth))));
    assert_eq!(out.matches("sqrt(").count(), depth);

    let raw = format!("{}(4)", "√".repeat(depth));
    let out = normalize(&raw);
    assert!(out.ends_with(&format!("sqrt(4){}", ")".repeat(depth - 1))));
}

#[test]
fn stacked_square_roots_wrap_the_innermost_operand() {
    assert_normalizes("√√√256", "sqrt(sqrt(sqrt(256)))");
    assert_normalizes("√√(16)", "sqrt(sqrt(16))");
    assert_normalizes("√√sin(30)+1", "sqrt(sqrt(sin(30)))+1");
    assert_normalizes("2√√16π", "2*sqrt(sqrt(16))*pi");
    assert_normalizes("√√", "sqrt(sqrt)");
    assert_normalizes("√(√4+√9)", "sqrt(sqrt(4)+sqrt(9))");
}

#[test]
fn unknown_text_passes_through() {
    assert_normalizes("os.system('ls')", "os.system('ls')");
    assert_normalizes("2+x", "2+x");
    assert_normalizes("a=1;b", "a=1;b");
    assert_normalizes("PI", "PI");
}

#[test]
fn explicit_expressions_are_unchanged() {
    for src in ["2*(3+4)",
                "sqrt(9)",
                "2*pi",
                "atan2(1,1)",
                "-2^-2",
                "1e-3*e",
                "log(8,2)+ln(e)",
                "(2)*(3)",
                ".5+2."]
    {
        assert_normalizes(src, src);
    }
}

#[test]
fn normalizing_twice_changes_nothing() {
    for src in ["2(3+4)", "2π", "√√16", "2√9", "1e-3pi", "π2", "√sin(30)", "2e3e", "√9π", "pie",
                "√√√2"]
    {
        let once = normalize(src);
        assert_eq!(normalize(&once), once, "normalizing '{src}' twice");
    }
}
