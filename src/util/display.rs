/// Values closer than this to an integer are shown as that integer.
pub const INTEGER_EPSILON: f64 = 1e-12;

/// Magnitude from which integers are no longer written out in full.
const INTEGER_LIMIT: f64 = 1e15;

/// Digits shown after the first significant digit.
const PRECISION: usize = 11;

/// Decimal exponent from which exponent notation is used.
const EXPONENT_LIMIT: i32 = 12;

/// Smallest decimal exponent written without exponent notation.
const EXPONENT_FLOOR: i32 = -4;

/// Formats an evaluation result for display.
///
/// A value within [`INTEGER_EPSILON`] of an integer is printed as that
/// integer, which hides the rounding left over by degree conversion and
/// similar. Any other value is printed with at most 12 significant digits
/// and trailing zeros removed. Very large or very small magnitudes switch to
/// exponent notation (`1.5e+20`, `2.5e-07`).
///
/// # Example
/// ```
/// use scicalc::util::display::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(0.49999999999999994), "0.5");
/// assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(1.5e20), "1.5e+20");
/// assert_eq!(format_result(2.5e-7), "2.5e-07");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let whole = value.trunc();
    if whole.abs() < INTEGER_LIMIT && (value - whole).abs() < INTEGER_EPSILON {
        // `+ 0.0` turns -0 into 0.
        return format!("{:.0}", whole + 0.0);
    }

    significant(value)
}

/// Prints `value` with 12 significant digits, like C's `%.12g`.
fn significant(value: f64) -> String {
    let scientific = format!("{value:.PRECISION$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent = exponent.parse::<i32>().unwrap_or_default();

    if exponent < EXPONENT_FLOOR || exponent >= EXPONENT_LIMIT {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(EXPONENT_LIMIT - 1 - exponent).unwrap_or_default();
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

/// Removes trailing zeros after a decimal point, and the point itself when
/// nothing follows it.
fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
