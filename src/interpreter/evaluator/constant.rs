use std::f64::consts;

/// Defines named constants by generating a lookup table and a name list.
///
/// The macro produces:
/// - `CONSTANT_TABLE` (static name/value pairs for lookup),
/// - `CONSTANT_NAMES` (public list of constant names).
macro_rules! constants {
    ($($name:literal => $value:expr),* $(,)?) => {
        static CONSTANT_TABLE: &[(&str, f64)] = &[
            $(($name, $value),)*
        ];
        /// Names of every constant the engine resolves.
        pub const CONSTANT_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

constants! {
    "pi"  => consts::PI,
    "e"   => consts::E,
    "tau" => consts::TAU,
}

/// Looks up the value of a named constant.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::constant::lookup_constant;
///
/// assert_eq!(lookup_constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(lookup_constant("PI"), None);
/// ```
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANT_TABLE.iter()
                  .find(|(n, _)| *n == name)
                  .map(|(_, value)| *value)
}

/// Returns `true` if `name` is a registered constant.
#[must_use]
pub fn is_constant(name: &str) -> bool {
    CONSTANT_NAMES.contains(&name)
}
