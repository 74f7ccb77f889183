use std::{fmt, str::FromStr};

/// Selects how trigonometric functions interpret angles.
///
/// In `Degrees` mode forward trigonometric functions receive their argument
/// in degrees and inverse functions return degrees. `Radians` performs no
/// conversion. The mode is read once per evaluation and never changes while
/// an expression is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    /// Angles are measured in degrees.
    #[default]
    Degrees,
    /// Angles are measured in radians.
    Radians,
}

/// How a builtin function interacts with the angle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUse {
    /// Not angle-sensitive.
    None,
    /// The first argument is an angle (`sin`, `cos`, `tan`).
    Argument,
    /// The result is an angle (`asin`, `acos`, `atan`, `atan2`).
    Result,
}

impl AngleMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Converts an angle measured in this mode to radians.
    ///
    /// # Example
    /// ```
    /// use scicalc::AngleMode;
    ///
    /// assert_eq!(AngleMode::Degrees.to_radians(180.0), std::f64::consts::PI);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Converts an angle in radians to this mode.
    #[must_use]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_degrees(),
            Self::Radians => angle,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => f.write_str("DEG"),
            Self::Radians => f.write_str("RAD"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            other => Err(format!("unknown angle mode '{other}', expected 'deg' or 'rad'")),
        }
    }
}
