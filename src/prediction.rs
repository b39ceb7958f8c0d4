//! Scalar prediction values and their text rendering.
//!
//! Rendering mirrors what pandas writes for the same column dtype, so files
//! produced here are byte-compatible with existing consumers of the
//! `DataFrame.to_csv` output.

use std::fmt;

/// A single model output: numeric or categorical.
///
/// # Examples
///
/// ```
/// use submission::prediction::Prediction;
///
/// assert_eq!(Prediction::from(1).to_string(), "1");
/// assert_eq!(Prediction::from(1.0).to_string(), "1.0");
/// assert_eq!(Prediction::from(true).to_string(), "True");
/// assert_eq!(Prediction::from("cat").to_string(), "cat");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// Signed integer label or count.
    Int(i64),
    /// Unsigned integer label or count.
    UInt(u64),
    /// Real-valued score, probability or regression output.
    Float(f64),
    /// Binary decision.
    Bool(bool),
    /// Categorical label.
    Label(String),
}

impl Prediction {
    /// Renders the value as it appears in the `prediction` column.
    ///
    /// `float_precision` switches floats to fixed-point with that many
    /// decimals; other variants ignore it. NaN always renders empty.
    #[must_use]
    pub fn render(&self, float_precision: Option<usize>) -> String {
        match self {
            Prediction::Int(v) => v.to_string(),
            Prediction::UInt(v) => v.to_string(),
            Prediction::Float(v) => match float_precision {
                Some(_) if v.is_nan() => String::new(),
                Some(p) => format!("{v:.p$}"),
                None => format_float(*v),
            },
            Prediction::Bool(true) => "True".to_string(),
            Prediction::Bool(false) => "False".to_string(),
            Prediction::Label(s) => s.clone(),
        }
    }

    /// Parses a rendered field back into a value.
    ///
    /// Integers win over floats, `True`/`False` become booleans, an empty
    /// field is a missing float (NaN) and anything else is a label.
    #[must_use]
    pub fn parse(field: &str) -> Self {
        if field.is_empty() {
            return Prediction::Float(f64::NAN);
        }
        match field {
            "True" => return Prediction::Bool(true),
            "False" => return Prediction::Bool(false),
            _ => {}
        }
        if let Ok(v) = field.parse::<i64>() {
            return Prediction::Int(v);
        }
        if let Ok(v) = field.parse::<u64>() {
            return Prediction::UInt(v);
        }
        if let Ok(v) = field.parse::<f64>() {
            return Prediction::Float(v);
        }
        Prediction::Label(field.to_string())
    }

    /// Returns the value as `f64` when it is numeric or boolean.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Prediction::Int(v) => Some(*v as f64),
            Prediction::UInt(v) => Some(*v as f64),
            Prediction::Float(v) => Some(*v),
            Prediction::Bool(v) => Some(f64::from(u8::from(*v))),
            Prediction::Label(_) => None,
        }
    }

    /// Returns the label text for categorical predictions.
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Prediction::Label(s) => Some(s),
            _ => None,
        }
    }

    /// True for a float NaN, which is written as an empty field.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Prediction::Float(v) if v.is_nan())
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Formats a float the way Python's `repr` does.
///
/// Shortest round-trip digits; scientific notation with a signed two-digit
/// exponent when the decimal exponent is below -4 or at least 16; integral
/// values keep a trailing `.0`.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return String::new();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v != 0.0 {
        let sci = format!("{v:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                if !(-4..16).contains(&exp) {
                    let sign = if exp < 0 { '-' } else { '+' };
                    return format!("{mantissa}e{sign}{:02}", exp.abs());
                }
            }
        }
    }
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Prediction {
            fn from(v: $t) -> Self {
                Prediction::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Prediction {
            fn from(v: $t) -> Self {
                Prediction::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Prediction {
    fn from(v: usize) -> Self {
        Prediction::UInt(v as u64)
    }
}

impl From<f64> for Prediction {
    fn from(v: f64) -> Self {
        Prediction::Float(v)
    }
}

impl From<f32> for Prediction {
    // Widen through the shortest decimal so 0.1f32 stays 0.1 instead of
    // 0.10000000149011612.
    fn from(v: f32) -> Self {
        let widened = v.to_string().parse::<f64>().unwrap_or(f64::from(v));
        Prediction::Float(widened)
    }
}

impl From<bool> for Prediction {
    fn from(v: bool) -> Self {
        Prediction::Bool(v)
    }
}

impl From<&str> for Prediction {
    fn from(v: &str) -> Self {
        Prediction::Label(v.to_string())
    }
}

impl From<String> for Prediction {
    fn from(v: String) -> Self {
        Prediction::Label(v)
    }
}

impl From<&String> for Prediction {
    fn from(v: &String) -> Self {
        Prediction::Label(v.clone())
    }
}

macro_rules! impl_from_ref {
    ($($t:ty),*) => {
        $(impl From<&$t> for Prediction {
            fn from(v: &$t) -> Self {
                Prediction::from(*v)
            }
        })*
    };
}

impl_from_ref!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool);

impl From<&Prediction> for Prediction {
    fn from(v: &Prediction) -> Self {
        v.clone()
    }
}

#[cfg(test)]
#[path = "prediction_tests.rs"]
mod tests;
