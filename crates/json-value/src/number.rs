//! JSON number literals kept as exact decimal text.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Fractional digits written for floating point inputs.
const FLOAT_PRECISION: usize = 16;

/// A JSON number stored as its literal text.
///
/// The text always matches the JSON number grammar, so it can be written out
/// verbatim without going through a binary float.
///
/// # Example
///
/// ```
/// use json_value::Number;
///
/// assert_eq!(Number::from(-42i8).as_str(), "-42");
/// assert_eq!(Number::try_from(0.5f64).unwrap().as_str(), "0.5000000000000000");
/// assert_eq!("1.5e300".parse::<Number>().unwrap().as_str(), "1.5e300");
/// assert!("01".parse::<Number>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Returns the literal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the number, returning the literal text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the literal as a signed integer, if it is one and fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Parses the literal as an unsigned integer, if it is one and fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Converts the literal to the nearest finite `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|f| f.is_finite())
    }

    fn from_float(f: f64) -> Result<Self> {
        if !f.is_finite() {
            return Err(Error::InvalidNumber(f.to_string()));
        }
        Ok(Number(format!("{:.*}", FLOAT_PRECISION, f)))
    }
}

/// Checks `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
fn is_number_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let digits = |pos: &mut usize| {
        let start = *pos;
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
        *pos - start
    };

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }
    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            digits(&mut pos);
        }
        _ => return false,
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if digits(&mut pos) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }
    pos == bytes.len()
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if is_number_literal(s) {
            Ok(Number(s.to_string()))
        } else {
            Err(Error::InvalidNumber(s.to_string()))
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self> {
        Number::from_float(f)
    }
}

impl TryFrom<f32> for Number {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self> {
        Number::from_float(f64::from(f))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Number> for String {
    fn from(n: Number) -> Self {
        n.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_format_exactly() {
        assert_eq!(Number::from(123i8).as_str(), "123");
        assert_eq!(Number::from(-123i16).as_str(), "-123");
        assert_eq!(Number::from(i64::MIN).as_str(), "-9223372036854775808");
        assert_eq!(Number::from(u64::MAX).as_str(), "18446744073709551615");
        assert_eq!(Number::from(u128::MAX).as_str(), u128::MAX.to_string());
        assert_eq!(Number::from(0usize).as_str(), "0");
    }

    #[test]
    fn test_floats_use_fixed_precision() {
        assert_eq!(
            Number::try_from(-123.5f32).unwrap().as_str(),
            "-123.5000000000000000"
        );
        assert_eq!(
            Number::try_from(-123.45f64).unwrap().as_str(),
            "-123.4500000000000028"
        );
        assert_eq!(
            Number::try_from(0.1f32).unwrap().as_str(),
            "0.1000000014901161"
        );
        assert_eq!(Number::try_from(-123.45f64).unwrap().as_f64(), Some(-123.45));
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        assert!(matches!(
            Number::try_from(f64::NAN),
            Err(Error::InvalidNumber(_))
        ));
        assert!(Number::try_from(f64::INFINITY).is_err());
        assert!(Number::try_from(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_literal_grammar() {
        let valid = [
            "0", "-0", "1", "-123", "123.45", "0.5", "1e10", "1E+10", "-1.5e-7", "10",
        ];
        for text in valid {
            assert!(text.parse::<Number>().is_ok(), "{text} should be valid");
        }
        let invalid = [
            "", "-", "+1", "01", "-01", "1.", ".5", "1e", "1e+", "0x10", "NaN", "Infinity",
            " 1", "1 ", "1.2.3", "--1",
        ];
        for text in invalid {
            assert!(
                matches!(text.parse::<Number>(), Err(Error::InvalidNumber(_))),
                "{text:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_readers() {
        let n: Number = "123".parse().unwrap();
        assert_eq!(n.as_i64(), Some(123));
        assert_eq!(n.as_u64(), Some(123));
        assert_eq!(n.as_f64(), Some(123.0));

        let n: Number = "-1.25".parse().unwrap();
        assert_eq!(n.as_i64(), None);
        assert_eq!(n.as_u64(), None);
        assert_eq!(n.as_f64(), Some(-1.25));

        let n: Number = "1e400".parse().unwrap();
        assert_eq!(n.as_f64(), None);
        assert_eq!(n.to_string(), "1e400");
    }
}
