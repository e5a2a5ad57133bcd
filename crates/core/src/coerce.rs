/// Errors produced while coercing a flag's value token into a typed
/// field value.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    /// The flag had no value token and the target type requires one.
    ///
    /// Boolean, `Option`, and `Vec` targets accept an absent value
    /// (`true`, `None`, and empty respectively); every other target
    /// produces this error.
    #[error("no value given")]
    MissingValue,

    /// The value token failed to parse as the target type.
    #[error("cannot parse {value:?} as {target}")]
    Parse {
        /// The offending value token, trimmed.
        value: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// The value token failed to parse as a boolean.
    ///
    /// Distinguished from [`CoerceError::Parse`] so the record decoder
    /// can treat a speculatively consumed token as an ordinary argument
    /// and fall back to bare-flag handling. Never surfaced from a
    /// record decode.
    #[error("cannot parse as bool")]
    BoolParse,
}

/// Conversion from a flag's optional value token into a field value.
///
/// `value` is `None` when the flag had no associated token (a bare flag
/// at the end of the input or immediately followed by another flag).
/// Present values arrive untrimmed; implementations trim surrounding
/// whitespace before parsing.
///
/// Schema field types are bounded by this trait, so a field of an
/// unsupported type is rejected at compile time.
pub trait FromArgValue: Sized {
    /// Convert an optional value token into `Self`.
    fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError>;
}

impl FromArgValue for String {
    fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError> {
        let s = value.ok_or(CoerceError::MissingValue)?;
        Ok(s.trim().to_string())
    }
}

impl FromArgValue for bool {
    // A bare flag (absent value) is true: presence implies truth.
    fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError> {
        let Some(s) = value else {
            return Ok(true);
        };
        parse_bool(s.trim()).ok_or(CoerceError::BoolParse)
    }
}

/// The accepted boolean literal forms.
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl<T: FromArgValue> FromArgValue for Option<T> {
    // Absent leaves the option unset; present coerces against the inner
    // type, with failures propagated untouched.
    fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError> {
        match value {
            None => Ok(None),
            Some(s) => T::from_arg_value(Some(s)).map(Some),
        }
    }
}

impl<T: FromArgValue> FromArgValue for Vec<T> {
    // Splits on `,` and coerces every piece against the element type.
    // Consecutive commas produce empty pieces, so the output length
    // always equals the number of comma-separated pieces. One element
    // failure aborts the whole coercion.
    fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError> {
        let Some(s) = value else {
            return Ok(Vec::new());
        };
        s.trim()
            .split(',')
            .map(|piece| T::from_arg_value(Some(piece)))
            .collect()
    }
}

// Numeric targets: the standard parser handles base-10 integers with
// range checks against the width, and decimal floats at the requested
// precision.
macro_rules! numeric_from_arg_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl FromArgValue for $ty {
            fn from_arg_value(value: Option<&str>) -> Result<Self, CoerceError> {
                let s = value.ok_or(CoerceError::MissingValue)?.trim();
                s.parse::<$ty>().map_err(|_| CoerceError::Parse {
                    value: s.to_string(),
                    target: stringify!($ty),
                })
            }
        })+
    };
}

numeric_from_arg_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_passthrough_trims() {
        assert_eq!(
            String::from_arg_value(Some("  hello  ")),
            Ok("hello".to_string())
        );
        assert_eq!(String::from_arg_value(None), Err(CoerceError::MissingValue));
    }

    #[test]
    fn bool_literal_forms() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(bool::from_arg_value(Some(s)), Ok(true), "form {s:?}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(bool::from_arg_value(Some(s)), Ok(false), "form {s:?}");
        }
        // Anything else is the distinguished failure, not a Parse error.
        assert_eq!(
            bool::from_arg_value(Some("yes")),
            Err(CoerceError::BoolParse)
        );
        assert_eq!(
            bool::from_arg_value(Some("tRuE")),
            Err(CoerceError::BoolParse)
        );
    }

    #[test]
    fn bool_bare_flag_is_true() {
        assert_eq!(bool::from_arg_value(None), Ok(true));
    }

    #[test]
    fn numeric_parsing_and_range() {
        assert_eq!(u8::from_arg_value(Some("255")), Ok(255));
        assert_eq!(
            u8::from_arg_value(Some("256")),
            Err(CoerceError::Parse {
                value: "256".to_string(),
                target: "u8",
            })
        );
        assert_eq!(i32::from_arg_value(Some(" -7 ")), Ok(-7));
        assert_eq!(f64::from_arg_value(Some("2.5")), Ok(2.5));
        assert_eq!(u32::from_arg_value(None), Err(CoerceError::MissingValue));
    }

    #[test]
    fn option_wraps_and_propagates() {
        assert_eq!(Option::<String>::from_arg_value(None), Ok(None));
        assert_eq!(
            Option::<String>::from_arg_value(Some("x")),
            Ok(Some("x".to_string()))
        );
        // Inner failures come through untouched, including the
        // distinguished boolean case.
        assert_eq!(
            Option::<bool>::from_arg_value(Some("nope")),
            Err(CoerceError::BoolParse)
        );
        assert_eq!(
            Option::<u8>::from_arg_value(Some("999")),
            Err(CoerceError::Parse {
                value: "999".to_string(),
                target: "u8",
            })
        );
    }

    #[test]
    fn vec_splits_on_commas() {
        assert_eq!(
            Vec::<String>::from_arg_value(Some("a, b ,c")),
            Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        // Consecutive commas keep their empty pieces.
        assert_eq!(
            Vec::<String>::from_arg_value(Some("a,,b")),
            Ok(vec!["a".to_string(), String::new(), "b".to_string()])
        );
        assert_eq!(Vec::<u16>::from_arg_value(Some("1,2,3")), Ok(vec![1, 2, 3]));
        assert_eq!(Vec::<String>::from_arg_value(None), Ok(Vec::new()));
    }

    #[test]
    fn vec_element_failure_aborts() {
        assert_eq!(
            Vec::<u16>::from_arg_value(Some("1,x,3")),
            Err(CoerceError::Parse {
                value: "x".to_string(),
                target: "u16",
            })
        );
    }
}
