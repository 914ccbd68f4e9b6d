//! Argument support for third-party types, behind cargo features.
//!
//! ## `chrono`
//!
//! Dates and times take an strftime pattern as the directive's trailing text.
//! Width, precision and justification apply to the rendered text. Patterns
//! should start with `%` so they are not mistaken for flags or a conversion
//! code. An invalid pattern renders `#BADF`.
//!
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use spanfmt::{args, sformat};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! assert_eq!(sformat("{}", &args![date]), "2024-02-29");
//! assert_eq!(sformat("[{:12%d %b %Y}]", &args![date]), "[ 29 Feb 2024]");
//! # }
//! ```
//!
//! ## `bigint`
//!
//! `BigInt` and `BigUint` use the integer padding policy and the same
//! conversion codes as the built-in integers.
//!
//! ```rust
//! # #[cfg(feature = "bigint")] {
//! use num_bigint::BigInt;
//! use spanfmt::{args, sformat};
//!
//! let big: BigInt = BigInt::from(u128::MAX) * 16;
//! assert_eq!(sformat("{:#x}", &args![big]), "0xffffffffffffffffffffffffffffffff0");
//! # }
//! ```

#[cfg(feature = "chrono")]
mod time {
    use crate::error::MARKER_BAD_FORMAT;
    use crate::{write_str, Argument, FormatSpec, FormatValue, FormatWriter, ResultCode, ToArgument};
    use chrono::format::{Item, StrftimeItems};
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
    use std::fmt::{self, Write};

    const DATE: &str = "%Y-%m-%d";
    const TIME: &str = "%H:%M:%S%.f";
    const DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const RFC_3339: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

    fn write_strftime<F>(
        out: &mut dyn FormatWriter,
        spec: &FormatSpec<'_>,
        default: &str,
        render: F,
    ) -> ResultCode
    where
        F: FnOnce(StrftimeItems<'_>, &mut String) -> fmt::Result,
    {
        let pattern = if spec.trailing.is_empty() {
            default
        } else {
            spec.trailing
        };
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            tracing::debug!(pattern, "invalid strftime pattern");
            out.write(MARKER_BAD_FORMAT);
            return ResultCode::MalformedInput;
        }

        let mut text = String::new();
        // a valid pattern can still name fields the value lacks, e.g. %z on a naive time
        if render(StrftimeItems::new(pattern), &mut text).is_err() {
            tracing::debug!(pattern, "strftime pattern not applicable to value");
            out.write(MARKER_BAD_FORMAT);
            return ResultCode::MalformedInput;
        }
        write_str(out, &text, spec);
        ResultCode::Success
    }

    macro_rules! impl_naive {
        ($($ty:ty => $default:expr),* $(,)?) => {$(
            impl FormatValue for $ty {
                fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
                    write_strftime(out, spec, $default, |items, text| {
                        write!(text, "{}", self.format_with_items(items))
                    })
                }
            }

            impl ToArgument for $ty {
                fn to_argument(&self) -> Argument<'_> {
                    Argument::Custom(self)
                }
            }
        )*};
    }

    impl_naive!(NaiveDate => DATE, NaiveTime => TIME, NaiveDateTime => DATE_TIME);

    impl<Tz> FormatValue for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
            write_strftime(out, spec, RFC_3339, |items, text| {
                write!(text, "{}", self.format_with_items(items))
            })
        }
    }

    impl<Tz> ToArgument for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        fn to_argument(&self) -> Argument<'_> {
            Argument::Custom(self)
        }
    }

}

#[cfg(feature = "bigint")]
mod bigint {
    use crate::{
        write_digit_string, Argument, FormatSpec, FormatValue, FormatWriter, ResultCode, ToArgument,
    };
    use num_bigint::{BigInt, BigUint, Sign};

    fn write_magnitude(
        out: &mut dyn FormatWriter,
        negative: bool,
        magnitude: &BigUint,
        spec: &FormatSpec<'_>,
    ) -> ResultCode {
        let (radix, upper) = match spec.conversion_code {
            Some('x' | 'p') => (16, false),
            Some('X') => (16, true),
            Some('o') => (8, false),
            Some('b') => (2, false),
            _ => (10, false),
        };
        let mut digits = magnitude.to_str_radix(radix);
        if upper {
            digits.make_ascii_uppercase();
        }
        write_digit_string(out, negative, &digits, spec);
        ResultCode::Success
    }

    impl FormatValue for BigUint {
        fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
            write_magnitude(out, false, self, spec)
        }
    }

    impl FormatValue for BigInt {
        fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
            write_magnitude(out, self.sign() == Sign::Minus, self.magnitude(), spec)
        }
    }

    impl ToArgument for BigUint {
        fn to_argument(&self) -> Argument<'_> {
            Argument::Custom(self)
        }
    }

    impl ToArgument for BigInt {
        fn to_argument(&self) -> Argument<'_> {
            Argument::Custom(self)
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::{args, sformat, sprintf};
        use num_bigint::{BigInt, BigUint};

        #[test]
        fn test_matches_builtin_rendering() {
            for value in [0i64, 1, -1, 255, -4096, i64::MIN, i64::MAX] {
                let big = BigInt::from(value);
                for spec in ["{}", "{:+08}", "{:#x}", "{:#X}", "{:#b}", "{:-12o};", "{:.5}"] {
                    assert_eq!(
                        sformat(spec, &args![big]),
                        sformat(spec, &args![value]),
                        "spec {spec} value {value}"
                    );
                }
            }
        }

        #[test]
        fn test_beyond_u128() {
            let big = BigUint::from(u128::MAX) + 1u32;
            assert_eq!(
                sformat("{}", &args![big]),
                "340282366920938463463374607431768211456"
            );
            assert_eq!(sprintf("%#o", &args![BigUint::from(8u32)]), "010");
        }
    }
}
