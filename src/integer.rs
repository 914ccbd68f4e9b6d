//! Integer rendering.
//!
//! Values are split into a sign/prefix part and a digit string. Digits are
//! generated back-to-front into a stack buffer sized for the widest magnitude
//! of the value's class (64 or 128 bits in base 2), so rendering never
//! allocates.
//!
//! | Code | Base | Brace `#` tag | Printf `#` tag |
//! |------|------|---------------|----------------|
//! | none, `d`, `i`, `u` | 10 | `0d` | none |
//! | `x` / `X` | 16 | `0x` / `0X` | `0x` / `0X` |
//! | `o` | 8 | `0o` | `0` |
//! | `b` | 2 | `0b` | `0b` |
//! | `p` | 16 | `0x` (always) | `0x` (always) |
//!
//! Precision zeros and width padding are each capped at [`MAX_FILL`](crate::MAX_FILL).

use crate::spec::{Dialect, FormatSpec, SignMode};
use crate::string::fill;
use crate::FormatWriter;

const DECIMAL_PAIRS: &[u8; 200] = b"\
0001020304050607080910111213141516171819\
2021222324252627282930313233343536373839\
4041424344454647484950515253545556575859\
6061626364656667686970717273747576777879\
8081828384858687888990919293949596979899";

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Unsigned magnitudes the digit generators work on.
trait Magnitude: Copy {
    fn is_zero(self) -> bool;
    fn below_100(self) -> bool;
    /// `self & mask`, for masks that fit in a nibble.
    fn low(self, mask: u8) -> u8;
    fn shr(self, bits: u32) -> Self;
    /// `(self / 100, self % 100)`
    fn div_rem_100(self) -> (Self, u8);
    /// The value as a byte; only called once it is below 100.
    fn small(self) -> u8;
}

macro_rules! impl_magnitude {
    ($($ty:ty),*) => {$(
        impl Magnitude for $ty {
            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn below_100(self) -> bool {
                self < 100
            }

            #[inline]
            fn low(self, mask: u8) -> u8 {
                (self & <$ty>::from(mask)) as u8
            }

            #[inline]
            fn shr(self, bits: u32) -> Self {
                self >> bits
            }

            #[inline]
            fn div_rem_100(self) -> (Self, u8) {
                (self / 100, (self % 100) as u8)
            }

            #[inline]
            fn small(self) -> u8 {
                self as u8
            }
        }
    )*};
}

impl_magnitude!(u64, u128);

/// Digit alphabet and grouping chosen from the conversion code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Decimal,
    Hex { upper: bool },
    Octal,
    Binary,
}

impl Radix {
    fn from_code(code: Option<char>) -> Radix {
        match code {
            Some('x' | 'p') => Radix::Hex { upper: false },
            Some('X') => Radix::Hex { upper: true },
            Some('o') => Radix::Octal,
            Some('b') => Radix::Binary,
            _ => Radix::Decimal,
        }
    }
}

/// Writes `value` into the tail of `buf`, returning the index of the first
/// digit.
fn write_digits<T: Magnitude, const N: usize>(
    buf: &mut [u8; N],
    mut value: T,
    radix: Radix,
) -> usize {
    let mut end = N;
    match radix {
        Radix::Decimal => {
            // two digits per division step
            while !value.below_100() {
                let (rest, pair) = value.div_rem_100();
                let idx = usize::from(pair) * 2;
                end -= 2;
                buf[end] = DECIMAL_PAIRS[idx];
                buf[end + 1] = DECIMAL_PAIRS[idx + 1];
                value = rest;
            }
            let last = value.small();
            if last >= 10 {
                let idx = usize::from(last) * 2;
                end -= 2;
                buf[end] = DECIMAL_PAIRS[idx];
                buf[end + 1] = DECIMAL_PAIRS[idx + 1];
            } else {
                end -= 1;
                buf[end] = b'0' + last;
            }
        }
        Radix::Hex { upper } => {
            let alphabet = if upper { HEX_UPPER } else { HEX_LOWER };
            loop {
                end -= 1;
                buf[end] = alphabet[usize::from(value.low(0xF))];
                value = value.shr(4);
                if value.is_zero() {
                    break;
                }
            }
        }
        Radix::Octal => loop {
            end -= 1;
            buf[end] = b'0' + value.low(0x7);
            value = value.shr(3);
            if value.is_zero() {
                break;
            }
        },
        Radix::Binary => loop {
            end -= 1;
            buf[end] = b'0' + value.low(0x1);
            value = value.shr(1);
            if value.is_zero() {
                break;
            }
        },
    }
    end
}

/// Sign character plus base tag; at most three bytes.
struct Prefix {
    buf: [u8; 3],
    len: usize,
}

impl Prefix {
    fn new() -> Self {
        Prefix {
            buf: [0; 3],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    fn as_str(&self) -> &str {
        // only ASCII is pushed
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

fn build_prefix(spec: &FormatSpec<'_>, negative: bool, zero: bool) -> Prefix {
    let mut prefix = Prefix::new();
    // printf applies `+` and space only to `d` and `i`
    let signed_conversion = spec.dialect == Dialect::Brace
        || (spec.conversion_code != Some('u')
            && Radix::from_code(spec.conversion_code) == Radix::Decimal);
    if negative {
        prefix.push(b'-');
    } else if signed_conversion {
        match spec.sign_mode {
            SignMode::Always => prefix.push(b'+'),
            SignMode::Space => prefix.push(b' '),
            SignMode::Default => {}
        }
    }

    let code = spec.conversion_code;
    if code == Some('p') {
        prefix.push(b'0');
        prefix.push(b'x');
        return prefix;
    }
    if !spec.alternate_form {
        return prefix;
    }
    match (spec.dialect, Radix::from_code(code)) {
        (Dialect::Brace, Radix::Decimal) => {
            prefix.push(b'0');
            prefix.push(b'd');
        }
        (Dialect::Printf, Radix::Decimal) => {}
        (Dialect::Printf, Radix::Octal) => {
            // C only guarantees a leading zero digit
            if !zero {
                prefix.push(b'0');
            }
        }
        (_, radix) => {
            prefix.push(b'0');
            prefix.push(match radix {
                Radix::Hex { upper: true } => b'X',
                Radix::Hex { upper: false } => b'x',
                Radix::Octal => b'o',
                _ => b'b',
            });
        }
    }
    prefix
}

fn write_integer<T: Magnitude, const N: usize>(
    out: &mut dyn FormatWriter,
    negative: bool,
    magnitude: T,
    spec: &FormatSpec<'_>,
) {
    let mut buf = [0u8; N];
    let start = write_digits(&mut buf, magnitude, Radix::from_code(spec.conversion_code));
    // ASCII digits only
    let digits = std::str::from_utf8(&buf[start..]).unwrap_or("");

    write_digit_string(out, negative, digits, spec);
}

/// Renders a signed 64-bit (or narrower) integer.
///
/// ```rust
/// use spanfmt::{write_signed, FormatSpec};
///
/// let mut out = String::new();
/// write_signed(&mut out, i64::MIN, &FormatSpec::new());
/// assert_eq!(out, "-9223372036854775808");
/// ```
pub fn write_signed(out: &mut dyn FormatWriter, value: i64, spec: &FormatSpec<'_>) {
    // unsigned_abs handles i64::MIN, whose magnitude does not fit in i64
    write_integer::<u64, 64>(out, value < 0, value.unsigned_abs(), spec);
}

/// Renders an unsigned 64-bit (or narrower) integer.
pub fn write_unsigned(out: &mut dyn FormatWriter, value: u64, spec: &FormatSpec<'_>) {
    write_integer::<u64, 64>(out, false, value, spec);
}

/// Renders a signed 128-bit integer.
pub fn write_signed_wide(out: &mut dyn FormatWriter, value: i128, spec: &FormatSpec<'_>) {
    write_integer::<u128, 128>(out, value < 0, value.unsigned_abs(), spec);
}

/// Renders an unsigned 128-bit integer.
pub fn write_unsigned_wide(out: &mut dyn FormatWriter, value: u128, spec: &FormatSpec<'_>) {
    write_integer::<u128, 128>(out, false, value, spec);
}

/// Renders a pointer address.
///
/// With no conversion code (or `p`) the address prints as `0x`-prefixed
/// lower-case hex; any other code formats it like an unsigned integer.
pub fn write_pointer(out: &mut dyn FormatWriter, address: usize, spec: &FormatSpec<'_>) {
    let spec = match spec.conversion_code {
        None => spec.with_code('p'),
        Some(_) => *spec,
    };
    write_unsigned(out, address as u64, &spec);
}

/// Pads an already rendered digit string (with its sign) using the integer
/// padding policy. Used by formatters whose digits come from elsewhere, such
/// as arbitrary-precision integers.
pub fn write_digit_string(
    out: &mut dyn FormatWriter,
    negative: bool,
    digits: &str,
    spec: &FormatSpec<'_>,
) {
    let prefix = build_prefix(spec, negative, digits == "0");
    let prefix = prefix.as_str();
    let leading_zeros = spec
        .precision
        .map_or(0, |precision| precision.saturating_sub(digits.len()));
    let content = prefix
        .len()
        .saturating_add(leading_zeros)
        .saturating_add(digits.len());
    let padding = spec
        .width
        .map_or(0, |width| width.saturating_sub(content));

    if spec.left_justify {
        out.write(prefix);
        fill(out, '0', leading_zeros);
        out.write(digits);
        fill(out, ' ', padding);
    } else if spec.fills_with_zeros() && spec.precision.is_none() {
        out.write(prefix);
        fill(out, '0', padding.saturating_add(leading_zeros));
        out.write(digits);
    } else {
        fill(out, ' ', padding);
        out.write(prefix);
        fill(out, '0', leading_zeros);
        out.write(digits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_format_spec;
    use crate::string::MAX_FILL;

    fn signed(value: i64, spec: &str) -> String {
        let mut out = String::new();
        write_signed(&mut out, value, &parse_format_spec(spec));
        out
    }

    fn unsigned(value: u64, spec: &str) -> String {
        let mut out = String::new();
        write_unsigned(&mut out, value, &parse_format_spec(spec));
        out
    }

    #[test]
    fn test_decimal_pairs() {
        assert_eq!(unsigned(0, ""), "0");
        assert_eq!(unsigned(7, ""), "7");
        assert_eq!(unsigned(10, ""), "10");
        assert_eq!(unsigned(99, ""), "99");
        assert_eq!(unsigned(100, ""), "100");
        assert_eq!(unsigned(12345, ""), "12345");
        assert_eq!(unsigned(u64::MAX, ""), "18446744073709551615");
    }

    #[test]
    fn test_minimum_values() {
        assert_eq!(signed(i64::from(i8::MIN), ""), "-128");
        assert_eq!(signed(i64::from(i16::MIN), ""), "-32768");
        assert_eq!(signed(i64::from(i32::MIN), ""), "-2147483648");
        assert_eq!(signed(i64::MIN, ""), "-9223372036854775808");

        let mut out = String::new();
        write_signed_wide(&mut out, i128::MIN, &FormatSpec::new());
        assert_eq!(out, "-170141183460469231731687303715884105728");
    }

    #[test]
    fn test_bases() {
        assert_eq!(unsigned(255, "x"), "ff");
        assert_eq!(unsigned(255, "X"), "FF");
        assert_eq!(unsigned(9, "o"), "11");
        assert_eq!(unsigned(5, "b"), "101");
        assert_eq!(signed(-2, "b"), "-10");
        assert_eq!(signed(-27, "o"), "-33");

        let mut out = String::new();
        write_unsigned_wide(&mut out, u128::MAX, &parse_format_spec("b"));
        assert_eq!(out.len(), 128);
        assert!(out.bytes().all(|b| b == b'1'));
    }

    #[test]
    fn test_alternate_form() {
        assert_eq!(unsigned(0, "#x"), "0x0");
        assert_eq!(unsigned(17, "#X"), "0X11");
        assert_eq!(unsigned(256, "#x"), "0x100");
        assert_eq!(signed(-2, "#b"), "-0b10");
        assert_eq!(signed(-8, "#o"), "-0o10");
        assert_eq!(signed(42, "#"), "0d42");
    }

    #[test]
    fn test_padding_policy() {
        assert_eq!(signed(1234, "7d"), "   1234");
        assert_eq!(signed(1234, "-7d"), "1234   ");
        assert_eq!(signed(1234, "07d"), "0001234");
        assert_eq!(signed(1234, "2d"), "1234");
        assert_eq!(signed(1234, "+7d"), "  +1234");
        assert_eq!(signed(1234, "+07d"), "+001234");
        assert_eq!(signed(-7, "05"), "-0007");
        assert_eq!(signed(-7, "-05"), "-7   ");
        assert_eq!(signed(255, "#08x"), "0x0000ff");
        assert_eq!(signed(5, " 3"), "  5");
        assert_eq!(signed(5, " 03"), " 05");
    }

    #[test]
    fn test_precision_is_minimum_digits() {
        assert_eq!(signed(1234, "+.7d"), "+0001234");
        assert_eq!(signed(1234, ".2d"), "1234");
        assert_eq!(signed(-42, "8.4"), "   -0042");
        assert_eq!(signed(-42, "08.4"), "   -0042");
        assert_eq!(signed(42, "-8.4;"), "0042    ");
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        let text = signed(7, ".70000");
        assert_eq!(text.len(), MAX_FILL + 1);
        assert!(text.ends_with("07"));

        let text = signed(5, "+.99999999999999999999999");
        assert_eq!(text.len(), MAX_FILL + 2);
        assert!(text.starts_with("+0"));
        assert!(text.ends_with('5'));
    }

    #[test]
    fn test_pointer() {
        let mut out = String::new();
        write_pointer(&mut out, 0xDEAD_C0DE, &FormatSpec::new());
        assert_eq!(out, "0xdeadc0de");

        out.clear();
        write_pointer(&mut out, 0xDEAD_C0DE, &parse_format_spec("X"));
        assert_eq!(out, "DEADC0DE");
    }

    #[test]
    fn test_digit_string_padding() {
        let mut out = String::new();
        write_digit_string(&mut out, true, "123", &parse_format_spec("06"));
        assert_eq!(out, "-00123");
    }
}
