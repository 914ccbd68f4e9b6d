//! Per-directive format specifications.
//!
//! A [`FormatSpec`] is the structured form of the control text inside a
//! directive: sign policy, alternate form, zero-fill, justification, width,
//! precision, conversion code, and any trailing text meant for custom
//! formatters.
//!
//! # Brace dialect grammar
//!
//! ```text
//! directive := '{' index? (':' spec)? '}'
//! spec      := flag* width? ('.' precision)? code? trailing
//! flag      := '+' | ' ' | '-' | '#' | '0'
//! code      := one of "bcsdioxXufFeEaAgGp"
//! ```
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `+`  | always print a sign |
//! | ` `  | print a space in place of a positive sign |
//! | `-`  | left-justify (pad on the right with spaces) |
//! | `#`  | alternate form (`0x`, `0b`, `0o` prefixes) |
//! | `0`  | zero-fill between sign/prefix and digits |
//!
//! Flags may appear in any order. `0` only counts as a flag before width digits
//! start, so `{:07}` is zero-fill with width 7 while `{:70}` is width 70.
//!
//! # Printf dialect
//!
//! Same flags, width and precision, followed by optional C length modifiers
//! (`hh h l ll j z t L q`, accepted and ignored) and a mandatory conversion
//! letter which also terminates the directive.

/// Conversion letters recognized by both dialects.
pub const CONVERSION_CODES: &str = "bcsdioxXufFeEaAgGp";

/// Printf length modifiers; parsed and discarded.
const LENGTH_MODIFIERS: &[u8] = b"hljztLq";

/// Sign policy for non-negative numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignMode {
    /// No sign for non-negative values.
    #[default]
    Default,
    /// Always emit `+` for non-negative values.
    Always,
    /// Emit a space for non-negative values.
    Space,
}

/// Which template dialect produced a spec.
///
/// Renderers consult it only where the two dialects disagree on output, such as
/// the octal alternate-form tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Brace,
    Printf,
}

/// Parsed formatting controls for one directive.
///
/// Every field defaults to "no effect", so `FormatSpec::default()` renders an
/// argument in its canonical form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSpec<'a> {
    pub conversion_code: Option<char>,
    pub sign_mode: SignMode,
    pub alternate_form: bool,
    pub zero_pad: bool,
    pub left_justify: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// Unrecognized text after the generic fields, passed to custom formatters.
    pub trailing: &'a str,
    pub dialect: Dialect,
}

impl<'a> FormatSpec<'a> {
    /// Creates an empty spec.
    #[must_use]
    pub const fn new() -> Self {
        FormatSpec {
            conversion_code: None,
            sign_mode: SignMode::Default,
            alternate_form: false,
            zero_pad: false,
            left_justify: false,
            width: None,
            precision: None,
            trailing: "",
            dialect: Dialect::Brace,
        }
    }

    /// Zero-fill only applies when the value is not left-justified.
    #[inline]
    #[must_use]
    pub const fn fills_with_zeros(&self) -> bool {
        self.zero_pad && !self.left_justify
    }

    #[must_use]
    pub fn with_code(mut self, code: char) -> Self {
        self.conversion_code = Some(code);
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Cursor over the ASCII structure of a spec.
struct SpecCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> SpecCursor<'a> {
    fn new(text: &'a str) -> Self {
        SpecCursor { text, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn flags(&mut self, spec: &mut FormatSpec<'a>) {
        while let Some(byte) = self.peek() {
            match byte {
                b'+' => spec.sign_mode = SignMode::Always,
                b' ' => {
                    if spec.sign_mode != SignMode::Always {
                        spec.sign_mode = SignMode::Space;
                    }
                }
                b'-' => spec.left_justify = true,
                b'#' => spec.alternate_form = true,
                b'0' => spec.zero_pad = true,
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Option<usize> {
        let (value, consumed) = parse_unsigned(&self.text.as_bytes()[self.pos..]);
        self.pos += consumed;
        (consumed > 0).then_some(value)
    }

    fn width_and_precision(&mut self, spec: &mut FormatSpec<'a>) {
        spec.width = self.number();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            spec.precision = Some(self.number().unwrap_or(0));
        }
    }

    fn conversion_code(&mut self) -> Option<char> {
        let byte = self.peek()?;
        if CONVERSION_CODES.as_bytes().contains(&byte) {
            self.pos += 1;
            Some(char::from(byte))
        } else {
            None
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

/// Parses a run of decimal digits, saturating on overflow.
///
/// Returns the value and the number of bytes consumed (zero when `bytes` does
/// not start with a digit).
pub(crate) fn parse_unsigned(bytes: &[u8]) -> (usize, usize) {
    let mut value = 0usize;
    let mut consumed = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(byte - b'0'));
        consumed += 1;
    }
    (value, consumed)
}

/// Parses brace-dialect control text (the part after `:`, before `}`).
///
/// ```rust
/// use spanfmt::{parse_format_spec, SignMode};
///
/// let spec = parse_format_spec("+08.3x");
/// assert_eq!(spec.sign_mode, SignMode::Always);
/// assert!(spec.zero_pad);
/// assert_eq!(spec.width, Some(8));
/// assert_eq!(spec.precision, Some(3));
/// assert_eq!(spec.conversion_code, Some('x'));
/// ```
#[must_use]
pub fn parse_format_spec(text: &str) -> FormatSpec<'_> {
    let mut spec = FormatSpec::new();
    let mut cursor = SpecCursor::new(text);
    cursor.flags(&mut spec);
    cursor.width_and_precision(&mut spec);
    spec.conversion_code = cursor.conversion_code();
    spec.trailing = cursor.rest();
    spec
}

/// Outcome of parsing a printf directive body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintfSpec<'a> {
    /// A complete spec; `consumed` counts bytes including the conversion letter.
    Complete { spec: FormatSpec<'a>, consumed: usize },
    /// The text ran out before a conversion letter.
    Incomplete,
    /// A byte outside the accepted set was found at `offset`.
    Invalid { offset: usize },
}

/// Parses a printf-dialect directive body starting right after `%` (and after
/// any `n$` positional prefix).
///
/// ```rust
/// use spanfmt::{parse_printf_spec, PrintfSpec};
///
/// match parse_printf_spec("-8.2lf rest") {
///     PrintfSpec::Complete { spec, consumed } => {
///         assert!(spec.left_justify);
///         assert_eq!(spec.width, Some(8));
///         assert_eq!(spec.conversion_code, Some('f'));
///         assert_eq!(consumed, 6);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[must_use]
pub fn parse_printf_spec(text: &str) -> PrintfSpec<'_> {
    let mut spec = FormatSpec {
        dialect: Dialect::Printf,
        ..FormatSpec::new()
    };
    let mut cursor = SpecCursor::new(text);
    cursor.flags(&mut spec);
    cursor.width_and_precision(&mut spec);
    while cursor.peek().is_some_and(|b| LENGTH_MODIFIERS.contains(&b)) {
        cursor.pos += 1;
    }
    match cursor.peek() {
        None => PrintfSpec::Incomplete,
        Some(_) => match cursor.conversion_code() {
            Some(code) => {
                spec.conversion_code = Some(code);
                PrintfSpec::Complete {
                    spec,
                    consumed: cursor.pos,
                }
            }
            None => PrintfSpec::Invalid { offset: cursor.pos },
        },
    }
}
