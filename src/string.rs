//! Text rendering for strings, characters, booleans and null values.
//!
//! Width and precision count Unicode scalar values. Precision acts as a
//! maximum length; width pads with spaces on the left, or on the right when
//! left-justified. Zero-fill and sign flags have no effect on text.

use crate::spec::FormatSpec;
use crate::FormatWriter;

/// Upper bound on filler emitted for a single directive.
pub const MAX_FILL: usize = 1 << 16;

/// Text rendered for null strings and null pointers.
pub const NULL_MARKER: &str = "(null)";

/// Writes `count` copies of `ch`, clamped to [`MAX_FILL`].
#[inline]
pub(crate) fn fill(out: &mut dyn FormatWriter, ch: char, count: usize) {
    if count > 0 {
        out.write_fill(ch, count.min(MAX_FILL));
    }
}

/// Renders a string slice.
///
/// ```rust
/// use spanfmt::{parse_format_spec, write_str};
///
/// let mut out = String::new();
/// write_str(&mut out, "formatting", &parse_format_spec("-8.4"));
/// assert_eq!(out, "form    ");
/// ```
pub fn write_str(out: &mut dyn FormatWriter, text: &str, spec: &FormatSpec<'_>) {
    let (text, chars) = match spec.precision {
        Some(max) => truncate_chars(text, max),
        None if spec.width.is_none() => {
            out.write(text);
            return;
        }
        None => (text, text.chars().count()),
    };

    let padding = spec.width.map_or(0, |width| width.saturating_sub(chars));
    if spec.left_justify {
        out.write(text);
        fill(out, ' ', padding);
    } else {
        fill(out, ' ', padding);
        out.write(text);
    }
}

/// Renders a single character.
pub fn write_char(out: &mut dyn FormatWriter, ch: char, spec: &FormatSpec<'_>) {
    let mut buf = [0u8; 4];
    write_str(out, ch.encode_utf8(&mut buf), spec);
}

/// Renders `true` or `false`.
pub fn write_bool(out: &mut dyn FormatWriter, value: bool, spec: &FormatSpec<'_>) {
    write_str(out, if value { "true" } else { "false" }, spec);
}

/// Renders the null marker, honoring width and justification.
pub fn write_null(out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) {
    let spec = FormatSpec {
        precision: None,
        ..*spec
    };
    write_str(out, NULL_MARKER, &spec);
}

/// Cuts `text` to at most `max` chars; returns the slice and its char count.
fn truncate_chars(text: &str, max: usize) -> (&str, usize) {
    let mut count = 0;
    for (offset, _) in text.char_indices() {
        if count == max {
            return (&text[..offset], count);
        }
        count += 1;
    }
    (text, count)
}
