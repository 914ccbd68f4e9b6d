//! Printf-dialect template scanner.
//!
//! Directives start with `%` and end at their conversion letter:
//!
//! - `%%` renders `%`
//! - `%[flags][width][.precision][length]code` takes the next implicit argument
//! - `%N$...` selects argument `N` (1-based) and then parses a spec as usual
//! - `%N%` selects argument `N` (1-based) with no spec at all
//!
//! Leading digits that are followed by neither `$` nor `%` are the width.
//! Index resolution and error markers match the brace dialect: `#RNGE` for a
//! missing argument, `#BADF` (resuming at the offending character) for an
//! unknown conversion letter, `#INCL` (stopping) when the template ends inside
//! a directive.

use crate::error::{MARKER_BAD_FORMAT, MARKER_INCOMPLETE, MARKER_OUT_OF_RANGE};
use crate::spec::{parse_printf_spec, parse_unsigned, Dialect, FormatSpec, PrintfSpec};
use crate::{FormatArgs, FormatWriter, ResultCode};

const PERCENT: u8 = b'%';
const POSITIONAL: u8 = b'$';

/// Formats `template` into `out` using the printf dialect.
pub(crate) fn printf_impl(
    out: &mut dyn FormatWriter,
    template: &str,
    args: FormatArgs<'_, '_>,
) -> ResultCode {
    let bytes = template.as_bytes();
    let mut result = ResultCode::Success;
    let mut next_index = 0usize;
    let mut span = 0usize;
    let mut cur = 0usize;

    while cur < bytes.len() {
        if bytes[cur] != PERCENT {
            cur += 1;
            continue;
        }
        if cur > span {
            out.write(&template[span..cur]);
        }
        cur += 1;

        let Some(&first) = bytes.get(cur) else {
            tracing::debug!(offset = cur - 1, "unterminated printf directive");
            out.write(MARKER_INCOMPLETE);
            return result.merge(ResultCode::MalformedInput);
        };
        if first == PERCENT {
            span = cur;
            cur += 1;
            continue;
        }

        // positional prefix: `N$` or `N%`
        let (number, digits) = parse_unsigned(&bytes[cur..]);
        let mut explicit = None;
        let mut bare = false;
        if digits > 0 {
            match bytes.get(cur + digits) {
                Some(&POSITIONAL) => {
                    explicit = Some(number);
                    cur += digits + 1;
                }
                Some(&PERCENT) => {
                    explicit = Some(number);
                    bare = true;
                    cur += digits + 1;
                }
                _ => {}
            }
        }

        let spec = if bare {
            FormatSpec {
                dialect: Dialect::Printf,
                ..FormatSpec::new()
            }
        } else {
            match parse_printf_spec(&template[cur..]) {
                PrintfSpec::Complete { spec, consumed } => {
                    cur += consumed;
                    spec
                }
                PrintfSpec::Incomplete => {
                    tracing::debug!(offset = cur, "unterminated printf directive");
                    out.write(MARKER_INCOMPLETE);
                    return result.merge(ResultCode::MalformedInput);
                }
                PrintfSpec::Invalid { offset } => {
                    tracing::debug!(offset = cur + offset, "unknown printf conversion");
                    out.write(MARKER_BAD_FORMAT);
                    result = result.merge(ResultCode::MalformedInput);
                    cur += offset;
                    span = cur;
                    continue;
                }
            }
        };
        span = cur;

        // positions are 1-based; `%0$` can never be in range
        let index = match explicit {
            Some(0) => None,
            Some(position) => Some(position - 1),
            None => Some(next_index),
        };
        let code = match index {
            Some(index) => {
                next_index = index.saturating_add(1);
                args.format_arg(out, index, &spec)
            }
            None => ResultCode::OutOfRange,
        };
        if code == ResultCode::OutOfRange {
            tracing::trace!(?index, count = args.len(), "printf argument index out of range");
            out.write(MARKER_OUT_OF_RANGE);
        }
        result = result.merge(code);
    }

    if span < bytes.len() {
        out.write(&template[span..]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, Argument};

    fn run(template: &str, values: &[Argument<'_>]) -> (String, ResultCode) {
        let mut out = String::new();
        let code = printf_impl(&mut out, template, FormatArgs::new(values));
        (out, code)
    }

    #[test]
    fn test_basic() {
        assert_eq!(run("a%sd1%d4", &args!["bc", 23]).0, "abcd1234");
        assert_eq!(run("%i %d", &args![12, 34]).0, "12 34");
        assert_eq!(run("%4i", &args![12]).0, "  12");
        assert_eq!(run("100%%", &[]).0, "100%");
    }

    #[test]
    fn test_positional() {
        assert_eq!(run("%2$d %1$s", &args!["abc", 123]).0, "123 abc");
        assert_eq!(run("%2% %1%", &args![456, "def"]).0, "def 456");
        assert_eq!(run("%2$d %s", &args![1, 2, "three"]).0, "2 three");
    }

    #[test]
    fn test_leading_digits_are_width() {
        assert_eq!(run("[%05d]", &args![42]).0, "[00042]");
        assert_eq!(run("[%5s]", &args!["ab"]).0, "[   ab]");
    }

    #[test]
    fn test_errors() {
        let (out, code) = run("%d %d", &args![1]);
        assert_eq!(out, "1 #RNGE");
        assert_eq!(code, ResultCode::OutOfRange);

        let (out, code) = run("%0$d", &args![1]);
        assert_eq!(out, "#RNGE");
        assert_eq!(code, ResultCode::OutOfRange);

        let (out, code) = run("%y then %d", &args![5]);
        assert_eq!(out, "#BADFy then 5");
        assert_eq!(code, ResultCode::MalformedInput);

        let (out, code) = run("end %-08", &args![5]);
        assert_eq!(out, "end #INCL");
        assert_eq!(code, ResultCode::MalformedInput);

        let (out, code) = run("end %", &[]);
        assert_eq!(out, "end #INCL");
        assert_eq!(code, ResultCode::MalformedInput);
    }

    #[test]
    fn test_printf_octal_tag() {
        assert_eq!(run("%#o %#o", &args![8, 0]).0, "010 0");
        assert_eq!(run("%#x", &args![255]).0, "0xff");
        assert_eq!(run("%#d", &args![7]).0, "7");
    }
}
