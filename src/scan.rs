//! Brace-dialect template scanner.
//!
//! Walks a template such as `"{0:+07d} and {}"`, writing literal spans and
//! rendered arguments to the sink in order.
//!
//! ## Grammar
//!
//! - `{{` renders `{` and `}}` renders `}`; a lone `}` is literal text
//! - `{}` takes the next implicit argument, `{N}` argument `N` (0-based)
//! - `{N:spec}` / `{:spec}` add formatting controls (see [`crate::spec`])
//!
//! ## Index resolution
//!
//! The implicit counter starts at 0. Every directive, explicit or implicit,
//! leaves it at the index it used plus one, so `"{1} {}"` renders arguments
//! 1 and 2.
//!
//! ## Errors
//!
//! | Condition | Marker | Code | Scanning |
//! |-----------|--------|------|----------|
//! | index past the argument list | `#RNGE` | `OutOfRange` | continues |
//! | unexpected character before `}` | `#BADF` | `MalformedInput` | resumes at that character |
//! | template ends inside a directive | `#INCL` | `MalformedInput` | stops |

use crate::error::{MARKER_BAD_FORMAT, MARKER_INCOMPLETE, MARKER_OUT_OF_RANGE};
use crate::spec::{parse_format_spec, parse_unsigned, FormatSpec};
use crate::{FormatArgs, FormatWriter, ResultCode};

const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';
const SEPARATOR: u8 = b':';

/// One parsed substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub index: usize,
    pub spec: FormatSpec<'a>,
}

/// Result of scanning the text after an opening brace.
enum Parsed<'a> {
    Directive { directive: Directive<'a>, next: usize },
    /// `{{`: the literal span restarts at the second brace.
    Escape,
    /// Bad character at `resume`; the literal span restarts there.
    Malformed { resume: usize },
    Incomplete,
}

/// Formats `template` into `out` using the brace dialect.
pub(crate) fn format_impl(
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
        match bytes[cur] {
            OPEN => {
                if cur > span {
                    out.write(&template[span..cur]);
                }
                let open = cur;
                match parse_directive(template, open + 1, next_index) {
                    Parsed::Escape => {
                        span = open + 1;
                        cur = open + 2;
                    }
                    Parsed::Incomplete => {
                        tracing::debug!(offset = open, "unterminated format directive");
                        out.write(MARKER_INCOMPLETE);
                        return result.merge(ResultCode::MalformedInput);
                    }
                    Parsed::Malformed { resume } => {
                        tracing::debug!(offset = resume, "malformed format directive");
                        out.write(MARKER_BAD_FORMAT);
                        result = result.merge(ResultCode::MalformedInput);
                        span = resume;
                        cur = resume;
                    }
                    Parsed::Directive { directive, next } => {
                        next_index = directive.index.saturating_add(1);
                        span = next;
                        cur = next;
                        let code = args.format_arg(out, directive.index, &directive.spec);
                        if code == ResultCode::OutOfRange {
                            tracing::trace!(
                                index = directive.index,
                                count = args.len(),
                                "format argument index out of range"
                            );
                            out.write(MARKER_OUT_OF_RANGE);
                        }
                        result = result.merge(code);
                    }
                }
            }
            CLOSE if bytes.get(cur + 1) == Some(&CLOSE) => {
                // keep the first brace in the span, drop the second
                out.write(&template[span..=cur]);
                span = cur + 2;
                cur += 2;
            }
            _ => cur += 1,
        }
    }

    if span < bytes.len() {
        out.write(&template[span..]);
    }
    result
}

/// Parses one directive whose body starts at `start` (just past `{`).
fn parse_directive(template: &str, start: usize, next_index: usize) -> Parsed<'_> {
    let bytes = template.as_bytes();
    let Some(&first) = bytes.get(start) else {
        return Parsed::Incomplete;
    };
    if first == OPEN {
        return Parsed::Escape;
    }

    let (explicit, digits) = parse_unsigned(&bytes[start..]);
    let index = if digits > 0 { explicit } else { next_index };
    let mut cur = start + digits;

    let mut spec = FormatSpec::new();
    match bytes.get(cur) {
        None => return Parsed::Incomplete,
        Some(&SEPARATOR) => {
            let spec_start = cur + 1;
            match bytes[spec_start..].iter().position(|&b| b == CLOSE) {
                Some(len) => {
                    spec = parse_format_spec(&template[spec_start..spec_start + len]);
                    cur = spec_start + len;
                }
                None => return Parsed::Incomplete,
            }
        }
        Some(_) => {}
    }

    if bytes[cur] != CLOSE {
        return Parsed::Malformed { resume: cur };
    }
    Parsed::Directive {
        directive: Directive { index, spec },
        next: cur + 1,
    }
}
