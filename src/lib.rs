//! # spanfmt
//!
//! Runtime string formatting with two template dialects and no hidden
//! allocation.
//!
//! ## What is it?
//!
//! `spanfmt` renders a template plus a list of positional arguments into an
//! output sink. Templates are plain runtime strings, so they can come from
//! configuration files, translation catalogs or the network. Two dialects are
//! supported:
//!
//! - **Brace**: `"{0:+07d} and {}"`, see [`format`]
//! - **Printf**: `"%+07d and %s"` including `%N$d` positional arguments, see [`printf`]
//!
//! ## Key Features
//!
//! - **Never panics on bad input**: malformed directives become inline markers
//!   (`#BADF`, `#INCL`, `#RNGE`) and the call returns a [`ResultCode`]
//! - **Allocation-free core**: digits are generated into stack buffers and the
//!   [`FixedWriter`] sink lives entirely inline
//! - **Extensible**: any type can participate through [`FormatValue`]
//! - **No global state**: every call is self-contained and thread-safe
//!
//! ## Quick Start
//!
//! ```rust
//! use spanfmt::{args, format, sformat, sprintf, ResultCode};
//!
//! // Build a String
//! assert_eq!(sformat("{:07d}", &args![1234]), "0001234");
//! assert_eq!(sprintf("%-6s|%x", &args!["ab", 255]), "ab    |ff");
//!
//! // Write into any sink and inspect the outcome
//! let mut out = String::new();
//! let code = format(&mut out, "{} {:4d", &args!["abc", 9]);
//! assert_eq!(code, ResultCode::MalformedInput);
//! assert_eq!(out, "abc #INCL");
//! ```
//!
//! ### Bounded output
//!
//! ```rust
//! use spanfmt::{args, format, FixedWriter};
//!
//! let mut out = FixedWriter::<16>::new();
//! let _ = format(&mut out, "1{}3{}5{}7{}9{}", &args![2, 4, 6, 8, 0]);
//! assert_eq!(out.as_str(), "1234567890");
//! ```
//!
//! ## Spec grammar
//!
//! Both dialects share one [`FormatSpec`] model: sign (`+`, space), alternate
//! form (`#`), zero padding (`0`), left justification (`-`), width,
//! `.precision` and a conversion code from [`CONVERSION_CODES`]. See
//! [`parse_format_spec`] and [`parse_printf_spec`] for the exact rules.
//!
//! ## Cargo features
//!
//! - **`chrono`**: date and time arguments, with strftime patterns in the spec
//! - **`bigint`**: arbitrary precision integers from `num-bigint`
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Both dialects and the common flags
//! - **`custom_type.rs`** - Implementing [`FormatValue`] for your own types
//! - **`printf.rs`** - Positional printf arguments and error markers
//!
//! Run any example with: `cargo run --example <name>`

pub mod args;
pub mod error;
#[cfg(any(feature = "chrono", feature = "bigint"))]
pub mod ext;
pub mod float;
pub mod integer;
pub mod macros;
pub mod options;
mod printf;
mod scan;
pub mod spec;
pub mod string;
pub mod writer;

pub use args::{Argument, FormatArgs, FormatValue, ToArgument};
pub use error::{
    Error, Result, ResultCode, MARKER_BAD_FORMAT, MARKER_INCOMPLETE, MARKER_OUT_OF_RANGE,
};
pub use float::write_float;
pub use integer::{
    write_digit_string, write_pointer, write_signed, write_signed_wide, write_unsigned,
    write_unsigned_wide,
};
pub use options::FormatOptions;
pub use scan::Directive;
pub use spec::{
    parse_format_spec, parse_printf_spec, Dialect, FormatSpec, PrintfSpec, SignMode,
    CONVERSION_CODES,
};
pub use string::{write_bool, write_char, write_null, write_str, MAX_FILL, NULL_MARKER};
pub use writer::{FixedWriter, FormatWriter, IoWriter};

use std::io;

/// Formats `template` into `out` using the brace dialect.
///
/// Literal text is copied through, `{{` and `}}` render single braces, and
/// each `{index:spec}` directive renders one argument. The call always runs
/// to completion unless the template ends inside a directive.
///
/// # Examples
///
/// ```rust
/// use spanfmt::{args, format, ResultCode};
///
/// let mut out = String::new();
/// let code = format(&mut out, "{1} {} {0:#x}", &args![255, "b", 'c']);
/// assert!(code.is_success());
/// assert_eq!(out, "b c 0xff");
/// ```
pub fn format<W>(out: &mut W, template: &str, args: &[Argument<'_>]) -> ResultCode
where
    W: FormatWriter + ?Sized,
{
    let mut sink = out;
    let code = scan::format_impl(&mut sink, template, FormatArgs::new(args));
    code.merge(sink.status())
}

/// Formats `template` into `out` using the printf dialect.
///
/// # Examples
///
/// ```rust
/// use spanfmt::{args, printf};
///
/// let mut out = String::new();
/// let _ = printf(&mut out, "%2$d %1$s", &args!["abc", 123]);
/// assert_eq!(out, "123 abc");
/// ```
pub fn printf<W>(out: &mut W, template: &str, args: &[Argument<'_>]) -> ResultCode
where
    W: FormatWriter + ?Sized,
{
    let mut sink = out;
    let code = printf::printf_impl(&mut sink, template, FormatArgs::new(args));
    code.merge(sink.status())
}

/// Brace-dialect formatting into a new `String`.
///
/// Failures are visible only as inline markers; use
/// [`sformat_with_options`] with [`FormatOptions::strict`] to reject them.
///
/// ```rust
/// use spanfmt::{args, sformat};
///
/// assert_eq!(sformat("{:-8}{:05}", &args!["value", 42]), "value   00042");
/// ```
#[must_use]
pub fn sformat(template: &str, args: &[Argument<'_>]) -> String {
    let mut out = String::with_capacity(FormatOptions::default().capacity);
    let _ = format(&mut out, template, args);
    out
}

/// Printf-dialect formatting into a new `String`.
///
/// ```rust
/// use spanfmt::{args, sprintf};
///
/// assert_eq!(sprintf("%+.7d", &args![1234]), "+0001234");
/// ```
#[must_use]
pub fn sprintf(template: &str, args: &[Argument<'_>]) -> String {
    let mut out = String::with_capacity(FormatOptions::default().capacity);
    let _ = printf(&mut out, template, args);
    out
}

/// Brace-dialect formatting into a new `String` with custom options.
///
/// # Errors
///
/// In strict mode, returns the [`Error`] matching the first failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sformat_with_options(
    template: &str,
    args: &[Argument<'_>],
    options: FormatOptions,
) -> Result<String> {
    let mut out = String::with_capacity(options.capacity);
    let code = format(&mut out, template, args);
    finish_string(out, code, &options, Dialect::Brace)
}

/// Printf-dialect formatting into a new `String` with custom options.
///
/// # Errors
///
/// In strict mode, returns the [`Error`] matching the first failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sprintf_with_options(
    template: &str,
    args: &[Argument<'_>],
    options: FormatOptions,
) -> Result<String> {
    let mut out = String::with_capacity(options.capacity);
    let code = printf(&mut out, template, args);
    finish_string(out, code, &options, Dialect::Printf)
}

fn finish_string(
    out: String,
    code: ResultCode,
    options: &FormatOptions,
    dialect: Dialect,
) -> Result<String> {
    if !code.is_success() {
        tracing::debug!(%code, ?dialect, strict = options.strict, "template rendered with errors");
        if options.strict {
            code.into_result()?;
        }
    }
    Ok(out)
}

/// Brace-dialect formatting straight into an [`io::Write`].
///
/// Template problems are reported through the returned [`ResultCode`];
/// only I/O failures become errors.
///
/// # Examples
///
/// ```rust
/// use spanfmt::{args, format_to_writer};
///
/// let mut buffer = Vec::new();
/// let code = format_to_writer(&mut buffer, "{}={:.2}", &args!["pi", 3.14159]).unwrap();
/// assert!(code.is_success());
/// assert_eq!(buffer, b"pi=3.14");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to or flushing the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to_writer<W>(writer: W, template: &str, args: &[Argument<'_>]) -> Result<ResultCode>
where
    W: io::Write,
{
    let mut sink = IoWriter::new(writer);
    let code = scan::format_impl(&mut sink, template, FormatArgs::new(args));
    sink.finish()?;
    Ok(code)
}

/// Printf-dialect formatting straight into an [`io::Write`].
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to or flushing the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn printf_to_writer<W>(writer: W, template: &str, args: &[Argument<'_>]) -> Result<ResultCode>
where
    W: io::Write,
{
    let mut sink = IoWriter::new(writer);
    let code = printf::printf_impl(&mut sink, template, FormatArgs::new(args));
    sink.finish()?;
    Ok(code)
}
