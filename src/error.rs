//! Result codes and error types.
//!
//! The formatting engine itself never fails with an `Err`: malformed templates
//! degrade to inline marker text and the call reports a [`ResultCode`]
//! summarizing the first problem encountered. [`Error`] exists for the
//! option-driven entry points that can convert that code into a `Result`.
//!
//! ## Examples
//!
//! ```rust
//! use spanfmt::{args, format, ResultCode};
//!
//! let mut out = String::new();
//! let code = format(&mut out, "{0} {1} {5}", &args!["abc", 9, 12.57]);
//! assert_eq!(code, ResultCode::OutOfRange);
//! assert_eq!(out, "abc 9 #RNGE");
//! ```

use std::fmt;
use thiserror::Error;

/// Marker written in place of a directive whose syntax could not be parsed.
pub const MARKER_BAD_FORMAT: &str = "#BADF";
/// Marker written when the template ends in the middle of a directive.
pub const MARKER_INCOMPLETE: &str = "#INCL";
/// Marker written in place of a directive referencing a missing argument.
pub const MARKER_OUT_OF_RANGE: &str = "#RNGE";

/// Outcome of a single formatting call.
///
/// A call keeps going past recoverable problems, so the code only records the
/// *first* non-success condition seen; see [`ResultCode::merge`].
#[must_use = "formatting may have substituted error markers into the output"]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultCode {
    #[default]
    Success,
    /// A directive referenced an argument index past the end of the list.
    OutOfRange,
    /// A directive was unparseable or unterminated.
    MalformedInput,
    /// A bounded sink reported that it could not accept the output.
    OutOfSpace,
}

impl ResultCode {
    /// Returns `true` for [`ResultCode::Success`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, ResultCode::Success)
    }

    /// Combines two codes, keeping the first failure.
    ///
    /// ```rust
    /// use spanfmt::ResultCode;
    ///
    /// let code = ResultCode::Success
    ///     .merge(ResultCode::OutOfRange)
    ///     .merge(ResultCode::MalformedInput);
    /// assert_eq!(code, ResultCode::OutOfRange);
    /// ```
    #[inline]
    pub const fn merge(self, other: ResultCode) -> ResultCode {
        match self {
            ResultCode::Success => other,
            failed => failed,
        }
    }

    /// Converts the code into a `Result`, mapping every failure onto [`Error`].
    ///
    /// # Errors
    ///
    /// Returns the matching [`Error`] variant for any code but `Success`.
    pub fn into_result(self) -> Result<()> {
        match self {
            ResultCode::Success => Ok(()),
            ResultCode::OutOfRange => Err(Error::OutOfRange),
            ResultCode::MalformedInput => Err(Error::MalformedInput),
            ResultCode::OutOfSpace => Err(Error::OutOfSpace),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResultCode::Success => "success",
            ResultCode::OutOfRange => "out of range",
            ResultCode::MalformedInput => "malformed input",
            ResultCode::OutOfSpace => "out of space",
        })
    }
}

/// Errors surfaced by the `Result`-returning entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A directive referenced an argument that was not supplied
    #[error("format directive references an argument index past the end of the argument list")]
    OutOfRange,

    /// The template contained an unparseable or unterminated directive
    #[error("format template contains a malformed or unterminated directive")]
    MalformedInput,

    /// The sink could not accept all of the output
    #[error("output sink ran out of space")]
    OutOfSpace,

    /// IO error from a wrapped writer
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// The [`ResultCode`] closest to this error.
    pub const fn code(&self) -> ResultCode {
        match self {
            Error::OutOfRange => ResultCode::OutOfRange,
            Error::MalformedInput => ResultCode::MalformedInput,
            Error::OutOfSpace | Error::Io(_) => ResultCode::OutOfSpace,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
