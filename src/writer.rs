//! Output sinks.
//!
//! The engine writes every literal span and rendered value through a single
//! method, [`FormatWriter::write`]. Sinks decide how to store that text:
//!
//! - [`String`]: grows to accommodate everything
//! - [`FixedWriter`]: fixed inline buffer, never allocates, truncates when full
//! - [`IoWriter`]: forwards to any [`std::io::Write`]
//!
//! ## Examples
//!
//! ```rust
//! use spanfmt::{args, format, FixedWriter};
//!
//! let mut out = FixedWriter::<8>::new();
//! let _ = format(&mut out, "{}-{}", &args!["left", "right"]);
//! assert_eq!(out.as_str(), "left-rig");
//! ```

use crate::ResultCode;
use std::io;

/// Destination for formatted text.
///
/// Writes never block and never fail from the engine's point of view. A sink
/// with bounded capacity either truncates silently or records the problem and
/// reports it through [`FormatWriter::status`].
pub trait FormatWriter {
    /// Appends a span of text.
    fn write(&mut self, text: &str);

    /// Writes `count` copies of `fill`.
    fn write_fill(&mut self, fill: char, count: usize) {
        let mut buf = [0u8; 4];
        let unit: &str = fill.encode_utf8(&mut buf);
        for _ in 0..count {
            self.write(unit);
        }
    }

    /// Reports a failure the sink has observed, if any.
    fn status(&self) -> ResultCode {
        ResultCode::Success
    }
}

impl FormatWriter for String {
    #[inline]
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }

    fn write_fill(&mut self, fill: char, count: usize) {
        self.extend(std::iter::repeat(fill).take(count));
    }
}

impl<W: FormatWriter + ?Sized> FormatWriter for &mut W {
    #[inline]
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    fn write_fill(&mut self, fill: char, count: usize) {
        (**self).write_fill(fill, count);
    }

    fn status(&self) -> ResultCode {
        (**self).status()
    }
}

/// Fixed-size sink backed by an inline `[u8; N]`. Never allocates.
///
/// Text past the capacity is dropped; truncation always lands on a UTF-8
/// boundary so [`FixedWriter::as_str`] stays valid. Truncation is visible only
/// through the stored content, not through [`FormatWriter::status`].
pub struct FixedWriter<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedWriter<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // only whole UTF-8 sequences are ever copied in
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for FixedWriter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FormatWriter for FixedWriter<N> {
    fn write(&mut self, text: &str) {
        let remaining = N - self.len;
        let mut n = text.len().min(remaining);
        while !text.is_char_boundary(n) {
            n -= 1;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&text.as_bytes()[..n]);
        self.len += n;
    }
}

impl<const N: usize> std::fmt::Debug for FixedWriter<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedWriter")
            .field("capacity", &N)
            .field("text", &self.as_str())
            .finish()
    }
}

/// Adapter forwarding formatted text to an [`io::Write`].
///
/// The first I/O failure is remembered; later writes are skipped and
/// [`FormatWriter::status`] reports [`ResultCode::OutOfSpace`].
pub struct IoWriter<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        IoWriter { inner, error: None }
    }

    /// The first I/O error observed, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flushes the wrapped writer, returning any earlier write failure first.
    ///
    /// # Errors
    ///
    /// Returns the recorded write error, or the flush error.
    pub fn finish(mut self) -> crate::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(crate::Error::io(&err.to_string()));
        }
        self.inner
            .flush()
            .map_err(|e| crate::Error::io(&e.to_string()))?;
        Ok(self.inner)
    }
}

impl<W: io::Write> FormatWriter for IoWriter<W> {
    fn write(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.inner.write_all(text.as_bytes()) {
            tracing::debug!(error = %err, "io sink rejected formatted output");
            self.error = Some(err);
        }
    }

    fn status(&self) -> ResultCode {
        if self.error.is_some() {
            ResultCode::OutOfSpace
        } else {
            ResultCode::Success
        }
    }
}
