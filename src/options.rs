//! Configuration for the string-returning entry points.
//!
//! The engine itself has no configuration; these options only shape how
//! [`sformat_with_options`](crate::sformat_with_options) and
//! [`sprintf_with_options`](crate::sprintf_with_options) build their result.
//!
//! ## Examples
//!
//! ```rust
//! use spanfmt::{args, sformat_with_options, FormatOptions};
//!
//! // Lenient (default): markers end up in the string
//! let text = sformat_with_options("{} {}", &args![1], FormatOptions::new()).unwrap();
//! assert_eq!(text, "1 #RNGE");
//!
//! // Strict: any failure becomes an error
//! let result = sformat_with_options("{} {}", &args![1], FormatOptions::strict());
//! assert!(result.is_err());
//! ```

/// Options for building formatted strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Initial capacity of the output string.
    pub capacity: usize,
    /// Turn any non-success [`ResultCode`](crate::ResultCode) into an error.
    pub strict: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            capacity: 128,
            strict: false,
        }
    }
}

impl FormatOptions {
    /// Creates default options (lenient, 128-byte initial capacity).
    ///
    /// ```rust
    /// use spanfmt::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.capacity, 128);
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject templates with any error.
    #[must_use]
    pub fn strict() -> Self {
        FormatOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the initial output capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
