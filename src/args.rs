//! Type-erased formatting arguments.
//!
//! Each caller value becomes an [`Argument`]: a tagged union over the built-in
//! kinds plus a [`Argument::Custom`] variant that dispatches through the
//! [`FormatValue`] trait. Arguments borrow the caller's values and live only
//! for the duration of one formatting call.
//!
//! ## Custom types
//!
//! ```rust
//! use spanfmt::{args, sformat, Argument, FormatSpec, FormatValue, FormatWriter, ResultCode, ToArgument};
//!
//! struct Celsius(f64);
//!
//! impl FormatValue for Celsius {
//!     fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
//!         spanfmt::write_float(out, self.0, spec);
//!         out.write("\u{b0}C");
//!         ResultCode::Success
//!     }
//! }
//!
//! impl ToArgument for Celsius {
//!     fn to_argument(&self) -> Argument<'_> {
//!         Argument::Custom(self)
//!     }
//! }
//!
//! assert_eq!(sformat("{:.1}", &args![Celsius(21.55)]), "21.6\u{b0}C");
//! ```

use crate::integer::{
    write_pointer, write_signed, write_signed_wide, write_unsigned, write_unsigned_wide,
};
use crate::string::{write_bool, write_char, write_null, write_str};
use crate::{write_float, FormatSpec, FormatWriter, ResultCode};
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Customization point for user-defined argument types.
pub trait FormatValue {
    /// Renders `self` into `out`.
    ///
    /// `spec.trailing` carries any directive text the generic parser did not
    /// recognize. Implementations should render a best-effort representation
    /// rather than fail; a non-success code is merged into the call's result.
    fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode;
}

/// One type-erased argument.
#[derive(Clone, Copy)]
pub enum Argument<'a> {
    Bool(bool),
    Char(char),
    Str(&'a str),
    Signed(i64),
    Unsigned(u64),
    SignedWide(i128),
    UnsignedWide(u128),
    Float(f64),
    Pointer(usize),
    /// A null string or pointer.
    Null,
    Custom(&'a dyn FormatValue),
}

impl<'a> Argument<'a> {
    /// Renders the argument. Built-in kinds always succeed.
    pub fn render(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
        match *self {
            Argument::Bool(value) => write_bool(out, value, spec),
            Argument::Char(ch) => write_char(out, ch, spec),
            Argument::Str(text) => write_str(out, text, spec),
            Argument::Signed(value) => write_signed(out, value, spec),
            Argument::Unsigned(value) => write_unsigned(out, value, spec),
            Argument::SignedWide(value) => write_signed_wide(out, value, spec),
            Argument::UnsignedWide(value) => write_unsigned_wide(out, value, spec),
            Argument::Float(value) => write_float(out, value, spec),
            Argument::Pointer(address) => write_pointer(out, address, spec),
            Argument::Null => write_null(out, spec),
            Argument::Custom(value) => return value.format_value(out, spec),
        }
        ResultCode::Success
    }

    /// Wraps a custom value.
    pub fn custom<T: FormatValue>(value: &'a T) -> Self {
        Argument::Custom(value)
    }
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Argument::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Argument::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Argument::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            Argument::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            Argument::SignedWide(v) => f.debug_tuple("SignedWide").field(v).finish(),
            Argument::UnsignedWide(v) => f.debug_tuple("UnsignedWide").field(v).finish(),
            Argument::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Argument::Pointer(v) => write!(f, "Pointer({v:#x})"),
            Argument::Null => f.write_str("Null"),
            Argument::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Conversion from a borrowed value into an [`Argument`].
///
/// Implemented for the built-in kinds; custom types implement it by returning
/// [`Argument::Custom`] (see [`impl_to_argument!`](crate::impl_to_argument)).
pub trait ToArgument {
    fn to_argument(&self) -> Argument<'_>;
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {$(
        impl ToArgument for $ty {
            #[inline]
            fn to_argument(&self) -> Argument<'_> {
                Argument::Signed(*self as i64)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl ToArgument for $ty {
            #[inline]
            fn to_argument(&self) -> Argument<'_> {
                Argument::Unsigned(*self as u64)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl ToArgument for i128 {
    fn to_argument(&self) -> Argument<'_> {
        Argument::SignedWide(*self)
    }
}

impl ToArgument for u128 {
    fn to_argument(&self) -> Argument<'_> {
        Argument::UnsignedWide(*self)
    }
}

impl ToArgument for f32 {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Float(f64::from(*self))
    }
}

impl ToArgument for f64 {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Float(*self)
    }
}

impl ToArgument for bool {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Bool(*self)
    }
}

impl ToArgument for char {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Char(*self)
    }
}

impl ToArgument for str {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(self)
    }
}

impl ToArgument for String {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(self)
    }
}

impl ToArgument for Cow<'_, str> {
    fn to_argument(&self) -> Argument<'_> {
        Argument::Str(self)
    }
}

impl<T> ToArgument for *const T {
    fn to_argument(&self) -> Argument<'_> {
        if self.is_null() {
            Argument::Null
        } else {
            Argument::Pointer(*self as usize)
        }
    }
}

impl<T> ToArgument for *mut T {
    fn to_argument(&self) -> Argument<'_> {
        if self.is_null() {
            Argument::Null
        } else {
            Argument::Pointer(*self as usize)
        }
    }
}

impl<T: ToArgument> ToArgument for Option<T> {
    fn to_argument(&self) -> Argument<'_> {
        match self {
            Some(value) => value.to_argument(),
            None => Argument::Null,
        }
    }
}

impl<T: ToArgument + ?Sized> ToArgument for &T {
    fn to_argument(&self) -> Argument<'_> {
        (**self).to_argument()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for &mut T {
    fn to_argument(&self) -> Argument<'_> {
        (**self).to_argument()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for Box<T> {
    fn to_argument(&self) -> Argument<'_> {
        (**self).to_argument()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for Rc<T> {
    fn to_argument(&self) -> Argument<'_> {
        (**self).to_argument()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for Arc<T> {
    fn to_argument(&self) -> Argument<'_> {
        (**self).to_argument()
    }
}

impl<'a> ToArgument for Argument<'a> {
    fn to_argument(&self) -> Argument<'_> {
        *self
    }
}

/// Positional argument list for one formatting call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormatArgs<'a, 'b> {
    args: &'b [Argument<'a>],
}

impl<'a, 'b> FormatArgs<'a, 'b> {
    pub fn new(args: &'b [Argument<'a>]) -> Self {
        FormatArgs { args }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Renders the argument at `index`, or reports [`ResultCode::OutOfRange`]
    /// without writing anything.
    pub fn format_arg(
        &self,
        out: &mut dyn FormatWriter,
        index: usize,
        spec: &FormatSpec<'_>,
    ) -> ResultCode {
        match self.args.get(index) {
            Some(arg) => arg.render(out, spec),
            None => ResultCode::OutOfRange,
        }
    }
}
