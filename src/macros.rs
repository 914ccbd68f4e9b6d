/// Builds an argument array from a list of expressions.
///
/// Each expression is borrowed, so temporaries live until the end of the
/// enclosing statement; pass the result straight to a formatting call.
///
/// ```rust
/// use spanfmt::{args, sformat};
///
/// assert_eq!(sformat("{} + {} = {}", &args![1, 2.5f32, "3.5"]), "1 + 2.500000 = 3.5");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        [$crate::Argument::Null; 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::ToArgument::to_argument(&$arg)),+]
    };
}

/// Brace-dialect formatting into a new `String`.
///
/// ```rust
/// assert_eq!(spanfmt::sformat!("{:#x}", 255), "0xff");
/// ```
#[macro_export]
macro_rules! sformat {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::sformat($template, &$crate::args![$($arg),*])
    };
}

/// Printf-dialect formatting into a new `String`.
///
/// ```rust
/// assert_eq!(spanfmt::sprintf!("%05.1f|%-4s|", 3.14159, "ab"), "003.1|ab  |");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf($template, &$crate::args![$($arg),*])
    };
}

/// Implements [`ToArgument`](crate::ToArgument) for types that implement
/// [`FormatValue`](crate::FormatValue).
///
/// ```rust
/// use spanfmt::{impl_to_argument, sformat, FormatSpec, FormatValue, FormatWriter, ResultCode};
///
/// struct Point { x: i32, y: i32 }
///
/// impl FormatValue for Point {
///     fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
///         spanfmt::format(out, "({}, {})", &spanfmt::args![self.x, self.y])
///     }
/// }
///
/// impl_to_argument!(Point);
///
/// assert_eq!(sformat!("p={}", Point { x: 1, y: -2 }), "p=(1, -2)");
/// ```
#[macro_export]
macro_rules! impl_to_argument {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::ToArgument for $ty {
            fn to_argument(&self) -> $crate::Argument<'_> {
                $crate::Argument::Custom(self)
            }
        }
    )+};
}
