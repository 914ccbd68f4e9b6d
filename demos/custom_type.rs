//! Implementing `FormatValue` for your own types.
//!
//! Run with: cargo run --example custom_type

use spanfmt::{
    args, impl_to_argument, sformat, write_float, FormatSpec, FormatValue, FormatWriter,
    ResultCode,
};

struct Rgb(u8, u8, u8);

impl FormatValue for Rgb {
    fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
        // `{:X}` selects upper-case hex, anything else lower-case
        let template = if spec.conversion_code == Some('X') {
            "#{:02X}{:02X}{:02X}"
        } else {
            "#{:02x}{:02x}{:02x}"
        };
        spanfmt::format(out, template, &args![self.0, self.1, self.2])
    }
}

struct Meters(f64);

impl FormatValue for Meters {
    fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
        let spec = if spec.precision.is_none() {
            spec.with_precision(1)
        } else {
            *spec
        };
        write_float(out, self.0, &spec);
        out.write(" m");
        ResultCode::Success
    }
}

impl_to_argument!(Rgb, Meters);

fn main() {
    let coral = Rgb(255, 127, 80);
    println!("{}", sformat("color {} / {:X}", &args![coral, coral]));
    println!("{}", sformat("height {} or {:.3}", &args![Meters(1.8288), Meters(1.8288)]));
}
