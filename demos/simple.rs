//! Both template dialects and the common flags.
//!
//! Run with: cargo run --example simple

use spanfmt::{args, format, sformat, sprintf, FixedWriter};

fn main() {
    let rows = [("widget", 3, 9.99), ("gadget", 12, 14.5), ("gizmo", 150, 0.25)];

    println!("{}", sformat("{:-10}|{:5}|{:8}", &args!["item", "qty", "price"]));
    for (name, qty, price) in rows {
        println!("{}", sformat("{:-10}|{:5d}|{:8.2f}", &args![name, qty, price]));
    }

    println!();
    for (name, qty, price) in rows {
        println!("{}", sprintf("%-10s|%5d|%8.2f", &args![name, qty, price]));
    }

    println!();
    println!("{}", sformat("hex {0:#x}, binary {0:#b}, octal {0:#o}", &args![202]));
    println!("{}", sformat("signs {:+} {: } {}", &args![5, 5, -5]));
    println!("{}", sformat("floats {:e} {:g} {:a}", &args![1234.5, 0.0001, 1.0]));
    println!("{}", sformat("braces {{}} stay literal", &[]));

    // never allocates; output past 16 bytes is dropped
    let mut line = FixedWriter::<16>::new();
    let _ = format(&mut line, "{} {} {}", &args!["truncated", "to", "fit"]);
    println!("{:?}", line);
}
