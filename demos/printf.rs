//! Positional printf arguments and in-band error markers.
//!
//! Run with: cargo run --example printf

use spanfmt::{args, printf, sprintf, sprintf_with_options, FormatOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=spanfmt=debug shows why a template failed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // translations reorder arguments without touching the call site
    let english = "%1$s scored %2$d points";
    let reordered = "%2$d points for %1$s";
    for template in [english, reordered] {
        println!("{}", sprintf(template, &args!["Ada", 42]));
    }

    let mut out = String::new();
    let code = printf(&mut out, "%s has %d and %d", &args!["list", 1]);
    println!("{out}  ({code})");

    match sprintf_with_options("%d%", &args![99], FormatOptions::strict()) {
        Ok(text) => println!("{text}"),
        Err(err) => println!("rejected: {err}"),
    }

    let report = sprintf_with_options("%05.1f%%", &args![99.5], FormatOptions::strict())?;
    println!("{report}");
    Ok(())
}
