//! Floating-point rendering.
//!
//! A thin adapter over the standard library's correctly rounded float-to-text
//! conversion. The conversion code picks the notation; width, precision and
//! the sign/zero-fill/justify flags are applied on top.
//!
//! | Code | Notation | Default precision |
//! |------|----------|-------------------|
//! | none, `f`, `F` | fixed (`123.456000`) | 6 |
//! | `e`, `E` | scientific (`1.234560e+02`) | 6 |
//! | `g`, `G` | shortest of fixed/scientific, trailing zeros removed | 6 significant |
//! | `a`, `A` | hexadecimal (`0x1.edd2f1a9fbe77p+6`) | exact |
//!
//! Non-finite values render as `nan`/`inf` (upper case for upper-case codes)
//! and are never zero-filled.

use crate::spec::{FormatSpec, SignMode};
use crate::string::fill;
use crate::FormatWriter;
use std::fmt::Write as _;

/// Largest precision forwarded to the conversion; f64 has no more than this
/// many significant fractional digits.
const MAX_PRECISION: usize = 1100;

const DEFAULT_PRECISION: usize = 6;

/// Renders a float according to `spec`.
///
/// ```rust
/// use spanfmt::{parse_format_spec, write_float};
///
/// let mut out = String::new();
/// write_float(&mut out, 12.34, &parse_format_spec("+07.1"));
/// assert_eq!(out, "+0012.3");
/// ```
pub fn write_float(out: &mut dyn FormatWriter, value: f64, spec: &FormatSpec<'_>) {
    let code = match spec.conversion_code {
        Some(code @ ('a' | 'A' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G')) => code,
        _ => 'f',
    };
    let upper = code.is_ascii_uppercase();
    let precision = spec.precision.map(|p| p.min(MAX_PRECISION));

    let sign = if value.is_sign_negative() && !value.is_nan() {
        "-"
    } else {
        match spec.sign_mode {
            SignMode::Always => "+",
            SignMode::Space => " ",
            SignMode::Default => "",
        }
    };

    let mut body = String::new();
    let finite = value.is_finite();
    if value.is_nan() {
        body.push_str(if upper { "NAN" } else { "nan" });
    } else if value.is_infinite() {
        body.push_str(if upper { "INF" } else { "inf" });
    } else {
        let abs = value.abs();
        let alt = spec.alternate_form;
        match code.to_ascii_lowercase() {
            'e' => fmt_exponent(&mut body, abs, precision.unwrap_or(DEFAULT_PRECISION), upper, alt),
            'g' => fmt_general(&mut body, abs, precision.unwrap_or(DEFAULT_PRECISION), upper, alt),
            'a' => fmt_hex(&mut body, abs, precision, upper, alt),
            _ => fmt_fixed(&mut body, abs, precision.unwrap_or(DEFAULT_PRECISION), alt),
        }
    }

    let content = sign.len() + body.len();
    let padding = spec.width.map_or(0, |width| width.saturating_sub(content));
    if spec.left_justify {
        out.write(sign);
        out.write(&body);
        fill(out, ' ', padding);
    } else if spec.fills_with_zeros() && finite {
        out.write(sign);
        fill(out, '0', padding);
        out.write(&body);
    } else {
        fill(out, ' ', padding);
        out.write(sign);
        out.write(&body);
    }
}

fn fmt_fixed(body: &mut String, abs: f64, precision: usize, alt: bool) {
    let _ = write!(body, "{abs:.precision$}");
    if alt && precision == 0 {
        body.push('.');
    }
}

/// Splits std's `1.5e3` form into mantissa text and exponent.
fn std_exponent(abs: f64, precision: usize) -> (String, i32) {
    let text = format!("{abs:.precision$e}");
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn push_exponent(body: &mut String, marker: char, exp: i32, min_digits: usize) {
    body.push(marker);
    body.push(if exp < 0 { '-' } else { '+' });
    let _ = write!(body, "{:0min_digits$}", exp.unsigned_abs());
}

fn fmt_exponent(body: &mut String, abs: f64, precision: usize, upper: bool, alt: bool) {
    let (mantissa, exp) = std_exponent(abs, precision);
    body.push_str(&mantissa);
    if alt && precision == 0 {
        body.push('.');
    }
    push_exponent(body, if upper { 'E' } else { 'e' }, exp, 2);
}

fn fmt_general(body: &mut String, abs: f64, precision: usize, upper: bool, alt: bool) {
    let significant = precision.max(1);
    // the exponent after rounding decides the notation
    let (mantissa, exp) = std_exponent(abs, significant - 1);
    let exp_wide = i64::from(exp);
    if exp_wide >= -4 && exp_wide < significant as i64 {
        let decimals = (significant as i64 - 1 - exp_wide) as usize;
        let _ = write!(body, "{abs:.decimals$}");
        if alt {
            if !body.contains('.') {
                body.push('.');
            }
        } else {
            strip_fraction_zeros(body);
        }
    } else {
        let mut mantissa = mantissa;
        if alt {
            if !mantissa.contains('.') {
                mantissa.push('.');
            }
        } else {
            strip_fraction_zeros(&mut mantissa);
        }
        body.push_str(&mantissa);
        push_exponent(body, if upper { 'E' } else { 'e' }, exp, 2);
    }
}

fn strip_fraction_zeros(text: &mut String) {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
}

const MANTISSA_BITS: u32 = 52;
const MANTISSA_NIBBLES: usize = 13;

fn fmt_hex(body: &mut String, abs: f64, precision: Option<usize>, upper: bool, alt: bool) {
    let bits = abs.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7FF) as i32;
    let mut mantissa = bits & ((1u64 << MANTISSA_BITS) - 1);
    let (mut lead, exp) = match (biased, mantissa) {
        (0, 0) => (0u64, 0),
        (0, _) => (0u64, -1022),
        _ => (1u64, biased - 1023),
    };

    let mut nibbles = MANTISSA_NIBBLES;
    let mut extra_zeros = 0;
    match precision {
        Some(p) if p < MANTISSA_NIBBLES => {
            let shift = ((MANTISSA_NIBBLES - p) * 4) as u32;
            let rest = mantissa & ((1u64 << shift) - 1);
            let half = 1u64 << (shift - 1);
            mantissa >>= shift;
            // round half to even
            if rest > half || (rest == half && mantissa & 1 == 1) {
                mantissa += 1;
                if p == 0 || mantissa >> (p * 4) != 0 {
                    lead += 1;
                    mantissa = if p == 0 { 0 } else { mantissa & ((1u64 << (p * 4)) - 1) };
                }
            }
            nibbles = p;
        }
        Some(p) => extra_zeros = p - MANTISSA_NIBBLES,
        None => {
            while nibbles > 0 && mantissa & 0xF == 0 {
                mantissa >>= 4;
                nibbles -= 1;
            }
        }
    }

    body.push_str(if upper { "0X" } else { "0x" });
    let _ = write!(body, "{lead}");
    if nibbles > 0 || extra_zeros > 0 || alt {
        body.push('.');
    }
    if nibbles > 0 {
        if upper {
            let _ = write!(body, "{mantissa:0nibbles$X}");
        } else {
            let _ = write!(body, "{mantissa:0nibbles$x}");
        }
    }
    body.extend(std::iter::repeat('0').take(extra_zeros));
    push_exponent(body, if upper { 'P' } else { 'p' }, exp, 1);
}
