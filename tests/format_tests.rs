use pretty_assertions::assert_eq;
use spanfmt::{
    args, format, sformat, sformat_with_options, Argument, Error, FixedWriter, FormatOptions,
    FormatSpec, FormatValue, FormatWriter, ResultCode, MAX_FILL,
};

fn check(expected: &str, template: &str, values: &[Argument<'_>]) {
    let mut out = String::new();
    let code = format(&mut out, template, values);
    assert_eq!(code, ResultCode::Success, "template {template:?}");
    assert_eq!(out, expected, "template {template:?}");
}

#[test]
fn test_integers() {
    check("123987", "{}", &args![123987]);
    check("0", "{}", &args![0]);
    check("-1", "{}", &args![-1]);
    check("1", "{}", &args![1]);
    check("+1", "{:+}", &args![1]);
    check(" 1", "{: }", &args![1]);
}

#[test]
fn test_zero_width_and_precision_agree() {
    check("000004D2", "{:08X}", &args![1234]);
    check("000004D2", "{:.8X}", &args![1234]);
    check("000004D2", "{:.08X}", &args![1234]);
}

#[test]
fn test_integer_limits() {
    check("127", "{}", &args![i8::MAX]);
    check("32767", "{}", &args![i16::MAX]);
    check("2147483647", "{}", &args![i32::MAX]);
    check("9223372036854775807", "{}", &args![i64::MAX]);

    check("-128", "{}", &args![i8::MIN]);
    check("-32768", "{}", &args![i16::MIN]);
    check("-2147483648", "{}", &args![i32::MIN]);
    check("-9223372036854775808", "{}", &args![i64::MIN]);

    check("18446744073709551615", "{}", &args![u64::MAX]);
    check("-170141183460469231731687303715884105728", "{}", &args![i128::MIN]);
}

#[test]
fn test_bases_and_alternate_form() {
    check("0", "{:x}", &args![0]);
    check("0x0", "{:#x}", &args![0]);
    check("ff", "{:x}", &args![255]);
    check("0xff", "{:#x}", &args![255]);
    check("0x100", "{:#x}", &args![256]);
    check("0X11", "{:#X}", &args![17]);
    check("-0X11", "{:-#X}", &args![-17]);

    check("101", "{:b}", &args![5]);
    check("-10", "{:b}", &args![-2]);
    check("-0b10", "{:#b}", &args![-2]);

    check("11", "{:o}", &args![9]);
    check("-33", "{:o}", &args![-27]);
    check("-0o10", "{:#o}", &args![-8]);

    check("0d42", "{:#d}", &args![42]);
}

#[test]
fn test_width_and_padding() {
    check("   1234", "{:7d}", &args![1234]);
    check("1234   ;", "{:-7d};", &args![1234]);
    check("0001234", "{:07d}", &args![1234]);
    check("1234", "{:2d}", &args![1234]);
    check("  +1234", "{:+7d}", &args![1234]);
    check("+001234", "{:+07d}", &args![1234]);
    check("+0001234", "{:+.7d}", &args![1234]);
    check("1234   ", "{:-07d}", &args![1234]);
}

#[test]
fn test_floats() {
    check("123987.456000", "{}", &args![123987.456]);
    check("0.000000", "{}", &args![0.0]);
    check("1.000000", "{}", &args![1.0]);
    check("-1.000000", "{}", &args![-1.0]);

    check("12.34", "{:2.2}", &args![12.34]);
    check("12.00", "{:#2.2}", &args![12.0]);
    check(" 12.34", "{: 6.2}", &args![12.34]);
    check("012.34", "{:06.2}", &args![12.34]);
    check("+12.34", "{:+06.2}", &args![12.34]);
    check("12.34 ;", "{:-6.2};", &args![12.34]);

    check(
        "340282346638528859811704183484516925440.000000",
        "{}",
        &args![f32::MAX],
    );

    check("234987324.454500", "{:f}", &args![234987324.4545]);
    check("2.34987e+08", "{:g}", &args![234987324.4545]);
    check("0x1.c033e78e8b439p+27", "{:a}", &args![234987324.4545]);
    check("234987324.454500", "{:F}", &args![234987324.4545]);
    check("2.34987E+08", "{:G}", &args![234987324.4545]);
    check("0X1.C033E78E8B439P+27", "{:A}", &args![234987324.4545]);
}

#[test]
fn test_double_max() {
    let expected = concat!(
        "17976931348623157081452742373170435679807056752584499659891747680315",
        "72607800285387605895586327668781715404589535143824642343213268894641827684675",
        "46703537516986049910576551282076245490090389328944075868508455133942304583236",
        "90322294816580855933212334827479782620414472316873817718091929988125040402618",
        "4124858368.000000"
    );
    check(expected, "{}", &args![f64::MAX]);
}

#[test]
fn test_strings() {
    let owned = String::from("cd");
    check("test", "{}", &args!["test"]);
    check("test", "{}", &args![String::from("test")]);
    check("abcdef", "{}{}{}", &args!["ab", owned, "ef"]);
    check("abc", &String::from("a{}c"), &args!["b"]);

    check("    test", "{:8s}", &args!["test"]);
    check("test    ;", "{:-8s};", &args!["test"]);
    check("value   00042", "{:-8}{:05}", &args!["value", 42]);
    check("tes", "{:.3}", &args!["test"]);
    check("[\u{e9}\u{e9}  ]", "[{:-4}]", &args!["\u{e9}\u{e9}"]);
}

#[test]
fn test_chars_bools_nulls() {
    check("true", "{}", &args![true]);
    check("false", "{}", &args![false]);
    check("  x", "{:3}", &args!['x']);

    let missing: Option<&str> = None;
    check("(null)", "{}", &args![missing]);
    check("(null)  |", "{:-8}|", &args![missing]);
    check("(null)", "{}", &args![std::ptr::null::<u8>()]);
}

#[test]
fn test_pointers() {
    let ptr = 0xDEAD_C0DE_usize as *const ();
    let iptr = 0xFEFE_FEFE_usize as *const i32;
    check("DEADC0DE", "{:X}", &args![ptr]);
    check("fefefefe", "{:x}", &args![iptr]);
    check("0xdeadc0de", "{}", &args![ptr]);
    check("0xdeadc0de", "{:p}", &args![ptr]);
}

#[test]
fn test_escapes() {
    check("{", "{{", &[]);
    check("}", "}}", &[]);
    check("{5}", "{{{}}}", &args![5]);
    check("set {a, b}", "set {{{}, {}}}", &args!['a', 'b']);
}

#[test]
fn test_literal_template_is_unchanged() {
    let template = "nothing to substitute here: 100% plain, } even this";
    check(template, template, &[]);
}

#[test]
fn test_index_resolution() {
    check("a b c", "{} {} {}", &args!['a', 'b', 'c']);
    check("b c d", "{1} {} {}", &args!['a', 'b', 'c', 'd']);
    check("c a b", "{2} {0} {}", &args!['a', 'b', 'c']);
    check("a a a", "{0} {0:} {0}", &args!['a', 'b']);
}

#[test]
fn test_error_codes() {
    let mut tmp = FixedWriter::<1024>::new();
    assert_eq!(
        format(&mut tmp, "{} {:4d} {:3.5f}", &args!["abc", 9, 12.57]),
        ResultCode::Success
    );
    assert_eq!(tmp.as_str(), "abc    9 12.57000");

    tmp.clear();
    assert_eq!(
        format(&mut tmp, "{} {:4d", &args!["abc", 9]),
        ResultCode::MalformedInput
    );
    assert_eq!(tmp.as_str(), "abc #INCL");

    tmp.clear();
    assert_eq!(
        format(&mut tmp, "{0} {1}", &args!["abc", 9]),
        ResultCode::Success
    );

    tmp.clear();
    assert_eq!(
        format(&mut tmp, "{0} {1} {5}", &args!["abc", 9, 12.57]),
        ResultCode::OutOfRange
    );
    assert_eq!(tmp.as_str(), "abc 9 #RNGE");
}

#[test]
fn test_malformed_directive_resynchronizes() {
    let mut out = String::new();
    let code = format(&mut out, "{0!} and {}", &args![1, 2]);
    assert_eq!(code, ResultCode::MalformedInput);
    assert_eq!(out, "#BADF!} and 1");
}

struct Money {
    cents: i64,
}

impl FormatValue for Money {
    fn format_value(&self, out: &mut dyn FormatWriter, spec: &FormatSpec<'_>) -> ResultCode {
        let symbol = if spec.trailing.is_empty() { "$" } else { spec.trailing };
        out.write(symbol);
        spanfmt::format(
            out,
            "{}.{:02}",
            &args![self.cents / 100, (self.cents % 100).abs()],
        )
    }
}

spanfmt::impl_to_argument!(Money);

#[test]
fn test_custom_type() {
    let price = Money { cents: 1999 };
    check("total: $19.99", "total: {}", &args![price]);
    check("USD19.99", "{:USD}", &args![price]);
    assert_eq!(spanfmt::sformat!("{}/{}", Money { cents: 5 }, 1), "$0.05/1");
}

#[test]
fn test_string_forms_and_options() {
    assert_eq!(sformat("{}-{}", &args![1, 2]), "1-2");
    assert_eq!(sformat("{}-{}", &args![1]), "1-#RNGE");

    let strict = FormatOptions::strict();
    assert_eq!(
        sformat_with_options("{}-{}", &args![1], strict.clone()),
        Err(Error::OutOfRange)
    );
    assert_eq!(
        sformat_with_options("{:x", &args![1], strict.clone()),
        Err(Error::MalformedInput)
    );
    assert_eq!(
        sformat_with_options("{:x}", &args![255], strict),
        Ok("ff".to_string())
    );
}

#[test]
fn test_huge_precision_is_clamped() {
    let mut out = String::new();
    let code = format(&mut out, "{:+.99999999999999999999999}", &args![5]);
    assert_eq!(code, ResultCode::Success);
    assert_eq!(out.len(), MAX_FILL + 2);
    assert!(out.starts_with("+0"));
    assert!(out.ends_with('5'));
}
