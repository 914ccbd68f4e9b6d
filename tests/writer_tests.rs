use pretty_assertions::assert_eq;
use spanfmt::{
    args, format, format_to_writer, printf, Error, FixedWriter, FormatWriter, IoWriter, ResultCode,
};

#[test]
fn test_fixed_writer_holds_and_truncates() {
    let mut buffer = FixedWriter::<9>::new();

    buffer.write("test");
    assert_eq!(buffer.as_str(), "test");

    buffer.clear();
    let code = format(&mut buffer, "test {0}", &args![1234567890i64]);
    // truncation is silent; the content shows it
    assert_eq!(code, ResultCode::Success);
    assert_eq!(buffer.as_str(), "test 1234");
    assert_eq!(buffer.len(), buffer.capacity());
}

#[test]
fn test_fixed_writer_starts_empty() {
    let buffer = FixedWriter::<512>::default();
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 512);
    assert_eq!(buffer.as_str(), "");
}

#[test]
fn test_string_writer() {
    let mut tmp = String::new();
    let _ = format(&mut tmp, "1{}4", &args![23]);
    assert_eq!(tmp, "1234");
}

#[test]
fn test_growable_output_across_many_writes() {
    let mut buf = String::with_capacity(4);
    let _ = format(&mut buf, "1{}3", &args!["2"]);
    assert_eq!(buf, "123");

    buf.clear();
    let _ = format(&mut buf, "1{}3{}5{}7{}9{}", &args![2, 4, 6, 8, 0]);
    assert_eq!(buf, "1234567890");

    buf.clear();
    let _ = format(&mut buf, "{:300}|", &args!["wide"]);
    assert_eq!(buf.len(), 301);
}

#[test]
fn test_same_sink_for_both_dialects() {
    let mut out = FixedWriter::<64>::new();
    let _ = format(&mut out, "{}+", &args![1]);
    let _ = printf(&mut out, "%d=%d", &args![1, 2]);
    assert_eq!(out.as_str(), "1+1=2");
}

#[test]
fn test_io_writer_forwards() {
    let mut sink = IoWriter::new(Vec::new());
    let code = format(&mut sink, "{}:{0x}", &args!["key", 5]);
    assert_eq!(code, ResultCode::MalformedInput);
    let bytes = sink.finish().unwrap();
    assert_eq!(bytes, b"key:#BADFx}");
}

#[test]
fn test_io_writer_out_of_space() {
    let mut backing = [0u8; 6];
    let mut sink = IoWriter::new(&mut backing[..]);
    let code = format(&mut sink, "{} {}", &args!["abc", "defgh"]);
    assert_eq!(code, ResultCode::OutOfSpace);
    assert!(matches!(sink.finish(), Err(Error::Io(_))));
}

#[test]
fn test_format_to_writer_reports_template_problems_separately() {
    let mut bytes = Vec::new();
    let code = format_to_writer(&mut bytes, "{} {}", &args![1]).unwrap();
    assert_eq!(code, ResultCode::OutOfRange);
    assert_eq!(bytes, b"1 #RNGE");
}

/// A sink that counts characters instead of storing them.
#[derive(Default)]
struct Counter {
    chars: usize,
}

impl FormatWriter for Counter {
    fn write(&mut self, text: &str) {
        self.chars += text.chars().count();
    }
}

#[test]
fn test_custom_sink() {
    let mut counter = Counter::default();
    let _ = format(&mut counter, "{:-10}|{:05}", &args!["\u{e9}t\u{e9}", 7]);
    assert_eq!(counter.chars, 16);
}
