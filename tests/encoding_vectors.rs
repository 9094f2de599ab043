mod common;

use lebcodec::{CodecError, Decoder, Encoder};

const UNSIGNED: &[(u32, &[u8])] = &[
    (0, &[0]),
    (1, &[1]),
    (0x42, &[0x42]),
    (0x7f, &[0x7f]),
    (0x80, &[0x80, 0x01]),
    (0xff, &[0xff, 0x01]),
    (0x1234, &[0xb4, 0x24]),
    (0x3fff, &[0xff, 0x7f]),
    (0x4000, &[0x80, 0x80, 0x01]),
    (0x5678, &[0xf8, 0xac, 0x01]),
    (0xfffff, &[0xff, 0xff, 0x3f]),
    (0x1fffff, &[0xff, 0xff, 0x7f]),
    (0x200000, &[0x80, 0x80, 0x80, 0x01]),
    (0xfffffff, &[0xff, 0xff, 0xff, 0x7f]),
    (0x10000000, &[0x80, 0x80, 0x80, 0x80, 0x01]),
    (0x7fffffff, &[0xff, 0xff, 0xff, 0xff, 0x07]),
    (0x87654321, &[0xa1, 0x86, 0x95, 0xbb, 0x08]),
    (0xffffffff, &[0xff, 0xff, 0xff, 0xff, 0x0f]),
];

const SIGNED: &[(i32, &[u8])] = &[
    (0, &[0]),
    (1, &[1]),
    (-1, &[0x7f]),
    (0x3f, &[0x3f]),
    (0x40, &[0xc0, 0x00]),
    (-0x3f, &[0x41]),
    (-0x40, &[0x40]),
    (-0x41, &[0xbf, 0x7f]),
    (0x1fff, &[0xff, 0x3f]),
    (0x2000, &[0x80, 0xc0, 0x00]),
    (-0x2000, &[0x80, 0x40]),
    (-0x2001, &[0xff, 0xbf, 0x7f]),
    (0xfffff, &[0xff, 0xff, 0x3f]),
    (0x100000, &[0x80, 0x80, 0xc0, 0x00]),
    (-0x100000, &[0x80, 0x80, 0x40]),
    (-0x100001, &[0xff, 0xff, 0xbf, 0x7f]),
    (0x7ffffff, &[0xff, 0xff, 0xff, 0x3f]),
    (0x8000000, &[0x80, 0x80, 0x80, 0xc0, 0x00]),
    (-0x8000000, &[0x80, 0x80, 0x80, 0x40]),
    (-0x8000001, &[0xff, 0xff, 0xff, 0xbf, 0x7f]),
    (0x76543210, &[0x90, 0xe4, 0xd0, 0xb2, 0x07]),
    (-0x76543210, &[0xf0, 0x9b, 0xaf, 0xcd, 0x78]),
    (0x7fffffff, &[0xff, 0xff, 0xff, 0xff, 0x07]),
    (i32::MIN, &[0x80, 0x80, 0x80, 0x80, 0x78]),
];

const STRINGS: &[(&str, &[u8])] = &[
    ("", &[0]),
    ("a", &[1, 0x61]),
    ("Oh là là", &[10, 79, 104, 32, 108, 195, 160, 32, 108, 195, 160]),
    ("😄", &[4, 0xf0, 0x9f, 0x98, 0x84]),
];

#[test]
fn leb128_encodes_unsigned_integers() {
    for &(value, expected) in UNSIGNED {
        let mut encoder = Encoder::new();
        encoder.append_uint32(value);
        assert_eq!(encoder.buffer(), expected, "encoding {:#x}", value);
    }
}

#[test]
fn unsigned_integers_round_trip() {
    for &(value, _) in UNSIGNED {
        let mut encoder = Encoder::new();
        encoder.append_uint32(value);
        let mut decoder = Decoder::new(encoder.buffer());
        assert_eq!(decoder.read_uint32().unwrap(), value);
        assert!(decoder.done());
    }
}

#[test]
fn leb128_encodes_signed_integers() {
    for &(value, expected) in SIGNED {
        let mut encoder = Encoder::new();
        encoder.append_int32(value);
        assert_eq!(encoder.buffer(), expected, "encoding {}", value);
    }
}

#[test]
fn signed_integers_round_trip() {
    for &(value, _) in SIGNED {
        let mut encoder = Encoder::new();
        encoder.append_int32(value);
        let mut decoder = Decoder::new(encoder.buffer());
        assert_eq!(decoder.read_int32().unwrap(), value);
        assert!(decoder.done());
    }
}

#[test]
fn rejects_numbers_out_of_range() {
    common::init_tracing();
    let mut encoder = Encoder::new();

    for value in [4294967296.0, 9007199254740991.0, -1.0, -2147483648.0] {
        assert_eq!(encoder.append_uint32_checked(value).unwrap_err(), CodecError::OutOfRange, "{}", value);
    }
    for value in [f64::NEG_INFINITY, f64::NAN, std::f64::consts::PI] {
        assert_eq!(encoder.append_uint32_checked(value).unwrap_err(), CodecError::NotAnInteger, "{}", value);
    }
    for value in [2147483648.0, 9007199254740991.0, -2147483649.0] {
        assert_eq!(encoder.append_int32_checked(value).unwrap_err(), CodecError::OutOfRange, "{}", value);
    }
    for value in [f64::NEG_INFINITY, f64::NAN, std::f64::consts::PI] {
        assert_eq!(encoder.append_int32_checked(value).unwrap_err(), CodecError::NotAnInteger, "{}", value);
    }

    assert!(encoder.is_empty());
}

#[test]
fn rejects_encodings_out_of_range() {
    common::init_tracing();
    let six_groups: [u8; 6] = [0x80, 0x80, 0x80, 0x80, 0x80, 0x00];

    assert_eq!(Decoder::new(&six_groups).read_uint32(), Err(CodecError::OutOfRange));
    assert_eq!(Decoder::new(&six_groups).read_int32(), Err(CodecError::OutOfRange));
    assert_eq!(
        Decoder::new(&[0x80, 0x80, 0x80, 0x80, 0x10]).read_uint32(),
        Err(CodecError::OutOfRange)
    );
    assert_eq!(
        Decoder::new(&[0x80, 0x80, 0x80, 0x80, 0x08]).read_int32(),
        Err(CodecError::OutOfRange)
    );
    assert_eq!(
        Decoder::new(&[0xff, 0xff, 0xff, 0xff, 0x77]).read_int32(),
        Err(CodecError::OutOfRange)
    );
    assert_eq!(Decoder::new(&[0x80, 0x80]).read_uint32(), Err(CodecError::IncompleteNumber));
    assert_eq!(Decoder::new(&[0x80, 0x80]).read_int32(), Err(CodecError::IncompleteNumber));
}

#[test]
fn encodes_strings_as_utf8() {
    for &(text, expected) in STRINGS {
        let mut encoder = Encoder::new();
        encoder.append_prefixed_string(text).unwrap();
        assert_eq!(encoder.buffer(), expected, "encoding {:?}", text);
    }
}

#[test]
fn utf8_strings_round_trip() {
    for &(text, _) in STRINGS {
        let mut encoder = Encoder::new();
        encoder.append_prefixed_string(text).unwrap();
        let mut decoder = Decoder::new(encoder.buffer());
        assert_eq!(decoder.read_prefixed_string().unwrap(), text);
        assert!(decoder.done());
    }
}

#[test]
fn mixed_sequence_keeps_boundaries() {
    let mut encoder = Encoder::with_capacity(1);
    for &(value, _) in UNSIGNED {
        encoder.append_uint32(value);
    }
    for &(value, _) in SIGNED {
        encoder.append_int32(value);
    }
    for &(text, _) in STRINGS {
        encoder.append_prefixed_string(text).unwrap();
    }
    let bytes = encoder.into_bytes();

    let mut decoder = Decoder::new(&bytes);
    for &(value, _) in UNSIGNED {
        assert_eq!(decoder.read_uint32().unwrap(), value);
    }
    for &(value, _) in SIGNED {
        assert_eq!(decoder.read_int32().unwrap(), value);
    }
    for &(text, _) in STRINGS {
        assert_eq!(decoder.read_prefixed_string().unwrap(), text);
    }
    decoder.finish().unwrap();
}
