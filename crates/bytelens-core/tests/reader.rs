use std::sync::Arc;
use std::thread;

use bytelens_core::{ByteReader, ByteReaderError, Encoding};

fn all_bytes() -> Vec<u8> {
    (0..=u8::MAX).collect()
}

#[test]
fn read_u8_returns_every_byte_unchanged() {
    let reader = ByteReader::new(all_bytes());
    for offset in 0..reader.len() {
        assert_eq!(usize::from(reader.read_u8(offset).unwrap()), offset);
    }
}

#[test]
fn read_i8_follows_sign_magnitude_rule() {
    let reader = ByteReader::new(all_bytes());
    for byte in 0..=u8::MAX {
        let expected = match byte {
            0..=0x7f => i16::from(byte),
            0x80 => -128,
            _ => -i16::from(byte & 0x7f),
        };
        let actual = reader.read_i8(usize::from(byte)).unwrap();
        assert_eq!(i16::from(actual), expected, "byte {byte:#04x}");
    }
}

#[test]
fn read_u16_le_is_byte_swapped_be() {
    let bytes = all_bytes();
    let reader = ByteReader::new(&bytes[..]);
    for offset in 0..reader.len() - 1 {
        let le = reader.read_u16_le(offset).unwrap();
        let be = reader.read_u16_be(offset).unwrap();
        assert_eq!(le, be.swap_bytes());
        assert_eq!(le, u16::from(bytes[offset]) | (u16::from(bytes[offset + 1]) << 8));
    }
}

#[test]
fn signed_reads_share_unsigned_bit_patterns() {
    let reader = ByteReader::new([0xfeu8, 0xff, 0xff, 0xff, 0x00, 0x80]);
    assert_eq!(reader.read_i16_le(0).unwrap(), -2);
    assert_eq!(reader.read_i16_le(0).unwrap() as u16, reader.read_u16_le(0).unwrap());
    assert_eq!(reader.read_i32_le(0).unwrap(), -2);
    assert_eq!(reader.read_i32_be(0).unwrap() as u32, reader.read_u32_be(0).unwrap());
    assert_eq!(reader.read_i16_le(4).unwrap(), i16::MIN);
    assert_eq!(reader.read_i16_be(4).unwrap(), 128);
}

#[test]
fn float_le_one() {
    let reader = ByteReader::new([0x00u8, 0x00, 0x80, 0x3f]);
    assert_eq!(reader.read_float_le(0).unwrap(), 1.0);
}

#[test]
fn float_le_zero_and_smallest_normal() {
    let zero = ByteReader::new([0x00u8, 0x00, 0x00, 0x00]);
    assert_eq!(zero.read_float_le(0).unwrap(), 0.0);

    let smallest = ByteReader::new([0x00u8, 0x00, 0x80, 0x00]);
    assert_eq!(smallest.read_float_le(0).unwrap(), 2f64.powi(-126));
}

#[test]
fn float_le_denormal_pattern() {
    // Exponent field 0 with mantissa 0x400000 -> 2^-127 * 1.5.
    let reader = ByteReader::new([0x00u8, 0x00, 0x40, 0x00]);
    assert_eq!(reader.read_float_le(0).unwrap(), 2f64.powi(-127) * 1.5);
}

#[test]
fn float_special_values() {
    let nan = ByteReader::new([0x01u8, 0x00, 0x80, 0x7f]);
    assert!(nan.read_float_le(0).unwrap().is_nan());

    let neg_inf = ByteReader::new([0x00u8, 0x00, 0x80, 0xff]);
    assert_eq!(neg_inf.read_float_le(0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(neg_inf.read_float_le_fixed(0, 2).unwrap(), "-Infinity");

    let pos_inf = ByteReader::new([0x7fu8, 0x80, 0x00, 0x00]);
    assert_eq!(pos_inf.read_float_be(0).unwrap(), f64::INFINITY);
}

#[test]
fn float_orders_agree_on_mirrored_bytes() {
    let reader = ByteReader::new([0xc2u8, 0xf6, 0xe9, 0x79, 0x79, 0xe9, 0xf6, 0xc2]);
    let be = reader.read_float_be(0).unwrap();
    let le = reader.read_float_le(4).unwrap();
    assert_eq!(be, le);
    assert_eq!(reader.read_float_be_fixed(0, 3).unwrap(), "-123.456");
}

#[test]
fn ascii_strips_nul() {
    let reader = ByteReader::new([72u8, 73, 0]);
    assert_eq!(reader.decode_string("ascii", Some(0), Some(3)).unwrap(), "HI");
}

#[test]
fn hex_concatenates_every_byte() {
    let reader = ByteReader::new([0x0au8, 0xff]);
    assert_eq!(reader.decode_string("hex", Some(0), Some(2)).unwrap(), "0aff");
    assert_eq!(reader.decode(Encoding::Hex, 0..reader.len()).unwrap(), "0aff");
}

#[test]
fn unsupported_encoding_names_the_encoding() {
    let reader = ByteReader::new([0x0au8, 0xff]);
    let err = reader.decode_string("utf16", None, None).unwrap_err();
    assert!(matches!(
        err,
        ByteReaderError::UnsupportedEncoding { ref encoding } if encoding == "utf16"
    ));
    assert!(err.to_string().contains("utf16"));
}

#[test]
fn copy_is_independent_of_source() {
    let mut source = vec![9u8, 8, 7, 6, 5];
    let mut copied = {
        let reader = ByteReader::new(&source[..]);
        reader.copy(1, 3).unwrap()
    };
    assert_eq!(copied, vec![8, 7, 6]);

    copied[0] = 0;
    assert_eq!(source, vec![9, 8, 7, 6, 5]);

    source[2] = 42;
    assert_eq!(copied, vec![0, 7, 6]);
}

#[test]
fn repeated_reads_are_identical() {
    let reader = ByteReader::new(vec![0xdeu8, 0xad, 0xbe, 0xef, 0x00]);
    let first = (
        reader.read_u32_be(0).unwrap(),
        reader.read_i16_le(1).unwrap(),
        reader.read_float_le(1).unwrap().to_bits(),
        reader.decode_string("hex", None, None).unwrap(),
    );
    for _ in 0..8 {
        let again = (
            reader.read_u32_be(0).unwrap(),
            reader.read_i16_le(1).unwrap(),
            reader.read_float_le(1).unwrap().to_bits(),
            reader.decode_string("hex", None, None).unwrap(),
        );
        assert_eq!(again, first);
    }
}

#[test]
fn shared_buffer_across_threads() {
    let bytes: Arc<[u8]> = Arc::from(vec![0x78u8, 0x56, 0x34, 0x12]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reader = ByteReader::new(Arc::clone(&bytes));
            thread::spawn(move || reader.read_u32_le(0).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0x1234_5678);
    }
}

#[test]
fn out_of_range_reads_are_errors() {
    let reader = ByteReader::new([1u8, 2, 3]);
    assert!(matches!(
        reader.read_i32_le(0),
        Err(ByteReaderError::OutOfBounds { needed: 4, actual: 3 })
    ));
    assert!(reader.read_float_be(0).is_err());
    assert!(reader.copy(0, 4).is_err());
    assert!(reader.read_i8(3).is_err());
}
