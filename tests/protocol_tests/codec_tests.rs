//! Codec Tests
//!
//! Tests for the base64 wire encoding of file bodies.

use filestash::protocol::{decode, encode};
use filestash::StashError;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_known_value() {
    assert_eq!(encode(b"hello"), "aGVsbG8=");
}

#[test]
fn test_encode_empty() {
    assert_eq!(encode(b""), "");
}

#[test]
fn test_encode_uses_padding() {
    assert_eq!(encode(b"a"), "YQ==");
    assert_eq!(encode(b"ab"), "YWI=");
    assert_eq!(encode(b"abc"), "YWJj");
}

#[test]
fn test_encode_uses_standard_alphabet() {
    // 0xfb 0xff encodes to symbols 62 and 63
    assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_known_value() {
    assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
}

#[test]
fn test_decode_empty() {
    assert_eq!(decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_decode_skips_line_breaks() {
    assert_eq!(decode("aGVs\r\nbG8=\n").unwrap(), b"hello");
}

#[test]
fn test_decode_wrapped_at_76_columns() {
    let data: Vec<u8> = (0..200u8).collect();
    let encoded = encode(&data);
    let wrapped: String = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| format!("{}\n", std::str::from_utf8(line).unwrap()))
        .collect();

    assert_eq!(decode(&wrapped).unwrap(), data);
}

#[test]
fn test_decode_rejects_invalid_characters() {
    let result = decode("aGVs*G8=");
    assert!(matches!(result, Err(StashError::Decode(_))));
}

#[test]
fn test_decode_rejects_missing_padding() {
    let result = decode("aGVsbG8");
    assert!(matches!(result, Err(StashError::Decode(_))));
}

#[test]
fn test_decode_rejects_excess_padding() {
    let result = decode("aGVsbG8==");
    assert!(matches!(result, Err(StashError::Decode(_))));
}

#[test]
fn test_decode_rejects_url_safe_alphabet() {
    let result = decode("-_8=");
    assert!(matches!(result, Err(StashError::Decode(_))));
}

#[test]
fn test_decode_rejects_whitespace() {
    let result = decode("aGVs bG8=");
    assert!(matches!(result, Err(StashError::Decode(_))));
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_roundtrip_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(decode(&encode(&data)).unwrap(), data);
}

#[test]
fn test_roundtrip_every_length_remainder() {
    let data: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
    for len in 0..data.len() {
        let slice = &data[..len];
        assert_eq!(decode(&encode(slice)).unwrap(), slice, "length {len}");
    }
}

#[test]
fn test_roundtrip_large_payload() {
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    assert_eq!(decode(&encode(&data)).unwrap(), data);
}
