//! UTF-8 Codec Tests
//!
//! Tests verify:
//! - Encoded lengths per range
//! - Rejection of 0 and values past the code point limit
//! - Decoding of every sequence width
//! - Boundary stepping in both directions

use bookdex::buffer::utf8::{
    decode, encode, is_boundary, is_continuation, next_boundary, prev_boundary, sequence_len,
    sequences, CODE_POINT_LIMIT,
};
use proptest::prelude::*;

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_lengths() {
    let mut buf = [0u8; 4];
    assert_eq!(encode(0x41, &mut buf), Some(1));
    assert_eq!(encode(0x7F, &mut buf), Some(1));
    assert_eq!(encode(0x80, &mut buf), Some(2));
    assert_eq!(encode(0x7FF, &mut buf), Some(2));
    assert_eq!(encode(0x800, &mut buf), Some(3));
    assert_eq!(encode(0xFFFF, &mut buf), Some(3));
    assert_eq!(encode(0x10000, &mut buf), Some(4));
    assert_eq!(encode(0x10FFFF, &mut buf), Some(4));
}

#[test]
fn test_encode_matches_std() {
    let mut buf = [0u8; 4];
    let n = encode(0x20AC, &mut buf).unwrap();
    assert_eq!(&buf[..n], "€".as_bytes());
}

#[test]
fn test_encode_rejects_out_of_range() {
    let mut buf = [0u8; 4];
    assert_eq!(encode(0, &mut buf), None);
    assert_eq!(encode(CODE_POINT_LIMIT, &mut buf), None);
    assert_eq!(encode(u32::MAX, &mut buf), None);
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_each_width() {
    assert_eq!(decode(b"A"), Some(0x41));
    assert_eq!(decode("é".as_bytes()), Some(0xE9));
    assert_eq!(decode("€".as_bytes()), Some(0x20AC));
    assert_eq!(decode("😀".as_bytes()), Some(0x1F600));
}

#[test]
fn test_decode_reads_only_leading_sequence() {
    assert_eq!(decode("€uro".as_bytes()), Some(0x20AC));
}

#[test]
fn test_four_byte_decode_uses_full_weight() {
    let mut buf = [0u8; 4];
    let n = encode(0x1F600, &mut buf).unwrap();
    assert_eq!(n, 4);
    assert_eq!(decode(&buf), Some(0x1F600));
}

#[test]
fn test_decode_truncated_sequence() {
    assert_eq!(decode(&[0xE2, 0x82]), None);
    assert_eq!(decode(&[]), None);
}

#[test]
fn test_decode_rejects_out_of_range_lead() {
    assert_eq!(decode(&[0xF7, 0xBF, 0xBF, 0xBF]), None);
}

// =============================================================================
// Boundary Tests
// =============================================================================

#[test]
fn test_sequence_len_by_lead_byte() {
    assert_eq!(sequence_len(0x41), 1);
    assert_eq!(sequence_len(0xBF), 1);
    assert_eq!(sequence_len(0xC3), 2);
    assert_eq!(sequence_len(0xE2), 3);
    assert_eq!(sequence_len(0xF0), 4);
}

#[test]
fn test_continuation_bytes() {
    assert!(is_continuation(0x80));
    assert!(is_continuation(0xBF));
    assert!(!is_continuation(0x7F));
    assert!(!is_continuation(0xC0));
    assert!(is_boundary(b'a'));
    assert!(!is_boundary(0xA9));
}

#[test]
fn test_next_boundary_walks_code_points() {
    let bytes = "aé€😀".as_bytes();
    let mut cursor = 0;
    let mut stops = Vec::new();
    while cursor < bytes.len() {
        cursor = next_boundary(bytes, cursor);
        stops.push(cursor);
    }
    assert_eq!(stops, vec![1, 3, 6, 10]);
    assert_eq!(next_boundary(bytes, bytes.len()), bytes.len());
}

#[test]
fn test_prev_boundary_walks_code_points() {
    let bytes = "aé€😀".as_bytes();
    let mut cursor = bytes.len();
    let mut stops = Vec::new();
    while cursor > 0 {
        cursor = prev_boundary(bytes, cursor);
        stops.push(cursor);
    }
    assert_eq!(stops, vec![6, 3, 1, 0]);
    assert_eq!(prev_boundary(bytes, 0), 0);
}

#[test]
fn test_next_boundary_clamps_truncated_tail() {
    let bytes = &"😀".as_bytes()[..2];
    assert_eq!(next_boundary(bytes, 0), 2);
}

#[test]
fn test_sequences_split_whole_code_points() {
    let parts: Vec<&[u8]> = sequences("a€".as_bytes()).collect();
    assert_eq!(parts, vec!["a".as_bytes(), "€".as_bytes()]);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_decode_inverts_encode(c in any::<char>().prop_filter("nonzero", |c| *c != '\0')) {
        let mut buf = [0u8; 4];
        let n = encode(u32::from(c), &mut buf).unwrap();
        prop_assert_eq!(n, c.len_utf8());
        prop_assert_eq!(decode(&buf[..n]), Some(u32::from(c)));
    }
}
