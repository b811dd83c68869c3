//! Property tests for timestamp ordering and the binary codec
//!
//! Verifies:
//! - Total order laws: reflexivity, antisymmetry, transitivity
//! - Codec inverse: decode(encode(t)) == t
//! - Order preservation: byte order of encodings equals timestamp order
//! - Length validation on decode

#![allow(special_module_name)]

mod lib;

use std::cmp::Ordering;

use hlclock::prelude::*;
use lib::*;
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

proptest! {
    #![proptest_config(clock_config())]

    /// Property: compare(a, a) is Equal
    #[test]
    fn compare_is_reflexive(a in timestamp_strategy()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    /// Property: compare(a, b) is the reverse of compare(b, a), and Equal only for equal values
    #[test]
    fn compare_is_antisymmetric(a in timestamp_strategy(), b in timestamp_strategy()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
    }

    /// Property: a <= b and b <= c implies a <= c
    #[test]
    fn compare_is_transitive(
        a in timestamp_strategy(),
        b in timestamp_strategy(),
        c in timestamp_strategy(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort_by(compare);
        prop_assert_ne!(compare(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(compare(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(compare(&sorted[0], &sorted[2]), Ordering::Greater);
    }

    /// Property: decoding an encoding yields the original timestamp
    #[test]
    fn decode_inverts_encode(ts in timestamp_strategy()) {
        prop_assert_eq!(decode(&encode(&ts)), Ok(ts));
    }

    /// Property: any buffer that is not 16 bytes is rejected with its length
    #[test]
    fn decode_rejects_wrong_length(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        prop_assume!(bytes.len() != TIMESTAMP_LEN);
        prop_assert_eq!(
            decode(&bytes),
            Err(ClockError::InvalidLength { expected: TIMESTAMP_LEN, actual: bytes.len() })
        );
    }

    /// Property: the text form parses back to the same timestamp
    #[test]
    fn text_form_parses_back(ts in timestamp_strategy()) {
        prop_assert_eq!(ts.to_string().parse::<Timestamp>(), Ok(ts));
    }
}

/// Property: unsigned lexicographic order of encodings matches compare
#[quickcheck]
fn encoding_preserves_order(a: (u64, u64), b: (u64, u64)) -> bool {
    let (a, b) = (Timestamp::from(a), Timestamp::from(b));
    encode(&a).cmp(&encode(&b)) == compare(&a, &b)
}

/// Property: every 16-byte buffer decodes, and re-encodes to itself
#[quickcheck]
fn every_wide_buffer_decodes(hi: u64, lo: u64) -> bool {
    let mut bytes = [0u8; TIMESTAMP_LEN];
    bytes[..8].copy_from_slice(&hi.to_le_bytes());
    bytes[8..].copy_from_slice(&lo.to_le_bytes());
    matches!(decode(&bytes), Ok(ts) if encode(&ts) == bytes)
}

#[test]
fn scenario_codec_round_trip_and_short_buffer() {
    let ts = Timestamp::new(1000, 2);
    let bytes = encode(&ts);
    assert_eq!(bytes.len(), 16);
    assert_eq!(decode(&bytes), Ok(ts));

    let err = decode(&bytes[..15]).unwrap_err();
    assert_eq!(err, ClockError::InvalidLength { expected: 16, actual: 15 });
    assert!(err.is_codec_error());
}

#[test]
fn encoded_keys_sort_like_timestamps() {
    let mut stamps = vec![
        Timestamp::new(2000, 0),
        Timestamp::new(1000, 6),
        Timestamp::new(1000, 2),
        Timestamp::new(999, u64::MAX),
        Timestamp::new(1000, 256),
    ];
    let mut keys: Vec<[u8; 16]> = stamps.iter().map(encode).collect();
    stamps.sort();
    keys.sort();
    let decoded: Vec<Timestamp> = keys.iter().map(|k| decode(k).unwrap()).collect();
    assert_eq!(decoded, stamps);
}

#[cfg(feature = "serde")]
#[test]
fn serde_json_round_trip() {
    let ts = Timestamp::new(1_700_000_000_000, 3);
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, r#"{"physical":1700000000000,"logical":3}"#);
    assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), ts);
}
