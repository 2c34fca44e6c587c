//! Crate-level properties cutting across modules.

use std::collections::HashSet;

use num_bigint::BigUint;

use crate::bigint;
use crate::{
    Codec, Decoded, NumericMode, WordTable, decode, decode_word, encode, encode_index,
    is_valid_sequence, is_valid_word,
};

#[test]
fn test_word_bijection_full_domain() {
    // Cached and arithmetic paths must agree everywhere, every word must be
    // grammar-valid, and all 65536 words must be distinct.
    let table = WordTable::global();
    let mut seen = HashSet::with_capacity(1 << 16);
    for index in 0..=u16::MAX {
        let w = encode_index(index);
        assert_eq!(table.word_at(index), w);
        assert_eq!(table.index_of(&w), Some(index));
        assert_eq!(decode_word(&w), Ok(index));
        assert!(is_valid_word(&w));
        assert!(seen.insert(w));
    }
    assert_eq!(seen.len(), 65536);
}

#[test]
fn test_roundtrip_native_values() {
    for value in [
        0u64,
        1,
        255,
        65535,
        65536,
        25258,
        2130706433,
        2147483647,
        2147483648,
        (1 << 53) - 2,
        u64::MAX,
    ] {
        let text = encode(value);
        assert!(is_valid_sequence(&text));
        assert_eq!(
            decode(&text, NumericMode::Big),
            Ok(Decoded::Big(BigUint::from(value)))
        );
    }
}

#[test]
fn test_roundtrip_text_values() {
    // encode(decode(T)) == T for already-minimal texts.
    for text in ["babab", "kapop", "zuzuz", "lusab-babad", "gutih-tugad", "zuzuz-zuzuz-zuzuz"] {
        let Ok(Decoded::Big(value)) = decode(text, NumericMode::Big) else {
            panic!("{} should decode", text);
        };
        assert_eq!(encode(value), text);
    }
}

#[test]
fn test_minimality() {
    // k words means 65536^(k-1) <= N < 65536^k, except N = 0 which still
    // takes one word.
    assert_eq!(encode(0u64), "babab");
    for value in [1u64, 65535, 65536, 4294967295, 4294967296, u64::MAX] {
        let text = encode(value);
        let k = text.split('-').count() as u32;
        let n = BigUint::from(value);
        assert!(n < bigint::pow_base(k), "{} took too few words", value);
        assert!(
            bigint::pow_base(k - 1) <= n,
            "{} has a redundant leading word",
            value
        );
    }
}

#[test]
fn test_reference_vectors() {
    // IP-address examples from the proquint paper.
    assert_eq!(encode(0x7F000001u32), "lusab-babad"); // 127.0.0.1
    assert_eq!(encode(0x3F54DCC1u32), "gutih-tugad"); // 63.84.220.193
    assert_eq!(decode_word("kapop"), Ok(25258));
    assert_eq!(encode(25258u32), "kapop");
}

#[test]
fn test_overflow_is_explicit_never_silent() {
    let text = encode(1u64 << 40);
    match decode(&text, NumericMode::Int32) {
        Err(crate::Error::Overflow {
            mode: NumericMode::Int32,
        }) => {}
        other => panic!("expected explicit overflow, got {:?}", other),
    }
    // The same text still decodes exactly in arbitrary precision.
    assert_eq!(
        decode(&text, NumericMode::Big),
        Ok(Decoded::Big(BigUint::from(1u64 << 40)))
    );
}

#[test]
fn test_leading_zero_words_decode_but_do_not_roundtrip() {
    // "babab-kapop" is well-formed text for 25258 with a redundant leading
    // zero word; decode accepts it, encode never produces it.
    assert_eq!(
        decode("babab-kapop", NumericMode::Int32),
        Ok(Decoded::Int32(25258))
    );
    assert_eq!(encode(25258u64), "kapop");
}

#[test]
fn test_batch_missing_propagation_across_codec() {
    let codec = Codec::new();
    let encoded = codec.encode_batch(&[Some(5u64), None, Some(7u64)]);
    assert_eq!(encoded[1], None);
    let texts: Vec<Option<&str>> = encoded.iter().map(|s| s.as_deref()).collect();
    let decoded = codec.decode_batch(&texts, NumericMode::Int32).unwrap();
    assert_eq!(
        decoded,
        vec![Some(Decoded::Int32(5)), None, Some(Decoded::Int32(7))]
    );
}
