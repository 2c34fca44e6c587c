//! Single-word codec: one 16-bit word index to and from its five-character
//! word form.
//!
//! This is the direct arithmetic path; [`crate::table::WordTable`] caches its
//! output for O(1) lookup. The two paths produce identical results over the
//! whole 0..=65535 domain.

use crate::alphabet::{self, MULTIPLIERS, VOWEL_OFFSET, WORD_LEN};
use crate::error::Error;
use crate::validate;

/// Renders a 16-bit word index as its five-character word.
///
/// Taking `u16` makes the 0..=65535 range a type-level guarantee, so this
/// path never fails. For indices arriving as wider integers see
/// [`word_for_index`].
///
/// # Example
///
/// ```
/// assert_eq!(proquint::encode_index(0), "babab");
/// assert_eq!(proquint::encode_index(25258), "kapop");
/// ```
pub fn encode_index(index: u16) -> String {
    encode_index_bytes(index).iter().map(|&b| b as char).collect()
}

/// The five word symbols for `index`, most significant position first.
pub(crate) fn encode_index_bytes(index: u16) -> [u8; WORD_LEN] {
    let mut out = [0u8; WORD_LEN];
    let mut rem = index as usize;
    for (p, &mult) in MULTIPLIERS.iter().enumerate() {
        let sub = rem / mult as usize;
        rem %= mult as usize;
        // Vowel sub-indices live at +16 in the shared pool.
        out[p] = if alphabet::is_vowel_position(p) {
            alphabet::VOWELS[sub]
        } else {
            alphabet::CONSONANTS[sub]
        };
    }
    out
}

/// Renders a word index supplied as a wide integer.
///
/// Fails with [`Error::IndexOutOfRange`] when `index` does not fit 0..=65535.
pub fn word_for_index(index: u64) -> Result<String, Error> {
    let idx = u16::try_from(index).map_err(|_| Error::IndexOutOfRange { value: index })?;
    Ok(encode_index(idx))
}

/// Decodes a single five-character word to its 16-bit index.
///
/// The word's structure is validated first; wrong length, wrong case, or a
/// wrong character class at any position fails with a format error.
///
/// # Example
///
/// ```
/// assert_eq!(proquint::decode_word("kapop"), Ok(25258));
/// assert!(proquint::decode_word("KAPOP").is_err());
/// ```
pub fn decode_word(word: &str) -> Result<u16, Error> {
    validate::check_word(word)?;
    Ok(decode_word_trusted(word))
}

/// Decodes a word the caller already knows to be well-formed, skipping
/// validation.
///
/// This is the explicit trusted-path opt-out for text this crate itself
/// produced. Ill-formed input yields an unspecified index, never a panic.
pub fn decode_word_trusted(word: &str) -> u16 {
    let mut index = 0u16;
    for (p, c) in word.chars().enumerate().take(WORD_LEN) {
        let Some(pool) = alphabet::pool_index(c) else {
            continue;
        };
        let sub = if pool >= VOWEL_OFFSET {
            pool - VOWEL_OFFSET
        } else {
            pool
        };
        index = index.wrapping_add((sub as u16).wrapping_mul(MULTIPLIERS[p]));
    }
    index
}

/// Elementwise encode over optional slots; a `None` at position i yields a
/// `None` at position i without touching the slot.
pub fn encode_indices(indices: &[Option<u16>]) -> Vec<Option<String>> {
    indices.iter().map(|slot| slot.map(encode_index)).collect()
}

/// Elementwise decode over optional slots. Missing slots propagate as
/// missing; a present malformed word still fails the batch.
pub fn decode_words(words: &[Option<&str>]) -> Result<Vec<Option<u16>>, Error> {
    words
        .iter()
        .map(|slot| slot.map(decode_word).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatIssue;

    #[test]
    fn test_known_words() {
        assert_eq!(encode_index(0), "babab");
        assert_eq!(encode_index(25258), "kapop");
        assert_eq!(encode_index(u16::MAX), "zuzuz");
        assert_eq!(encode_index(1), "babad");
    }

    #[test]
    fn test_decode_known_words() {
        assert_eq!(decode_word("babab"), Ok(0));
        assert_eq!(decode_word("kapop"), Ok(25258));
        assert_eq!(decode_word("zuzuz"), Ok(u16::MAX));
    }

    #[test]
    fn test_bijection_sample() {
        for index in [0u16, 1, 255, 256, 4095, 4096, 25258, 40000, 65534, 65535] {
            assert_eq!(decode_word(&encode_index(index)), Ok(index));
        }
    }

    #[test]
    fn test_decode_rejects_bad_structure() {
        assert!(matches!(
            decode_word("kapo"),
            Err(Error::InvalidFormat {
                reason: FormatIssue::WrongLength { word_length: 4 },
                ..
            })
        ));
        assert!(matches!(
            decode_word("Kapop"),
            Err(Error::InvalidFormat {
                reason: FormatIssue::BadCharacter { char: 'K', position: 0 },
                ..
            })
        ));
        assert!(matches!(
            decode_word(""),
            Err(Error::InvalidFormat {
                reason: FormatIssue::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_trusted_path_agrees_on_valid_input() {
        for index in [0u16, 77, 25258, 65535] {
            assert_eq!(decode_word_trusted(&encode_index(index)), index);
        }
    }

    #[test]
    fn test_trusted_path_never_panics_on_garbage() {
        // Output is unspecified here; only absence of panics matters.
        for garbage in ["", "abc", "ZZZZZ", "uuuuu", "-----", "babababab"] {
            let _ = decode_word_trusted(garbage);
        }
    }

    #[test]
    fn test_word_for_index_range_check() {
        assert_eq!(word_for_index(25258), Ok("kapop".to_string()));
        assert_eq!(word_for_index(65535), Ok("zuzuz".to_string()));
        assert_eq!(
            word_for_index(65536),
            Err(Error::IndexOutOfRange { value: 65536 })
        );
    }

    #[test]
    fn test_batch_missing_propagation() {
        let encoded = encode_indices(&[Some(5), None, Some(7)]);
        assert_eq!(
            encoded,
            vec![
                Some(encode_index(5)),
                None,
                Some(encode_index(7)),
            ]
        );

        let decoded = decode_words(&[Some("kapop"), None, Some("babab")]).unwrap();
        assert_eq!(decoded, vec![Some(25258), None, Some(0)]);
    }

    #[test]
    fn test_batch_present_error_still_fails() {
        assert!(decode_words(&[Some("kapop"), None, Some("nope!")]).is_err());
    }
}
