//! Proquint codec: non-negative integers of arbitrary magnitude rendered as
//! sequences of pronounceable five-letter words.
//!
//! A proquint word encodes one base-65536 digit as consonant-vowel-consonant-
//! vowel-consonant over a fixed 20-symbol alphabet; a value is the minimal
//! big-endian sequence of such words, joined by hyphens.
//!
//! # Example
//!
//! ```
//! use proquint::{decode, encode, Decoded, NumericMode};
//!
//! assert_eq!(encode(2130706433u64), "lusab-babad");
//! assert_eq!(
//!     decode("lusab-babad", NumericMode::Int32),
//!     Ok(Decoded::Int32(2130706433)),
//! );
//! ```

pub mod alphabet;
mod bigint;
mod codec;
mod error;
mod sampler;
mod table;
mod validate;
mod word;

pub use codec::{Codec, Decoded, Magnitude, NumericMode, SEPARATOR};
pub use error::{Error, FormatIssue};
pub use sampler::{RandomSource, sample_indices, sample_indices_with};
pub use table::WordTable;
pub use validate::{is_valid_sequence, is_valid_word};
pub use word::{
    decode_word, decode_word_trusted, decode_words, encode_index, encode_indices, word_for_index,
};

// The arbitrary-precision type behind `Magnitude::Big` and `Decoded::Big`.
pub use num_bigint::BigUint;

/// Encodes a non-negative integer with the default codec.
pub fn encode(value: impl Into<Magnitude>) -> String {
    Codec::new().encode(value)
}

/// Decodes a proquint sequence with the default codec.
pub fn decode(text: &str, mode: NumericMode) -> Result<Decoded, Error> {
    Codec::new().decode(text, mode)
}

#[cfg(test)]
mod tests;
