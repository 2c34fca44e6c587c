//! Multi-word codec: non-negative integers of arbitrary magnitude to and
//! from hyphen-joined proquint sequences.

use num_bigint::BigUint;

use crate::bigint;
use crate::error::{Error, FormatIssue};
use crate::table::WordTable;
use crate::validate;
use crate::word;

/// Separator between words in a proquint sequence.
pub const SEPARATOR: char = '-';

/// Numeric result mode for decoding.
///
/// The mode is caller-supplied configuration, never inferred from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericMode {
    /// Non-negative `i32`; decoding fails above 2^31 - 1.
    Int32,
    /// Exactly-representable `f64`; decoding fails at and above 2^53 - 1.
    Float64,
    /// Arbitrary precision; never overflows.
    Big,
}

/// A decoded proquint value in the caller's requested mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Int32(i32),
    Float64(f64),
    Big(BigUint),
}

/// A non-negative integer magnitude offered for encoding.
///
/// The native/arbitrary-precision boundary is the variant tag, never a
/// magnitude probe, so large values are not squeezed through a lossy
/// intermediate on their way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Magnitude {
    Native(u64),
    Big(BigUint),
}

impl Magnitude {
    /// Admits a double only when it is a finite, non-negative integer that
    /// an `f64` still represents exactly.
    ///
    /// Anything else fails with [`Error::UnsupportedValue`].
    pub fn from_f64(value: f64) -> Result<Magnitude, Error> {
        if !value.is_finite() {
            return Err(Error::UnsupportedValue {
                reason: "not a finite number",
            });
        }
        if value < 0.0 {
            return Err(Error::UnsupportedValue {
                reason: "negative",
            });
        }
        if value.fract() != 0.0 {
            return Err(Error::UnsupportedValue {
                reason: "not an integer",
            });
        }
        if value >= 9007199254740991.0 {
            return Err(Error::UnsupportedValue {
                reason: "beyond the exact integer range of f64",
            });
        }
        Ok(Magnitude::Native(value as u64))
    }
}

impl From<u16> for Magnitude {
    fn from(v: u16) -> Self {
        Magnitude::Native(v as u64)
    }
}

impl From<u32> for Magnitude {
    fn from(v: u32) -> Self {
        Magnitude::Native(v as u64)
    }
}

impl From<u64> for Magnitude {
    fn from(v: u64) -> Self {
        Magnitude::Native(v)
    }
}

impl From<BigUint> for Magnitude {
    fn from(v: BigUint) -> Self {
        Magnitude::Big(v)
    }
}

/// Proquint codec with explicit performance toggles.
///
/// The default codec validates untrusted text and renders words through the
/// shared [`WordTable`]. Both toggles affect performance only; encoded and
/// decoded values are identical either way.
///
/// # Example
///
/// ```
/// use proquint::{Codec, Decoded, NumericMode};
///
/// let codec = Codec::new();
/// assert_eq!(codec.encode(2130706433u64), "lusab-babad");
/// assert_eq!(
///     codec.decode("lusab-babad", NumericMode::Int32),
///     Ok(Decoded::Int32(2130706433)),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    use_table: bool,
    validate: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Codec {
            use_table: true,
            validate: true,
        }
    }
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and look up words arithmetically instead of through the shared
    /// word table.
    pub fn without_table(mut self) -> Self {
        self.use_table = false;
        self
    }

    /// Skip grammar validation on decode.
    ///
    /// Only for text this codec itself produced. Ill-formed input then
    /// yields unspecified values rather than errors; it never panics.
    pub fn trusted_input(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Encodes a non-negative integer as its minimal proquint sequence.
    ///
    /// The word count k is the smallest with value < 65536^k (k = 1 for
    /// zero), most significant word first.
    pub fn encode(&self, value: impl Into<Magnitude>) -> String {
        let digits = match value.into() {
            Magnitude::Native(v) => native_digits_be(v),
            Magnitude::Big(v) => bigint::digits_be(&v),
        };
        let mut out = String::with_capacity(digits.len() * 6);
        for (i, &digit) in digits.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            if self.use_table {
                out.push_str(WordTable::global().word_at(digit));
            } else {
                out.push_str(&word::encode_index(digit));
            }
        }
        out
    }

    /// Decodes a proquint sequence into the requested numeric mode.
    ///
    /// Accumulation always runs in arbitrary precision so the sum itself
    /// cannot overflow; only the final cast to the requested mode can fail,
    /// and does so explicitly with [`Error::Overflow`].
    pub fn decode(&self, text: &str, mode: NumericMode) -> Result<Decoded, Error> {
        if self.validate {
            validate::check_sequence(text)?;
        } else if text.is_empty() {
            // Even trusted input cannot stand in for a value that is absent.
            return Err(Error::invalid_format(text, FormatIssue::Empty));
        }
        let digits: Vec<u16> = text.split(SEPARATOR).map(|w| self.digit_of(w)).collect();
        let value = bigint::from_digits_be(&digits);
        match mode {
            NumericMode::Int32 => bigint::to_int32(&value)
                .map(Decoded::Int32)
                .ok_or(Error::Overflow { mode }),
            NumericMode::Float64 => bigint::to_float64(&value)
                .map(Decoded::Float64)
                .ok_or(Error::Overflow { mode }),
            NumericMode::Big => Ok(Decoded::Big(value)),
        }
    }

    /// Elementwise encode; a `None` slot yields `None` at the same position
    /// without being touched.
    pub fn encode_batch<T>(&self, values: &[Option<T>]) -> Vec<Option<String>>
    where
        T: Clone + Into<Magnitude>,
    {
        values
            .iter()
            .map(|slot| slot.clone().map(|v| self.encode(v)))
            .collect()
    }

    /// Elementwise decode. Missing slots propagate as missing and never
    /// abort the batch; a present malformed or overflowing slot still fails.
    pub fn decode_batch(
        &self,
        texts: &[Option<&str>],
        mode: NumericMode,
    ) -> Result<Vec<Option<Decoded>>, Error> {
        texts
            .iter()
            .map(|slot| slot.map(|t| self.decode(t, mode)).transpose())
            .collect()
    }

    fn digit_of(&self, word_text: &str) -> u16 {
        if self.use_table {
            if let Some(index) = WordTable::global().index_of(word_text) {
                return index;
            }
        }
        word::decode_word_trusted(word_text)
    }
}

/// Minimal big-endian base-65536 digits of a native value.
fn native_digits_be(value: u64) -> Vec<u16> {
    let mut digits = Vec::with_capacity(4);
    let mut num = value;
    loop {
        digits.push((num & 0xFFFF) as u16);
        num >>= 16;
        if num == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}
