//! The fixed proquint alphabet: 16 consonants, 4 vowels, and the
//! consonant-vowel-consonant-vowel-consonant word pattern.
//!
//! The two character classes are concatenated into a single 20-symbol pool,
//! consonants at pool positions 0..=15 and vowels at 16..=19. The ordering is
//! fixed; word-position parity (odd 1-indexed positions consonant, even vowel)
//! is part of the format, not configurable.

/// The 16 proquint consonants, in pool order.
pub const CONSONANTS: &[u8; 16] = b"bdfghjklmnprstvz";

/// The 4 proquint vowels, in pool order.
pub const VOWELS: &[u8; 4] = b"aiou";

/// Pool position of the first vowel; vowel sub-indices are offset by this
/// amount when addressed through the shared pool.
pub const VOWEL_OFFSET: usize = CONSONANTS.len();

/// Number of characters in a single word.
pub const WORD_LEN: usize = 5;

/// Positional weight of each of the five word positions. A word's 16-bit
/// index is `sum(sub_index[p] * MULTIPLIERS[p])`, mirroring the halfbyte-quad
/// layout: consonant positions carry 4 bits, vowel positions 2.
pub const MULTIPLIERS: [u16; WORD_LEN] = [4096, 1024, 64, 16, 1];

/// Returns the pool symbol at `pool_index` (0..=19).
///
/// Returns `None` if the index is outside the pool.
pub fn symbol(pool_index: usize) -> Option<char> {
    if pool_index < VOWEL_OFFSET {
        Some(CONSONANTS[pool_index] as char)
    } else {
        VOWELS.get(pool_index - VOWEL_OFFSET).map(|&b| b as char)
    }
}

/// Decodes a character back to its pool index (0..=19).
///
/// Returns `None` if the character is not in the alphabet. Matching is
/// case-sensitive: only lowercase symbols belong to the pool.
pub fn pool_index(c: char) -> Option<usize> {
    let b = u8::try_from(c).ok()?;
    if let Some(i) = CONSONANTS.iter().position(|&s| s == b) {
        return Some(i);
    }
    VOWELS.iter().position(|&s| s == b).map(|i| i + VOWEL_OFFSET)
}

/// Whether `c` is one of the 16 proquint consonants (lowercase only).
pub fn is_consonant(c: char) -> bool {
    matches!(pool_index(c), Some(i) if i < VOWEL_OFFSET)
}

/// Whether `c` is one of the 4 proquint vowels (lowercase only).
pub fn is_vowel(c: char) -> bool {
    matches!(pool_index(c), Some(i) if i >= VOWEL_OFFSET)
}

/// Whether word position `p` (0-indexed) holds a vowel.
pub fn is_vowel_position(p: usize) -> bool {
    p % 2 == 1
}
