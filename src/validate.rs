//! Strict validation of proquint text.
//!
//! Single-word grammar: exactly five characters, consonant-vowel-consonant-
//! vowel-consonant, lowercase alphabet members only. Multi-word grammar: one
//! or more words joined by single hyphens, no leading/trailing hyphen, no
//! empty segment.

use crate::alphabet;
use crate::error::{Error, FormatIssue};

/// Whether `word` is a single well-formed proquint word.
pub fn is_valid_word(word: &str) -> bool {
    word.len() == alphabet::WORD_LEN && word.chars().enumerate().all(class_matches)
}

/// Whether `text` is a well-formed proquint sequence.
pub fn is_valid_sequence(text: &str) -> bool {
    !text.is_empty() && text.split('-').all(is_valid_word)
}

fn class_matches((position, c): (usize, char)) -> bool {
    if alphabet::is_vowel_position(position) {
        alphabet::is_vowel(c)
    } else {
        alphabet::is_consonant(c)
    }
}

/// Checks a single word, reporting what is wrong with it.
pub(crate) fn check_word(word: &str) -> Result<(), Error> {
    if word.is_empty() {
        return Err(Error::invalid_format(word, FormatIssue::Empty));
    }
    check_word_in(word, word, 0)
}

/// Checks a full sequence, reporting the first offense with its position in
/// the whole input. Positions are character offsets, the same unit the
/// error display truncates in.
pub(crate) fn check_sequence(text: &str) -> Result<(), Error> {
    if text.is_empty() {
        return Err(Error::invalid_format(text, FormatIssue::Empty));
    }
    let mut offset = 0;
    for segment in text.split('-') {
        if segment.is_empty() {
            return Err(Error::invalid_format(text, FormatIssue::EmptySegment));
        }
        check_word_in(text, segment, offset)?;
        offset += segment.chars().count() + 1;
    }
    Ok(())
}

fn check_word_in(input: &str, word: &str, offset: usize) -> Result<(), Error> {
    let length = word.chars().count();
    if length != alphabet::WORD_LEN {
        return Err(Error::invalid_format(
            input,
            FormatIssue::WrongLength { word_length: length },
        ));
    }
    for (p, c) in word.chars().enumerate() {
        if !class_matches((p, c)) {
            return Err(Error::invalid_format(
                input,
                FormatIssue::BadCharacter {
                    char: c,
                    position: offset + p,
                },
            ));
        }
    }
    Ok(())
}
