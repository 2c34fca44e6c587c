use crate::codec::NumericMode;

/// Errors that can occur while encoding or decoding proquints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input text does not match the proquint grammar.
    InvalidFormat { input: String, reason: FormatIssue },
    /// A word index lies outside 0..=65535.
    IndexOutOfRange { value: u64 },
    /// The decoded value does not fit the requested numeric mode.
    Overflow { mode: NumericMode },
    /// The offered value cannot represent a non-negative integer magnitude.
    UnsupportedValue { reason: &'static str },
}

/// What exactly was wrong with the textual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The input string is empty
    Empty,
    /// A word is not exactly five characters long
    WrongLength { word_length: usize },
    /// A character is not in the expected class (consonant/vowel) for its position
    BadCharacter { char: char, position: usize },
    /// A hyphen-separated segment is empty (leading, trailing, or doubled hyphen)
    EmptySegment,
}

impl Error {
    /// Create an InvalidFormat error, truncating long inputs for display.
    pub(crate) fn invalid_format(input: &str, reason: FormatIssue) -> Self {
        // Truncation counts characters, not bytes: invalid input is
        // arbitrary text and a byte slice could split a multi-byte character.
        let display_input = if input.len() > 60 {
            let mut truncated: String = input.chars().take(60).collect();
            truncated.push_str("...");
            truncated
        } else {
            input.to_string()
        };
        Error::InvalidFormat {
            input: display_input,
            reason,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFormat { input, reason } => match reason {
                FormatIssue::Empty => write!(f, "Cannot decode empty input"),
                FormatIssue::WrongLength { word_length } => write!(
                    f,
                    "Invalid proquint '{}': words are exactly 5 characters, found one of {}",
                    input, word_length
                ),
                FormatIssue::BadCharacter { char, position } => write!(
                    f,
                    "Invalid proquint '{}': unexpected character '{}' at position {}",
                    input, char, position
                ),
                FormatIssue::EmptySegment => write!(
                    f,
                    "Invalid proquint '{}': empty segment between hyphens",
                    input
                ),
            },
            Error::IndexOutOfRange { value } => {
                write!(f, "Word index {} is outside 0..=65535", value)
            }
            Error::Overflow { mode } => {
                write!(f, "Decoded value exceeds the range of {:?} output", mode)
            }
            Error::UnsupportedValue { reason } => {
                write!(f, "Value is not a non-negative integer magnitude: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {}
