//! Process-lifetime word table: every index/word pair, built once.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::word;

static TABLE: OnceLock<WordTable> = OnceLock::new();

/// Cache of all 65536 five-character words, forward and reverse.
///
/// Built lazily through the uncached arithmetic path, exactly once even under
/// concurrent first use, and immutable afterwards. Purely a performance
/// structure: lookups agree with [`crate::encode_index`] and
/// [`crate::decode_word`] over the whole domain.
#[derive(Debug)]
pub struct WordTable {
    words: Vec<String>,
    index_of: HashMap<String, u16>,
}

impl WordTable {
    /// Handle to the shared table; the first call builds it.
    pub fn global() -> &'static WordTable {
        TABLE.get_or_init(WordTable::build)
    }

    fn build() -> WordTable {
        let mut words = Vec::with_capacity(1 << 16);
        let mut index_of = HashMap::with_capacity(1 << 16);
        for index in 0..=u16::MAX {
            let w = word::encode_index(index);
            index_of.insert(w.clone(), index);
            words.push(w);
        }
        WordTable { words, index_of }
    }

    /// The word for `index`. O(1).
    pub fn word_at(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    /// The index for `word`, or `None` when the string is not one of the
    /// 65536 words. O(1) amortized.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index_of.get(word).copied()
    }
}
