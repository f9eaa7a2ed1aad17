use std::sync::Arc;

use log::{debug, info};

use crate::core::char_util::regularize;
use crate::dict::trie::Trie;

/// Read-only word lookup consulted by the splitter.
///
/// Both queries must be deterministic for a fixed dictionary state and
/// accept empty or single character strings.
pub trait WordDictionary {
    /// Whether `word` is exactly a dictionary word.
    fn contains_word(&self, word: &str) -> bool;

    /// Whether some dictionary word begins with `prefix`.
    /// A word counts as a prefix of itself.
    fn has_word_starts_with(&self, prefix: &str) -> bool;
}

impl<T: WordDictionary + ?Sized> WordDictionary for &T {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }

    fn has_word_starts_with(&self, prefix: &str) -> bool {
        (**self).has_word_starts_with(prefix)
    }
}

impl<T: WordDictionary + ?Sized> WordDictionary for Arc<T> {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }

    fn has_word_starts_with(&self, prefix: &str) -> bool {
        (**self).has_word_starts_with(prefix)
    }
}

#[derive(Debug, Default)]
/// In-memory dictionary, case and width insensitive
pub struct TrieDictionary {
    main_dict: Trie,
}

impl TrieDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut dict = Self::new();
        dict.add_words(words);
        dict
    }

    // batch load words, blank entries are skipped
    pub fn add_words<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        let before = self.main_dict.len();
        for word in words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            self.main_dict.insert(word.chars().map(regularize));
        }
        info!(
            "dictionary loaded {} new words, size = {}",
            self.main_dict.len() - before,
            self.main_dict.len()
        );
    }

    // batch disable words
    pub fn disable_words<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            if !self.main_dict.delete(word.trim().chars().map(regularize)) {
                debug!("disable word {:?}: not in dictionary", word);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.main_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main_dict.is_empty()
    }
}

impl WordDictionary for TrieDictionary {
    fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.main_dict.exist(word.chars().map(regularize))
    }

    fn has_word_starts_with(&self, prefix: &str) -> bool {
        self.main_dict.starts_with(prefix.chars().map(regularize))
    }
}
