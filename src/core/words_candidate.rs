use std::collections::VecDeque;

/// One complete segmentation: tokens in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordsCandidate {
    words: VecDeque<String>,
}

impl WordsCandidate {
    pub fn new() -> Self {
        WordsCandidate {
            words: VecDeque::new(),
        }
    }

    pub fn add_front<S: Into<String>>(&mut self, word: S) {
        self.words.push_front(word.into());
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tokens glued back together, equal to the input that was split.
    pub fn concat(&self) -> String {
        self.words.iter().map(String::as_str).collect()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words.into()
    }
}

impl From<Vec<&str>> for WordsCandidate {
    fn from(words: Vec<&str>) -> Self {
        WordsCandidate {
            words: words.into_iter().map(String::from).collect(),
        }
    }
}
