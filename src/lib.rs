pub mod config;
pub mod core;
pub mod dict;

use std::sync::Arc;

use log::warn;
use tantivy::tokenizer::{BoxTokenStream, Token, TokenStream, Tokenizer};

pub use crate::config::configuration::{InvalidCharPolicy, SplitConfig};
pub use crate::core::error::SplitError;
pub use crate::core::words_candidate::WordsCandidate;
pub use crate::core::words_splitter::WordsSplitter;
pub use crate::dict::dictionary::{TrieDictionary, WordDictionary};

/// Tokenizer emitting the words of the candidate with the fewest tokens.
#[derive(Clone)]
pub struct WordsTokenizer {
    splitter: WordsSplitter<Arc<TrieDictionary>>,
}

pub struct WordsTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for WordsTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

impl WordsTokenizer {
    pub fn new(dictionary: Arc<TrieDictionary>) -> Self {
        Self::with_config(dictionary, SplitConfig::default())
    }

    pub fn with_config(dictionary: Arc<TrieDictionary>, cfg: SplitConfig) -> Self {
        Self {
            splitter: WordsSplitter::with_config(dictionary, cfg),
        }
    }

    fn best_candidate(&self, text: &str) -> Option<WordsCandidate> {
        match self.splitter.split_words(text) {
            Ok(candidates) => candidates.into_iter().min_by_key(WordsCandidate::len),
            Err(e) => {
                warn!("skip tokenizing {:?}: {}", text, e);
                None
            }
        }
    }
}

impl Tokenizer for WordsTokenizer {
    fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        let mut indices = text.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
        indices.push(text.len());
        let mut tokens = Vec::new();
        if let Some(candidate) = self.best_candidate(text) {
            let mut cursor = 0;
            for (position, word) in candidate.words().enumerate() {
                let end = cursor + word.chars().count();
                tokens.push(Token {
                    offset_from: indices[cursor],
                    offset_to: indices[end],
                    position,
                    text: word.to_string(),
                    position_length: 1,
                });
                cursor = end;
            }
        }
        BoxTokenStream::from(WordsTokenStream { tokens, index: 0 })
    }
}
