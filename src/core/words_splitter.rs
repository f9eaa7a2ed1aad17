use std::rc::Rc;

use log::{debug, trace};

use crate::config::configuration::{InvalidCharPolicy, SplitConfig};
use crate::core::char_util::{char_type_of, CharType};
use crate::core::error::SplitError;
use crate::core::words_candidate::WordsCandidate;
use crate::dict::dictionary::WordDictionary;

/// Split a string of letters and digits into words of a dictionary.
///
/// A token is either a dictionary word made of letters or a single digit
/// standing alone. Windows never cross a digit, so digits never merge with
/// letters into one token.
#[derive(Debug, Clone)]
pub struct WordsSplitter<D> {
    dictionary: D,
    cfg: SplitConfig,
}

impl<D: WordDictionary> WordsSplitter<D> {
    pub fn new(dictionary: D) -> Self {
        Self::with_config(dictionary, SplitConfig::default())
    }

    pub fn with_config(dictionary: D, cfg: SplitConfig) -> Self {
        WordsSplitter { dictionary, cfg }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn config(&self) -> &SplitConfig {
        &self.cfg
    }

    /// Every candidate whose tokens concatenate to `input`, e.g. MYSELF gives
    /// `["MY", "SELF"]` and `["MYSELF"]`.
    ///
    /// The empty input yields one candidate without tokens; an input that
    /// cannot be split yields no candidate at all.
    pub fn split_words(&self, input: &str) -> Result<Vec<WordsCandidate>, SplitError> {
        let chars = match self.prepare(input)? {
            Some(chars) => chars,
            None => return Ok(Vec::new()),
        };
        let mut memo: Vec<Option<Suffixes>> = self.new_memo(chars.len());
        let candidates: Vec<WordsCandidate> = self
            .split_from(&chars, 0, &mut memo)
            .iter()
            .map(to_candidate)
            .collect();
        debug!("split {:?} into {} candidates", input, candidates.len());
        Ok(candidates)
    }

    /// Whether `input` can be split at all, without enumerating candidates.
    pub fn can_split_words(&self, input: &str) -> Result<bool, SplitError> {
        let chars = match self.prepare(input)? {
            Some(chars) => chars,
            None => return Ok(false),
        };
        let mut memo: Vec<Option<bool>> = self.new_memo(chars.len());
        let feasible = self.can_split_from(&chars, 0, &mut memo);
        debug!("{:?} can be split: {}", input, feasible);
        Ok(feasible)
    }

    // None when the input holds a char no segmentation can cover
    fn prepare(&self, input: &str) -> Result<Option<Vec<char>>, SplitError> {
        let chars: Vec<char> = input.chars().collect();
        if let Some(max) = self.cfg.max_input_length {
            if chars.len() > max {
                return Err(SplitError::InputTooLong {
                    length: chars.len(),
                    max,
                });
            }
        }
        let invalid = chars
            .iter()
            .position(|c| char_type_of(c) == CharType::USELESS);
        match (invalid, self.cfg.invalid_char_policy) {
            (None, _) => Ok(Some(chars)),
            (Some(position), InvalidCharPolicy::Reject) => Err(SplitError::InvalidChar {
                ch: chars[position],
                position,
            }),
            (Some(position), InvalidCharPolicy::Infeasible) => {
                debug!("{:?} not splittable, invalid char at {}", input, position);
                Ok(None)
            }
        }
    }

    // one slot per start position; no slots when memoization is off
    fn new_memo<T: Clone>(&self, len: usize) -> Vec<Option<T>> {
        if self.cfg.memoize {
            vec![None; len + 1]
        } else {
            Vec::new()
        }
    }

    fn split_from(&self, chars: &[char], pos: usize, memo: &mut [Option<Suffixes>]) -> Suffixes {
        if let Some(Some(cached)) = memo.get(pos) {
            return Rc::clone(cached);
        }
        let suffixes = self.split_at(chars, pos, memo);
        if let Some(slot) = memo.get_mut(pos) {
            *slot = Some(Rc::clone(&suffixes));
        }
        suffixes
    }

    fn split_at(&self, chars: &[char], pos: usize, memo: &mut [Option<Suffixes>]) -> Suffixes {
        if pos == chars.len() {
            return Rc::from(vec![None]);
        }

        let mut suffixes = Vec::new();
        let mut word = String::new();
        for (i, c) in chars.iter().enumerate().skip(pos) {
            if char_type_of(c) == CharType::ARABIC {
                if i == pos {
                    let rest = self.split_from(chars, i + 1, memo);
                    add_words(Rc::from(c.to_string()), &rest, &mut suffixes);
                }
                break;
            }
            word.push(*c);
            if self.dictionary.contains_word(&word) {
                trace!("word {:?} at {}", word, pos);
                let rest = self.split_from(chars, i + 1, memo);
                add_words(Rc::from(word.as_str()), &rest, &mut suffixes);
            }
        }
        Rc::from(suffixes)
    }

    fn can_split_from(&self, chars: &[char], pos: usize, memo: &mut [Option<bool>]) -> bool {
        if let Some(Some(cached)) = memo.get(pos) {
            return *cached;
        }
        let feasible = self.can_split_at(chars, pos, memo);
        if let Some(slot) = memo.get_mut(pos) {
            *slot = Some(feasible);
        }
        feasible
    }

    fn can_split_at(&self, chars: &[char], pos: usize, memo: &mut [Option<bool>]) -> bool {
        if pos == chars.len() {
            return true;
        }

        let lenient = self.cfg.lenient_feasibility;
        let mut word = String::new();
        for (i, c) in chars.iter().enumerate().skip(pos) {
            if char_type_of(c) == CharType::ARABIC {
                if i == pos {
                    // a lone digit is always a token
                    return self.can_split_from(chars, i + 1, memo);
                }
                if !lenient {
                    return false;
                }
                // lenient scan carries the digit into the window, which then
                // can only hit the prefix check below
                word.push(*c);
                continue;
            }
            word.push(*c);
            if self.dictionary.contains_word(&word) {
                if self.can_split_from(chars, i + 1, memo) {
                    return true;
                }
            } else if !self.dictionary.has_word_starts_with(&word) {
                trace!("prune {:?} at {}", word, pos);
                return false;
            }
        }
        lenient
    }
}

// A candidate under construction, tokens linked front to back. Tails are
// shared between every candidate built on the same suffix.
struct Link {
    word: Rc<str>,
    rest: Suffix,
}

type Suffix = Option<Rc<Link>>;

type Suffixes = Rc<[Suffix]>;

fn add_words(word: Rc<str>, rest_words: &[Suffix], out: &mut Vec<Suffix>) {
    for rest in rest_words {
        out.push(Some(Rc::new(Link {
            word: Rc::clone(&word),
            rest: rest.clone(),
        })));
    }
}

fn to_candidate(suffix: &Suffix) -> WordsCandidate {
    let mut words = Vec::new();
    let mut cursor = suffix;
    while let Some(link) = cursor {
        words.push(&link.word);
        cursor = &link.rest;
    }
    let mut candidate = WordsCandidate::new();
    for word in words.into_iter().rev() {
        candidate.add_front(word.to_string());
    }
    candidate
}
