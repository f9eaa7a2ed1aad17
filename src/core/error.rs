use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// a char that is neither a letter nor a decimal digit
    #[error("invalid char {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },

    #[error("input of {length} chars exceeds the limit of {max}")]
    InputTooLong { length: usize, max: usize },
}
