pub mod char_util;
pub mod error;
pub mod words_candidate;
pub mod words_splitter;
