pub mod dictionary;
pub mod trie;
