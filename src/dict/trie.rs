use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TrieNode {
    final_state: bool,
    child_nodes: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn has_childs(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    // walk down along chars, None if the path breaks off
    fn find<C: Iterator<Item = char>>(&self, chars: C) -> Option<&TrieNode> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get(&c)?;
        }
        Some(current_node)
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.find(chars).map_or(false, |node| node.final_state)
    }

    pub fn starts_with<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.find(chars)
            .map_or(false, |node| node.final_state || node.has_childs())
    }

    /// Unmark the word and prune the branch left without words,
    /// returns whether it was present.
    pub fn delete(&mut self, chars: &[char]) -> bool {
        match chars.split_first() {
            None => std::mem::replace(&mut self.final_state, false),
            Some((c, rest)) => {
                let child = match self.child_nodes.get_mut(c) {
                    Some(node) => node,
                    None => return false,
                };
                let deleted = child.delete(rest);
                if deleted && !child.final_state && !child.has_childs() {
                    self.child_nodes.remove(c);
                }
                deleted
            }
        }
    }

    /// Mark the word, returns whether it was newly added.
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.entry(c).or_default();
        }
        !std::mem::replace(&mut current_node.final_state, true)
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    size: usize,
}

impl Trie {
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C) {
        if self.root.insert(chars) {
            self.size += 1;
        }
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let char_list: Vec<char> = chars.collect();
        let deleted = self.root.delete(&char_list);
        if deleted {
            self.size -= 1;
        }
        deleted
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.exist(chars)
    }

    /// Whether any stored word begins with chars. A word is a prefix of itself.
    pub fn starts_with<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.starts_with(chars)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
