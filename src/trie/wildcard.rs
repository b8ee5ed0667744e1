//! Insert-only trie with single-character wildcard search.
//!
//! Each node exclusively owns a map from character to child plus a terminal
//! marker. Search patterns mix literal characters with [`WILDCARD`], which
//! matches exactly one arbitrary character at its position; a wildcard
//! position is resolved by depth-first exploration of every child, with no
//! memoization.
//!
//! ## Architecture
//!
//! ```text
//!   insert("bad"), insert("dad")
//!
//!   root ─┬─ 'b' ── 'a' ── 'd'●        ● = terminal (complete word)
//!         └─ 'd' ── 'a' ── 'd'●
//!
//!   search(".ad"): '.' fans out over {b, d}, both reach 'a' ── 'd'● → true
//! ```
//!
//! ## Performance
//! - `insert`: O(word length)
//! - `search`, no wildcards: O(pattern length)
//! - `search`, w wildcards: worst case O(branching^w · pattern length)

use rustc_hash::FxHashMap;

/// Pattern character matching exactly one arbitrary character.
pub const WILDCARD: char = '.';

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
}

/// Insert-only trie over words, searched with optional [`WILDCARD`]
/// positions.
///
/// Nodes are never removed; re-inserting a word is a no-op. A failed search
/// is an ordinary `false`, never an error.
///
/// # Example
///
/// ```
/// use structkit::trie::WildcardTrie;
///
/// let mut trie = WildcardTrie::new();
/// trie.insert("bad");
/// trie.insert("dad");
/// trie.insert("mad");
///
/// assert!(!trie.search("pad"));
/// assert!(trie.search(".ad"));
/// assert!(trie.search("b.."));
/// ```
#[derive(Debug, Default)]
pub struct WildcardTrie {
    root: TrieNode,
    words: usize,
}

impl WildcardTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct complete words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Inserts `word`, creating nodes along its path and marking the final
    /// node as a complete word. Idempotent: re-inserting an existing word
    /// changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Returns `true` iff some inserted word has the same length as
    /// `pattern` and matches it position by position, with [`WILDCARD`]
    /// matching any single character.
    ///
    /// An empty pattern matches only if the empty word was inserted.
    pub fn search(&self, pattern: &str) -> bool {
        let chars: Vec<char> = pattern.chars().collect();
        Self::search_in(&self.root, &chars)
    }

    fn search_in(node: &TrieNode, pattern: &[char]) -> bool {
        let (first, rest) = match pattern.split_first() {
            Some(split) => split,
            None => return node.terminal,
        };
        if *first == WILDCARD {
            node.children
                .values()
                .any(|child| Self::search_in(child, rest))
        } else {
            node.children
                .get(first)
                .is_some_and(|child| Self::search_in(child, rest))
        }
    }
}
