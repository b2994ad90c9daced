//! Node implementation for the topic trie.
//!
//! This module provides the TrieNode structure used by both matcher variants.
//! Nodes are the fundamental building blocks of the trie, each keyed by a
//! topic token in its parent and owning its children exclusively.

use fnv::FnvHashMap;

/// A node in the topic trie.
///
/// Each node represents one token of a registered pattern. Wildcard tokens are
/// stored as ordinary map keys; they are only interpreted specially while
/// matching. A node is terminal when its value slot is non-empty, which
/// replaces the reserved-marker-key encoding used by map-of-maps
/// implementations of the same structure.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    /// Map of tokens to child nodes.
    pub children: FnvHashMap<String, TrieNode<V>>,

    /// Values attached to patterns ending at this node. Duplicates are
    /// preserved; the set-membership variant uses `V = ()`.
    pub values: Vec<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            values: Vec::new(),
        }
    }

    /// Whether at least one pattern ends at this node.
    pub fn is_terminal(&self) -> bool {
        !self.values.is_empty()
    }

    /// Whether this node carries nothing and may be pruned by its parent.
    ///
    /// A non-root node for which this returns `true` must not remain in the
    /// tree after a removal completes.
    pub fn is_prunable(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
