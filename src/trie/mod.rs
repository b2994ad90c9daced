//! Topic trie implementation.
//!
//! This module provides a trie-based pattern store for AMQP/MQTT-style topic
//! matching, as described in the RabbitMQ topic-routing blog posts. Patterns
//! and topics are token sequences split on a configurable separator; a
//! single-token wildcard matches exactly one token at its position and a
//! multi-token wildcard matches zero or more tokens.
//!
//! Two variants are exposed:
//! * [`TopicTrie`] attaches caller-supplied values to patterns and returns
//!   every value whose pattern matched a topic (duplicates preserved).
//! * [`TopicMatcher`] stores bare patterns and answers a boolean membership
//!   question with a short-circuiting walk.

mod error;
mod node;

use serde::{Deserialize, Serialize};

pub use error::TopicTrieError;
use node::TrieNode;

/// Result type for topic trie operations.
pub type TopicTrieResult<T> = Result<T, TopicTrieError>;

/// Configuration for a topic trie.
///
/// The three symbols must be pairwise distinct and non-empty, and the
/// wildcard symbols must not contain the separator. [`TopicTrie::with_config`]
/// rejects invalid configurations eagerly; a pattern or topic token that
/// literally equals a configured wildcard symbol is indistinguishable from a
/// wildcard use, which is an accepted ambiguity of the format rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTrieConfig {
    /// Token separator. AMQP uses `.`, MQTT uses `/`.
    pub separator: String,

    /// Wildcard matching exactly one token. AMQP uses `*`, MQTT uses `+`.
    pub wildcard_one: String,

    /// Wildcard matching zero or more tokens. Both AMQP and MQTT use `#`.
    pub wildcard_some: String,
}

impl Default for TopicTrieConfig {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
            wildcard_one: "*".to_string(),
            wildcard_some: "#".to_string(),
        }
    }
}

impl TopicTrieConfig {
    /// Checks the configured symbols for emptiness, collisions and separator
    /// containment.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is usable.
    /// * `Err(TopicTrieError)` describing the first violation found.
    pub fn validate(&self) -> TopicTrieResult<()> {
        let symbols: [(&'static str, &str); 3] = [
            ("separator", &self.separator),
            ("wildcard_one", &self.wildcard_one),
            ("wildcard_some", &self.wildcard_some),
        ];

        for (role, symbol) in symbols {
            if symbol.is_empty() {
                return Err(TopicTrieError::EmptySymbol { role });
            }
        }

        for (i, (first, symbol)) in symbols.into_iter().enumerate() {
            for (second, other) in symbols.into_iter().skip(i + 1) {
                if symbol == other {
                    return Err(TopicTrieError::DuplicateSymbol {
                        first,
                        second,
                        symbol: symbol.to_owned(),
                    });
                }
            }
        }

        for (role, symbol) in symbols.into_iter().skip(1) {
            if symbol.contains(self.separator.as_str()) {
                return Err(TopicTrieError::SymbolContainsSeparator {
                    role,
                    symbol: symbol.to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// Multi-value topic trie.
///
/// Registered patterns carry arbitrary payload values; matching a topic
/// returns every value attached to a matching pattern. The same pattern may
/// be registered several times with the same or different values, and the
/// resulting duplicates are intentionally preserved in match results.
///
/// All mutation is `&mut self`: the structure is single-writer by contract
/// and callers needing shared access must wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct TopicTrie<V> {
    /// The root node of the trie. Never pruned; an empty trie is a root with
    /// no children and no values.
    root: TrieNode<V>,

    /// Configuration options.
    config: TopicTrieConfig,
}

impl<V> TopicTrie<V> {
    /// Creates a new empty trie with the default `.`/`*`/`#` symbols.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            config: TopicTrieConfig::default(),
        }
    }

    /// Creates a new empty trie with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Separator and wildcard symbols for this trie.
    ///
    /// # Returns
    ///
    /// * `Ok(TopicTrie)` if the configuration is valid.
    /// * `Err(TopicTrieError)` if a symbol is empty, duplicated or contains
    ///   the separator.
    pub fn with_config(config: TopicTrieConfig) -> TopicTrieResult<Self> {
        config.validate()?;
        Ok(Self {
            root: TrieNode::new(),
            config,
        })
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &TopicTrieConfig {
        &self.config
    }

    /// Registers `pattern` with an attached `value`.
    ///
    /// The pattern is split on the separator; splitting the empty string
    /// yields a single empty-string token, so `""` is a valid pattern that
    /// matches only the empty topic. Wildcard tokens are stored as ordinary
    /// map keys and only interpreted during matching. Registering the same
    /// pattern again never duplicates path nodes but does append the value.
    pub fn insert(&mut self, pattern: &str, value: V) {
        let mut node = &mut self.root;
        for token in pattern.split(self.config.separator.as_str()) {
            node = node.children.entry(token.to_owned()).or_default();
        }
        node.values.push(value);
        tracing::trace!(pattern, "registered topic pattern");
    }

    /// Unregisters `pattern`, discarding every value attached to it.
    ///
    /// Removing a pattern that was never registered is a silent no-op. Nodes
    /// left childless and non-terminal by the removal are pruned bottom-up,
    /// so removing the last pattern restores the exact shape of a freshly
    /// constructed trie.
    pub fn remove(&mut self, pattern: &str) {
        let tokens: Vec<&str> =
            pattern.split(self.config.separator.as_str()).collect();
        Self::remove_in(&mut self.root, &tokens, Vec::clear);
        tracing::trace!(pattern, "removed topic pattern");
    }

    /// Unregisters one occurrence of `value` under `pattern`.
    ///
    /// If the value was attached several times, each call removes a single
    /// occurrence. Removing a value that is not present is a silent no-op.
    pub fn remove_value(&mut self, pattern: &str, value: &V)
    where
        V: PartialEq,
    {
        let tokens: Vec<&str> =
            pattern.split(self.config.separator.as_str()).collect();
        Self::remove_in(&mut self.root, &tokens, |values| {
            if let Some(index) = values.iter().position(|v| v == value) {
                values.remove(index);
            }
        });
        tracing::trace!(pattern, "removed topic pattern value");
    }

    /// Walks the insertion path of `tokens`, applies `erase` to the value
    /// slot of the terminal node, and prunes emptied nodes on unwind.
    ///
    /// Returns whether `node` itself became prunable, letting the caller one
    /// level up drop its map entry; this collapses a dangling chain in a
    /// single call without parent pointers.
    fn remove_in(
        node: &mut TrieNode<V>,
        tokens: &[&str],
        erase: impl FnOnce(&mut Vec<V>),
    ) -> bool {
        match tokens.split_first() {
            None => erase(&mut node.values),
            Some((token, rest)) => {
                if let Some(child) = node.children.get_mut(*token) {
                    if Self::remove_in(child, rest, erase) {
                        node.children.remove(*token);
                    }
                }
            }
        }
        node.is_prunable()
    }

    /// Collects every value attached to a pattern matching `topic`.
    ///
    /// All successful wildcard branches are explored; the returned list may
    /// contain duplicates when a value was registered more than once or when
    /// several of its patterns match. No ordering between matched patterns is
    /// guaranteed.
    pub fn match_topic<'a>(&'a self, topic: &str) -> Vec<&'a V> {
        let tokens: Vec<&str> =
            topic.split(self.config.separator.as_str()).collect();
        let mut matched = Vec::new();
        self.collect_matches(&self.root, &tokens, &mut matched);
        matched
    }

    /// Whether any registered pattern matches `topic`.
    ///
    /// Unlike [`match_topic`](Self::match_topic) this walk short-circuits on
    /// the first terminal node reached.
    pub fn matches(&self, topic: &str) -> bool {
        let tokens: Vec<&str> =
            topic.split(self.config.separator.as_str()).collect();
        self.search(&self.root, &tokens)
    }

    /// Discards every registered pattern, replacing the root with a fresh
    /// empty node.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        tracing::debug!("cleared topic trie");
    }

    /// Whether no pattern is currently registered.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Number of distinct registered patterns (terminal nodes).
    ///
    /// Requires a full traversal, so this is O(n) in the trie size.
    pub fn pattern_count(&self) -> usize {
        fn count<V>(node: &TrieNode<V>) -> usize {
            let own = usize::from(node.is_terminal());
            own + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Recursive backtracking walk shared by both match entry points; this
    /// variant accumulates every terminal value instead of short-circuiting.
    fn collect_matches<'a>(
        &'a self,
        node: &'a TrieNode<V>,
        tokens: &[&str],
        out: &mut Vec<&'a V>,
    ) {
        // A multi-token wildcard child may be entered at any position and
        // consume any number of the remaining tokens, including all of them.
        if let Some(child) = node.children.get(self.config.wildcard_some.as_str())
        {
            for skip in 0..=tokens.len() {
                self.collect_matches(child, &tokens[skip..], out);
            }
        }

        let Some((token, rest)) = tokens.split_first() else {
            out.extend(node.values.iter());
            return;
        };

        // Literal branch. A token equal to the multi-token wildcard symbol is
        // skipped here because the loop above already entered that child for
        // every split, and visiting it twice would duplicate values.
        if *token != self.config.wildcard_some {
            if let Some(child) = node.children.get(*token) {
                self.collect_matches(child, rest, out);
            }
        }

        if *token != self.config.wildcard_one {
            // Single-token wildcard branch. The guard keeps a topic that
            // literally contains the wildcard symbol from re-entering the
            // branch it already took as a literal match.
            if let Some(child) =
                node.children.get(self.config.wildcard_one.as_str())
            {
                self.collect_matches(child, rest, out);
            }
        } else {
            // The token itself is the wildcard symbol: it stands for any one
            // token, so every non-wildcard child is a candidate. The wildcard
            // keys are excluded, the literal branch above covered them.
            for (key, child) in &node.children {
                if key != &self.config.wildcard_one
                    && key != &self.config.wildcard_some
                {
                    self.collect_matches(child, rest, out);
                }
            }
        }
    }

    /// Short-circuiting counterpart of
    /// [`collect_matches`](Self::collect_matches); same branch order, stops
    /// at the first terminal node.
    fn search(&self, node: &TrieNode<V>, tokens: &[&str]) -> bool {
        if let Some(child) = node.children.get(self.config.wildcard_some.as_str())
        {
            for skip in 0..=tokens.len() {
                if self.search(child, &tokens[skip..]) {
                    return true;
                }
            }
        }

        let Some((token, rest)) = tokens.split_first() else {
            return node.is_terminal();
        };

        if *token != self.config.wildcard_some {
            if let Some(child) = node.children.get(*token) {
                if self.search(child, rest) {
                    return true;
                }
            }
        }

        if *token != self.config.wildcard_one {
            if let Some(child) =
                node.children.get(self.config.wildcard_one.as_str())
            {
                if self.search(child, rest) {
                    return true;
                }
            }
        } else {
            for (key, child) in &node.children {
                if key != &self.config.wildcard_one
                    && key != &self.config.wildcard_some
                    && self.search(child, rest)
                {
                    return true;
                }
            }
        }

        false
    }
}

impl<V> Default for TopicTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<V: Serialize> TopicTrie<V> {
    /// Structural snapshot of the trie for assertions in tests.
    ///
    /// Children appear under their token keys and terminality is rendered as
    /// an entry under the separator key holding the value list, mirroring the
    /// map-of-maps shape of classic topic trie implementations. An empty trie
    /// snapshots as `{}`. Not part of the production contract.
    pub fn debug_snapshot(&self) -> serde_json::Value {
        snapshot_node(&self.root, &self.config.separator, &|values| {
            serde_json::to_value(values).expect("snapshot serialization")
        })
    }
}

/// Set-membership topic matcher.
///
/// Stores bare patterns and answers whether any of them matches a topic;
/// removal is unconditional regardless of how many times a pattern was
/// registered. A thin wrapper over [`TopicTrie<()>`].
#[derive(Debug, Clone, Default)]
pub struct TopicMatcher {
    /// Underlying trie; the unit value slot degenerates to a terminal flag.
    inner: TopicTrie<()>,
}

impl TopicMatcher {
    /// Creates a new empty matcher with the default `.`/`*`/`#` symbols.
    pub fn new() -> Self {
        Self {
            inner: TopicTrie::new(),
        }
    }

    /// Creates a new empty matcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `TopicTrieError` if the configuration is invalid, as for
    /// [`TopicTrie::with_config`].
    pub fn with_config(config: TopicTrieConfig) -> TopicTrieResult<Self> {
        Ok(Self {
            inner: TopicTrie::with_config(config)?,
        })
    }

    /// The configuration this matcher was built with.
    pub fn config(&self) -> &TopicTrieConfig {
        self.inner.config()
    }

    /// Registers `pattern`.
    pub fn insert(&mut self, pattern: &str) {
        self.inner.insert(pattern, ());
    }

    /// Unregisters `pattern`; a no-op if it was never registered.
    pub fn remove(&mut self, pattern: &str) {
        self.inner.remove(pattern);
    }

    /// Whether any registered pattern matches `topic`.
    pub fn matches(&self, topic: &str) -> bool {
        self.inner.matches(topic)
    }

    /// Discards every registered pattern.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Whether no pattern is currently registered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of distinct registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.inner.pattern_count()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl TopicMatcher {
    /// Structural snapshot with terminal markers rendered as `true`, matching
    /// the boolean map-of-maps shape. See [`TopicTrie::debug_snapshot`].
    pub fn debug_snapshot(&self) -> serde_json::Value {
        snapshot_node(&self.inner.root, &self.inner.config.separator, &|_| {
            serde_json::Value::Bool(true)
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
fn snapshot_node<V>(
    node: &TrieNode<V>,
    separator: &str,
    leaf: &dyn Fn(&[V]) -> serde_json::Value,
) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    if node.is_terminal() {
        map.insert(separator.to_owned(), leaf(&node.values));
    }
    for (token, child) in &node.children {
        map.insert(token.clone(), snapshot_node(child, separator, leaf));
    }
    serde_json::Value::Object(map)
}
