//! Topic pattern matching for AMQP/MQTT-style subscription routing.
//!
//! This library maintains a collection of registered topic patterns, possibly
//! containing wildcard tokens, and answers for an arbitrary concrete topic
//! which patterns match it. It is implemented as a trie over topic tokens, as
//! described in the RabbitMQ topic-routing blog posts: patterns sharing a
//! token prefix share trie nodes, matching is a backtracking walk over the
//! wildcard branches, and removal prunes branches that no pattern uses any
//! more.
//!
//! Two variants are provided:
//! * [`TopicTrie`] attaches a payload value to every registered pattern and
//!   returns all values whose pattern matched (the subscriber-list case).
//! * [`TopicMatcher`] stores bare patterns and answers a boolean membership
//!   question (the "does anything care about this topic" case).
//!
//! # Example
//!
//! ```
//! use topic_trie::TopicTrie;
//!
//! let mut matcher = TopicTrie::new();
//! matcher.insert("foo.*", "it matched!");
//! assert_eq!(matcher.match_topic("foo.bar"), vec![&"it matched!"]);
//! ```
//!
//! The separator and wildcard symbols are configurable; MQTT-style matching
//! uses `/`, `+` and `#`:
//!
//! ```
//! use topic_trie::{TopicMatcher, TopicTrieConfig};
//!
//! let mut matcher = TopicMatcher::with_config(TopicTrieConfig {
//!     separator: "/".to_string(),
//!     wildcard_one: "+".to_string(),
//!     wildcard_some: "#".to_string(),
//! })?;
//! matcher.insert("sensor/+/temperature");
//! assert!(matcher.matches("sensor/kitchen/temperature"));
//! # Ok::<(), topic_trie::TopicTrieError>(())
//! ```
//!
//! The trie is single-writer: all mutation goes through `&mut self` and
//! callers needing concurrent access must provide their own synchronization.

// Re-export public modules
pub mod trie;

// Shared RabbitMQ-derived test tables, also consumed by the benchmarks
#[cfg(any(test, feature = "benchmarking"))]
pub mod fixtures;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{
    TopicMatcher, TopicTrie, TopicTrieConfig, TopicTrieError, TopicTrieResult,
};

/// Version information for the topic-trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
