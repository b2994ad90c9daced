//! Property-based tests for the topic trie.

use proptest::prelude::*;
use serde_json::json;

use crate::{TopicMatcher, TopicTrie};

// Strategy for a single topic token; empty tokens (from doubled separators)
// are deliberately included
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,3}").unwrap()
}

// Strategy for a pattern mixing concrete and wildcard tokens
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => token_strategy(),
            1 => Just("*".to_string()),
            1 => Just("#".to_string()),
        ],
        1..5,
    )
    .prop_map(|tokens| tokens.join("."))
}

// Strategy for a concrete wildcard-free topic
fn topic_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(token_strategy(), 1..5)
        .prop_map(|tokens| tokens.join("."))
}

proptest! {
    // Property: inserting any set of patterns and removing them again leaves
    // no residual structure
    #[test]
    fn prop_insert_remove_round_trip(
        patterns in prop::collection::vec(pattern_strategy(), 0..10)
    ) {
        let mut matcher = TopicMatcher::new();
        for pattern in &patterns {
            matcher.insert(pattern);
        }
        for pattern in &patterns {
            matcher.remove(pattern);
        }
        prop_assert!(matcher.is_empty());
        prop_assert_eq!(matcher.debug_snapshot(), json!({}));
    }

    // Property: the same holds for the multi-value variant when each value is
    // removed individually
    #[test]
    fn prop_multi_value_round_trip(
        patterns in prop::collection::vec(pattern_strategy(), 0..10)
    ) {
        let mut trie = TopicTrie::new();
        for (value, pattern) in patterns.iter().enumerate() {
            trie.insert(pattern, value);
        }
        for (value, pattern) in patterns.iter().enumerate() {
            trie.remove_value(pattern, &value);
        }
        prop_assert!(trie.is_empty());
    }

    // Property: inserting a pattern twice produces an identical tree shape to
    // inserting it once
    #[test]
    fn prop_insert_is_shape_idempotent(
        patterns in prop::collection::vec(pattern_strategy(), 1..10)
    ) {
        let mut once = TopicMatcher::new();
        let mut twice = TopicMatcher::new();
        for pattern in &patterns {
            once.insert(pattern);
            twice.insert(pattern);
            twice.insert(pattern);
        }
        prop_assert_eq!(once.debug_snapshot(), twice.debug_snapshot());
    }

    // Property: match results do not depend on insertion order
    #[test]
    fn prop_match_is_insertion_order_independent(
        patterns in prop::collection::vec(pattern_strategy(), 1..10),
        topic in topic_strategy(),
    ) {
        let mut forward = TopicMatcher::new();
        let mut backward = TopicMatcher::new();
        for pattern in &patterns {
            forward.insert(pattern);
        }
        for pattern in patterns.iter().rev() {
            backward.insert(pattern);
        }
        prop_assert_eq!(forward.matches(&topic), backward.matches(&topic));
    }

    // Property: a wildcard-free pattern always matches itself as a topic
    #[test]
    fn prop_concrete_pattern_matches_itself(topic in topic_strategy()) {
        let mut matcher = TopicMatcher::new();
        matcher.insert(&topic);
        prop_assert!(matcher.matches(&topic));
    }

    // Property: a single-token wildcard matches any one token at its
    // position, including the empty-string token
    #[test]
    fn prop_single_wildcard_matches_any_one_token(
        tokens in prop::collection::vec(token_strategy(), 1..5),
        position in any::<prop::sample::Index>(),
    ) {
        let position = position.index(tokens.len());
        let mut pattern_tokens = tokens.clone();
        pattern_tokens[position] = "*".to_string();

        let mut matcher = TopicMatcher::new();
        matcher.insert(&pattern_tokens.join("."));
        prop_assert!(matcher.matches(&tokens.join(".")));
    }

    // Property: a single-token wildcard never matches zero tokens; a pattern
    // one token longer than the topic cannot match it
    #[test]
    fn prop_single_wildcard_never_matches_zero_tokens(
        tokens in prop::collection::vec(token_strategy(), 1..4),
    ) {
        let topic = tokens.join(".");
        let pattern = format!("{topic}.*");

        let mut matcher = TopicMatcher::new();
        matcher.insert(&pattern);
        prop_assert!(!matcher.matches(&topic));
    }
}
