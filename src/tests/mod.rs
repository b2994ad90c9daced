//! Test modules for the topic-trie crate.
//!
//! This module contains the crate-internal test suites:
//! - The RabbitMQ-derived matching suite, including structural snapshot
//!   assertions against the raw trie shape
//! - Property-based tests using proptest
//!
//! Behavioral tests that only need the public API live in `tests/`.

pub mod property_tests;
