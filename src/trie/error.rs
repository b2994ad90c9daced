//! Error types for the topic trie.
//!
//! Only construction-time configuration can fail; the trie operations
//! themselves are total over string input (removing something never added is
//! a no-op, matching against an empty trie is simply false/empty).

/// Errors that can occur while validating a trie configuration.
#[derive(Debug, thiserror::Error)]
pub enum TopicTrieError {
    /// Error when a configured symbol is the empty string.
    #[error("{role} symbol cannot be empty")]
    EmptySymbol {
        /// Which configuration field was empty.
        role: &'static str,
    },

    /// Error when two configured symbols collide.
    #[error("{first} and {second} must be distinct, both are '{symbol}'")]
    DuplicateSymbol {
        /// First conflicting configuration field.
        first: &'static str,
        /// Second conflicting configuration field.
        second: &'static str,
        /// The shared symbol.
        symbol: String,
    },

    /// Error when a wildcard symbol contains the separator, which would make
    /// it unrepresentable as a single token.
    #[error("{role} symbol '{symbol}' must not contain the separator")]
    SymbolContainsSeparator {
        /// Which configuration field is invalid.
        role: &'static str,
        /// The offending symbol.
        symbol: String,
    },
}

// Display implementation is automatically provided by thiserror
