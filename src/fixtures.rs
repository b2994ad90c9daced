//! RabbitMQ-derived topic matching tables.
//!
//! These bindings and expected results originate from the RabbitMQ server
//! topic tests and exercise the corner cases of trie-based matching: shared
//! prefixes, wildcard-only patterns, the empty pattern, and topics containing
//! literal wildcard characters. The test suite and the benchmarks both
//! consume this single copy.

/// Patterns registered by the suite, in registration order. Note `"a.b.c"`
/// appears twice.
pub const RABBITMQ_BINDINGS: [&str; 15] = [
    "a.b.c",
    "a.*.c",
    "a.b.b.c",
    "*.*",
    "a.*",
    "*.b.c",
    "b.b.c",
    "a.b.b",
    "a.b",
    "b.c",
    "",
    "*.*.*",
    "vodka.martini",
    "a.b.c",
    "*",
];

/// 1-based indices into [`RABBITMQ_BINDINGS`] removed by the removal suite.
pub const RABBITMQ_BINDINGS_TO_REMOVE: [usize; 5] = [1, 2, 5, 6, 12];

/// Topic → expected match result with every binding registered.
pub const RABBITMQ_EXPECTED_BEFORE_REMOVE: [(&str, bool); 16] = [
    ("a.b.c", true),
    ("a.b", true),
    ("a.c", true),
    ("a.b.b", true),
    ("", true),
    ("b.c.c", true),
    ("a.a.a.a.a", false),
    ("vodka.gin", true),
    ("vodka.martini", true),
    ("b.b.c", true),
    ("nothing.here.at.all", false),
    ("oneword", true),
    ("one.two.three.four", false),
    ("a.b.b.*", true),
    ("a.b.*.c", true),
    ("a.b.*.d", false),
];

/// Topic → expected match result after removing
/// [`RABBITMQ_BINDINGS_TO_REMOVE`].
pub const RABBITMQ_EXPECTED_AFTER_REMOVE: [(&str, bool); 16] = [
    ("a.b.c", false),
    ("a.b", true),
    ("a.c", true),
    ("a.b.b", true),
    ("", true),
    ("b.c.c", false),
    ("a.a.a.a.a", false),
    ("vodka.gin", true),
    ("vodka.martini", true),
    ("b.b.c", true),
    ("nothing.here.at.all", false),
    ("oneword", true),
    ("one.two.three.four", false),
    ("a.b.b.*", true),
    ("a.b.*.c", true),
    ("a.b.*.d", false),
];

/// Topic → expected match result on an empty matcher.
pub const RABBITMQ_EXPECTED_AFTER_CLEAR: [(&str, bool); 16] = [
    ("a.b.c", false),
    ("a.b", false),
    ("a.c", false),
    ("a.b.b", false),
    ("", false),
    ("b.c.c", false),
    ("a.a.a.a.a", false),
    ("vodka.gin", false),
    ("vodka.martini", false),
    ("b.b.c", false),
    ("nothing.here.at.all", false),
    ("oneword", false),
    ("one.two.three.four", false),
    ("a.b.b.*", false),
    ("a.b.*.c", false),
    ("a.b.*.d", false),
];
