//! Schema-driven decoding of command-line argument streams.
//!
//! Decodes a flat token sequence (`-flag value` pairs interleaved with
//! positional arguments) into typed destinations: records described by
//! a [`Schema`], string-keyed maps, or degenerate sequence/scalar
//! leaves. Tokens not bound to any destination slot are returned, so
//! several destinations can be chained over one argument list, each
//! consuming its own flags.
//!
//! The main entry points are [`decode()`] for destination dispatch,
//! [`Schema::apply`] for direct record decoding, and [`tokenize()`] for
//! raw tokenization without field binding.

#![warn(missing_docs)]

/// String-to-typed-value coercion: the [`FromArgValue`] trait and its
/// scalar, optional, and vector implementations.
pub mod coerce;
/// Decoding orchestrator: destination dispatch, the record cursor loop,
/// and the custom-decode hook.
pub mod decode;
/// Decode error types.
pub mod error;
/// Record schemas: field descriptors, alias matching, and the builder.
pub mod schema;
/// Argument tokenizer: positional parameter and flag/value splitting.
pub mod tokenize;

// ── Convenience re-exports ──────────────────────────────────────────────
// Flat imports for the common entry points. The full module paths
// remain available.

pub use coerce::{CoerceError, FromArgValue};
pub use decode::{DecodeArguments, RecordBinding, Target, decode};
pub use error::DecodeError;
pub use schema::{Schema, SchemaBuilder};
pub use tokenize::{Tokenized, to_pretty_json, tokenize};
