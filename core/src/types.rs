//! Shared primitive types used across the generator.

/// The state of one stream. Always in `[1, MODULUS - 1]` once planted.
pub type State = i32;

/// Index of one of the `STREAMS` independent sequences.
pub type StreamIndex = usize;

/// Number of values drawn from a single stream.
pub type DrawCount = u64;
