//! Merge module - Combining maps key by key.
//!
//! [`merge`] builds a new value and leaves its inputs alone;
//! [`merge_into`] and [`merge_union_arrays`] modify their target in place.

mod merge;

pub use merge::*;
