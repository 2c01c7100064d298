//! Path module - Addressing nested values by key path.
//!
//! Paths are written as keys joined by a separator (`.` unless stated
//! otherwise). Lookups report absence as `None`; writes create missing
//! parents and fail only when a parent exists but is not a map.

mod access;
mod flatten;
mod path;

pub use access::*;
pub use flatten::*;
pub use path::*;
