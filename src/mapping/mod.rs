//! Mapping module - Per-entry transforms, filters and lookups over maps.
//!
//! Everything here works on one level of a [`Map`](crate::value::Map) and
//! returns a new map, except [`deep_map`], which descends into nested maps.

mod mapping;

pub use mapping::*;
