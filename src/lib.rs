//! # Object Toolkit
//!
//! Structural operations on nested JSON/YAML values.
//!
//! Every operation is a synchronous, stateless function over caller-owned
//! values. Only [`merge::merge_into`], [`merge::merge_union_arrays`],
//! [`path::set`] and [`watch::Watched`] modify their input.
//!
//! ## Modules
//!
//! - [`value`] - The [`Value`] node type and JSON/YAML conversion
//! - [`path`] - Path lookup and assignment, flatten and unflatten
//! - [`merge`] - Recursive merging, with optional list union
//! - [`compare`] - Deep equality, tolerant equality, diff and per-leaf comparison
//! - [`mapping`] - Per-entry map transforms
//! - [`graph`] - Arena for shared and cyclic structure, with cycle-safe cloning
//! - [`watch`] - Map wrapper that reports assignments

pub mod compare;
pub mod error;
pub mod graph;
pub mod logging;
pub mod mapping;
pub mod merge;
pub mod path;
pub mod value;
pub mod watch;


pub use compare::{compare, deep_equal, deep_equal_with_tolerance, diff, Comparison};
pub use error::{Error, Result};
pub use graph::{Graph, GraphNode, NodeId};
pub use merge::{merge, merge_union_arrays};
pub use path::{Path, DEFAULT_SEPARATOR};
pub use value::{deep_clone, Map, Value};
pub use watch::{watch, Watched};
