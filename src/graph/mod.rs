//! Graph module - Values with shared and cyclic structure.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`], which
//! stands in for object identity.

mod graph;

pub use graph::*;
