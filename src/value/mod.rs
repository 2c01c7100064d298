//! Value module - In-memory representation of JSON/YAML documents.
//!
//! Every other module operates on [`Value`] trees and [`Map`] nodes.

mod value;

pub use value::*;
