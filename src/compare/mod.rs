//! Compare module - Equality and difference between values.

mod comparison;
mod diff;
mod equality;

pub use comparison::*;
pub use diff::*;
pub use equality::*;
