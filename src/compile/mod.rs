//! Compilation of path variants into an average-plus-deviation model.

/// The compiled model and the [`compile`](set::compile) entry point.
pub mod set;
