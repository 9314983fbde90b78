//! Weighted blending of a compiled set back into a path string.

/// The [`morph`](blend::morph) operation.
pub mod blend;
/// Helpers for building common weight vectors.
pub mod weights;
