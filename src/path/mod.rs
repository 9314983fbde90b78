//! SVG path data: the command model and the tokenizer.
//!
//! The compile/morph core only relies on the shape of [`model::Command`] and
//! on exact tag identity; everything else about path syntax lives here.

/// Typed command model (tags, arities, parameter lists).
pub mod model;
/// Tokenizer for SVG path data strings.
pub mod parser;
