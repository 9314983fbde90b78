//! svgmorph blends structurally-identical SVG paths.
//!
//! The crate turns N variations of one path (same command sequence, varying
//! parameters) into a compact interpolation model and reconstructs weighted
//! blends from it:
//!
//! 1. **Parse**: [`parse_path`] turns each path string into typed commands.
//! 2. **Compile**: [`compile`] validates structural compatibility across all
//!    inputs and builds an immutable [`CompiledSet`] holding the
//!    per-parameter average and each path's deviation from it.
//! 3. **Morph**: [`morph`] combines the set with one weight per input path
//!    and serializes the blended path string. Weight 1 on a single path (0 on
//!    the rest) reproduces that path's parameter values exactly.
//!
//! A [`CompiledSet`] is compiled once and shared freely afterwards: [`morph`]
//! borrows it immutably, so per-frame callers and concurrent callers never
//! contend and never pay for recompilation.
//!
//! ```
//! let compiled = svgmorph::compile(&["M0,0 L100,100", "M5,5 L250,50"])?;
//!
//! // The path halfway between the two inputs.
//! let between = svgmorph::morph(&compiled, &[0.5, 0.5])?;
//! assert_eq!(between, "M2.5 2.5 L175 75");
//! # Ok::<(), svgmorph::MorphError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod foundation;
mod morph;
mod path;

pub use compile::set::{CompiledSet, compile};
pub use foundation::error::{MorphError, MorphResult};
pub use morph::blend::morph;
pub use morph::weights::{one_hot, uniform};
pub use path::model::{Command, CommandKind, CommandTag};
pub use path::parser::{ParseError, parse_path};
