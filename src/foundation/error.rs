/// Convenience result type used across svgmorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy for the compile/morph APIs.
///
/// Every variant is a synchronous caller-input error reported fail-fast:
/// nothing here is transient, retryable, or partially recovered from.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// A path string was rejected by the tokenizer.
    #[error("parse error: {0}")]
    Parse(String),

    /// `compile` received zero input paths.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Input paths have differing command counts.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// Input paths share a command count but disagree on a type tag.
    #[error("command sequence mismatch: {0}")]
    CommandSequenceMismatch(String),

    /// Weight count differs from the compiled path count.
    #[error("weight count mismatch: {0}")]
    WeightCountMismatch(String),

    /// Shape or arity violation outside the four core mismatch kinds.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from embedding applications.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`MorphError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`MorphError::LengthMismatch`] value.
    pub fn length_mismatch(msg: impl Into<String>) -> Self {
        Self::LengthMismatch(msg.into())
    }

    /// Build a [`MorphError::CommandSequenceMismatch`] value.
    pub fn command_sequence_mismatch(msg: impl Into<String>) -> Self {
        Self::CommandSequenceMismatch(msg.into())
    }

    /// Build a [`MorphError::WeightCountMismatch`] value.
    pub fn weight_count_mismatch(msg: impl Into<String>) -> Self {
        Self::WeightCountMismatch(msg.into())
    }

    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<crate::path::parser::ParseError> for MorphError {
    fn from(err: crate::path::parser::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
