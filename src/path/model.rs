use crate::foundation::error::{MorphError, MorphResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Drawing operation class of an SVG path command.
pub enum CommandKind {
    /// Start a new subpath (`M`/`m`).
    Move,
    /// Straight line segment (`L`/`l`).
    Line,
    /// Horizontal line segment (`H`/`h`).
    Horizontal,
    /// Vertical line segment (`V`/`v`).
    Vertical,
    /// Cubic Bezier segment (`C`/`c`).
    Cubic,
    /// Smooth cubic Bezier segment (`S`/`s`).
    SmoothCubic,
    /// Quadratic Bezier segment (`Q`/`q`).
    Quadratic,
    /// Smooth quadratic Bezier segment (`T`/`t`).
    SmoothQuadratic,
    /// Elliptical arc segment (`A`/`a`).
    Arc,
    /// Close the current subpath (`Z`/`z`).
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// A command type tag: operation class plus absolute/relative form.
///
/// Absolute and relative variants of the same operation are distinct tags
/// for structural matching: `M0,0` and `m0,0` never align. Tag comparison is
/// exact and purely structural, never geometric.
pub struct CommandTag {
    /// Drawing operation class.
    pub kind: CommandKind,
    /// `true` for the uppercase (absolute) letter form.
    pub absolute: bool,
}

impl CommandTag {
    /// Map an SVG command letter to its tag, `None` for any other character.
    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::Move,
            'L' => CommandKind::Line,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'C' => CommandKind::Cubic,
            'S' => CommandKind::SmoothCubic,
            'Q' => CommandKind::Quadratic,
            'T' => CommandKind::SmoothQuadratic,
            'A' => CommandKind::Arc,
            'Z' => CommandKind::Close,
            _ => return None,
        };
        Some(Self {
            kind,
            absolute: letter.is_ascii_uppercase(),
        })
    }

    /// The tag's SVG letter, uppercase when absolute.
    pub fn letter(self) -> char {
        let upper = match self.kind {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::Horizontal => 'H',
            CommandKind::Vertical => 'V',
            CommandKind::Cubic => 'C',
            CommandKind::SmoothCubic => 'S',
            CommandKind::Quadratic => 'Q',
            CommandKind::SmoothQuadratic => 'T',
            CommandKind::Arc => 'A',
            CommandKind::Close => 'Z',
        };
        if self.absolute {
            upper
        } else {
            upper.to_ascii_lowercase()
        }
    }

    /// Number of numeric parameters the tag requires.
    pub fn param_count(self) -> usize {
        match self.kind {
            CommandKind::Horizontal | CommandKind::Vertical => 1,
            CommandKind::Move | CommandKind::Line | CommandKind::SmoothQuadratic => 2,
            CommandKind::SmoothCubic | CommandKind::Quadratic => 4,
            CommandKind::Cubic => 6,
            CommandKind::Arc => 7,
            CommandKind::Close => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One parsed drawing command: a type tag plus its numeric parameters.
///
/// Immutable once constructed; the parameter count implied by the tag is
/// enforced at construction time rather than inferred positionally.
pub struct Command {
    tag: CommandTag,
    params: Vec<f64>,
}

impl Command {
    /// Create a command, enforcing the tag's parameter count.
    pub fn new(tag: CommandTag, params: Vec<f64>) -> MorphResult<Self> {
        if params.len() != tag.param_count() {
            return Err(MorphError::validation(format!(
                "command '{}' takes {} parameter(s), got {}",
                tag.letter(),
                tag.param_count(),
                params.len()
            )));
        }
        Ok(Self { tag, params })
    }

    /// Build a command whose parameter count the caller has already checked.
    pub(crate) fn from_parts(tag: CommandTag, params: Vec<f64>) -> Self {
        debug_assert_eq!(params.len(), tag.param_count());
        Self { tag, params }
    }

    /// The command's type tag.
    pub fn tag(&self) -> CommandTag {
        self.tag
    }

    /// The command's parameters in order.
    pub fn params(&self) -> &[f64] {
        &self.params
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
