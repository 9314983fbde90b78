use crate::path::model::{Command, CommandKind, CommandTag};

/// Error raised when path data cannot be scanned into commands.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid path data at byte {offset}: {message}")]
pub struct ParseError {
    /// Byte offset into the input where scanning stopped.
    pub offset: usize,
    /// What went wrong at that offset.
    pub message: String,
}

impl ParseError {
    fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Scan SVG path data into a flat list of drawing commands.
///
/// Each command keeps its absolute or relative letter form. Parameters may
/// be separated by whitespace or commas, and a sign also ends the number
/// before it, so `"1-2"` reads as `1` then `-2`. Surplus parameter groups
/// repeat the command, and a move-to given more than one coordinate pair
/// emits the extra pairs as line-to commands of the same form.
///
/// ```
/// use svgmorph::{CommandKind, parse_path};
///
/// let commands = parse_path("m10,10 20,20")?;
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[1].tag().kind, CommandKind::Line);
/// assert_eq!(commands[1].params(), [20.0, 20.0]);
/// # Ok::<(), svgmorph::ParseError>(())
/// ```
pub fn parse_path(d: &str) -> Result<Vec<Command>, ParseError> {
    let bytes = d.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    skip_separators(bytes, &mut i);
    while i < bytes.len() {
        let at = i;
        let c = bytes[i] as char;
        let Some(tag) = CommandTag::from_letter(c) else {
            return Err(ParseError::new(
                at,
                format!("expected a command letter, found '{c}'"),
            ));
        };
        i += 1;

        let mut values = Vec::new();
        skip_separators(bytes, &mut i);
        while i < bytes.len() && !(bytes[i] as char).is_ascii_alphabetic() {
            values.push(scan_number(d, bytes, &mut i)?);
            skip_separators(bytes, &mut i);
        }

        expand_group(tag, at, values, &mut out)?;
    }

    Ok(out)
}

fn skip_separators(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && matches!(bytes[*i], b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b',') {
        *i += 1;
    }
}

// Number: [+-]?[0-9]*(.[0-9]+)?([eE][+-]?[0-9]+)? with at least one digit.
// A trailing dot is left unconsumed so the next scan reports it.
fn scan_number(src: &str, bytes: &[u8], i: &mut usize) -> Result<f64, ParseError> {
    let start = *i;
    if matches!(bytes[*i], b'+' | b'-') {
        *i += 1;
    }

    let digits_from = *i;
    while *i < bytes.len() && bytes[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i < bytes.len()
        && bytes[*i] == b'.'
        && *i + 1 < bytes.len()
        && bytes[*i + 1].is_ascii_digit()
    {
        *i += 1;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
    }
    if *i == digits_from {
        let c = bytes[start] as char;
        return Err(ParseError::new(
            start,
            format!("expected a number, found '{c}'"),
        ));
    }

    if *i < bytes.len() && matches!(bytes[*i], b'e' | b'E') {
        let e_pos = *i;
        *i += 1;
        if *i < bytes.len() && matches!(bytes[*i], b'+' | b'-') {
            *i += 1;
        }
        let exp_start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        if exp_start == *i {
            return Err(ParseError::new(
                e_pos,
                "invalid number exponent (expected digits)",
            ));
        }
    }

    let s = &src[start..*i];
    s.parse()
        .map_err(|_| ParseError::new(start, format!("invalid number '{s}'")))
}

// Splits a command's scanned values into parameter groups, repeating the
// command once per group. After the first group of an M/m the repeated
// groups become L/l, per the SVG overloaded move-to rule.
fn expand_group(
    tag: CommandTag,
    at: usize,
    values: Vec<f64>,
    out: &mut Vec<Command>,
) -> Result<(), ParseError> {
    let arity = tag.param_count();
    if arity == 0 {
        if !values.is_empty() {
            return Err(ParseError::new(
                at,
                format!("command '{}' takes no parameters", tag.letter()),
            ));
        }
        out.push(Command::from_parts(tag, Vec::new()));
        return Ok(());
    }

    if values.is_empty() || !values.len().is_multiple_of(arity) {
        return Err(ParseError::new(
            at,
            format!(
                "command '{}' takes {} parameter(s), got {}",
                tag.letter(),
                arity,
                values.len()
            ),
        ));
    }

    let mut tag = tag;
    for chunk in values.chunks(arity) {
        out.push(Command::from_parts(tag, chunk.to_vec()));
        if tag.kind == CommandKind::Move {
            tag = CommandTag {
                kind: CommandKind::Line,
                absolute: tag.absolute,
            };
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/path/parser.rs"]
mod tests;
