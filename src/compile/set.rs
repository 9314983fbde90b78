use crate::{
    foundation::error::{MorphError, MorphResult},
    path::model::CommandTag,
    path::parser::parse_path,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Average-plus-deviation model of a family of structurally identical paths.
///
/// Produced by [`compile`] and consumed by [`morph`](crate::morph()). The
/// fields stay private because morphing assumes the shape established at
/// compile time: one averaged value per command parameter, and one
/// deviation per path for each of those values. A set that crossed a
/// serialization boundary can be re-checked with [`CompiledSet::validate`].
pub struct CompiledSet {
    tags: Vec<CommandTag>,
    average: Vec<Vec<f64>>,
    // Indexed as [command][value][path].
    diffs: Vec<Vec<Vec<f64>>>,
    path_count: usize,
}

impl CompiledSet {
    /// Number of paths the set was compiled from.
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Number of commands in every path of the set.
    pub fn command_count(&self) -> usize {
        self.tags.len()
    }

    /// Command tags shared by every path, in input order.
    pub fn tags(&self) -> &[CommandTag] {
        &self.tags
    }

    /// Averaged parameters, one row per command.
    pub fn average(&self) -> &[Vec<f64>] {
        &self.average
    }

    /// Deviations from the average, indexed as `[command][value][path]`.
    pub fn diffs(&self) -> &[Vec<Vec<f64>>] {
        &self.diffs
    }

    /// Re-check the shape invariants of a set built outside [`compile`],
    /// such as one deserialized from storage.
    pub fn validate(&self) -> MorphResult<()> {
        if self.path_count == 0 {
            return Err(MorphError::validation("compiled set covers zero paths"));
        }
        if self.average.len() != self.tags.len() || self.diffs.len() != self.tags.len() {
            return Err(MorphError::validation(format!(
                "expected {} average and deviation rows, got {} and {}",
                self.tags.len(),
                self.average.len(),
                self.diffs.len()
            )));
        }
        for (c, tag) in self.tags.iter().enumerate() {
            let arity = tag.param_count();
            if self.average[c].len() != arity || self.diffs[c].len() != arity {
                return Err(MorphError::validation(format!(
                    "command {c} ('{}') takes {arity} value(s), got {} averaged and {} deviation rows",
                    tag.letter(),
                    self.average[c].len(),
                    self.diffs[c].len()
                )));
            }
            for (v, per_path) in self.diffs[c].iter().enumerate() {
                if per_path.len() != self.path_count {
                    return Err(MorphError::validation(format!(
                        "command {c} value {v}: expected {} deviation(s), got {}",
                        self.path_count,
                        per_path.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[tracing::instrument(skip(paths))]
/// Compile a family of path strings into a [`CompiledSet`].
///
/// Every path must parse to the same command sequence: the same number of
/// commands with the same letter at every position, where `M` and `m` are
/// distinct. The numeric parameters are free to vary; those are what the
/// model averages.
pub fn compile<S: AsRef<str>>(paths: &[S]) -> MorphResult<CompiledSet> {
    if paths.is_empty() {
        return Err(MorphError::empty_input("compile needs at least one path"));
    }

    let mut parsed = Vec::with_capacity(paths.len());
    for (p, path) in paths.iter().enumerate() {
        let commands = parse_path(path.as_ref())
            .map_err(|err| MorphError::parse(format!("path {p}: {err}")))?;
        parsed.push(commands);
    }

    let tags: Vec<CommandTag> = parsed[0].iter().map(|command| command.tag()).collect();
    for (p, commands) in parsed.iter().enumerate() {
        if commands.len() != tags.len() {
            return Err(MorphError::length_mismatch(format!(
                "path {p} has {} command(s), path 0 has {}",
                commands.len(),
                tags.len()
            )));
        }
    }
    for (c, &tag) in tags.iter().enumerate() {
        for (p, commands) in parsed.iter().enumerate() {
            let found = commands[c].tag();
            if found != tag {
                return Err(MorphError::command_sequence_mismatch(format!(
                    "command {c}: path {p} has '{}', path 0 has '{}'",
                    found.letter(),
                    tag.letter()
                )));
            }
        }
    }

    let n_paths = parsed.len();
    let mut average = Vec::with_capacity(tags.len());
    let mut diffs = Vec::with_capacity(tags.len());
    for (c, tag) in tags.iter().enumerate() {
        let n_values = tag.param_count();
        let mut command_average = Vec::with_capacity(n_values);
        let mut command_diffs = Vec::with_capacity(n_values);
        for v in 0..n_values {
            let mut sum = 0.0;
            for commands in &parsed {
                sum += commands[c].params()[v];
            }
            let avg = sum / n_paths as f64;

            let mut deviations = Vec::with_capacity(n_paths);
            for commands in &parsed {
                deviations.push(commands[c].params()[v] - avg);
            }
            command_average.push(avg);
            command_diffs.push(deviations);
        }
        average.push(command_average);
        diffs.push(command_diffs);
    }

    Ok(CompiledSet {
        tags,
        average,
        diffs,
        path_count: n_paths,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/set.rs"]
mod tests;
