use std::fmt::Write as _;

use crate::{
    compile::set::CompiledSet,
    foundation::error::{MorphError, MorphResult},
};

#[tracing::instrument(skip(compiled))]
/// Blend the compiled paths into a single path string using per-path weights.
///
/// Each output parameter is the compiled average plus the weighted sum of
/// the per-path deviations. Weights of `[1, 0, ..]` therefore reproduce the
/// first input path and uniform weights reproduce the average. Weights are
/// not required to sum to one, and values outside `[0, 1]` extrapolate
/// beyond the compiled family.
///
/// The output uses absolute or relative letters exactly as compiled, with
/// parameters separated by single spaces.
pub fn morph(compiled: &CompiledSet, weights: &[f64]) -> MorphResult<String> {
    if weights.len() != compiled.path_count() {
        return Err(MorphError::weight_count_mismatch(format!(
            "expected {} weight(s), got {}",
            compiled.path_count(),
            weights.len()
        )));
    }

    let capacity = compiled
        .tags()
        .iter()
        .map(|tag| 1 + tag.param_count() * 8)
        .sum();

    let mut out = String::with_capacity(capacity);
    let commands = compiled
        .tags()
        .iter()
        .zip(compiled.average())
        .zip(compiled.diffs());
    for ((tag, command_average), command_diffs) in commands {
        out.push(tag.letter());
        for (&avg, deviations) in command_average.iter().zip(command_diffs) {
            // Accumulate the weighted deviations before touching the
            // average so one-hot weights add back exactly one deviation.
            let mut weighted = 0.0;
            for (diff, weight) in deviations.iter().zip(weights) {
                weighted += diff * weight;
            }
            let value = avg + weighted;
            let _ = write!(out, "{value} ");
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/blend.rs"]
mod tests;
