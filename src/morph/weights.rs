use crate::foundation::error::{MorphError, MorphResult};

/// Equal weights for `n` paths, summing to one.
///
/// Morphing with uniform weights reproduces the compiled average.
pub fn uniform(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

/// Weights selecting exactly the path at `index` out of `n`.
///
/// Morphing with one-hot weights reproduces that input path.
pub fn one_hot(n: usize, index: usize) -> MorphResult<Vec<f64>> {
    if index >= n {
        return Err(MorphError::validation(format!(
            "one-hot index {index} is out of range for {n} path(s)"
        )));
    }
    let mut weights = vec![0.0; n];
    weights[index] = 1.0;
    Ok(weights)
}

#[cfg(test)]
#[path = "../../tests/unit/morph/weights.rs"]
mod tests;
