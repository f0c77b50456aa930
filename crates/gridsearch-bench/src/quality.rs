/// Quality of a path relative to the shortest known one, as a percentage
/// rounded to two decimals, ties to even.
///
/// `0.0` when either length is unknown. When both are zero (start equals
/// goal) the paths are identical and the quality is `100.0`.
pub fn path_quality(baseline: Option<usize>, steps: Option<usize>) -> f64 {
    match (baseline, steps) {
        (Some(0), Some(0)) => 100.0,
        (Some(b), Some(s)) if s > 0 => {
            (b as f64 / s as f64 * 100.0 * 100.0).round_ties_even() / 100.0
        }
        _ => 0.0,
    }
}
