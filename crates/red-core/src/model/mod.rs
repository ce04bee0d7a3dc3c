//! Physical models behind the dashboard series.
//!
//! Each submodule covers one generation source. Functions validate
//! their physical parameters and return [`crate::RedResult`]; the
//! sweep helpers produce `(x, y)` point lists ready for charting.

pub mod hydro;
pub mod solar;
pub mod storage;
pub mod thermal;
pub mod wind;

/// Evenly spaced samples over `[start, end]`, inclusive of both ends.
///
/// `steps` of 1 or 0 collapses to the start point.
pub(crate) fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![start];
    }
    let delta = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + delta * i as f64).collect()
}

/// The `(x, y)` pair with the largest `y`. `None` on an empty curve.
pub(crate) fn argmax(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    points
        .iter()
        .copied()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
