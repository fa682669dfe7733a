use faer::prelude::*;
use faer::Mat;

use crate::{error::AdvectError, Float};

/// Builds the dense system `(J + I) x = 1`, with `J` the all-ones matrix, and
/// solves it with a partial-pivoting LU decomposition.
///
/// Standalone utility, not wired into the advection engine. The system has
/// the closed-form solution `x_i = 1/(n+1)` for every entry, which makes it a
/// convenient solver sanity check.
pub fn solve_ones_system(size: usize) -> Result<Mat<Float>, AdvectError> {
    if size == 0 {
        return Err(AdvectError::InvalidGridSize(size));
    }

    let matrix = Mat::<Float>::from_fn(size, size, |i, j| if i == j { 2.0 } else { 1.0 });
    let rhs = Mat::<Float>::from_fn(size, 1, |_, _| 1.0);

    Ok(matrix.partial_piv_lu().solve(&rhs))
}
