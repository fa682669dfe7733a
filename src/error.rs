use thiserror::Error;

use crate::Float;

/// Input-validation failures, raised at component boundaries before any
/// mutation. Terminal for the current run; a sweep harness may catch one and
/// move on to the next run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvectError {
    #[error("unknown profile `{0}` (expected `tophat` or `gaussian`)")]
    InvalidProfile(String),
    #[error("unknown scheme `{0}` (expected `upwind` or `ftcs`)")]
    InvalidScheme(String),
    #[error("invalid time parameters (Δt={dt}, tend={end_time})")]
    InvalidTimeParameters { dt: Float, end_time: Float },
    #[error("grid needs at least two points, got {0}")]
    InvalidGridSize(usize),
}
