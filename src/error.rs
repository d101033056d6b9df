//! Errors for the solvers and analysis harnesses.

use crate::Float;

/// Precondition violations detected before any computation proceeds.
///
/// Numerical non-convergence of the implicit methods is deliberately not
/// represented here: those solvers always return a trajectory and report
/// a capped iteration through [`crate::Trajectory::converged`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("initial point t0 must lie inside [{a}, {b}] (got {t0})")]
    InitialPointOutOfSpan { a: Float, b: Float, t0: Float },
    #[error("span bounds must satisfy a <= b (got a = {a}, b = {b})")]
    InvertedSpan { a: Float, b: Float },
    #[error("step size h must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("repetition count must be positive (got {0})")]
    InvalidRepetitions(usize),
    #[error("step size {h} is not an integer multiple of the reference resolution {space}")]
    IncommensurateStepSizes { h: Float, space: Float },
    #[error("sample at t = {t} does not land on the reference grid with resolution {space}")]
    GridMisaligned { t: Float, space: Float },
}
