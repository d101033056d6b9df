//! Wall-clock timing and memory-probe harnesses.

use std::time::Instant;

use crate::{
    Float,
    args::IterArgs,
    error::Error,
    ode::Derivative,
    solve::{Method, solve},
    trajectory::Trajectory,
};

/// Repetitions used when the caller supplies none.
pub const DEFAULT_REPS: usize = 10;

/// Run the solver repeatedly and report the average wall-clock cost of
/// one call, in milliseconds.
///
/// `reps: None` selects [`DEFAULT_REPS`]; an explicit count must be
/// positive. The repetition loop is sequential and the measurement
/// wraps the whole loop; there is no warm-up, so the first call's cost
/// is included in the average.
pub fn analyse_time<F>(
    f: &F,
    method: Method,
    a: Float,
    b: Float,
    t0: Float,
    y0: Float,
    h: Float,
    reps: Option<usize>,
    args: Option<IterArgs>,
) -> Result<Float, Error>
where
    F: Derivative,
{
    let reps = reps.unwrap_or(DEFAULT_REPS);
    if reps == 0 {
        return Err(Error::InvalidRepetitions(reps));
    }
    let start = Instant::now();
    for _ in 0..reps {
        solve(f, method, a, b, t0, y0, h, args.clone())?;
    }
    let millis = start.elapsed().as_secs_f64() * 1e3;
    Ok(millis as Float / reps as Float)
}

/// Run the solver exactly once inside this call's scope so an external
/// allocation profiler can attribute the trajectory's memory to it.
///
/// No internal accounting is performed; the trajectory is returned so
/// its buffers stay live for the whole observed scope.
pub fn analyse_memory<F>(
    f: &F,
    method: Method,
    a: Float,
    b: Float,
    t0: Float,
    y0: Float,
    h: Float,
    args: Option<IterArgs>,
) -> Result<Trajectory, Error>
where
    F: Derivative,
{
    solve(f, method, a, b, t0, y0, h, args)
}
