//! Explicit (forward) Euler method.

use crate::{
    Float,
    error::Error,
    march::{self, StepRule, StepStats},
    ode::Derivative,
    trajectory::Trajectory,
};

/// Explicit (forward) Euler method: `y_{k+1} = y_k + h * f(t_k, y_k)`.
///
/// Walking backward from an interior `t0` applies the same update with
/// the sign of `h` flipped. The derivative is still taken at the current
/// point, so the backward pass is a direction-flipped explicit step, not
/// the implicit backward rule.
///
/// Purely explicit: one derivative evaluation per step, no iteration.
pub fn explicit_euler<F>(
    f: &F,
    a: Float,
    b: Float,
    t0: Float,
    y0: Float,
    h: Float,
) -> Result<Trajectory, Error>
where
    F: Derivative,
{
    march::integrate(f, &ExplicitEulerRule, a, b, t0, y0, h)
}

struct ExplicitEulerRule;

impl StepRule for ExplicitEulerRule {
    fn step<F: Derivative>(
        &self,
        f: &F,
        t: Float,
        y: Float,
        h: Float,
        stats: &mut StepStats,
    ) -> Float {
        stats.nfev += 1;
        y + h * f.eval(t, y)
    }
}
