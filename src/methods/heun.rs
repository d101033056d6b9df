//! Improved Euler (Heun's) method.

use crate::{
    Float,
    error::Error,
    march::{self, StepRule, StepStats},
    ode::Derivative,
    trajectory::Trajectory,
};

/// Improved Euler (Heun's) method.
///
/// Each step takes an explicit-Euler predictor
/// `y_ = y_k + h * f(t_k, y_k)` and applies exactly one trapezoidal
/// corrector `y_k + (h/2) * (f(t_k, y_k) + f(t_{k+1}, y_))`. The
/// corrector is never iterated to convergence. The backward pass mirrors
/// with the sign of `h` flipped, one correction pass only.
pub fn heun<F>(
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
    march::integrate(f, &HeunRule, a, b, t0, y0, h)
}

struct HeunRule;

impl StepRule for HeunRule {
    fn step<F: Derivative>(
        &self,
        f: &F,
        t: Float,
        y: Float,
        h: Float,
        stats: &mut StepStats,
    ) -> Float {
        stats.nfev += 2;
        let f0 = f.eval(t, y);
        let predictor = y + h * f0;
        y + 0.5 * h * (f0 + f.eval(t + h, predictor))
    }
}
