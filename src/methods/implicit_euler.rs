//! Implicit (backward) Euler method.

use crate::{
    Float,
    args::IterArgs,
    error::Error,
    fixed_point,
    march::{self, StepRule, StepStats},
    ode::Derivative,
    trajectory::Trajectory,
};

/// Implicit (backward) Euler method.
///
/// Each forward step solves `y_{k+1} = y_k + h * f(t_{k+1}, y_{k+1})` by
/// fixed-point iteration, seeded with the explicit-Euler estimate. The
/// loop stops once successive iterates differ by less than
/// `args.threshold` or the count exceeds `args.epochs`; the last
/// computed iterate is accepted either way, and a capped step is
/// reported only through [`Trajectory::converged`]. The backward pass
/// mirrors the update with the sign of `h` flipped, iterating toward
/// the implicit partner point behind `t_k`.
///
/// `args: None` selects the defaults (threshold `1e-6`, 100 epochs).
pub fn implicit_euler<F>(
    f: &F,
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
    let args = args.unwrap_or_else(|| IterArgs::builder().build());
    march::integrate(f, &ImplicitEulerRule { args }, a, b, t0, y0, h)
}

struct ImplicitEulerRule {
    args: IterArgs,
}

impl StepRule for ImplicitEulerRule {
    fn step<F: Derivative>(
        &self,
        f: &F,
        t: Float,
        y: Float,
        h: Float,
        stats: &mut StepStats,
    ) -> Float {
        let tn = t + h;
        stats.nfev += 1;
        let seed = y + h * f.eval(t, y);
        let fp = fixed_point::converge(seed, self.args.threshold, self.args.epochs, |yk| {
            y + h * f.eval(tn, yk)
        });
        stats.nfev += fp.iterations;
        stats.iterations += fp.iterations;
        stats.capped |= !fp.converged;
        fp.value
    }
}
