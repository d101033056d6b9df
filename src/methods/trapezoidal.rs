//! Trapezoidal rule, fixed-point iterated.

use crate::{
    Float,
    args::IterArgs,
    error::Error,
    fixed_point,
    march::{self, StepRule, StepStats},
    ode::Derivative,
    trajectory::Trajectory,
};

/// Trapezoidal method.
///
/// Each forward step solves
/// `y_{k+1} = y_k + (h/2) * (f(t_k, y_k) + f(t_{k+1}, y_{k+1}))` by the
/// same fixed-point pattern as [`implicit_euler`]: explicit-Euler seed,
/// converge-or-cap loop, last computed iterate accepted. The backward
/// pass mirrors with the sign of `h` flipped.
///
/// `args: None` selects threshold `1e-6` with an epoch cap of 50.
///
/// [`implicit_euler`]: crate::methods::implicit_euler
pub fn trapezoidal<F>(
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
    let args = args.unwrap_or_else(|| IterArgs::builder().epochs(DEFAULT_EPOCHS).build());
    march::integrate(f, &TrapezoidalRule { args }, a, b, t0, y0, h)
}

struct TrapezoidalRule {
    args: IterArgs,
}

impl StepRule for TrapezoidalRule {
    fn step<F: Derivative>(
        &self,
        f: &F,
        t: Float,
        y: Float,
        h: Float,
        stats: &mut StepStats,
    ) -> Float {
        let tn = t + h;
        let half = 0.5 * h;
        // The left-endpoint derivative does not depend on the iterate.
        stats.nfev += 1;
        let f0 = f.eval(t, y);
        let seed = y + h * f0;
        let fp = fixed_point::converge(seed, self.args.threshold, self.args.epochs, |yk| {
            y + half * (f0 + f.eval(tn, yk))
        });
        stats.nfev += fp.iterations;
        stats.iterations += fp.iterations;
        stats.capped |= !fp.converged;
        fp.value
    }
}

// Epoch cap used when no iteration arguments are supplied.
const DEFAULT_EPOCHS: usize = 50;
