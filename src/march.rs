//! Shared bidirectional stepping driver.
//!
//! Every method advances through the same discipline: validate inputs,
//! walk from `t0` down to `a` into a scratch buffer, reverse and prepend
//! it, then walk from `t0` up to `b`. The per-method update rule is the
//! only thing that varies, supplied through [`StepRule`].

use crate::{Float, error::Error, ode::Derivative, trajectory::Trajectory};

/// Work counters accumulated over a whole integration.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct StepStats {
    pub nfev: usize,
    pub iterations: usize,
    pub capped: bool,
}

/// A single-step update rule taking `(t, y)` to the value one signed
/// step `h` away.
///
/// Forward steps receive `h > 0`, backward steps `h < 0`; the rule
/// mirrors its update under the sign flip.
pub(crate) trait StepRule {
    fn step<F: Derivative>(
        &self,
        f: &F,
        t: Float,
        y: Float,
        h: Float,
        stats: &mut StepStats,
    ) -> Float;
}

/// Integrate over `[a, b]` from the initial point `(t0, y0)` with fixed
/// step `h > 0`, applying `rule` once per step.
///
/// The step counts are `round((t0 - a) / h)` backward and
/// `round((b - t0) / h)` forward, so the grid is aligned on `t0` and the
/// extreme samples may fall short of `a` or `b` by less than `h`. With
/// `t0 == a` the backward pass is a no-op.
pub(crate) fn integrate<F, R>(
    f: &F,
    rule: &R,
    a: Float,
    b: Float,
    t0: Float,
    y0: Float,
    h: Float,
) -> Result<Trajectory, Error>
where
    F: Derivative,
    R: StepRule,
{
    // --- Input validation ---
    if !(h.is_finite() && h > 0.0) {
        return Err(Error::InvalidStepSize(h));
    }
    if a > b {
        return Err(Error::InvertedSpan { a, b });
    }
    if t0 < a || t0 > b {
        return Err(Error::InitialPointOutOfSpan { a, b, t0 });
    }

    // --- Declarations ---
    let nback = ((t0 - a) / h).round() as usize;
    let nfwd = ((b - t0) / h).round() as usize;
    let mut t = Vec::with_capacity(nback + nfwd + 1);
    let mut y = Vec::with_capacity(nback + nfwd + 1);
    let mut stats = StepStats::default();

    // --- Backward pass: t0 down to a ---
    // Steps are generated walking away from t0, so the buffer comes out
    // in descending t and must be reversed before it is prepended.
    if nback > 0 {
        let mut tb = Vec::with_capacity(nback);
        let mut yb = Vec::with_capacity(nback);
        let (mut ti, mut yi) = (t0, y0);
        for _ in 0..nback {
            let yn = rule.step(f, ti, yi, -h, &mut stats);
            ti -= h;
            tb.push(ti);
            yb.push(yn);
            yi = yn;
        }
        tb.reverse();
        yb.reverse();
        t.extend(tb);
        y.extend(yb);
    }

    t.push(t0);
    y.push(y0);

    // --- Forward pass: t0 up to b ---
    let (mut ti, mut yi) = (t0, y0);
    for _ in 0..nfwd {
        let yn = rule.step(f, ti, yi, h, &mut stats);
        ti += h;
        t.push(ti);
        y.push(yn);
        yi = yn;
    }

    Ok(Trajectory {
        t,
        y,
        h,
        nfev: stats.nfev,
        nstep: nback + nfwd,
        iterations: stats.iterations,
        converged: !stats.capped,
    })
}
