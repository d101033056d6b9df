//! Method selection and the dispatching solve entry point.

use crate::{
    Float,
    args::IterArgs,
    error::Error,
    methods::{explicit_euler, heun, implicit_euler, trapezoidal},
    ode::Derivative,
    trajectory::Trajectory,
};

/// Solver method selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Explicit (forward) Euler.
    ExplicitEuler,
    /// Implicit (backward) Euler, fixed-point iterated.
    ImplicitEuler,
    /// Trapezoidal rule, fixed-point iterated.
    Trapezoidal,
    /// Improved Euler (Heun): one predictor, one corrector pass.
    Heun,
}

/// Solve the IVP `y' = f(t, y)`, `y(t0) = y0` over `[a, b]` with the
/// chosen method and fixed step `h`.
///
/// `args` feeds the fixed-point iteration of the implicit methods and
/// is ignored by the explicit ones; `None` selects per-method defaults.
pub fn solve<F>(
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
    match method {
        Method::ExplicitEuler => explicit_euler(f, a, b, t0, y0, h),
        Method::ImplicitEuler => implicit_euler(f, a, b, t0, y0, h, args),
        Method::Trapezoidal => trapezoidal(f, a, b, t0, y0, h, args),
        Method::Heun => heun(f, a, b, t0, y0, h),
    }
}
