//! User-supplied derivative function.

use crate::Float;

/// Right-hand side of a scalar first-order ODE `y'(t) = f(t, y)`.
///
/// The solvers repeatedly call [`eval`](Derivative::eval) with the
/// current abscissa `t` and state `y` and expect the derivative value
/// back. The function is assumed pure: no internal state, no side
/// effects.
///
/// Any `Fn(Float, Float) -> Float` implements this trait, so problems
/// can be stated inline:
///
/// ```
/// use euler_ivp::prelude::*;
///
/// let f = |t: Float, y: Float| y * y + t * y + t * t;
/// let sol = explicit_euler(&f, 0.0, 1.0, 0.0, 1.0, 0.01).unwrap();
/// assert_eq!(sol.len(), 101);
/// ```
pub trait Derivative {
    fn eval(&self, t: Float, y: Float) -> Float;
}

impl<F> Derivative for F
where
    F: Fn(Float, Float) -> Float,
{
    fn eval(&self, t: Float, y: Float) -> Float {
        self(t, y)
    }
}
