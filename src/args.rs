//! Iteration parameters for the implicit methods.

use bon::Builder;

use crate::Float;

/// Fixed-point iteration parameters for [`implicit_euler`] and
/// [`trapezoidal`].
///
/// The builder defaults match implicit Euler; `trapezoidal` substitutes
/// its own epoch cap of 50 when called with `args: None`.
///
/// ```
/// use euler_ivp::IterArgs;
///
/// let args = IterArgs::builder().threshold(1e-9).build();
/// assert_eq!(args.epochs, 100);
/// ```
///
/// [`implicit_euler`]: crate::methods::implicit_euler
/// [`trapezoidal`]: crate::methods::trapezoidal
#[derive(Builder, Clone, Debug)]
pub struct IterArgs {
    /// Threshold on the difference between successive iterates below
    /// which the iteration is accepted as converged.
    #[builder(default = 1e-6)]
    pub threshold: Float,
    /// Maximum number of iterations per step. Once the count exceeds
    /// this cap the last computed iterate is accepted as-is.
    #[builder(default = 100)]
    pub epochs: usize,
}
