//! Fixed-step numerical methods for scalar initial value problems (IVPs),
//! with harnesses for comparing step lengths and measuring solver cost.
//!
//! Four methods share one calling convention: explicit Euler, implicit
//! (backward) Euler, the trapezoidal rule, and improved Euler (Heun).
//! Each integrates `y' = f(t, y)` from `y(t0) = y0` over the whole span
//! `[a, b]`, stepping backward from an interior `t0` as well as forward,
//! and returns a [`Trajectory`] sampled on the uniform grid `t0 + k * h`.

mod args;
mod error;
mod fixed_point;
mod march;
mod ode;
mod solve;
mod trajectory;

pub mod analyse;
pub mod methods;
pub mod prelude;

pub use args::IterArgs;
pub use error::Error;
pub use ode::Derivative;
pub use solve::{Method, solve};
pub use trajectory::{Trajectory, TrajectoryIter};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Scalar precision used throughout the crate; selected by feature.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
