//! Fixed-step Euler-family integrators.
//!
//! All four solvers share the calling shape
//! `(f, a, b, t0, y0, h, ...) -> Result<Trajectory, Error>` so the
//! analysis harnesses can treat them polymorphically through
//! [`crate::Method`].

mod explicit_euler;
mod heun;
mod implicit_euler;
mod trapezoidal;

pub use explicit_euler::explicit_euler;
pub use heun::heun;
pub use implicit_euler::implicit_euler;
pub use trapezoidal::trapezoidal;
