//! Shared problem fixtures for the integration tests.

#![allow(dead_code)]

use euler_ivp::prelude::*;

/// Riccati-style right-hand side used as the running example problem.
pub fn riccati(t: Float, y: Float) -> Float {
    y * y + t * y + t * t
}

/// Exponential decay `y' = -k * y`, exact solution
/// `y0 * exp(-k * (t - t0))`.
pub struct ExponentialDecay {
    pub rate: Float,
}

impl Derivative for ExponentialDecay {
    fn eval(&self, _t: Float, y: Float) -> Float {
        -self.rate * y
    }
}

/// All four methods, for tests that quantify over the family.
pub const ALL_METHODS: [Method; 4] = [
    Method::ExplicitEuler,
    Method::ImplicitEuler,
    Method::Trapezoidal,
    Method::Heun,
];
