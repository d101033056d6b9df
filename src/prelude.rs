//! Convenient prelude: import the most commonly used traits, types, and
//! functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use euler_ivp::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Derivative`, `Trajectory`, `IterArgs`, `Error`.
//! - Solver functions: `explicit_euler`, `implicit_euler`, `trapezoidal`,
//!   `heun`, and the dispatching `solve` with its `Method` enum.
//! - Analysis harnesses: `analyse_step_len`, `analyse_time`, `analyse_memory`.

pub use crate::{
    Derivative, Error, Float, IterArgs, Method, Trajectory,
    analyse::{StepLenColumn, StepLenTable, analyse_memory, analyse_step_len, analyse_time},
    methods::{explicit_euler, heun, implicit_euler, trapezoidal},
    solve::solve,
};
