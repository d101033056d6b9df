//! Bidirectional stepping: an interior t0 must cover the whole span,
//! and the forward half must be unaffected by the backward pass.

use euler_ivp::prelude::*;

mod common;
use common::{ALL_METHODS, riccati};

#[test]
fn forward_half_is_independent_of_the_backward_pass() {
    let (a, b, t0, y0, h) = (0.0, 1.0, 0.4, 0.5, 0.01);
    for method in ALL_METHODS {
        let full = solve(&riccati, method, a, b, t0, y0, h, None).unwrap();
        let fwd = solve(&riccati, method, t0, b, t0, y0, h, None).unwrap();

        // (t0, y0) is stored verbatim, so it locates the split exactly.
        let i0 = full.t.iter().position(|&t| t == t0).unwrap();
        assert_eq!(full.len() - i0, fwd.len());
        for k in 0..fwd.len() {
            assert_eq!(full.t[i0 + k], fwd.t[k], "{method:?} t diverged");
            assert_eq!(full.y[i0 + k], fwd.y[k], "{method:?} y diverged");
        }
    }
}

#[test]
fn backward_pass_is_a_noop_when_t0_equals_a() {
    for method in ALL_METHODS {
        let sol = solve(&riccati, method, 0.0, 1.0, 0.0, 1.0, 0.01, None).unwrap();
        assert_eq!(sol.t[0], 0.0);
        assert_eq!(sol.y[0], 1.0);
        assert_eq!(sol.len(), 101);
    }
}

#[test]
fn interior_t0_covers_both_sides_of_the_span() {
    let (a, b, t0, y0, h) = (0.0, 1.0, 0.4, 0.5, 0.01);
    for method in ALL_METHODS {
        let sol = solve(&riccati, method, a, b, t0, y0, h, None).unwrap();
        assert_eq!(sol.len(), 101);
        assert_eq!(sol.nstep, 100);
        assert!(sol.t[0] < t0 && sol.t[sol.len() - 1] > t0);
        assert!((sol.t[0] - a).abs() < 1e-9);
        assert!((sol.t[sol.len() - 1] - b).abs() < 1e-9);
    }
}

#[test]
fn explicit_backward_step_flips_the_update_direction() {
    // One backward step of explicit Euler from (t0, y0) must equal
    // y0 - h * f(t0, y0): the derivative is taken at the current point.
    let (a, b, t0, y0, h) = (0.0, 0.1, 0.1, 2.0, 0.1);
    let sol = explicit_euler(&riccati, a, b, t0, y0, h).unwrap();
    assert_eq!(sol.len(), 2);
    assert_eq!(sol.y[0], y0 - h * riccati(t0, y0));
    assert_eq!(sol.y[1], y0);
}
