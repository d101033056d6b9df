//! Per-method cost comparison on one fixed decay problem.
//!
//! Explicit Euler does one derivative evaluation per step and Heun two;
//! the implicit methods pay a handful of extra evaluations per step for
//! their fixed-point loops. The group puts all four on the same problem
//! so those ratios are visible directly.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use euler_ivp::prelude::*;

fn decay(_t: Float, y: Float) -> Float {
    -y
}

fn benchmark_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_step_methods");
    let (a, b, t0, y0, h) = (0.0, 10.0, 0.0, 1.0, 0.001);

    for method in [
        Method::ExplicitEuler,
        Method::ImplicitEuler,
        Method::Trapezoidal,
        Method::Heun,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{method:?}")),
            &method,
            |bench, &method| {
                bench.iter(|| {
                    solve(
                        &decay,
                        black_box(method),
                        black_box(a),
                        black_box(b),
                        black_box(t0),
                        black_box(y0),
                        black_box(h),
                        None,
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_step_len_harness(c: &mut Criterion) {
    c.bench_function("analyse_step_len/defaults", |bench| {
        bench.iter(|| {
            analyse_step_len(
                &decay,
                Method::ExplicitEuler,
                black_box(0.0),
                black_box(1.0),
                black_box(0.0),
                black_box(1.0),
                &[],
                None,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, benchmark_methods, benchmark_step_len_harness);
criterion_main!(benches);
