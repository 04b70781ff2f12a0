//! Benchmarks for the time-integration kernels.
//!
//! Run with: `cargo bench --bench kernel_bench`
//!
//! Benchmarks RHS assembly, the forward-Euler update, and the
//! low-storage RK3 stage update across problem sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sem_rs::kernels::{calculate_dsdt, update_grk3, update_solution};
use sem_rs::layout::NodalLayout3D;
use sem_rs::state::ModelState;

/// Setup a 3D test problem with non-trivial field contents.
fn setup_state(order: usize, n_var: usize, n_el: usize) -> ModelState<3> {
    let layout = NodalLayout3D::new(order, n_var, n_el);
    let mut state = ModelState::new(layout);

    state.set_solution_from(|i| (i as f64 * 0.01).sin());
    for (i, v) in state.flux_divergence.as_mut_slice().iter_mut().enumerate() {
        *v = (i as f64 * 0.02).cos();
    }
    for (i, v) in state.source.as_mut_slice().iter_mut().enumerate() {
        *v = (i as f64 * 0.03).sin();
    }

    state
}

fn bench_calculate_dsdt(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_dsdt");

    for n_el in [64, 512, 4096] {
        let mut state = setup_state(3, 5, n_el);
        let layout = state.layout;

        group.bench_with_input(
            BenchmarkId::new("3d_p3", format!("{}_elements", n_el)),
            &n_el,
            |b, _| {
                b.iter(|| {
                    calculate_dsdt(
                        black_box(&state.flux_divergence),
                        black_box(&state.source),
                        &mut state.dsdt,
                        layout,
                    )
                    .wait();
                });
            },
        );
    }

    group.finish();
}

fn bench_update_solution(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_solution");

    for n_el in [64, 512, 4096] {
        let mut state = setup_state(3, 5, n_el);
        let layout = state.layout;
        state.dsdt.fill(0.5);

        group.bench_with_input(
            BenchmarkId::new("3d_p3", format!("{}_elements", n_el)),
            &n_el,
            |b, _| {
                b.iter(|| {
                    update_solution(
                        &mut state.solution,
                        black_box(&state.dsdt),
                        black_box(1e-6),
                        layout,
                    )
                    .wait();
                });
            },
        );
    }

    group.finish();
}

fn bench_update_grk3(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_grk3");

    for n_el in [64, 512, 4096] {
        let mut state = setup_state(3, 5, n_el);
        let layout = state.layout;
        state.dsdt.fill(0.5);

        group.bench_with_input(
            BenchmarkId::new("3d_p3", format!("{}_elements", n_el)),
            &n_el,
            |b, _| {
                b.iter(|| {
                    update_grk3(
                        &mut state.grk3,
                        &mut state.solution,
                        black_box(&state.dsdt),
                        black_box(-5.0 / 9.0),
                        black_box(15.0 / 16.0),
                        black_box(1e-6),
                        layout,
                    )
                    .wait();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate_dsdt,
    bench_update_solution,
    bench_update_grk3
);
criterion_main!(benches);
