//! Trait-based time integrator abstraction.
//!
//! The integrators here are thin stage drivers over the kernels in
//! [`crate::kernels`]: they own the calling sequence (how often the RHS
//! is evaluated, which update kernel runs with which coefficients) and
//! nothing else. The spatial operator stays external: each stage hands
//! the current solution and stage time to a caller-supplied closure
//! that fills the flux-divergence and source fields, and the driver
//! assembles `dsdt` and applies the update from there.
//!
//! # Example
//! ```
//! use sem_rs::layout::NodalLayout1D;
//! use sem_rs::state::ModelState;
//! use sem_rs::time::{LowStorageRK3, TimeIntegrator};
//!
//! let layout = NodalLayout1D::new(3, 1, 4);
//! let mut state = ModelState::new(layout);
//! state.set_solution_from(|_| 1.0);
//!
//! // Exponential decay: dS/dt = -S, so flux divergence = S, source = 0.
//! let integrator = LowStorageRK3::default();
//! integrator.step(&mut state, 0.01, 0.0, |solution, _t, flux, source| {
//!     flux.as_mut_slice().copy_from_slice(solution.as_slice());
//!     source.fill(0.0);
//! });
//! ```

use crate::field::FieldBuffer;
use crate::kernels::{calculate_dsdt, update_grk3, update_solution};
use crate::state::ModelState;

/// Accumulator weights of the standard Williamson 3-stage scheme.
pub const WILLIAMSON_A: [f64; 3] = [0.0, -5.0 / 9.0, -153.0 / 128.0];

/// Solution weights of the standard Williamson 3-stage scheme.
pub const WILLIAMSON_G: [f64; 3] = [1.0 / 3.0, 15.0 / 16.0, 8.0 / 15.0];

/// Stage-time fractions of the standard Williamson 3-stage scheme.
pub const WILLIAMSON_C: [f64; 3] = [0.0, 1.0 / 3.0, 3.0 / 4.0];

// =============================================================================
// IntegratorInfo Trait (non-generic, dyn-compatible)
// =============================================================================

/// Non-generic information about a time integrator.
///
/// Separate from [`TimeIntegrator`] so info methods can be called
/// without naming a dimensionality; also dyn-compatible.
pub trait IntegratorInfo: Send + Sync {
    /// Human-readable name for debugging and diagnostics.
    fn name(&self) -> &'static str;

    /// Order of accuracy of the integrator.
    fn order(&self) -> usize;

    /// Number of stages per step.
    fn n_stages(&self) -> usize;

    /// Times at which the RHS is evaluated, relative to the current time.
    fn stage_times(&self, dt: f64) -> Vec<f64>;
}

// =============================================================================
// TimeIntegrator Trait
// =============================================================================

/// Trait for explicit time integrators driving the kernel layer.
///
/// `rhs` receives `(solution, stage_time, flux_divergence, source)` and
/// must fill the last two fields; the driver runs
/// [`calculate_dsdt`] and the stage update after each evaluation,
/// waiting on every kernel completion before the next launch reads its
/// output.
///
/// Note: not dyn-compatible because of the const-generic `step`; use
/// [`StandardIntegrator`] for runtime selection.
pub trait TimeIntegrator: IntegratorInfo {
    /// Advance the model state from `t` to `t + dt`.
    fn step<const D: usize, F>(&self, state: &mut ModelState<D>, dt: f64, t: f64, rhs: F)
    where
        F: FnMut(&FieldBuffer, f64, &mut FieldBuffer, &mut FieldBuffer);
}

// =============================================================================
// Low-Storage RK3
// =============================================================================

/// Low-storage third-order Runge-Kutta integrator (Williamson form).
///
/// Uses a single accumulator field instead of per-stage buffers. Per
/// stage `s`:
///
/// ```text
/// grk3     = a[s] * grk3 + dSdt
/// solution += g[s] * dt * grk3
/// ```
///
/// `a[0] = 0`, so the first stage overwrites the accumulator and no
/// per-step reset is needed once the accumulator starts zeroed (which
/// [`ModelState::new`] guarantees).
///
/// The default coefficient set is the standard Williamson scheme;
/// [`LowStorageRK3::with_coefficients`] accepts any externally
/// configured triple of tables.
#[derive(Clone, Copy, Debug)]
pub struct LowStorageRK3 {
    /// Accumulator weight per stage.
    pub a: [f64; 3],
    /// Solution weight per stage.
    pub g: [f64; 3],
    /// Stage-time fraction per stage.
    pub c: [f64; 3],
}

impl Default for LowStorageRK3 {
    fn default() -> Self {
        Self {
            a: WILLIAMSON_A,
            g: WILLIAMSON_G,
            c: WILLIAMSON_C,
        }
    }
}

impl LowStorageRK3 {
    /// Create an integrator with an externally supplied coefficient set.
    pub fn with_coefficients(a: [f64; 3], g: [f64; 3], c: [f64; 3]) -> Self {
        Self { a, g, c }
    }
}

impl IntegratorInfo for LowStorageRK3 {
    fn name(&self) -> &'static str {
        "low-storage-rk3"
    }

    fn order(&self) -> usize {
        3
    }

    fn n_stages(&self) -> usize {
        3
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        self.c.iter().map(|&c| c * dt).collect()
    }
}

impl TimeIntegrator for LowStorageRK3 {
    fn step<const D: usize, F>(&self, state: &mut ModelState<D>, dt: f64, t: f64, mut rhs: F)
    where
        F: FnMut(&FieldBuffer, f64, &mut FieldBuffer, &mut FieldBuffer),
    {
        let layout = state.layout;
        for s in 0..3 {
            rhs(
                &state.solution,
                t + self.c[s] * dt,
                &mut state.flux_divergence,
                &mut state.source,
            );
            calculate_dsdt(
                &state.flux_divergence,
                &state.source,
                &mut state.dsdt,
                layout,
            )
            .wait();
            update_grk3(
                &mut state.grk3,
                &mut state.solution,
                &state.dsdt,
                self.a[s],
                self.g[s],
                dt,
                layout,
            )
            .wait();
        }
    }
}

// =============================================================================
// Forward Euler (for comparison/testing)
// =============================================================================

/// Forward Euler integrator (1st order).
///
/// One RHS evaluation, one additive update. Useful for testing and as
/// the minimal driver over the kernel layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl IntegratorInfo for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn n_stages(&self) -> usize {
        1
    }

    fn stage_times(&self, _dt: f64) -> Vec<f64> {
        vec![0.0]
    }
}

impl TimeIntegrator for ForwardEuler {
    fn step<const D: usize, F>(&self, state: &mut ModelState<D>, dt: f64, t: f64, mut rhs: F)
    where
        F: FnMut(&FieldBuffer, f64, &mut FieldBuffer, &mut FieldBuffer),
    {
        let layout = state.layout;
        rhs(
            &state.solution,
            t,
            &mut state.flux_divergence,
            &mut state.source,
        );
        calculate_dsdt(
            &state.flux_divergence,
            &state.source,
            &mut state.dsdt,
            layout,
        )
        .wait();
        update_solution(&mut state.solution, &state.dsdt, dt, layout).wait();
    }
}

// =============================================================================
// Standard Integrator Enum (Zero-Cost Dispatch)
// =============================================================================

/// Enum wrapper for built-in integrators.
///
/// Provides zero-cost dispatch when the integrator is known at compile
/// time while still allowing runtime selection via configuration.
#[derive(Clone, Copy, Debug, Default)]
pub enum StandardIntegrator {
    /// Low-storage RK3 with the default Williamson coefficients.
    #[default]
    LowStorageRK3,
    /// Forward Euler (1st order, for testing).
    ForwardEuler,
}

impl IntegratorInfo for StandardIntegrator {
    fn name(&self) -> &'static str {
        match self {
            StandardIntegrator::LowStorageRK3 => "low-storage-rk3",
            StandardIntegrator::ForwardEuler => "forward-euler",
        }
    }

    fn order(&self) -> usize {
        match self {
            StandardIntegrator::LowStorageRK3 => 3,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn n_stages(&self) -> usize {
        match self {
            StandardIntegrator::LowStorageRK3 => 3,
            StandardIntegrator::ForwardEuler => 1,
        }
    }

    fn stage_times(&self, dt: f64) -> Vec<f64> {
        match self {
            StandardIntegrator::LowStorageRK3 => LowStorageRK3::default().stage_times(dt),
            StandardIntegrator::ForwardEuler => ForwardEuler.stage_times(dt),
        }
    }
}

impl TimeIntegrator for StandardIntegrator {
    fn step<const D: usize, F>(&self, state: &mut ModelState<D>, dt: f64, t: f64, rhs: F)
    where
        F: FnMut(&FieldBuffer, f64, &mut FieldBuffer, &mut FieldBuffer),
    {
        match self {
            StandardIntegrator::LowStorageRK3 => {
                LowStorageRK3::default().step(state, dt, t, rhs)
            }
            StandardIntegrator::ForwardEuler => ForwardEuler.step(state, dt, t, rhs),
        }
    }
}
