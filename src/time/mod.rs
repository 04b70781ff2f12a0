//! Explicit time integration.
//!
//! Stage drivers that sequence the kernel launches of one sub-step:
//! forward Euler and a low-storage third-order Runge-Kutta scheme that
//! reuses a single accumulator field across its three stages.

mod integrator;

pub use integrator::{
    ForwardEuler, IntegratorInfo, LowStorageRK3, StandardIntegrator, TimeIntegrator,
    WILLIAMSON_A, WILLIAMSON_C, WILLIAMSON_G,
};
