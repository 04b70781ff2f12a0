//! # sem-rs
//!
//! Data-parallel time-integration kernels for nodal spectral element
//! PDE solvers.
//!
//! This crate provides the layer that advances a discretized solution
//! field by one explicit sub-step:
//! - Flattened storage layout over (node-tuple, variable, element)
//!   for dimensionalities 1, 2, and 3
//! - Right-hand-side assembly from flux-divergence and source fields
//! - Forward Euler and low-storage third-order Runge-Kutta updates
//! - Block-parallel dispatch over the (variable, element) launch grid
//!
//! Everything around this layer (mesh topology, the spatial operator
//! that produces the flux-divergence field, boundary conditions,
//! time-step selection) lives in external collaborators that own the
//! field allocations and hand [`field::FieldBuffer`] handles to the
//! kernels.
//!
//! # Example
//!
//! ```
//! use sem_rs::kernels::{calculate_dsdt, update_solution};
//! use sem_rs::layout::NodalLayout1D;
//! use sem_rs::field::FieldBuffer;
//!
//! let layout = NodalLayout1D::new(1, 1, 1);
//! let flux = FieldBuffer::from_vec(vec![1.0, 1.0], layout).unwrap();
//! let source = FieldBuffer::from_vec(vec![3.0, 3.0], layout).unwrap();
//! let mut dsdt = FieldBuffer::zeros(layout);
//! let mut solution = FieldBuffer::from_vec(vec![1.0, 2.0], layout).unwrap();
//!
//! calculate_dsdt(&flux, &source, &mut dsdt, layout).wait();
//! update_solution(&mut solution, &dsdt, 0.5, layout).wait();
//!
//! assert_eq!(solution.to_vec(), vec![2.0, 3.0]);
//! ```

pub mod dispatch;
pub mod field;
pub mod kernels;
pub mod layout;
pub mod state;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use dispatch::Completion;
pub use field::{FieldBuffer, FieldError};
pub use kernels::{calculate_dsdt, update_grk3, update_solution};
pub use layout::{NodalLayout, NodalLayout1D, NodalLayout2D, NodalLayout3D};
pub use state::{ModelState, ModelState1D, ModelState2D, ModelState3D};
pub use time::{
    ForwardEuler, IntegratorInfo, LowStorageRK3, StandardIntegrator, TimeIntegrator,
};
pub use types::{ElementIndex, VariableIndex};
