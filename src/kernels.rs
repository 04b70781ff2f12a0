//! Elementwise time-integration kernels.
//!
//! The three operations that advance a discretized model state by one
//! explicit sub-step:
//!
//! - [`calculate_dsdt`]: `dsdt = source - flux_divergence`
//! - [`update_solution`]: `solution += dt * dsdt` (forward Euler)
//! - [`update_grk3`]: one stage of low-storage third-order Runge-Kutta
//!
//! Each kernel touches every (node-tuple, variable, element) location of
//! its fields exactly once, with no coupling between locations, and is
//! dispatched one (variable, element) block at a time (see
//! [`crate::dispatch`]). The kernels perform no validation beyond debug
//! assertions and no special-casing of non-finite values; shape
//! agreement between the fields and the layout is the caller's
//! contract, established at [`FieldBuffer`] construction.

use crate::dispatch::{self, Completion};
use crate::field::FieldBuffer;
use crate::layout::NodalLayout;

/// Assemble the time-derivative field from the spatial operator output
/// and the forcing term.
///
/// For every location: `dsdt = source - flux_divergence`. Pure
/// elementwise subtraction with no temporal state; `dsdt` is
/// overwritten entirely, so the operation is idempotent for fixed
/// inputs.
///
/// # Arguments
/// * `flux_divergence` - Discrete spatial operator output (read)
/// * `source` - Forcing term (read)
/// * `dsdt` - Time-derivative field (overwritten)
/// * `layout` - Shared storage layout of all three fields
pub fn calculate_dsdt<const D: usize>(
    flux_divergence: &FieldBuffer,
    source: &FieldBuffer,
    dsdt: &mut FieldBuffer,
    layout: NodalLayout<D>,
) -> Completion {
    debug_assert_eq!(flux_divergence.len(), layout.len());
    debug_assert_eq!(source.len(), layout.len());
    debug_assert_eq!(dsdt.len(), layout.len());

    let flux = flux_divergence.as_slice();
    let src = source.as_slice();

    dispatch::for_each_block(layout, dsdt.as_mut_slice(), |var, el, out| {
        let range = layout.block_range(var, el);
        let flux_k = &flux[range.clone()];
        let src_k = &src[range];
        for ((d, &s), &f) in out.iter_mut().zip(src_k).zip(flux_k) {
            *d = s - f;
        }
    })
}

/// Advance the solution by one forward-Euler sub-step.
///
/// For every location: `solution += dt * dsdt`. `dt` is any finite
/// scalar supplied by the caller; zero and negative values are valid.
pub fn update_solution<const D: usize>(
    solution: &mut FieldBuffer,
    dsdt: &FieldBuffer,
    dt: f64,
    layout: NodalLayout<D>,
) -> Completion {
    debug_assert_eq!(solution.len(), layout.len());
    debug_assert_eq!(dsdt.len(), layout.len());

    let dsdt = dsdt.as_slice();

    dispatch::for_each_block(layout, solution.as_mut_slice(), |var, el, out| {
        let dsdt_k = &dsdt[layout.block_range(var, el)];
        for (s, &d) in out.iter_mut().zip(dsdt_k) {
            *s += dt * d;
        }
    })
}

/// Apply one stage of the low-storage third-order Runge-Kutta update.
///
/// For every location, in order:
///
/// 1. `grk3 = rk3_a * grk3 + dsdt`
/// 2. `solution += rk3_g * dt * grk3`
///
/// Step 2 reads the accumulator value just written by step 1. Three
/// stages with a Williamson-style coefficient set advance the solution
/// by a full third-order step while `grk3` is the only auxiliary
/// storage; the coefficient values themselves are configuration (see
/// [`crate::time::LowStorageRK3`]), not part of this kernel's contract.
///
/// # Arguments
/// * `grk3` - Low-storage stage accumulator (read and overwritten)
/// * `solution` - Solution field (accumulated into)
/// * `dsdt` - Time-derivative field (read)
/// * `rk3_a` - Accumulator weight of the current stage
/// * `rk3_g` - Solution weight of the current stage
/// * `dt` - Time-step size
/// * `layout` - Shared storage layout of all three fields
pub fn update_grk3<const D: usize>(
    grk3: &mut FieldBuffer,
    solution: &mut FieldBuffer,
    dsdt: &FieldBuffer,
    rk3_a: f64,
    rk3_g: f64,
    dt: f64,
    layout: NodalLayout<D>,
) -> Completion {
    debug_assert_eq!(grk3.len(), layout.len());
    debug_assert_eq!(solution.len(), layout.len());
    debug_assert_eq!(dsdt.len(), layout.len());

    let dsdt = dsdt.as_slice();

    dispatch::for_each_block_pair(
        layout,
        grk3.as_mut_slice(),
        solution.as_mut_slice(),
        |var, el, grk3_k, sol_k| {
            let dsdt_k = &dsdt[layout.block_range(var, el)];
            for ((g, s), &d) in grk3_k.iter_mut().zip(sol_k.iter_mut()).zip(dsdt_k) {
                *g = rk3_a * *g + d;
                *s += rk3_g * dt * *g;
            }
        },
    )
}
