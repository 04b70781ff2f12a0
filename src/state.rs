//! Per-model field bundle.
//!
//! A model carries five fields over one shared layout: the solution,
//! its time derivative, the two external inputs that feed the
//! derivative (flux divergence and source), and the low-storage RK3
//! accumulator. [`ModelState`] keeps them together so the stage drivers
//! in [`crate::time`] can be handed one value instead of five, while
//! every field stays individually reachable for the external
//! collaborators that fill it.

use crate::field::FieldBuffer;
use crate::layout::NodalLayout;

/// The five fields of one discretized model, all sharing `layout`.
///
/// All buffers are zero-initialized at construction; in particular the
/// RK3 accumulator starts zeroed as the low-storage scheme expects.
#[derive(Clone, Debug)]
pub struct ModelState<const D: usize> {
    /// Storage layout shared by every field below.
    pub layout: NodalLayout<D>,
    /// Current discretized state of the PDE unknowns.
    pub solution: FieldBuffer,
    /// Instantaneous rate of change of the solution.
    pub dsdt: FieldBuffer,
    /// Discrete spatial operator output, filled externally.
    pub flux_divergence: FieldBuffer,
    /// Forcing term, filled externally.
    pub source: FieldBuffer,
    /// Low-storage RK3 stage accumulator.
    pub grk3: FieldBuffer,
}

/// Model state over a 1D discretization.
pub type ModelState1D = ModelState<1>;
/// Model state over a 2D discretization.
pub type ModelState2D = ModelState<2>;
/// Model state over a 3D discretization.
pub type ModelState3D = ModelState<3>;

impl<const D: usize> ModelState<D> {
    /// Create a model state with all fields zero-initialized.
    pub fn new(layout: NodalLayout<D>) -> Self {
        Self {
            layout,
            solution: FieldBuffer::zeros(layout),
            dsdt: FieldBuffer::zeros(layout),
            flux_divergence: FieldBuffer::zeros(layout),
            source: FieldBuffer::zeros(layout),
            grk3: FieldBuffer::zeros(layout),
        }
    }

    /// Set the solution from a function of the flattened offset.
    ///
    /// Convenience for tests and initial conditions when the caller has
    /// no mesh geometry at hand.
    pub fn set_solution_from<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> f64,
    {
        for (i, v) in self.solution.as_mut_slice().iter_mut().enumerate() {
            *v = f(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodalLayout2D;

    #[test]
    fn test_all_fields_sized_to_layout() {
        let layout = NodalLayout2D::new(3, 2, 5);
        let state = ModelState::new(layout);

        assert_eq!(state.solution.len(), layout.len());
        assert_eq!(state.dsdt.len(), layout.len());
        assert_eq!(state.flux_divergence.len(), layout.len());
        assert_eq!(state.source.len(), layout.len());
        assert_eq!(state.grk3.len(), layout.len());
    }

    #[test]
    fn test_grk3_starts_zeroed() {
        let layout = NodalLayout2D::new(1, 1, 2);
        let state = ModelState::new(layout);
        assert_eq!(state.grk3.max_abs(), 0.0);
    }

    #[test]
    fn test_set_solution_from() {
        let layout = NodalLayout2D::new(0, 1, 4);
        let mut state = ModelState::new(layout);
        state.set_solution_from(|i| i as f64 * 2.0);
        assert_eq!(state.solution.to_vec(), vec![0.0, 2.0, 4.0, 6.0]);
    }
}
