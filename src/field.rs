//! Caller-owned field storage.
//!
//! A [`FieldBuffer`] is the handle the kernels dereference to reach the
//! flattened backing array of a field. The model layer allocates the
//! buffer, checks its shape against a [`NodalLayout`] once at
//! construction, and from then on the kernels treat the invariant as
//! established (debug assertions only on the hot path).
//!
//! The buffer deliberately knows nothing about its layout: the same
//! storage convention is re-stated by the layout passed to every kernel
//! launch, which is what keeps all five fields of a model mutually
//! consistent.

use thiserror::Error;

use crate::layout::NodalLayout;

/// Errors raised when constructing a field from caller-supplied data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The supplied array does not match the layout's total size.
    #[error("field length mismatch: layout requires {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Contiguous storage for one nodal field.
///
/// Holds `(order+1)^D * n_var * n_el` values addressed through the
/// flattening of the corresponding [`NodalLayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuffer {
    data: Vec<f64>,
}

impl FieldBuffer {
    /// Create a zero-initialized field for the given layout.
    pub fn zeros<const D: usize>(layout: NodalLayout<D>) -> Self {
        Self {
            data: vec![0.0; layout.len()],
        }
    }

    /// Wrap caller-supplied data, validating its length against the
    /// layout.
    pub fn from_vec<const D: usize>(
        data: Vec<f64>,
        layout: NodalLayout<D>,
    ) -> Result<Self, FieldError> {
        if data.len() != layout.len() {
            return Err(FieldError::ShapeMismatch {
                expected: layout.len(),
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Number of values in the field.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the field holds no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutable view of the backing array.
    #[inline(always)]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the backing array.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Copy the field contents into a new `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Fill every value with a constant.
    pub fn fill(&mut self, value: f64) {
        for v in &mut self.data {
            *v = value;
        }
    }

    /// Maximum absolute value across the field.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().map(|&x| x.abs()).fold(0.0, f64::max)
    }

    /// Returns whether every value is finite (no NaN or Inf).
    ///
    /// The kernels propagate non-finite values silently; this is the
    /// check a model layer runs between steps when it cares.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodalLayout;

    #[test]
    fn test_zeros_has_layout_size() {
        let layout = NodalLayout::<2>::new(2, 3, 4);
        let field = FieldBuffer::zeros(layout);
        assert_eq!(field.len(), layout.len());
        assert!(field.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_vec_accepts_matching_length() {
        let layout = NodalLayout::<1>::new(1, 1, 2);
        let field = FieldBuffer::from_vec(vec![1.0, 2.0, 3.0, 4.0], layout).unwrap();
        assert_eq!(field.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let layout = NodalLayout::<1>::new(1, 1, 2);
        let err = FieldBuffer::from_vec(vec![1.0; 3], layout).unwrap_err();
        assert_eq!(
            err,
            FieldError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_fill_and_max_abs() {
        let layout = NodalLayout::<1>::new(2, 1, 1);
        let mut field = FieldBuffer::zeros(layout);
        field.fill(-2.5);
        assert_eq!(field.max_abs(), 2.5);
    }

    #[test]
    fn test_is_finite() {
        let layout = NodalLayout::<1>::new(1, 1, 1);
        let mut field = FieldBuffer::zeros(layout);
        assert!(field.is_finite());
        field.as_mut_slice()[1] = f64::NAN;
        assert!(!field.is_finite());
    }
}
