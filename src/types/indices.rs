//! Strongly-typed index newtypes.
//!
//! The launch grid of every kernel is spanned by a (variable, element)
//! pair. These newtypes keep the two axes from being swapped in call
//! sites that otherwise pass bare `usize` values around.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// Convert to usize.
            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0
            }

            /// Create an iterator over [0, n) indices.
            pub fn iter(n: usize) -> impl Iterator<Item = $name> + ExactSizeIterator {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Element index in a mesh.
    ///
    /// Identifies one subdivision of the computational domain; each
    /// element holds its own independent set of nodal values.
    ///
    /// # Example
    ///
    /// ```
    /// use sem_rs::types::ElementIndex;
    ///
    /// let el = ElementIndex::new(42);
    /// assert_eq!(el.get(), 42);
    /// ```
    ElementIndex,
    "E"
);

define_index!(
    /// Physical-variable index within a solution field.
    ///
    /// Identifies one of the `n_var` conserved quantities stored at
    /// every node of every element.
    ///
    /// # Example
    ///
    /// ```
    /// use sem_rs::types::VariableIndex;
    ///
    /// let var = VariableIndex::new(2);
    /// assert_eq!(var.get(), 2);
    /// ```
    VariableIndex,
    "V"
);
