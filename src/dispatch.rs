//! Parallel decomposition of kernel launches.
//!
//! Every kernel advances a field one (variable, element) block at a
//! time: the launch grid holds `n_var * n_el` independent blocks, and a
//! block owns the `(order+1)^D` node values of its pair. Because the
//! layout stores node values fastest, each block is one contiguous
//! chunk of the flattened array, and splitting a field into blocks is
//! `chunks_mut(nodes_per_element)`.
//!
//! Blocks never overlap, so they may run in any order and on any number
//! of worker threads. With `feature = "parallel"` they are distributed
//! over the rayon pool; without it they run in a serial loop with
//! identical results.
//!
//! A launch returns a [`Completion`] token. Execution is synchronous
//! today (the launch function joins all workers before returning), but
//! the ordering between a launch and any read of its outputs goes
//! through `Completion::wait()` so the synchronization point is explicit
//! in the API rather than implied by an execution queue.

use crate::layout::NodalLayout;
use crate::types::{ElementIndex, VariableIndex};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Token returned by every kernel launch.
///
/// Consume it with [`Completion::wait`] before reading any array the
/// launch wrote.
#[must_use = "kernel completions must be waited on before the outputs are read"]
#[derive(Debug)]
pub struct Completion {
    _sealed: (),
}

impl Completion {
    pub(crate) fn finished() -> Self {
        Self { _sealed: () }
    }

    /// Block until the launch has finished writing its outputs.
    pub fn wait(self) {}
}

/// Recover the (variable, element) pair of a block from its position in
/// the chunk sequence. Variables vary faster than elements, matching
/// the storage layout.
#[inline(always)]
fn block_coords<const D: usize>(
    layout: NodalLayout<D>,
    block: usize,
) -> (VariableIndex, ElementIndex) {
    let var = VariableIndex::new(block % layout.n_var);
    let el = ElementIndex::new(block / layout.n_var);
    debug_assert_eq!(
        layout.block_range(var, el).start,
        block * layout.nodes_per_element()
    );
    (var, el)
}

/// Run `kernel` once per (variable, element) block, handing each
/// invocation the block's chunk of `out`.
pub(crate) fn for_each_block<const D: usize, F>(
    layout: NodalLayout<D>,
    out: &mut [f64],
    kernel: F,
) -> Completion
where
    F: Fn(VariableIndex, ElementIndex, &mut [f64]) + Sync,
{
    debug_assert_eq!(out.len(), layout.len());
    let block_len = layout.nodes_per_element();

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(block_len)
        .enumerate()
        .for_each(|(b, chunk)| {
            let (var, el) = block_coords(layout, b);
            kernel(var, el, chunk);
        });

    #[cfg(not(feature = "parallel"))]
    for (b, chunk) in out.chunks_mut(block_len).enumerate() {
        let (var, el) = block_coords(layout, b);
        kernel(var, el, chunk);
    }

    Completion::finished()
}

/// Run `kernel` once per (variable, element) block with the block's
/// chunks of two fields that are written in the same launch.
pub(crate) fn for_each_block_pair<const D: usize, F>(
    layout: NodalLayout<D>,
    out_a: &mut [f64],
    out_b: &mut [f64],
    kernel: F,
) -> Completion
where
    F: Fn(VariableIndex, ElementIndex, &mut [f64], &mut [f64]) + Sync,
{
    debug_assert_eq!(out_a.len(), layout.len());
    debug_assert_eq!(out_b.len(), layout.len());
    let block_len = layout.nodes_per_element();

    #[cfg(feature = "parallel")]
    out_a
        .par_chunks_mut(block_len)
        .zip(out_b.par_chunks_mut(block_len))
        .enumerate()
        .for_each(|(b, (chunk_a, chunk_b))| {
            let (var, el) = block_coords(layout, b);
            kernel(var, el, chunk_a, chunk_b);
        });

    #[cfg(not(feature = "parallel"))]
    for (b, (chunk_a, chunk_b)) in out_a
        .chunks_mut(block_len)
        .zip(out_b.chunks_mut(block_len))
        .enumerate()
    {
        let (var, el) = block_coords(layout, b);
        kernel(var, el, chunk_a, chunk_b);
    }

    Completion::finished()
}
