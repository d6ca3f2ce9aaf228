//! Two-level work-partitioned parallel prefix scan
//!
//! The working buffer is split into `p` contiguous blocks of `k` elements.
//! The parallel mode runs three ordered stages with a barrier between each:
//!
//! 1. **Local scan**: every block is prefix-summed in place, all blocks
//!    concurrently.
//! 2. **Carry scan**: the rightmost value of each block is gathered into a
//!    carry sequence of length `p` and scanned sequentially.
//! 3. **Propagation**: the carry of all preceding blocks is folded into
//!    every element of each block after the first, again concurrently.
//!
//! The blocks are disjoint index ranges, so the barriers are the only
//! synchronization the algorithm needs.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::utils;

/// Partition of a power-of-two-length sequence into equal contiguous blocks
///
/// The block size stays close to `log2` of the sequence length while always
/// covering the sequence exactly: `size * count == len`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPartition {
    /// Number of elements covered by the partition
    pub len: usize,

    /// Elements per block (`k`)
    pub size: usize,

    /// Number of blocks, and of workers scanning them (`p`)
    pub count: usize,
}

impl BlockPartition {
    /// Derives the partition for a sequence of length `len`.
    ///
    /// The block size is the largest power of two no greater than
    /// `log2(len)`, so it always divides `len` exactly. A one-element
    /// sequence degenerates to a single one-element block.
    ///
    /// # Panics
    ///
    /// Panics if `len` is not a power of two.
    pub fn new(len: usize) -> Self {
        assert!(utils::is_power_of_two(len), "Length is not a power of 2");

        let log = utils::log2i(len);
        let size = if log == 0 { 1 } else { 1 << utils::log2i(log) };
        let count = len / size;
        assert_eq!(size * count, len, "Blocks must cover the sequence exactly");

        Self { len, size, count }
    }
}

/// Inclusive prefix sum engine over a fixed power-of-two-length sequence
///
/// Constructed once with a copy of the input and an associative binary
/// operator. Each compute call returns a fresh result sequence and leaves the
/// engine untouched, so repeated calls yield identical results.
pub struct PrefixScan<T, F> {
    values: Vec<T>,
    op: F,
    partition: BlockPartition,
}

impl<T, F> PrefixScan<T, F>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Send + Sync,
{
    /// Creates an engine over a copy of `values`.
    ///
    /// The operator must be associative: for a non-associative operator the
    /// parallel mode diverges from the sequential reference. This is a
    /// caller contract and is not checked at runtime.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not a power of two.
    pub fn new(values: &[T], op: F) -> Self {
        let partition = BlockPartition::new(values.len());

        Self {
            values: values.to_vec(),
            op,
            partition,
        }
    }

    /// Number of elements in the input sequence
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The block partition used by the parallel mode
    pub fn partition(&self) -> BlockPartition {
        self.partition
    }

    /// Computes the prefix sum with a single left-to-right sweep.
    ///
    /// Baseline and correctness reference for the parallel mode.
    pub fn compute_sequential(&self) -> Vec<T> {
        let mut result = self.values.clone();
        scan_in_place(&mut result, &self.op);
        result
    }

    /// Computes the prefix sum with the two-level parallel algorithm.
    ///
    /// The stages run on a dedicated pool of one worker per block; the pool
    /// lives only for the duration of the call.
    pub fn compute_parallel(&self) -> Vec<T> {
        let BlockPartition { size, count, .. } = self.partition;

        let mut result = self.values.clone();
        let pool = ThreadPoolBuilder::new()
            .num_threads(count)
            .build()
            .expect("Failed to build scan worker pool");

        pool.install(|| {
            // Stage 1: local prefix sum of each block. The chunks are
            // disjoint, and par_chunks_mut returns only once every block
            // has been scanned.
            result
                .par_chunks_mut(size)
                .for_each(|block| scan_in_place(block, &self.op));

            // Stage 2: prefix sum over the rightmost value of each block.
            // Only `count` elements, so a sequential sweep beats another
            // fan-out.
            let mut carries: Vec<T> = result
                .iter()
                .skip(size - 1)
                .step_by(size)
                .copied()
                .collect();
            scan_in_place(&mut carries, &self.op);

            // Stage 3: fold the combined carry of all preceding blocks into
            // every block after the first; the first block is already
            // globally correct.
            result
                .par_chunks_mut(size)
                .enumerate()
                .skip(1)
                .for_each(|(i, block)| apply_in_place(block, carries[i - 1], &self.op));
        });

        result
    }
}

/// Prefix-sums `values` in place with a left-to-right sweep
fn scan_in_place<T, F>(values: &mut [T], op: &F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    for i in 1..values.len() {
        values[i] = op(values[i], values[i - 1]);
    }
}

/// Folds `carry` into every element of `values`
fn apply_in_place<T, F>(values: &mut [T], carry: T, op: &F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    for value in values.iter_mut() {
        *value = op(*value, carry);
    }
}
