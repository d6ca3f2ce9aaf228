//! Stream compaction built on the prefix scan engine
//!
//! Extracts every non-zero element of a sequence together with its original
//! index, preserving relative order. The parallel mode reduces the problem to
//! a prefix sum over a 0/1 indicator sequence: the running count of non-zero
//! elements tells each survivor its slot in the output.

use num_traits::Num;
use rayon::prelude::*;

use crate::scan::PrefixScan;
use crate::utils;

/// Result of one compaction: surviving values and their original indices
///
/// Both sequences have the same length, the number of non-zero input
/// elements; `coordinates[i]` is the index that `values[i]` occupied in the
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compacted<T> {
    /// Non-zero values in their original relative order
    pub values: Vec<T>,

    /// Original index of each surviving value
    pub coordinates: Vec<usize>,
}

/// Non-zero extraction engine over a fixed power-of-two-length sequence
pub struct Compaction<T> {
    values: Vec<T>,
}

impl<T> Compaction<T>
where
    T: Copy + Num + Send + Sync,
{
    /// Creates an engine over a copy of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not a power of two.
    pub fn new(values: &[T]) -> Self {
        assert!(
            utils::is_power_of_two(values.len()),
            "Length is not a power of 2"
        );

        Self {
            values: values.to_vec(),
        }
    }

    /// Number of elements in the input sequence
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Compacts with a single linear sweep.
    ///
    /// Baseline and correctness reference for the parallel mode.
    pub fn compute_sequential(&self) -> Compacted<T> {
        let mut values = Vec::new();
        let mut coordinates = Vec::new();

        for (i, &value) in self.values.iter().enumerate() {
            if !value.is_zero() {
                values.push(value);
                coordinates.push(i);
            }
        }

        Compacted { values, coordinates }
    }

    /// Compacts by locating the surviving elements with an indicator scan.
    pub fn compute_parallel(&self) -> Compacted<T> {
        // Stage 1: 0/1 indicator per element. Every element is independent,
        // so this is a plain element-wise parallel map.
        let indicator: Vec<usize> = self
            .values
            .par_iter()
            .map(|value| usize::from(!value.is_zero()))
            .collect();

        // Stage 2: prefix sum of the indicators. scanned[i] counts the
        // non-zero elements in the input up to and including position i.
        let scan = PrefixScan::new(&indicator, |a, b| a + b);
        let scanned = scan.compute_parallel();

        // Stage 3: a position whose running count advances past the output
        // length holds the next survivor; one sequential sweep emits the
        // values and their coordinates in order.
        let total = scanned.last().copied().unwrap_or(0);
        let mut values = Vec::with_capacity(total);
        let mut coordinates = Vec::with_capacity(total);

        for (i, &count) in scanned.iter().enumerate() {
            if count == values.len() + 1 {
                values.push(self.values[i]);
                coordinates.push(i);
            }
        }

        Compacted { values, coordinates }
    }
}
