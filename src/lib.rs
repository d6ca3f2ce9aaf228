//! # blockscan: work-partitioned parallel prefix scan and stream compaction
//!
//! This library computes, for a fixed-size sequence of integers whose length
//! is an exact power of two, the inclusive prefix sum under an associative
//! binary operator and a compaction of all non-zero elements together with
//! their original positions. Both are built on the classic two-level parallel
//! scan rather than a naive per-element parallel loop.
//!
//! ## Algorithm Components
//!
//! 1. **Block partition**: the sequence is split into `p` contiguous blocks
//!    of `k` elements, with `k` close to `log2` of the length and `k * p`
//!    covering the sequence exactly.
//!
//! 2. **Parallel scan**: three ordered stages with a barrier between each —
//!    local prefix sum per block, a sequential scan over the per-block
//!    carries, and parallel propagation of each block's preceding carry.
//!
//! 3. **Compaction**: a 0/1 indicator sequence is scanned with addition; the
//!    running count tells each non-zero element its slot in the compacted
//!    output.
//!
//! ## Usage
//!
//! ```
//! use blockscan::{Compaction, PrefixScan};
//!
//! let input = [0, 3, 0, 0, 5, 0, 7, 0];
//!
//! let scan = PrefixScan::new(&input, |a, b| a + b);
//! assert_eq!(scan.compute_parallel(), vec![0, 3, 3, 3, 8, 8, 15, 15]);
//!
//! let compaction = Compaction::new(&input);
//! let compacted = compaction.compute_parallel();
//! assert_eq!(compacted.values, vec![3, 5, 7]);
//! assert_eq!(compacted.coordinates, vec![1, 4, 6]);
//! ```
//!
//! Both engines also expose a `compute_sequential` mode, the single-sweep
//! reference the parallel modes are tested against.

pub mod compaction;
pub mod io;
pub mod scan;
pub mod utils;

// Re-export primary components
pub use compaction::{Compacted, Compaction};
pub use io::read_values;
pub use scan::{BlockPartition, PrefixScan};
pub use utils::{is_power_of_two, join, log2i};

/// Version information for the blockscan library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
