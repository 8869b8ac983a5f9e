//! Exact k-mer matching between two long symbol sequences.
//!
//! The core pipeline slides a k-length window over each input with an
//! incrementally updated rolling hash, indexes every m-th window of the
//! first (reference) sequence in a hash-keyed multimap, then probes that
//! index with every window of the second sequence, verifying candidates
//! literally before reporting a match. The surrounding modules turn FASTA
//! files into symbol streams, persist scanned match sets, and render them
//! as dot plots.

use thiserror::Error;

/// Parameter contract violations, raised before any input is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Window length k must be at least 1.
    #[error("window length k must be at least 1")]
    ZeroWindowLen,
    /// Sampling interval m must be at least k, or sampled windows would overlap.
    #[error("sampling interval m must be at least the window length k (k={k}, m={m})")]
    IntervalTooSmall { k: usize, m: usize },
}

/// Incremental polynomial hash over a sliding k-length window.
pub mod rolling_hash;

/// Hash-keyed multimap with per-key insertion order.
pub mod multidict;

/// Lazy dense and sampled window iterators over a symbol stream.
pub mod windows;

/// The index-probe-verify submatch finder.
pub mod submatch;

/// FASTA bytes as a lazy stream of nucleotide symbols.
pub mod fasta;

/// The persisted match-set artifact and its on-disk format.
pub mod match_format;

/// Scan orchestration: load, digest, find, persist.
pub mod scan;

/// Dot-plot rasterization and PGM output.
pub mod plot;

/// Tab-separated match listings.
pub mod dump;

/// File mapping and digest helpers.
pub mod util;

pub use match_format::{Match, MatchSet, SequenceInfo};
pub use submatch::{find_exact_submatches, ExactSubmatches};
pub use windows::{SampledWindowHashes, Window, WindowHashes};
