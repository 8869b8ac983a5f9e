use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::util;

pub const MAGIC: &[u8; 8] = b"SEQDOT01";
pub const FORMAT_VERSION: u32 = 1;

/// One exact agreement: the k-window starting at `pos_a` in sequence A is
/// literally identical to the k-window starting at `pos_b` in sequence B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub pos_a: u64,
    pub pos_b: u64,
}

/// What the scan recorded about one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceInfo {
    /// First FASTA record id, falling back to the file name.
    pub name: String,
    /// Total symbols streamed out of the file.
    pub symbols: u64,
    /// BLAKE3 digest of the raw file bytes, for later re-verification.
    pub blake3_digest: [u8; 32],
}

/// A complete scan result: parameters, per-sequence metadata, and every
/// match in emission order. Persisted as `MAGIC` + zstd-compressed bincode.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchSet {
    pub version: u32,
    pub k: u32,
    pub m: u64,
    pub seq_a: SequenceInfo,
    pub seq_b: SequenceInfo,
    pub matches: Vec<Match>,
}

/// Serialize, compress, and write a match set to `path`.
pub fn write_match_set(path: &Path, set: &MatchSet) -> Result<()> {
    let encoded = bincode::serialize(set).context("Failed to serialize match set")?;

    let compressed =
        zstd::bulk::compress(&encoded, 3).context("Failed to compress match set")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(MAGIC)?;
    file.write_all(&compressed)?;
    file.flush()?;

    Ok(())
}

/// mmap a match file, check the magic, then stream-decompress into bincode.
pub fn read_match_set(path: &Path) -> Result<MatchSet> {
    let raw = util::mmap_file(path)?;

    if raw.len() < MAGIC.len() || &raw[..MAGIC.len()] != MAGIC {
        bail!("Invalid match file: missing magic header");
    }

    let decoder =
        zstd::Decoder::new(&raw[MAGIC.len()..]).context("Failed to create zstd decoder")?;
    let set: MatchSet =
        bincode::deserialize_from(decoder).context("Failed to deserialize match set")?;

    if set.version != FORMAT_VERSION {
        bail!(
            "Unsupported match file version: {} (expected {})",
            set.version,
            FORMAT_VERSION
        );
    }

    Ok(set)
}
