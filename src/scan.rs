use anyhow::{Context, Result};
use memmap2::Mmap;
use std::path::Path;

use crate::fasta::{self, FastaSymbols};
use crate::match_format::{self, MatchSet, SequenceInfo, FORMAT_VERSION};
use crate::submatch;
use crate::util;

pub struct ScanSummary {
    pub symbols_a: u64,
    pub symbols_b: u64,
    pub windows_indexed: usize,
    pub matches: usize,
}

struct LoadedSequence {
    map: Mmap,
    info: SequenceInfo,
}

/// mmap one input file and record its metadata: display name (first FASTA
/// record id, else file name), symbol count, and BLAKE3 digest of the raw
/// bytes.
fn load_sequence(path: &Path) -> Result<LoadedSequence> {
    let map = util::mmap_file(path)?;
    let digest = util::hash_bytes(&map);
    let name = fasta::first_record_id(&map).unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });
    let symbols = FastaSymbols::new(&map).count() as u64;

    Ok(LoadedSequence {
        map,
        info: SequenceInfo {
            name,
            symbols,
            blake3_digest: digest,
        },
    })
}

/// Scan two FASTA files for exact k-length submatches and persist the
/// result to `output`.
///
/// The two inputs are loaded and digested concurrently; the match pipeline
/// itself is single-threaded and runs off the async runtime. Only every
/// m-th window of `seq_a` is indexed, so matches that exist solely at
/// unsampled A positions are not reported.
pub async fn scan_sequences(
    seq_a: &Path,
    seq_b: &Path,
    k: usize,
    m: usize,
    output: &Path,
) -> Result<ScanSummary> {
    let a_path = seq_a.to_path_buf();
    let b_path = seq_b.to_path_buf();

    let (a, b) = tokio::try_join!(
        tokio::task::spawn_blocking(move || load_sequence(&a_path)),
        tokio::task::spawn_blocking(move || load_sequence(&b_path)),
    )?;
    let a = a?;
    let b = b?;

    let (set, windows_indexed) =
        tokio::task::spawn_blocking(move || -> Result<(MatchSet, usize)> {
            let LoadedSequence {
                map: map_a,
                info: info_a,
            } = a;
            let LoadedSequence {
                map: map_b,
                info: info_b,
            } = b;

            let finder = submatch::find_exact_submatches(
                FastaSymbols::new(&map_a),
                FastaSymbols::new(&map_b),
                k,
                m,
            )?;
            let windows_indexed = finder.indexed_windows();
            let matches = finder.collect();

            Ok((
                MatchSet {
                    version: FORMAT_VERSION,
                    k: k as u32,
                    m: m as u64,
                    seq_a: info_a,
                    seq_b: info_b,
                    matches,
                },
                windows_indexed,
            ))
        })
        .await
        .context("Match scan task failed")??;

    match_format::write_match_set(output, &set)?;

    Ok(ScanSummary {
        symbols_a: set.seq_a.symbols,
        symbols_b: set.seq_b.symbols,
        windows_indexed,
        matches: set.matches.len(),
    })
}
