use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

use crate::match_format::{self, MatchSet, SequenceInfo};
use crate::util;

pub struct PlotSummary {
    pub matches: usize,
    pub occupied_bins: usize,
    pub width: usize,
    pub height: usize,
}

/// Bin a match set onto a width x height grayscale raster: sequence A runs
/// along x, sequence B along y, 0 (black) where at least one match lands in
/// a bin and 255 (white) elsewhere. Row-major, one byte per pixel.
pub fn rasterize(set: &MatchSet, width: usize, height: usize) -> Vec<u8> {
    // Positions are strictly below the symbol counts whenever a match
    // exists; the clamp only matters for empty inputs, which have no
    // matches to bin anyway.
    let len_a = set.seq_a.symbols.max(1);
    let len_b = set.seq_b.symbols.max(1);

    let occupied = set
        .matches
        .par_iter()
        .fold(
            || vec![false; width * height],
            |mut grid, m| {
                let x = (m.pos_a * width as u64 / len_a) as usize;
                let y = (m.pos_b * height as u64 / len_b) as usize;
                grid[y * width + x] = true;
                grid
            },
        )
        .reduce(
            || vec![false; width * height],
            |mut left, right| {
                for (dst, src) in left.iter_mut().zip(&right) {
                    *dst |= *src;
                }
                left
            },
        );

    occupied
        .into_iter()
        .map(|hit| if hit { 0u8 } else { 255 })
        .collect()
}

/// Compare a sequence file's digest against what the scan recorded.
fn verify_digest(path: Option<&Path>, info: &SequenceInfo) -> Result<()> {
    let Some(path) = path else { return Ok(()) };
    let map = util::mmap_file(path)?;
    if util::hash_bytes(&map) != info.blake3_digest {
        bail!(
            "Digest mismatch: {} is not the '{}' that was scanned",
            path.display(),
            info.name
        );
    }
    Ok(())
}

/// Read a match file and render it as a binary PGM (P5) dot plot.
///
/// When `seq_a`/`seq_b` paths are given, their BLAKE3 digests are
/// re-verified against the ones recorded at scan time before anything is
/// drawn.
pub fn render_plot(
    matches_path: &Path,
    output: &Path,
    width: usize,
    height: usize,
    seq_a: Option<&Path>,
    seq_b: Option<&Path>,
) -> Result<PlotSummary> {
    if width == 0 || height == 0 {
        bail!("Plot dimensions must be at least 1x1 ({}x{})", width, height);
    }

    let set = match_format::read_match_set(matches_path)?;

    let (verify_a, verify_b) = rayon::join(
        || verify_digest(seq_a, &set.seq_a),
        || verify_digest(seq_b, &set.seq_b),
    );
    verify_a?;
    verify_b?;

    let pixels = rasterize(&set, width, height);
    let occupied_bins = pixels.iter().filter(|&&p| p == 0).count();

    let mut file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create plot file: {}", output.display()))?;
    write!(file, "P5\n{} {}\n255\n", width, height)?;
    file.write_all(&pixels)?;
    file.flush()?;

    Ok(PlotSummary {
        matches: set.matches.len(),
        occupied_bins,
        width,
        height,
    })
}
