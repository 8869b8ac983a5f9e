use crate::match_format::Match;
use crate::multidict::Multidict;
use crate::windows::{SampledWindowHashes, Window, WindowHashes};
use crate::ParamError;

/// One window of sequence A held in the probe index.
struct IndexedWindow {
    pos: u64,
    content: Box<[u8]>,
}

/// Lazy stream of the exact k-length agreements between two sequences.
///
/// Built by [`find_exact_submatches`]: every m-th window of A is indexed by
/// rolling hash up front, then the dense windows of B are probed against the
/// index one at a time. A hash hit alone is never reported — the window
/// contents are compared literally first, so collisions stay invisible.
///
/// Matches come out in B-scan order; several A windows matching one B window
/// come out in A-position order. Dropping the iterator early abandons the
/// rest of the scan and the index with it.
pub struct ExactSubmatches<I> {
    index: Multidict<IndexedWindow>,
    indexed: usize,
    b_windows: WindowHashes<I>,
    /// Current B window plus the next candidate slot in its hash bucket.
    probe: Option<(Window, usize)>,
}

/// Find the position pairs at which `a` and `b` carry an identical k-symbol
/// window, comparing every window of `b` against every m-th window of `a`.
///
/// The index pass over `a` runs eagerly here, holding O(|a|/m) windows;
/// `b` is not touched until the returned stream is iterated. Only windows of
/// `a` at positions divisible by `m` can ever be reported — matches that
/// exist solely at unsampled positions are traded away for the memory bound.
///
/// Fails fast with [`ParamError`] on k = 0 or m < k, before consuming
/// anything from either stream.
pub fn find_exact_submatches<A, B>(
    a: A,
    b: B,
    k: usize,
    m: usize,
) -> Result<ExactSubmatches<B>, ParamError>
where
    A: Iterator<Item = u8>,
    B: Iterator<Item = u8>,
{
    let sampled = SampledWindowHashes::new(a, k, m)?;
    let b_windows = WindowHashes::new(b, k)?;

    let mut index = Multidict::new();
    let mut indexed = 0;
    for window in sampled {
        index.put(
            window.hash,
            IndexedWindow {
                pos: window.pos,
                content: window.content,
            },
        );
        indexed += 1;
    }

    Ok(ExactSubmatches {
        index,
        indexed,
        b_windows,
        probe: None,
    })
}

impl<I> ExactSubmatches<I> {
    /// Number of windows of A held in the index.
    pub fn indexed_windows(&self) -> usize {
        self.indexed
    }
}

impl<I: Iterator<Item = u8>> Iterator for ExactSubmatches<I> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            // Finish the candidate bucket of the current B window first.
            if let Some((window, mut slot)) = self.probe.take() {
                let bucket = self.index.get(window.hash);
                while slot < bucket.len() {
                    let candidate = &bucket[slot];
                    slot += 1;
                    if candidate.content[..] == window.content[..] {
                        let found = Match {
                            pos_a: candidate.pos,
                            pos_b: window.pos,
                        };
                        self.probe = Some((window, slot));
                        return Some(found);
                    }
                }
            }
            let window = self.b_windows.next()?;
            self.probe = Some((window, 0));
        }
    }
}
