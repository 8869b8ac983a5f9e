use crate::rolling_hash::RollingHash;
use crate::ParamError;

/// A k-length window captured from a symbol stream: its rolling hash, the
/// 0-based position of its first symbol, and a snapshot of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub hash: u64,
    pub pos: u64,
    pub content: Box<[u8]>,
}

/// Slides a k-length window across a symbol stream one symbol at a time,
/// emitting every window with its incrementally maintained hash.
///
/// Running out of input is completion, not an error: the stream ends cleanly
/// as soon as fewer than one more window's symbols remain, and an input
/// shorter than `k` produces no windows at all.
#[derive(Debug)]
pub struct WindowHashes<I> {
    symbols: I,
    k: usize,
    window: Vec<u8>,
    hasher: Option<RollingHash>,
    pos: u64,
}

impl<I: Iterator<Item = u8>> WindowHashes<I> {
    pub fn new(symbols: I, k: usize) -> Result<Self, ParamError> {
        if k == 0 {
            return Err(ParamError::ZeroWindowLen);
        }
        Ok(Self {
            symbols,
            k,
            window: Vec::with_capacity(k),
            hasher: None,
            pos: 0,
        })
    }
}

impl<I: Iterator<Item = u8>> Iterator for WindowHashes<I> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        match &mut self.hasher {
            // First window: buffer k symbols, then hash them once.
            None => {
                while self.window.len() < self.k {
                    self.window.push(self.symbols.next()?);
                }
                let hasher = RollingHash::new(&self.window);
                let hash = hasher.digest();
                self.hasher = Some(hasher);
                Some(Window {
                    hash,
                    pos: 0,
                    content: self.window.as_slice().into(),
                })
            }
            // Every later window: oldest symbol out, one new symbol in,
            // hash updated in O(1).
            Some(hasher) => {
                let added = self.symbols.next()?;
                let removed = self.window[0];
                self.window.copy_within(1.., 0);
                self.window[self.k - 1] = added;
                self.pos += 1;
                hasher.slide(removed, added);
                Some(Window {
                    hash: hasher.digest(),
                    pos: self.pos,
                    content: self.window.as_slice().into(),
                })
            }
        }
    }
}

/// Dense windowing with sampled emission: only windows whose position is a
/// multiple of `m` are yielded (position 0 included).
///
/// The window still slides one symbol at a time underneath, so the hash chain
/// stays continuous; sampling thins the output, not the computation. If the
/// stream ends before the next sampling boundary, iteration simply ends.
#[derive(Debug)]
pub struct SampledWindowHashes<I> {
    inner: WindowHashes<I>,
    m: u64,
}

impl<I: Iterator<Item = u8>> SampledWindowHashes<I> {
    pub fn new(symbols: I, k: usize, m: usize) -> Result<Self, ParamError> {
        let inner = WindowHashes::new(symbols, k)?;
        if m < k {
            return Err(ParamError::IntervalTooSmall { k, m });
        }
        Ok(Self { inner, m: m as u64 })
    }
}

impl<I: Iterator<Item = u8>> Iterator for SampledWindowHashes<I> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        loop {
            let window = self.inner.next()?;
            if window.pos % self.m == 0 {
                return Some(window);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(seq: &[u8], k: usize) -> Vec<Window> {
        WindowHashes::new(seq.iter().copied(), k)
            .unwrap()
            .collect()
    }

    fn sampled(seq: &[u8], k: usize, m: usize) -> Vec<Window> {
        SampledWindowHashes::new(seq.iter().copied(), k, m)
            .unwrap()
            .collect()
    }

    #[test]
    fn test_dense_emits_every_window_in_order() {
        let windows = dense(b"ACGTACGT", 3);
        assert_eq!(windows.len(), 6);
        for (i, w) in windows.iter().enumerate() {
            assert_eq!(w.pos, i as u64);
        }
        assert_eq!(&*windows[0].content, b"ACG");
        assert_eq!(&*windows[3].content, b"TAC");
        assert_eq!(&*windows[5].content, b"CGT");
    }

    #[test]
    fn test_dense_window_count() {
        assert_eq!(dense(b"ACGTAC", 4).len(), 3);
        assert_eq!(dense(b"ACGT", 4).len(), 1);
        assert_eq!(dense(b"ACG", 4).len(), 0);
        assert_eq!(dense(b"", 1).len(), 0);
    }

    #[test]
    fn test_dense_hashes_match_fresh_computation() {
        for w in dense(b"GATTACACATTAGGTT", 5) {
            assert_eq!(w.hash, RollingHash::new(&w.content).digest());
        }
    }

    #[test]
    fn test_dense_rejects_zero_window_len() {
        let err = WindowHashes::new(b"ACGT".iter().copied(), 0).unwrap_err();
        assert_eq!(err, ParamError::ZeroWindowLen);
    }

    #[test]
    fn test_dense_stays_exhausted() {
        let mut windows = WindowHashes::new(b"ACG".iter().copied(), 2).unwrap();
        assert!(windows.next().is_some());
        assert!(windows.next().is_some());
        assert!(windows.next().is_none());
        assert!(windows.next().is_none());
    }

    #[test]
    fn test_sampled_is_subsequence_of_dense() {
        let seq = b"ACGTACGTACG";
        let expected: Vec<Window> = dense(seq, 3)
            .into_iter()
            .filter(|w| w.pos % 4 == 0)
            .collect();
        assert_eq!(sampled(seq, 3, 4), expected);
        assert_eq!(
            expected.iter().map(|w| w.pos).collect::<Vec<_>>(),
            vec![0, 4, 8]
        );
    }

    #[test]
    fn test_sampled_never_emits_ragged_window() {
        // Dense windows stop at position 3; the next boundary (4) is never
        // reached, so only position 0 comes out.
        let windows = sampled(b"ACGTA", 2, 4);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].pos, 0);
        assert_eq!(&*windows[0].content, b"AC");
    }

    #[test]
    fn test_sampled_rejects_interval_below_window_len() {
        let err = SampledWindowHashes::new(b"ACGTACGT".iter().copied(), 4, 3).unwrap_err();
        assert_eq!(err, ParamError::IntervalTooSmall { k: 4, m: 3 });
    }

    #[test]
    fn test_sampled_short_input_is_empty() {
        assert!(sampled(b"AC", 3, 3).is_empty());
    }
}
