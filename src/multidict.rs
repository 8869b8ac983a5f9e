use std::collections::HashMap;

/// Append-only multimap from a hash key to every value inserted under it.
///
/// Values under one key keep their insertion order, which makes tie-breaking
/// between equal-hash windows reproducible. Lookups of unknown keys yield an
/// empty slice, never an error. The table is only ever probed by key; its
/// internal iteration order is never observed, so output stays deterministic.
pub struct Multidict<V> {
    entries: HashMap<u64, Vec<V>>,
}

impl<V> Multidict<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append `value` to the list associated with `key`, creating the list
    /// if the key has not been seen before.
    pub fn put(&mut self, key: u64, value: V) {
        self.entries.entry(key).or_default().push(value);
    }

    /// All values ever put under `key`, oldest first; empty for unknown keys.
    pub fn get(&self, key: u64) -> &[V] {
        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}
