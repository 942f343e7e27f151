//! Last-result memoization for calling layers
//!
//! The merge itself is a pure function; a hosting layer that re-renders with
//! the same uploads can hold a [`MergeCache`] to skip recomputation. The
//! cache keeps only the most recent batch.

use crate::pdf::merge::MergeResult;

/// Identity of an input batch: the ordered list of (name, size) pairs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchFingerprint(Vec<(String, u64)>);

impl BatchFingerprint {
    /// Build a fingerprint from (name, byte size) pairs in upload order
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        BatchFingerprint(
            files
                .into_iter()
                .map(|(name, size)| (name.into(), size))
                .collect(),
        )
    }
}

/// Memo of the last merge, keyed by batch fingerprint
#[derive(Debug, Default)]
pub struct MergeCache {
    last: Option<(BatchFingerprint, MergeResult)>,
}

impl MergeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result if it was produced from `fingerprint`
    pub fn get(&self, fingerprint: &BatchFingerprint) -> Option<&MergeResult> {
        match &self.last {
            Some((key, result)) if key == fingerprint => Some(result),
            _ => None,
        }
    }

    /// Store a result, replacing whatever was cached before
    pub fn store(&mut self, fingerprint: BatchFingerprint, result: MergeResult) {
        self.last = Some((fingerprint, result));
    }

    /// Drop the cached result
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_bytes(bytes: &[u8]) -> MergeResult {
        MergeResult {
            bytes: bytes.to_vec(),
            order: Vec::new(),
        }
    }

    #[test]
    fn test_cache_hit_on_same_batch() {
        let mut cache = MergeCache::new();
        let key = BatchFingerprint::new([("a (1).pdf", 100u64), ("b (2).pdf", 200)]);

        cache.store(key.clone(), result_with_bytes(b"merged"));

        let hit = cache.get(&key).expect("same fingerprint should hit");
        assert_eq!(hit.bytes, b"merged");
    }

    #[test]
    fn test_cache_miss_on_changed_batch() {
        let mut cache = MergeCache::new();
        let key = BatchFingerprint::new([("a (1).pdf", 100u64)]);
        cache.store(key, result_with_bytes(b"merged"));

        // Same name, different size
        let changed = BatchFingerprint::new([("a (1).pdf", 101u64)]);
        assert!(cache.get(&changed).is_none());

        // Same files, different upload order
        let key_ab = BatchFingerprint::new([("a.pdf", 1u64), ("b.pdf", 2)]);
        let key_ba = BatchFingerprint::new([("b.pdf", 2u64), ("a.pdf", 1)]);
        cache.store(key_ab, result_with_bytes(b"ab"));
        assert!(cache.get(&key_ba).is_none());
    }

    #[test]
    fn test_cache_keeps_only_last_result() {
        let mut cache = MergeCache::new();
        let first = BatchFingerprint::new([("a.pdf", 1u64)]);
        let second = BatchFingerprint::new([("b.pdf", 2u64)]);

        cache.store(first.clone(), result_with_bytes(b"first"));
        cache.store(second.clone(), result_with_bytes(b"second"));

        assert!(cache.get(&first).is_none());
        assert_eq!(cache.get(&second).unwrap().bytes, b"second");

        cache.clear();
        assert!(cache.get(&second).is_none());
    }
}
