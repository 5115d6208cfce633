use log::warn;

use super::summary::DistributionSummary;
use super::{HashStrategy, TableError};

const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// One link in a bucket chain. The bucket slot owns the head and every
/// node owns its successor.
#[derive(Debug)]
struct Entry {
    key: String,
    next: Option<Box<Entry>>,
}

/// Separate-chaining hash table over string keys, parameterized by the
/// hash strategy that maps keys to bucket indices.
///
/// Duplicate keys are kept (multiset semantics) and keys are never
/// removed individually; the table only ever grows. Collisions are
/// counted per insertion that lands on a non-empty bucket.
#[derive(Debug)]
pub struct HashTable<S> {
    buckets: Vec<Option<Box<Entry>>>,
    size: usize,
    collision_count: usize,
    load_factor: f64,
    strategy: S,
}

impl<S: HashStrategy> HashTable<S> {
    /// Creates an empty table with `initial_capacity` buckets.
    pub fn new(initial_capacity: usize, strategy: S) -> Result<Self, TableError> {
        if initial_capacity == 0 {
            return Err(TableError::InvalidCapacity {
                got: initial_capacity,
            });
        }
        Ok(Self {
            buckets: (0..initial_capacity).map(|_| None).collect(),
            size: 0,
            collision_count: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
            strategy,
        })
    }

    /// Number of keys in the table, duplicates included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of buckets, or "slots" of the table.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Insertions so far that landed on a non-empty bucket. Recomputed
    /// from scratch whenever the table grows.
    pub fn collision_count(&self) -> usize {
        self.collision_count
    }

    /// Growth threshold as a size/capacity ratio.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Inserts a key, growing the table first if the insertion would push
    /// the load past the threshold.
    ///
    /// `None` marks an absent key from the caller's input; it is ignored
    /// with a warning rather than treated as a failure. Passing a `&str`
    /// never fails.
    pub fn insert<'a>(&mut self, key: impl Into<Option<&'a str>>) {
        let Some(key) = key.into() else {
            warn!("ignoring insert of absent key");
            return;
        };
        self.insert_owned(key.to_owned());
    }

    fn insert_owned(&mut self, key: String) {
        // Growth must happen before the index is computed, the index
        // depends on the post-growth capacity.
        if (self.size + 1) as f64 / self.capacity() as f64 > self.load_factor {
            self.grow();
        }

        let i = self.bucket_index(&key);
        if self.buckets[i].is_some() {
            self.collision_count += 1;
        }

        // Walk to the tail slot so insertion order inside a chain is
        // preserved.
        let mut slot = &mut self.buckets[i];
        while let Some(entry) = slot {
            slot = &mut entry.next;
        }
        *slot = Some(Box::new(Entry { key, next: None }));
        self.size += 1;
    }

    /// Returns whether `key` is present. Walks the chain at the key's
    /// bucket; never mutates the table.
    pub fn search(&self, key: &str) -> bool {
        let i = self.bucket_index(key);
        let mut current = self.buckets[i].as_deref();
        while let Some(entry) = current {
            if entry.key == key {
                return true;
            }
            current = entry.next.as_deref();
        }
        false
    }

    /// Per-bucket chain lengths, in bucket order. Basis for the
    /// distribution and clustering reports.
    pub fn bucket_key_counts(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|bucket| {
                let mut count = 0;
                let mut current = bucket.as_deref();
                while let Some(entry) = current {
                    count += 1;
                    current = entry.next.as_deref();
                }
                count
            })
            .collect()
    }

    /// Single read-only pass over the buckets.
    pub fn distribution_summary(&self) -> DistributionSummary {
        let mut occupied_positions = 0;
        let mut max_keys_in_bucket = 0;
        for count in self.bucket_key_counts() {
            if count > 0 {
                occupied_positions += 1;
            }
            if count > max_keys_in_bucket {
                max_keys_in_bucket = count;
            }
        }
        DistributionSummary::new(
            self.capacity(),
            occupied_positions,
            max_keys_in_bucket,
            self.size,
        )
    }

    /// Empties the table while keeping the current (possibly grown)
    /// capacity, so a benchmark can be re-run on a warmed table without
    /// re-measuring growth cost.
    pub fn reset(&mut self) {
        let capacity = self.capacity();
        self.buckets = (0..capacity).map(|_| None).collect();
        self.size = 0;
        self.collision_count = 0;
    }

    // [private]

    /// Maps the strategy's hash to `[0, capacity)`.
    ///
    /// Uses a euclidean remainder so negative hashes index correctly; the
    /// widening to i64 keeps the most negative i32 out of trouble.
    fn bucket_index(&self, key: &str) -> usize {
        let hash = self.strategy.hash(key) as i64;
        hash.rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Grows the bucket array and re-inserts every key through the normal
    /// insert path, so `size` and `collision_count` are recomputed against
    /// the new capacity. Keys are re-inserted in bucket-index order, then
    /// chain order.
    fn grow(&mut self) {
        let new_capacity = next_capacity(self.capacity());
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| None).collect(),
        );
        self.size = 0;
        self.collision_count = 0;

        for head in old_buckets {
            let mut current = head;
            while let Some(mut entry) = current {
                current = entry.next.take();
                self.insert_owned(entry.key);
            }
        }
    }
}

/// Doubling, with fallbacks that guarantee strict growth for every
/// positive capacity.
fn next_capacity(old: usize) -> usize {
    let mut new = old.wrapping_mul(2);
    if new <= old {
        new = old.wrapping_add((old / 2).max(1));
    }
    if new <= old {
        new = old + 1;
    }
    new
}

#[cfg(test)]
mod test {
    use super::{HashTable, next_capacity};
    use crate::hashtable::{SumOfCodepoints, TableError, WellMixedStringHash};

    fn zero(_: &str) -> i32 {
        0
    }

    #[test]
    fn create_keeps_requested_capacity() {
        for cap in [1, 4, 32, 100] {
            let t = HashTable::new(cap, WellMixedStringHash).unwrap();
            assert_eq!(t.capacity(), cap);
            assert_eq!(t.len(), 0);
            assert!(t.is_empty());
            assert_eq!(t.collision_count(), 0);
            assert_eq!(t.load_factor(), 0.75);
        }
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = HashTable::new(0, WellMixedStringHash).unwrap_err();
        assert!(matches!(err, TableError::InvalidCapacity { got: 0 }));
    }

    #[test]
    fn chain_builds_in_one_bucket() {
        let mut t = HashTable::new(4, zero).unwrap();
        t.insert("ana");
        t.insert("bia");
        t.insert("cid");

        assert_eq!(t.len(), 3);
        assert_eq!(t.collision_count(), 2);
        assert_eq!(t.capacity(), 4);
        assert_eq!(t.bucket_key_counts(), vec![3, 0, 0, 0]);
        for key in ["ana", "bia", "cid"] {
            assert!(t.search(key));
        }
    }

    #[test]
    fn growth_triggers_on_fourth_insert() {
        let mut t = HashTable::new(4, zero).unwrap();
        for key in ["ana", "bia", "cid"] {
            t.insert(key);
        }
        // (3+1)/4 = 1.0 > 0.75, so the fourth insert grows first
        assert_eq!(t.capacity(), 4);
        t.insert("dee");

        assert_eq!(t.capacity(), 8);
        assert_eq!(t.len(), 4);
        // counters were recomputed against the new capacity: three keys
        // re-chained behind the head, then the fourth appended
        assert_eq!(t.collision_count(), 3);
        for key in ["ana", "bia", "cid", "dee"] {
            assert!(t.search(key));
        }
    }

    #[test]
    fn growth_preserves_every_key() {
        let mut t = HashTable::new(2, WellMixedStringHash).unwrap();
        let keys: Vec<String> = (0..100).map(|i| format!("key-{i}")).collect();
        for key in &keys {
            t.insert(key.as_str());
        }
        assert_eq!(t.len(), keys.len());
        assert!(t.capacity() > 2);
        for key in &keys {
            assert!(t.search(key));
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let mut t = HashTable::new(8, WellMixedStringHash).unwrap();
        t.insert("ana");
        t.insert("ana");
        t.insert("ana");
        assert_eq!(t.len(), 3);
        assert!(t.search("ana"));
        assert_eq!(t.distribution_summary().max_keys_in_bucket, 3);
    }

    #[test]
    fn search_is_read_only() {
        let mut t = HashTable::new(8, WellMixedStringHash).unwrap();
        t.insert("ana");
        t.insert("bia");
        let before = (t.len(), t.capacity(), t.collision_count());
        for _ in 0..10 {
            assert!(t.search("ana"));
            assert!(!t.search("zoe"));
        }
        assert_eq!((t.len(), t.capacity(), t.collision_count()), before);
    }

    #[test]
    fn absent_key_is_ignored() {
        let mut t = HashTable::new(4, WellMixedStringHash).unwrap();
        t.insert(None);
        assert_eq!(t.len(), 0);
        assert_eq!(t.collision_count(), 0);
    }

    #[test]
    fn anagrams_share_a_bucket_under_codepoint_sum() {
        let mut t = HashTable::new(8, SumOfCodepoints).unwrap();
        t.insert("ab");
        t.insert("ba");

        assert_eq!(t.collision_count(), 1);
        let counts = t.bucket_key_counts();
        assert_eq!(counts.iter().filter(|&&c| c > 0).count(), 1);
        assert_eq!(counts.iter().max().copied(), Some(2));
    }

    #[test]
    fn summary_reflects_table_state() {
        let mut t = HashTable::new(8, WellMixedStringHash).unwrap();
        for key in ["ana", "bia", "cid", "dee"] {
            t.insert(key);
        }
        let s = t.distribution_summary();
        assert_eq!(s.final_capacity, t.capacity());
        assert_eq!(s.total_elements, t.len());
        assert!(s.occupied_positions >= 1);
        assert!(s.occupied_positions <= t.capacity().min(t.len()));
        assert!(s.max_keys_in_bucket >= t.len().div_ceil(s.occupied_positions));
        let expected = s.occupied_positions as f64 / s.final_capacity as f64 * 100.0;
        assert!((s.occupied_percentage - expected).abs() < 1e-9);
    }

    #[test]
    fn reset_keeps_grown_capacity() {
        let mut t = HashTable::new(4, zero).unwrap();
        for key in ["ana", "bia", "cid", "dee", "eva"] {
            t.insert(key);
        }
        let grown = t.capacity();
        assert!(grown > 4);

        t.reset();
        assert_eq!(t.len(), 0);
        assert_eq!(t.collision_count(), 0);
        assert_eq!(t.capacity(), grown);
        assert!(!t.search("ana"));
    }

    #[test]
    fn negative_hashes_index_in_range() {
        let mut t = HashTable::new(4, |_: &str| -7).unwrap();
        t.insert("ana");
        assert!(t.search("ana"));
        // -7 rem_euclid 4 == 1
        assert_eq!(t.bucket_key_counts()[1], 1);
    }

    #[test]
    fn most_negative_hash_is_normalized() {
        let mut t = HashTable::new(3, |_: &str| i32::MIN).unwrap();
        t.insert("ana");
        assert!(t.search("ana"));
        assert_eq!(t.bucket_key_counts().iter().sum::<usize>(), 1);
    }

    #[test]
    fn capacity_growth_always_makes_progress() {
        for old in [1usize, 2, 3, 4, 32, 1000] {
            assert!(next_capacity(old) > old);
        }
        assert_eq!(next_capacity(4), 8);
        assert_eq!(next_capacity(1), 2);
    }
}
