//! The cache core - the shared get/put skeleton.
//!
//! [`Cache`] owns the capacity, the [`OrderedMap`], and the active
//! [`EvictionPolicy`]. It implements the common lookup/insert/overflow
//! skeleton and delegates every ordering decision to the policy's end
//! table, so both policies share one hot path.

use std::hash::Hash;

use crate::cache::{CacheStats, EvictionPolicy};
use crate::common::{Error, Result};
use crate::order::{Keys, OrderedMap};

/// A fixed-capacity key/value cache with a swappable eviction policy.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │                          Cache                             │
/// │  ┌────────────┐  ┌─────────────────┐  ┌────────────────┐   │
/// │  │  capacity  │  │ OrderedMap<K,V> │  │ EvictionPolicy │   │
/// │  │  (fixed)   │  │ map + order     │  │   Lru | Mru    │   │
/// │  └────────────┘  └─────────────────┘  └────────────────┘   │
/// │                  ┌────────────┐                            │
/// │                  │ CacheStats │                            │
/// │                  └────────────┘                            │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// Every get-hit and put repositions the touched key per the policy;
/// when a put pushes the entry count past capacity, exactly one entry is
/// evicted from the policy's victim end. Eviction is a normal, silent
/// side effect, visible only through [`stats`](Cache::stats).
///
/// # Thread Safety
/// Not internally synchronized. All mutating operations take `&mut self`,
/// so the borrow checker enforces exclusive access; sharing across
/// threads is the owner's concern (wrap in a lock or confine to one
/// worker).
///
/// # Example
/// ```
/// use swapcache::{Cache, EvictionPolicy};
///
/// let mut cache = Cache::new(EvictionPolicy::Lru, 2).unwrap();
/// cache.put(1, "one");
/// cache.put(2, "two");
/// cache.get(&1);            // 1 is now most recently touched
/// cache.put(3, "three");    // evicts 2, the least recently touched
///
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.get(&1), Some(&"one"));
/// ```
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Key/value storage plus the access order.
    map: OrderedMap<K, V>,

    /// Active eviction policy (immutable after construction).
    policy: EvictionPolicy,

    /// Maximum number of resident entries (immutable after construction).
    capacity: usize,

    /// Hit/miss/eviction counters.
    stats: CacheStats,
}

impl<K: Eq + Hash + Clone, V> Cache<K, V> {
    /// Create a cache with the given policy and capacity.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`] if `capacity` is 0.
    pub fn new(policy: EvictionPolicy, capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: OrderedMap::with_capacity(capacity),
            policy,
            capacity,
            stats: CacheStats::new(),
        })
    }

    // ========================================================================
    // Public API: get / put
    // ========================================================================

    /// Look up `key`, promoting it per the active policy on a hit.
    ///
    /// A miss is a normal outcome, not an error: it returns `None` and
    /// leaves the entries and their order untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.map.contains(key) {
            self.stats.misses += 1;
            return None;
        }

        self.stats.hits += 1;
        self.map
            .move_to_end(key, self.policy.touch_end())
            .expect("touched key was checked resident");
        self.map.get(key)
    }

    /// Insert or update an entry, evicting one entry if capacity is
    /// exceeded.
    ///
    /// A new key is placed at the policy's insertion end; an existing key
    /// is repositioned at the policy's touch end and its value replaced.
    /// When the put pushes the entry count past capacity, the entry at
    /// the policy's victim end is removed - exactly one eviction per
    /// overflowing put, with no error raised.
    pub fn put(&mut self, key: K, value: V) {
        // Insert-vs-update decides both the counter and the placement end.
        let inserted = self.map.insert_or_update(key.clone(), value);

        let end = if inserted {
            self.stats.insertions += 1;
            self.policy.insertion_end()
        } else {
            self.stats.updates += 1;
            self.policy.touch_end()
        };
        self.map
            .move_to_end(&key, end)
            .expect("just-written key is resident");

        if self.map.len() > self.capacity {
            // len > capacity >= 1 guarantees a victim exists.
            self.map
                .remove_end(self.policy.eviction_end())
                .expect("overflowing cache holds at least one entry");
            self.stats.evictions += 1;
        }
    }

    // ========================================================================
    // Public API: introspection (no side effects)
    // ========================================================================

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The active eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Membership check without touching the access order.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains(key)
    }

    /// Read a value without promoting it - the access order is untouched
    /// and no counter moves.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Iterate over resident keys from the oldest-touched end to the
    /// newest-touched end.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.map.keys()
    }

    /// Counters accumulated since construction (or the last reset).
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }
}
