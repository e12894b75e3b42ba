//! Scenario tests for the cache core.
//!
//! Each test drives a full get/put sequence through the public API and
//! checks the resulting resident set, so they cover the cache/policy/order
//! wiring that unit tests exercise in isolation.

use swapcache::{Cache, EvictionPolicy};

fn resident_keys(cache: &Cache<u32, &str>) -> Vec<u32> {
    let mut keys: Vec<u32> = cache.keys().copied().collect();
    keys.sort_unstable();
    keys
}

/// LRU, capacity 3: a get protects a key, the untouched oldest is evicted.
#[test]
fn test_lru_get_protects_touched_key() {
    let mut cache = Cache::new(EvictionPolicy::Lru, 3).unwrap();
    cache.put(1, "A");
    cache.put(2, "B");
    cache.put(3, "C");

    assert_eq!(cache.get(&1), Some(&"A"));

    cache.put(4, "D"); // evicts 2, the oldest untouched key
    assert_eq!(resident_keys(&cache), vec![1, 3, 4]);
    assert_eq!(cache.get(&2), None);
}

/// MRU, capacity 2: the most recently touched key is the victim.
#[test]
fn test_mru_evicts_most_recent_touch() {
    let mut cache = Cache::new(EvictionPolicy::Mru, 2).unwrap();
    cache.put(1, "1");
    cache.put(2, "2");

    assert_eq!(cache.get(&1), Some(&"1")); // 1 becomes most recent

    cache.put(3, "3"); // evicts 1
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&3), Some(&"3"));
    assert_eq!(cache.get(&2), Some(&"2"));
}

/// Capacity 1: the second put evicts the first under both policies.
#[test]
fn test_capacity_one_single_slot() {
    for policy in [EvictionPolicy::Lru, EvictionPolicy::Mru] {
        let mut cache = Cache::new(policy, 1).unwrap();
        cache.put(1, "A");
        cache.put(2, "B");

        assert_eq!(cache.get(&1), None, "policy {policy}");
        assert_eq!(cache.get(&2), Some(&"B"), "policy {policy}");
        assert_eq!(cache.len(), 1);
    }
}

/// Repeated get-hits return the same value and never evict.
#[test]
fn test_idempotent_get() {
    let mut cache = Cache::new(EvictionPolicy::Lru, 2).unwrap();
    cache.put(1, "A");
    cache.put(2, "B");

    assert_eq!(cache.get(&1), Some(&"A"));
    assert_eq!(cache.get(&1), Some(&"A"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.stats().evictions, 0);
}

/// An update-put under MRU makes the updated key the eviction target.
#[test]
fn test_mru_update_counts_as_touch() {
    let mut cache = Cache::new(EvictionPolicy::Mru, 2).unwrap();
    cache.put(1, "a");
    cache.put(2, "b");

    cache.put(1, "a2"); // update: 1 moves to the newest end
    cache.put(3, "c"); // evicts 1

    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(&"b"));
    assert_eq!(cache.get(&3), Some(&"c"));
}

/// Interleaved gets and puts keep the LRU order consistent.
#[test]
fn test_lru_interleaved_workload() {
    let mut cache = Cache::new(EvictionPolicy::Lru, 3).unwrap();
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    cache.get(&2);
    cache.put(1, "a2"); // update is also a touch
    cache.put(4, "d"); // evicts 3, now the oldest

    assert_eq!(resident_keys(&cache), vec![1, 2, 4]);
    assert_eq!(cache.peek(&1), Some(&"a2"));

    cache.put(5, "e"); // evicts 2
    assert_eq!(resident_keys(&cache), vec![1, 4, 5]);
}

/// Stats counters line up with the operations performed.
#[test]
fn test_stats_accounting() {
    let mut cache = Cache::new(EvictionPolicy::Lru, 2).unwrap();
    cache.put(1, "a"); // insertion
    cache.put(2, "b"); // insertion
    cache.put(2, "b2"); // update
    cache.put(3, "c"); // insertion + eviction of 1
    cache.get(&2); // hit
    cache.get(&1); // miss (evicted)

    let stats = cache.stats();
    assert_eq!(stats.insertions, 3);
    assert_eq!(stats.updates, 1);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hit_rate(), 0.5);
}

/// The two policies diverge on the same workload exactly where they should.
#[test]
fn test_policies_diverge_on_shared_workload() {
    let mut lru = Cache::new(EvictionPolicy::Lru, 3).unwrap();
    let mut mru = Cache::new(EvictionPolicy::Mru, 3).unwrap();

    for cache in [&mut lru, &mut mru] {
        cache.put(1, "A");
        cache.put(2, "B");
        cache.put(3, "C");
        cache.get(&1);
        cache.put(4, "D");
    }

    // LRU protects the touched key 1 and evicts 2; MRU evicts 1 for the
    // same touch.
    assert_eq!(resident_keys(&lru), vec![1, 3, 4]);
    assert_eq!(resident_keys(&mru), vec![2, 3, 4]);
}
