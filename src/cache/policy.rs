//! Eviction policies.
//!
//! A policy is a closed enum rather than a trait object: the cache core
//! dispatches on it with exhaustive matches, so adding a variant is a
//! compile-time checklist instead of a runtime surprise.

use std::fmt;

use crate::order::End;

/// Decides how the access order reacts to touches and which entry to
/// evict on overflow.
///
/// Both policies are expressed as answers to three questions about the
/// access order (oldest end ⟷ newest end):
///
/// | question                    | LRU    | MRU    |
/// |-----------------------------|--------|--------|
/// | touched key moves to...     | Newest | Newest |
/// | fresh insert lands at...    | Newest | Oldest |
/// | overflow victim sits at...  | Oldest | Newest |
///
/// The whole asymmetry between the two policies lives in this table;
/// the cache core itself has no per-policy branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Least-Recently-Used: evict the entry untouched for the longest time.
    Lru,

    /// Most-Recently-Used: evict the entry touched most recently.
    ///
    /// Useful for cyclic access patterns where the item just used is the
    /// one least likely to be needed again soon.
    Mru,
}

impl EvictionPolicy {
    /// End a key moves to after a get-hit or an update-put.
    ///
    /// Both policies promote a touched key to the newest end; they differ
    /// only in which end they evict from.
    pub fn touch_end(self) -> End {
        match self {
            EvictionPolicy::Lru => End::Newest,
            EvictionPolicy::Mru => End::Newest,
        }
    }

    /// End a freshly inserted key is placed at.
    ///
    /// Under MRU a fresh insert lands at the oldest end: it has not been
    /// "accessed" yet, so it must not become the immediate eviction
    /// victim ahead of a key that was explicitly touched.
    pub fn insertion_end(self) -> End {
        match self {
            EvictionPolicy::Lru => End::Newest,
            EvictionPolicy::Mru => End::Oldest,
        }
    }

    /// End holding the victim when the cache overflows.
    pub fn eviction_end(self) -> End {
        match self {
            EvictionPolicy::Lru => End::Oldest,
            EvictionPolicy::Mru => End::Newest,
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Lru => write!(f, "LRU"),
            EvictionPolicy::Mru => write!(f, "MRU"),
        }
    }
}
