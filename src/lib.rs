//! swapcache - a fixed-capacity key/value cache with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        swapcache                          │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │              Cache Core (cache/)                    │  │
//! │  │   get/put skeleton + overflow detection + stats     │  │
//! │  │  ┌───────────────────────────────────────────────┐  │  │
//! │  │  │  Eviction Policies: LRU | MRU                 │  │  │
//! │  │  │  (a table of ends: touch / insert / evict)    │  │  │
//! │  │  └───────────────────────────────────────────────┘  │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │          Ordering Substrate (order/)                │  │
//! │  │   OrderedMap: HashMap index + arena linked list     │  │
//! │  │   O(1) insert / lookup / move-to-end / pop-end      │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Error types and the crate `Result` alias
//! - [`order`] - The shared access-ordering substrate
//! - [`cache`] - The cache core, policies, and statistics
//!
//! # Quick Start
//! ```
//! use swapcache::{Cache, EvictionPolicy};
//!
//! let mut cache = Cache::new(EvictionPolicy::Lru, 3)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.get(&"z"), None); // a miss, not an error
//! # Ok::<(), swapcache::Error>(())
//! ```

pub mod cache;
pub mod common;
pub mod order;

// Re-export commonly used items at crate root for convenience
pub use cache::{Cache, CacheStats, EvictionPolicy};
pub use common::{Error, Result};
pub use order::{End, OrderedMap};
