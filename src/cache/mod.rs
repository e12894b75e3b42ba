//! The cache core and its eviction policies.
//!
//! # Components
//! - [`Cache`] - the fixed-capacity get/put skeleton
//! - [`EvictionPolicy`] - the LRU | MRU decision table
//! - [`CacheStats`] - hit/miss/eviction counters

#[allow(clippy::module_inception)]
mod cache;
mod policy;
mod stats;

pub use cache::Cache;
pub use policy::EvictionPolicy;
pub use stats::CacheStats;
