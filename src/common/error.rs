//! Error types for swapcache.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in swapcache.
///
/// By having a single error type, error handling stays consistent across
/// the crate. Only [`Error::InvalidCapacity`] is reachable through the
/// public [`Cache`](crate::Cache) API; the other variants signal internal
/// contract breaches between the cache core and the ordering substrate,
/// and a correct caller never observes them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with a capacity below the minimum of 1.
    ///
    /// A zero-capacity cache could never hold an entry, so construction
    /// rejects it up front.
    #[error("cache capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// An ordering operation was asked to relocate a key that was never
    /// inserted into the map.
    ///
    /// This indicates a bug in the cache/policy wiring - the cache must
    /// insert a key before positioning it in the access order.
    #[error("key is not resident in the access order")]
    KeyNotResident,

    /// An eviction was requested from a structure with no entries.
    ///
    /// Unreachable through the cache API: eviction only fires when the
    /// entry count exceeds capacity, and capacity is at least 1.
    #[error("cannot remove an entry from an empty cache")]
    EmptyCache,
}
