//! Caching utilities.

pub mod timed_cache;

pub use timed_cache::TimedCache;
