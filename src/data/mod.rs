//! Data acquisition: the search API client and the page cache.

pub mod cache;
pub mod hh;

pub use cache::*;
pub use hh::*;
