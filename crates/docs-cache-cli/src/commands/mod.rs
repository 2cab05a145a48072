//! Command implementations for the docs-cache CLI

mod cache;

pub use cache::{CacheOutcome, CacheRequest, execute_cache};
