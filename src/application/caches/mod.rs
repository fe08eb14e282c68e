//! Per-run memoisation of the two expensive engine steps.
//!
//! Both caches live exactly as long as the engine that owns them; nothing is
//! persisted between runs.

mod identity_cache;
mod score_cache;

pub use identity_cache::IdentityCache;
pub use score_cache::ScoreCache;
