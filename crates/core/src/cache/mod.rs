//! Memoization with explicit invalidation.

mod memo_cache;

pub use memo_cache::MemoCache;
