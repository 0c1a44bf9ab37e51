//! # Session Storage Layer
//!
//! This module defines the persistence abstraction for homescout's two
//! independent state concerns. The [`SessionStore`] trait allows the state
//! services to work with different storage backends.
//!
//! ## Two Concerns, One Trait
//!
//! - **Favorites**: the favorited-listing id set. Durable; survives process
//!   restarts.
//! - **Filter config**: the last-used filter/sort configuration. Scoped to a
//!   user session; may survive a restart but is not required to.
//!
//! The two concerns have independent lifecycles: clearing the filter config
//! never touches favorites, and a favorite id may outlive the listing it
//! refers to (no automatic cleanup).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Favorites in `favorites.json`
//!   - Filter config in `session-filters.json`
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Consistency Contract
//!
//! Writes are synchronous: when a `save_*` call returns `Ok`, the data is on
//! storage. The state services rely on this to keep their caches and storage
//! from diverging (they persist first and only then mutate memory).

use std::collections::BTreeSet;

use crate::error::Result;
use crate::filters::FilterConfig;

pub mod fs;
pub mod memory;

/// Abstract interface for session storage.
pub trait SessionStore {
    /// Load the favorite-listing id set. Missing state reads as empty.
    fn load_favorites(&self) -> Result<BTreeSet<u64>>;

    /// Replace the favorite-listing id set.
    fn save_favorites(&mut self, favorites: &BTreeSet<u64>) -> Result<()>;

    /// Load the last-used filter configuration, if any was saved.
    fn load_filters(&self) -> Result<Option<FilterConfig>>;

    /// Replace the saved filter configuration.
    fn save_filters(&mut self, config: &FilterConfig) -> Result<()>;

    /// Remove the saved filter configuration. A no-op when nothing is saved.
    fn clear_filters(&mut self) -> Result<()>;
}
