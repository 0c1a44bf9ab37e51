use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::SessionStore;
use crate::error::{Result, ScoutError};
use crate::filters::FilterConfig;

#[derive(Default)]
struct Inner {
    favorites: BTreeSet<u64>,
    filters: Option<FilterConfig>,
    fail_writes: bool,
}

/// In-memory session storage for testing. Clones share state, mirroring how
/// two `FileStore`s over the same directory see the same files.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for divergence tests.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    fn check_writable(&self) -> Result<()> {
        if self.inner.borrow().fail_writes {
            return Err(ScoutError::Store("write refused (test)".to_string()));
        }
        Ok(())
    }
}

impl SessionStore for InMemoryStore {
    fn load_favorites(&self) -> Result<BTreeSet<u64>> {
        Ok(self.inner.borrow().favorites.clone())
    }

    fn save_favorites(&mut self, favorites: &BTreeSet<u64>) -> Result<()> {
        self.check_writable()?;
        self.inner.borrow_mut().favorites = favorites.clone();
        Ok(())
    }

    fn load_filters(&self) -> Result<Option<FilterConfig>> {
        Ok(self.inner.borrow().filters.clone())
    }

    fn save_filters(&mut self, config: &FilterConfig) -> Result<()> {
        self.check_writable()?;
        self.inner.borrow_mut().filters = Some(config.clone());
        Ok(())
    }

    fn clear_filters(&mut self) -> Result<()> {
        self.check_writable()?;
        self.inner.borrow_mut().filters = None;
        Ok(())
    }
}
