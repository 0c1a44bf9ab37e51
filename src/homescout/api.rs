//! # API Facade
//!
//! Single entry point for all homescout operations, regardless of the UI in
//! front of it. The facade wires the gateway and the two session services
//! together and dispatches to the command layer.
//!
//! The facade does no business logic (that lives in `commands/*.rs`), no I/O
//! of its own, and no presentation. It returns structured `CmdResult` values
//! for the caller to render.
//!
//! `HomescoutApi<G, S>` is generic over the data source and the session
//! store. Production runs `HomescoutApi<DemoGateway, FileStore>`; tests swap
//! in `InMemoryStore` and never touch the filesystem.

use crate::commands;
use crate::error::Result;
use crate::favorites::Favorites;
use crate::filters::FilterState;
use crate::gateway::ListingGateway;
use crate::store::SessionStore;

pub struct HomescoutApi<G: ListingGateway, S: SessionStore> {
    gateway: G,
    favorites: Favorites<S>,
    filters: FilterState<S>,
}

impl<G: ListingGateway, S: SessionStore> HomescoutApi<G, S> {
    /// Build the facade, loading both session services from their store.
    pub fn new(gateway: G, favorites_store: S, filters_store: S) -> Result<Self> {
        Ok(Self {
            gateway,
            favorites: Favorites::load(favorites_store)?,
            filters: FilterState::load(filters_store)?,
        })
    }

    /// Browse listings through the saved filters, optionally narrowed by a
    /// search term.
    pub fn browse(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::browse::run(&self.gateway, &self.favorites, self.filters.get(), search)
    }

    pub fn view(&self, id: u64) -> Result<commands::CmdResult> {
        commands::view::run(&self.gateway, &self.favorites, id)
    }

    pub fn toggle_favorite(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&self.gateway, &mut self.favorites, id)
    }

    pub fn favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.gateway, &self.favorites)
    }

    pub fn show_filters(&self) -> Result<commands::CmdResult> {
        commands::filters::show(&self.filters)
    }

    pub fn set_filters(&mut self, assignments: &[(String, String)]) -> Result<commands::CmdResult> {
        commands::filters::set(&mut self.filters, assignments)
    }

    pub fn reset_filters(&mut self) -> Result<commands::CmdResult> {
        commands::filters::reset(&mut self.filters)
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.count()
    }
}

pub use commands::{CmdMessage, CmdResult, ListingView, MessageLevel};
