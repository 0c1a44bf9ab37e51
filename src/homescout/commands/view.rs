use crate::commands::{CmdResult, ListingView};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::gateway::ListingGateway;
use crate::store::SessionStore;

/// Fetch a single listing by id for detail display.
pub fn run<G: ListingGateway, S: SessionStore>(
    gateway: &G,
    favorites: &Favorites<S>,
    id: u64,
) -> Result<CmdResult> {
    let listing = gateway.fetch_by_id(id)?;
    let favorite = favorites.is_favorite(listing.id);
    Ok(CmdResult::default().with_listings(vec![ListingView { listing, favorite }]))
}
