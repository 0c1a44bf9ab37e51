use crate::commands::{CmdMessage, CmdResult, ListingView};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::filters::FilterConfig;
use crate::gateway::ListingGateway;
use crate::query;
use crate::store::SessionStore;

/// Fetch all listings, run the query pipeline over them, and mark each
/// result with its favorite flag.
pub fn run<G: ListingGateway, S: SessionStore>(
    gateway: &G,
    favorites: &Favorites<S>,
    config: &FilterConfig,
    search: Option<&str>,
) -> Result<CmdResult> {
    let listings = gateway.fetch_all()?;
    let total = listings.len();
    let matched = query::evaluate(&listings, search, config);

    let mut result = CmdResult::default();
    if matched.is_empty() && (config.has_active() || search.is_some()) {
        result.add_message(CmdMessage::info(format!(
            "No listings match ({} available).",
            total
        )));
    }

    let views = matched
        .into_iter()
        .map(|listing| {
            let favorite = favorites.is_favorite(listing.id);
            ListingView { listing, favorite }
        })
        .collect();

    Ok(result.with_listings(views).with_config(config.clone()))
}
