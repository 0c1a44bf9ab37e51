use crate::commands::{CmdMessage, CmdResult, ListingView};
use crate::error::{Result, ScoutError};
use crate::favorites::Favorites;
use crate::gateway::ListingGateway;
use crate::store::SessionStore;

/// Flip favorite membership for a listing id. Adding requires the listing to
/// exist in the data source, so a typo does not pollute the saved set.
/// Removing an id already in the set works even when the listing is gone.
pub fn toggle<G: ListingGateway, S: SessionStore>(
    gateway: &G,
    favorites: &mut Favorites<S>,
    id: u64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match gateway.fetch_by_id(id) {
        Ok(listing) => {
            let added = favorites.toggle(id)?;
            let message = if added {
                CmdMessage::success(format!("Saved \"{}\" to favorites", listing.title))
            } else {
                CmdMessage::success(format!("Removed \"{}\" from favorites", listing.title))
            };
            result.add_message(message);
            let favorite = favorites.is_favorite(id);
            Ok(result.with_listings(vec![ListingView { listing, favorite }]))
        }
        Err(ScoutError::ListingNotFound(_)) if favorites.is_favorite(id) => {
            favorites.toggle(id)?;
            result.add_message(CmdMessage::success(format!(
                "Removed listing {} from favorites (no longer available)",
                id
            )));
            Ok(result)
        }
        Err(err) => Err(err),
    }
}

/// List the favorited listings. Favorite ids survive listing deletion; ids
/// with no matching listing are reported, not dropped.
pub fn list<G: ListingGateway, S: SessionStore>(
    gateway: &G,
    favorites: &Favorites<S>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut views = Vec::new();
    for &id in favorites.ids() {
        match gateway.fetch_by_id(id) {
            Ok(listing) => views.push(ListingView {
                listing,
                favorite: true,
            }),
            Err(ScoutError::ListingNotFound(_)) => {
                result.add_message(CmdMessage::warning(format!(
                    "Favorite listing {} is no longer available",
                    id
                )));
            }
            Err(err) => return Err(err),
        }
    }
    if views.is_empty() && favorites.count() == 0 {
        result.add_message(CmdMessage::info("No favorites saved yet."));
    }
    Ok(result.with_listings(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::gateway::demo::DemoGateway;
    use crate::gateway::ListingGateway;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn toggle_reports_the_new_state() {
        let gateway = DemoGateway::new();
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        let id = gateway.fetch_all().unwrap()[0].id;

        let result = toggle(&gateway, &mut favorites, id).unwrap();
        assert!(result.listings[0].favorite);
        assert!(result.messages[0].content.starts_with("Saved"));

        let result = toggle(&gateway, &mut favorites, id).unwrap();
        assert!(!result.listings[0].favorite);
        assert!(result.messages[0].content.starts_with("Removed"));
    }

    #[test]
    fn stale_favorite_can_still_be_removed() {
        let mut gateway = DemoGateway::new();
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        let id = gateway.fetch_all().unwrap()[0].id;
        toggle(&gateway, &mut favorites, id).unwrap();

        gateway.delete(id).unwrap();

        let result = toggle(&gateway, &mut favorites, id).unwrap();
        assert!(!favorites.is_favorite(id));
        assert!(result.listings.is_empty());
        assert!(result.messages[0].content.contains("no longer available"));
    }

    #[test]
    fn toggle_rejects_unknown_listing() {
        let gateway = DemoGateway::new();
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        assert!(toggle(&gateway, &mut favorites, 424242).is_err());
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn list_returns_saved_listings_in_id_order() {
        let gateway = DemoGateway::new();
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        let all = gateway.fetch_all().unwrap();
        toggle(&gateway, &mut favorites, all[2].id).unwrap();
        toggle(&gateway, &mut favorites, all[0].id).unwrap();

        let result = list(&gateway, &favorites).unwrap();
        let ids: Vec<u64> = result.listings.iter().map(|v| v.listing.id).collect();
        let mut expected = vec![all[0].id, all[2].id];
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn stale_favorites_are_reported_not_dropped() {
        let mut gateway = DemoGateway::new();
        let mut favorites = Favorites::load(InMemoryStore::new()).unwrap();
        let id = gateway.fetch_all().unwrap()[0].id;
        toggle(&gateway, &mut favorites, id).unwrap();

        gateway.delete(id).unwrap();

        let result = list(&gateway, &favorites).unwrap();
        assert!(result.listings.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        // The id stays in the set.
        assert!(favorites.is_favorite(id));
    }

    #[test]
    fn empty_set_gets_a_hint() {
        let gateway = DemoGateway::new();
        let favorites = Favorites::load(InMemoryStore::new()).unwrap();
        let result = list(&gateway, &favorites).unwrap();
        assert!(result.listings.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
