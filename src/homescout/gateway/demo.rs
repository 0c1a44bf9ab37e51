//! In-memory gateway seeded from an embedded dataset.
//!
//! `DemoGateway` serves the bundled listings without any backend. Writes are
//! visible for the life of the process only; a fresh gateway starts over from
//! the seed.

use once_cell::sync::Lazy;

use crate::error::{Result, ScoutError};
use crate::gateway::record;
use crate::gateway::{ListingDraft, ListingGateway, ListingPatch};
use crate::model::Listing;

const SEED_JSON: &str = include_str!("../../../data/listings.json");

// The seed is a compile-time asset; a parse failure is a packaging bug.
static SEED: Lazy<Vec<Listing>> =
    Lazy::new(|| record::parse_records(SEED_JSON).expect("embedded listing dataset parses"));

pub struct DemoGateway {
    listings: Vec<Listing>,
}

impl DemoGateway {
    /// Gateway preloaded with the bundled dataset.
    pub fn new() -> Self {
        Self {
            listings: SEED.clone(),
        }
    }

    /// Gateway over a caller-supplied dataset. Used by tests.
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.listings
            .iter()
            .position(|l| l.id == id)
            .ok_or(ScoutError::ListingNotFound(id))
    }

    fn next_id(&self) -> u64 {
        self.listings.iter().map(|l| l.id).max().unwrap_or(0) + 1
    }
}

impl Default for DemoGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingGateway for DemoGateway {
    fn fetch_all(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.clone())
    }

    fn fetch_by_id(&self, id: u64) -> Result<Listing> {
        let pos = self.position(id)?;
        Ok(self.listings[pos].clone())
    }

    fn create(&mut self, draft: ListingDraft) -> Result<Listing> {
        let listing = draft.into_listing(self.next_id(), chrono::Utc::now());
        self.listings.push(listing.clone());
        Ok(listing)
    }

    fn update(&mut self, id: u64, patch: ListingPatch) -> Result<Listing> {
        let pos = self.position(id)?;
        patch.apply(&mut self.listings[pos]);
        Ok(self.listings[pos].clone())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let pos = self.position(id)?;
        self.listings.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyType;

    fn draft(title: &str) -> ListingDraft {
        ListingDraft {
            title: title.to_string(),
            price: Some(500_000.0),
            address: "1 Test Ln".to_string(),
            city: "Testville".to_string(),
            state: "CA".to_string(),
            zip_code: "90210".to_string(),
            property_type: PropertyType::Condo,
            bedrooms: 2.0,
            bathrooms: 1.0,
            sqft: Some(900),
            lot_size: None,
            year_built: Some(1999),
            description: None,
            images: Vec::new(),
            amenities: Vec::new(),
            status: "For Sale".to_string(),
        }
    }

    #[test]
    fn seed_dataset_loads() {
        let gateway = DemoGateway::new();
        let listings = gateway.fetch_all().unwrap();
        assert!(!listings.is_empty());
        // Ids in the seed are unique.
        let mut ids: Vec<u64> = listings.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn fetch_by_id_finds_seeded_listing() {
        let gateway = DemoGateway::new();
        let first = &gateway.fetch_all().unwrap()[0];
        let fetched = gateway.fetch_by_id(first.id).unwrap();
        assert_eq!(&fetched, first);
    }

    #[test]
    fn fetch_unknown_id_is_not_found() {
        let gateway = DemoGateway::new();
        match gateway.fetch_by_id(999_999) {
            Err(ScoutError::ListingNotFound(id)) => assert_eq!(id, 999_999),
            other => panic!("expected ListingNotFound, got {:?}", other),
        }
    }

    #[test]
    fn create_assigns_successor_id_and_stamps_date() {
        let mut gateway = DemoGateway::new();
        let max_before = gateway.fetch_all().unwrap().iter().map(|l| l.id).max().unwrap();

        let created = gateway.create(draft("New Build")).unwrap();
        assert_eq!(created.id, max_before + 1);
        assert!(created.listing_date.is_some());
        assert_eq!(gateway.fetch_by_id(created.id).unwrap().title, "New Build");
    }

    #[test]
    fn create_on_empty_source_starts_at_one() {
        let mut gateway = DemoGateway::with_listings(Vec::new());
        let created = gateway.create(draft("First")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn update_applies_only_patched_fields() {
        let mut gateway = DemoGateway::new();
        let id = gateway.fetch_all().unwrap()[0].id;
        let before = gateway.fetch_by_id(id).unwrap();

        let patch = ListingPatch {
            price: Some(Some(100.0)),
            status: Some("Pending".to_string()),
            ..Default::default()
        };
        let updated = gateway.update(id, patch).unwrap();

        assert_eq!(updated.price, Some(100.0));
        assert_eq!(updated.status, "Pending");
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.listing_date, before.listing_date);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut gateway = DemoGateway::new();
        assert!(matches!(
            gateway.update(999_999, ListingPatch::default()),
            Err(ScoutError::ListingNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_the_listing() {
        let mut gateway = DemoGateway::new();
        let id = gateway.fetch_all().unwrap()[0].id;
        let count_before = gateway.fetch_all().unwrap().len();

        gateway.delete(id).unwrap();

        assert_eq!(gateway.fetch_all().unwrap().len(), count_before - 1);
        assert!(matches!(
            gateway.fetch_by_id(id),
            Err(ScoutError::ListingNotFound(_))
        ));
    }

    #[test]
    fn deleted_id_is_not_reused_until_max_drops() {
        let mut gateway = DemoGateway::with_listings(Vec::new());
        let a = gateway.create(draft("A")).unwrap();
        let b = gateway.create(draft("B")).unwrap();
        gateway.delete(a.id).unwrap();

        let c = gateway.create(draft("C")).unwrap();
        assert_eq!(c.id, b.id + 1);
    }

    #[test]
    fn writes_do_not_leak_across_gateways() {
        let mut first = DemoGateway::new();
        first.delete(first.fetch_all().unwrap()[0].id).unwrap();

        let second = DemoGateway::new();
        assert_eq!(second.fetch_all().unwrap().len(), SEED.len());
    }
}
