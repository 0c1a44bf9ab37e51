//! # Listing Data Gateway
//!
//! The gateway is the only component that talks to a listing data source.
//! It translates between the backend's record shape and the in-memory
//! [`Listing`](crate::model::Listing) used everywhere else; backend field
//! names stop at [`record::ListingRecord`] and never leak upward.
//!
//! ## Implementations
//!
//! - [`demo::DemoGateway`]: in-memory source seeded from an embedded dataset.
//!   Supports the full create/update/delete surface for local use and tests.
//!
//! A remote implementation would satisfy the same trait; callers cannot tell
//! the difference. Errors carry a human-readable message and propagate
//! unchanged to the presentation layer, which decides on retry or display.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Listing, PropertyType};

pub mod demo;
pub mod record;

/// Abstract interface to a listing data source.
pub trait ListingGateway {
    /// Bulk fetch of all known listings.
    fn fetch_all(&self) -> Result<Vec<Listing>>;

    /// Fetch one listing. `ScoutError::ListingNotFound` when no record
    /// matches.
    fn fetch_by_id(&self, id: u64) -> Result<Listing>;

    /// Create a listing. The source assigns the id and stamps the listing
    /// date.
    fn create(&mut self, draft: ListingDraft) -> Result<Listing>;

    /// Apply a partial update. `ScoutError::ListingNotFound` when no record
    /// matches.
    fn update(&mut self, id: u64, patch: ListingPatch) -> Result<Listing>;

    /// Remove a listing. `ScoutError::ListingNotFound` when no record
    /// matches.
    fn delete(&mut self, id: u64) -> Result<()>;
}

/// Fields for a new listing. Identity and listing date are assigned by the
/// source.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub price: Option<f64>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: PropertyType,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub sqft: Option<u64>,
    pub lot_size: Option<u64>,
    pub year_built: Option<u32>,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub status: String,
}

impl ListingDraft {
    pub fn into_listing(self, id: u64, listing_date: DateTime<Utc>) -> Listing {
        Listing {
            id,
            title: self.title,
            price: self.price,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            lot_size: self.lot_size,
            year_built: self.year_built,
            description: self.description,
            images: self.images,
            amenities: self.amenities,
            listing_date: Some(listing_date),
            status: self.status,
        }
    }
}

/// Partial listing update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub price: Option<Option<f64>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub sqft: Option<Option<u64>>,
    pub lot_size: Option<Option<u64>>,
    pub year_built: Option<Option<u32>>,
    pub description: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<String>,
}

impl ListingPatch {
    pub fn apply(&self, listing: &mut Listing) {
        if let Some(v) = &self.title {
            listing.title = v.clone();
        }
        if let Some(v) = self.price {
            listing.price = v;
        }
        if let Some(v) = &self.address {
            listing.address = v.clone();
        }
        if let Some(v) = &self.city {
            listing.city = v.clone();
        }
        if let Some(v) = &self.state {
            listing.state = v.clone();
        }
        if let Some(v) = &self.zip_code {
            listing.zip_code = v.clone();
        }
        if let Some(v) = &self.property_type {
            listing.property_type = v.clone();
        }
        if let Some(v) = self.bedrooms {
            listing.bedrooms = v;
        }
        if let Some(v) = self.bathrooms {
            listing.bathrooms = v;
        }
        if let Some(v) = self.sqft {
            listing.sqft = v;
        }
        if let Some(v) = self.lot_size {
            listing.lot_size = v;
        }
        if let Some(v) = self.year_built {
            listing.year_built = v;
        }
        if let Some(v) = &self.description {
            listing.description = v.clone();
        }
        if let Some(v) = &self.images {
            listing.images = v.clone();
        }
        if let Some(v) = &self.amenities {
            listing.amenities = v.clone();
        }
        if let Some(v) = &self.status {
            listing.status = v.clone();
        }
    }
}
