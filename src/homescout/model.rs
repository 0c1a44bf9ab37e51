//! # Domain Model: Listings and Property Categories
//!
//! This module defines the in-memory listing shape consumed by the query
//! engine and everything above it. Backend-specific field names never appear
//! here; the gateway's record mapping absorbs them (see `gateway::record`).
//!
//! ## Degraded Fields
//!
//! Listings loaded from a real backend are frequently incomplete. Rather than
//! rejecting them, optional fields degrade to the most permissive comparable
//! value at the point of comparison:
//!
//! - missing `price` compares and formats as `0`
//! - missing `sqft` compares as `0` and displays as "N/A"
//! - missing or unparseable `listing_date` is `None`, which sorts as the
//!   earliest possible date
//!
//! The query engine relies on these rules to never fail over incomplete
//! listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Property category. The seven known categories carry display labels; any
/// other backend value passes through as [`PropertyType::Other`] and renders
/// unlabeled. Equality is exact on the stored category key, so `Other("x")`
/// only matches `Other("x")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    Apartment,
    MultiFamily,
    Land,
    Commercial,
    Other(String),
}

impl PropertyType {
    /// The stored category key, as the backend spells it.
    pub fn key(&self) -> &str {
        match self {
            PropertyType::SingleFamily => "single-family",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Apartment => "apartment",
            PropertyType::MultiFamily => "multi-family",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Other(key) => key,
        }
    }

    /// Human-readable label. Unknown categories pass through unlabeled.
    pub fn label(&self) -> &str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Apartment => "Apartment",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
            PropertyType::Other(key) => key,
        }
    }
}

impl From<String> for PropertyType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "single-family" => PropertyType::SingleFamily,
            "condo" => PropertyType::Condo,
            "townhouse" => PropertyType::Townhouse,
            "apartment" => PropertyType::Apartment,
            "multi-family" => PropertyType::MultiFamily,
            "land" => PropertyType::Land,
            "commercial" => PropertyType::Commercial,
            _ => PropertyType::Other(raw),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.key().to_string()
    }
}

/// One property record, immutable once loaded. Created and destroyed only by
/// the gateway; the query engine is a read-only consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: u64,
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
    pub listing_date: Option<DateTime<Utc>>,
    pub status: String,
}

impl Listing {
    /// Price for comparison purposes; missing price compares as 0.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Square footage for comparison purposes; missing sqft compares as 0.
    pub fn sqft_or_zero(&self) -> u64 {
        self.sqft.unwrap_or(0)
    }
}
