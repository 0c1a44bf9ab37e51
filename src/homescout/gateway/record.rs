//! Backend record mapping.
//!
//! The record-based backend exposes listings under its own field names:
//! camelCase for the current schema, a capitalized `Id`, and suffixed
//! `*_c` names on legacy deployments. [`ListingRecord`] accepts all of them
//! and coerces the values into the core [`Listing`] shape in one direction.
//! Nothing above the gateway ever sees a backend name.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, ScoutError};
use crate::model::{Listing, PropertyType};

/// Raw listing payload as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(default, alias = "title_c")]
    pub title: String,
    #[serde(default, alias = "price_c")]
    pub price: Option<f64>,
    #[serde(default, alias = "address_c")]
    pub address: String,
    #[serde(default, alias = "city_c")]
    pub city: String,
    #[serde(default, alias = "state_c")]
    pub state: String,
    #[serde(default, rename = "zipCode", alias = "zip_code_c")]
    pub zip_code: String,
    #[serde(default, rename = "propertyType", alias = "property_type_c")]
    pub property_type: String,
    #[serde(default, alias = "bedrooms_c")]
    pub bedrooms: f64,
    #[serde(default, alias = "bathrooms_c")]
    pub bathrooms: f64,
    #[serde(default, alias = "sqft_c")]
    pub sqft: Option<u64>,
    #[serde(default, rename = "lotSize", alias = "lot_size_c")]
    pub lot_size: Option<u64>,
    #[serde(default, rename = "yearBuilt", alias = "year_built_c")]
    pub year_built: Option<u32>,
    #[serde(default, alias = "description_c")]
    pub description: Option<String>,
    #[serde(default, alias = "images_c")]
    pub images: Vec<String>,
    #[serde(default, alias = "amenities_c")]
    pub amenities: Vec<String>,
    #[serde(default, rename = "listingDate", alias = "listing_date_c")]
    pub listing_date: Option<String>,
    #[serde(default, alias = "status_c")]
    pub status: String,
}

/// Decode a JSON array of backend records into listings. A payload that
/// cannot be coerced is a `MalformedData` error naming the decode failure.
pub fn parse_records(json: &str) -> Result<Vec<Listing>> {
    let records: Vec<ListingRecord> =
        serde_json::from_str(json).map_err(|e| ScoutError::MalformedData(e.to_string()))?;
    Ok(records.into_iter().map(Listing::from).collect())
}

/// Parse a backend timestamp leniently. Invalid or missing input maps to
/// `None`, which the engine sorts as earliest; it never fails the record.
fn parse_listing_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Listing {
            id: record.id,
            title: record.title,
            price: record.price,
            address: record.address,
            city: record.city,
            state: record.state,
            zip_code: record.zip_code,
            property_type: PropertyType::from(record.property_type),
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            sqft: record.sqft,
            lot_size: record.lot_size,
            year_built: record.year_built,
            description: record.description,
            images: record.images,
            amenities: record.amenities,
            listing_date: parse_listing_date(record.listing_date.as_deref()),
            status: record.status,
        }
    }
}
