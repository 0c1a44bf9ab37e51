//! # Listing Query Engine
//!
//! The evaluation pipeline: given the full listing collection, an optional
//! free-text query, and a [`FilterConfig`], produce the visible, ordered
//! subset. Pure and deterministic: no side effects, no mutation of the input.
//!
//! Stages run in a fixed order and each one only narrows the working set:
//!
//! 1. Free-text query (city/state/address/title, case-insensitive; zip code
//!    as a raw substring)
//! 2. Price bounds (inclusive; missing price compares as 0)
//! 3. Property type membership (exact match on the stored category key)
//! 4. Bedrooms/bathrooms lower bounds
//! 5. Square footage lower bound (missing sqft compares as 0)
//! 6. Location field (the filter panel's own field, distinct from stage 1)
//! 7. Stable sort
//!
//! Bound strings parse leniently at evaluation time: an empty or non-numeric
//! string means "bound absent", never "bound of zero". No stage panics on
//! malformed listing data.

use crate::filters::{FilterConfig, SortBy};
use crate::model::Listing;

/// Evaluate the pipeline over `listings` and return the filtered, ordered
/// result. The input sequence is left untouched.
pub fn evaluate(listings: &[Listing], query: Option<&str>, config: &FilterConfig) -> Vec<Listing> {
    let mut working: Vec<Listing> = listings.to_vec();

    if let Some(raw) = query {
        let term = raw.trim();
        if !term.is_empty() {
            let term_lower = term.to_lowercase();
            working.retain(|listing| matches_query(listing, term, &term_lower));
        }
    }

    if let Some(min) = parse_bound(&config.price_min) {
        working.retain(|listing| listing.price_or_zero() >= min);
    }
    if let Some(max) = parse_bound(&config.price_max) {
        working.retain(|listing| listing.price_or_zero() <= max);
    }

    if !config.property_type.is_empty() {
        working.retain(|listing| config.property_type.contains(&listing.property_type));
    }

    if let Some(min) = parse_bound(&config.bedrooms_min) {
        working.retain(|listing| listing.bedrooms >= min);
    }
    if let Some(min) = parse_bound(&config.bathrooms_min) {
        working.retain(|listing| listing.bathrooms >= min);
    }

    if let Some(min) = parse_bound(&config.sqft_min) {
        working.retain(|listing| listing.sqft_or_zero() as f64 >= min);
    }

    let location = config.location.trim();
    if !location.is_empty() {
        let location_lower = location.to_lowercase();
        working.retain(|listing| matches_location(listing, location, &location_lower));
    }

    sort_listings(&mut working, config.sort_by);
    working
}

/// Parse a numeric bound string. Empty or non-numeric input means "bound
/// absent", which is distinct from a bound of zero.
fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Free-text match over city, state, address, title (case-insensitive) and
/// zip code (raw substring; "94107" should not case-fold).
fn matches_query(listing: &Listing, term: &str, term_lower: &str) -> bool {
    listing.city.to_lowercase().contains(term_lower)
        || listing.state.to_lowercase().contains(term_lower)
        || listing.zip_code.contains(term)
        || listing.address.to_lowercase().contains(term_lower)
        || listing.title.to_lowercase().contains(term_lower)
}

/// The filter panel's location field: city, state, or address
/// case-insensitively, or zip code as a raw substring.
fn matches_location(listing: &Listing, location: &str, location_lower: &str) -> bool {
    listing.city.to_lowercase().contains(location_lower)
        || listing.state.to_lowercase().contains(location_lower)
        || listing.zip_code.contains(location)
        || listing.address.to_lowercase().contains(location_lower)
}

/// Stable sort; ties keep their pre-sort relative order. Missing dates sort
/// as earliest (`None < Some`), so the descending `Newest` order puts them
/// last.
fn sort_listings(listings: &mut [Listing], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLow => {
            listings.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()))
        }
        SortBy::PriceHigh => {
            listings.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()))
        }
        SortBy::SqftHigh => listings.sort_by(|a, b| b.sqft_or_zero().cmp(&a.sqft_or_zero())),
        SortBy::SqftLow => listings.sort_by(|a, b| a.sqft_or_zero().cmp(&b.sqft_or_zero())),
        SortBy::Newest => listings.sort_by(|a, b| b.listing_date.cmp(&a.listing_date)),
    }
}
