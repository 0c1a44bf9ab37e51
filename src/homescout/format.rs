//! Display formatting helpers shared by every output path.

use chrono::{DateTime, Utc};

use crate::model::Listing;

/// US-style thousands grouping for whole numbers.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-dollar price. An absent or zero price renders as `$0`.
pub fn format_price(price: Option<f64>) -> String {
    let amount = price.unwrap_or(0.0).round();
    if amount <= 0.0 {
        return "$0".to_string();
    }
    format!("${}", format_number(amount as u64))
}

/// Square footage, or `N/A` when the source did not report one.
pub fn format_sqft(sqft: Option<u64>) -> String {
    match sqft {
        Some(v) => format!("{} sqft", format_number(v)),
        None => "N/A".to_string(),
    }
}

/// Full street address: `address, city, state zip`.
pub fn format_address(listing: &Listing) -> String {
    format!(
        "{}, {}, {} {}",
        listing.address, listing.city, listing.state, listing.zip_code
    )
}

/// Just `city, state`, for compact rows.
pub fn format_short_address(listing: &Listing) -> String {
    format!("{}, {}", listing.city, listing.state)
}

/// `2 beds, 2.5 baths`, with singular forms for exactly one.
pub fn bed_bath_text(bedrooms: f64, bathrooms: f64) -> String {
    format!(
        "{}, {}",
        count_text(bedrooms, "bed"),
        count_text(bathrooms, "bath")
    )
}

fn count_text(value: f64, unit: &str) -> String {
    let rendered = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };
    if value == 1.0 {
        format!("{} {}", rendered, unit)
    } else {
        format!("{} {}s", rendered, unit)
    }
}

/// Relative listing age, like `3 days ago`. Empty when the date is unknown.
pub fn listed_ago(listing_date: Option<DateTime<Utc>>) -> String {
    let Some(date) = listing_date else {
        return String::new();
    };
    let duration = Utc::now().signed_duration_since(date);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyType;

    fn listing() -> Listing {
        Listing {
            id: 1,
            title: "Test".into(),
            price: Some(899_000.0),
            address: "420 Brannan St".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94107".into(),
            property_type: PropertyType::Condo,
            bedrooms: 2.0,
            bathrooms: 2.0,
            sqft: Some(1250),
            lot_size: None,
            year_built: Some(2008),
            description: None,
            images: Vec::new(),
            amenities: Vec::new(),
            listing_date: None,
            status: "For Sale".into(),
        }
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(Some(899_000.0)), "$899,000");
        assert_eq!(format_price(Some(1_150_000.0)), "$1,150,000");
        assert_eq!(format_price(Some(950.0)), "$950");
    }

    #[test]
    fn missing_or_zero_price_is_dollar_zero() {
        assert_eq!(format_price(None), "$0");
        assert_eq!(format_price(Some(0.0)), "$0");
    }

    #[test]
    fn sqft_handles_missing() {
        assert_eq!(format_sqft(Some(1250)), "1,250 sqft");
        assert_eq!(format_sqft(None), "N/A");
    }

    #[test]
    fn addresses_join_in_postal_order() {
        let l = listing();
        assert_eq!(format_address(&l), "420 Brannan St, San Francisco, CA 94107");
        assert_eq!(format_short_address(&l), "San Francisco, CA");
    }

    #[test]
    fn bed_bath_pluralizes() {
        assert_eq!(bed_bath_text(1.0, 1.0), "1 bed, 1 bath");
        assert_eq!(bed_bath_text(3.0, 2.5), "3 beds, 2.5 baths");
        assert_eq!(bed_bath_text(0.0, 0.0), "0 beds, 0 baths");
    }

    #[test]
    fn unknown_date_renders_empty() {
        assert_eq!(listed_ago(None), "");
        let recent = Utc::now() - chrono::Duration::hours(2);
        assert!(listed_ago(Some(recent)).contains("ago"));
    }
}
