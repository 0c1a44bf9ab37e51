//! # Filter/Sort Configuration and State Service
//!
//! [`FilterConfig`] is the canonical filter+sort state: always fully
//! populated, with absent user input represented as an empty string or empty
//! set so merges are total. [`FilterState`] owns one configuration per
//! session, persists it write-through on every change, and notifies
//! subscribers explicitly; there is no implicit re-computation anywhere.
//!
//! Bound fields are kept as the raw strings the user typed. They are parsed
//! at evaluation time by the query engine, which distinguishes "no lower
//! bound" (empty or non-numeric) from "lower bound of zero".

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::PropertyType;
use crate::store::SessionStore;

/// Sort order for query results. Any unrecognized key falls back to
/// [`SortBy::Newest`], both when parsing user input and when deserializing a
/// persisted snapshot written by an older version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    SqftHigh,
    SqftLow,
}

impl SortBy {
    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::SqftHigh => "sqft-high",
            SortBy::SqftLow => "sqft-low",
        }
    }

    pub fn from_key(key: &str) -> SortBy {
        match key {
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            "sqft-high" => SortBy::SqftHigh,
            "sqft-low" => SortBy::SqftLow,
            _ => SortBy::Newest,
        }
    }
}

impl From<String> for SortBy {
    fn from(raw: String) -> Self {
        SortBy::from_key(&raw)
    }
}

impl From<SortBy> for String {
    fn from(value: SortBy) -> Self {
        value.key().to_string()
    }
}

/// The combined filter+sort state. Every key is always present; a partial
/// persisted snapshot merges over these defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub price_min: String,
    pub price_max: String,
    pub property_type: Vec<PropertyType>,
    pub bedrooms_min: String,
    pub bathrooms_min: String,
    pub sqft_min: String,
    pub location: String,
    pub sort_by: SortBy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_min: String::new(),
            price_max: String::new(),
            property_type: Vec::new(),
            bedrooms_min: String::new(),
            bathrooms_min: String::new(),
            sqft_min: String::new(),
            location: String::new(),
            sort_by: SortBy::Newest,
        }
    }
}

impl FilterConfig {
    fn is_set(field: &str) -> bool {
        !field.trim().is_empty()
    }

    /// Whether any filter group is active. Sort order alone is not a filter.
    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of independently-active filter groups, for badge display.
    /// The price range counts as one group whether one or both bounds are
    /// set; the type set counts as one when non-empty.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if Self::is_set(&self.price_min) || Self::is_set(&self.price_max) {
            count += 1;
        }
        if !self.property_type.is_empty() {
            count += 1;
        }
        if Self::is_set(&self.bedrooms_min) {
            count += 1;
        }
        if Self::is_set(&self.bathrooms_min) {
            count += 1;
        }
        if Self::is_set(&self.sqft_min) {
            count += 1;
        }
        if Self::is_set(&self.location) {
            count += 1;
        }
        count
    }

    /// One display string per active filter group, in panel order.
    pub fn active_description(&self) -> Vec<String> {
        let mut parts = Vec::new();
        match (Self::is_set(&self.price_min), Self::is_set(&self.price_max)) {
            (true, true) => parts.push(format!(
                "price {} to {}",
                self.price_min.trim(),
                self.price_max.trim()
            )),
            (true, false) => parts.push(format!("price {}+", self.price_min.trim())),
            (false, true) => parts.push(format!("price up to {}", self.price_max.trim())),
            (false, false) => {}
        }
        if !self.property_type.is_empty() {
            let labels: Vec<&str> = self.property_type.iter().map(|t| t.label()).collect();
            parts.push(format!("type: {}", labels.join(", ")));
        }
        if Self::is_set(&self.bedrooms_min) {
            parts.push(format!("{}+ beds", self.bedrooms_min.trim()));
        }
        if Self::is_set(&self.bathrooms_min) {
            parts.push(format!("{}+ baths", self.bathrooms_min.trim()));
        }
        if Self::is_set(&self.sqft_min) {
            parts.push(format!("{}+ sqft", self.sqft_min.trim()));
        }
        if Self::is_set(&self.location) {
            parts.push(format!("near \"{}\"", self.location.trim()));
        }
        parts
    }

    /// Merge a partial update; only keys listed in the patch change.
    pub fn apply(&mut self, patch: &FilterPatch) {
        if let Some(v) = &patch.price_min {
            self.price_min = v.clone();
        }
        if let Some(v) = &patch.price_max {
            self.price_max = v.clone();
        }
        if let Some(v) = &patch.property_type {
            self.property_type = v.clone();
        }
        if let Some(v) = &patch.bedrooms_min {
            self.bedrooms_min = v.clone();
        }
        if let Some(v) = &patch.bathrooms_min {
            self.bathrooms_min = v.clone();
        }
        if let Some(v) = &patch.sqft_min {
            self.sqft_min = v.clone();
        }
        if let Some(v) = &patch.location {
            self.location = v.clone();
        }
        if let Some(v) = patch.sort_by {
            self.sort_by = v;
        }
    }
}

/// A partial configuration update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub property_type: Option<Vec<PropertyType>>,
    pub bedrooms_min: Option<String>,
    pub bathrooms_min: Option<String>,
    pub sqft_min: Option<String>,
    pub location: Option<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterPatch {
    /// Build a single-key patch from string key/value, as entered on a
    /// command line or filter panel field.
    ///
    /// Recognized keys: `price-min`, `price-max`, `type` (comma-separated
    /// category keys, empty clears), `beds`, `baths`, `sqft-min`, `location`,
    /// `sort`.
    pub fn from_key_value(key: &str, value: &str) -> Result<FilterPatch> {
        let mut patch = FilterPatch::default();
        match key {
            "price-min" => patch.price_min = Some(value.to_string()),
            "price-max" => patch.price_max = Some(value.to_string()),
            "type" | "property-type" => {
                let types: Vec<PropertyType> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(|t| PropertyType::from(t.to_string()))
                    .collect();
                patch.property_type = Some(types);
            }
            "beds" | "bedrooms-min" => patch.bedrooms_min = Some(value.to_string()),
            "baths" | "bathrooms-min" => patch.bathrooms_min = Some(value.to_string()),
            "sqft-min" => patch.sqft_min = Some(value.to_string()),
            "location" => patch.location = Some(value.to_string()),
            "sort" | "sort-by" => patch.sort_by = Some(SortBy::from_key(value)),
            other => {
                return Err(crate::error::ScoutError::Api(format!(
                    "Unknown filter key: {}",
                    other
                )))
            }
        }
        Ok(patch)
    }
}

/// Session-scoped owner of the canonical [`FilterConfig`].
///
/// Every mutating operation persists the full configuration before returning
/// (write-through, no batching), then notifies subscribers with the new
/// snapshot.
pub struct FilterState<S: SessionStore> {
    store: S,
    config: FilterConfig,
    subscribers: Vec<Box<dyn Fn(&FilterConfig)>>,
}

impl<S: SessionStore> FilterState<S> {
    /// Load the last-used configuration from the store, merged over defaults.
    pub fn load(store: S) -> Result<Self> {
        let config = store.load_filters()?.unwrap_or_default();
        Ok(Self {
            store,
            config,
            subscribers: Vec::new(),
        })
    }

    pub fn get(&self) -> &FilterConfig {
        &self.config
    }

    /// Replace one field by string key, persist, return the updated snapshot.
    pub fn set(&mut self, key: &str, value: &str) -> Result<FilterConfig> {
        let patch = FilterPatch::from_key_value(key, value)?;
        self.set_many(patch)
    }

    /// Merge a partial update, persist, return the updated snapshot.
    pub fn set_many(&mut self, patch: FilterPatch) -> Result<FilterConfig> {
        let mut next = self.config.clone();
        next.apply(&patch);
        self.store.save_filters(&next)?;
        self.config = next;
        self.notify();
        Ok(self.config.clone())
    }

    /// Restore defaults and clear the persisted state. Idempotent.
    pub fn reset(&mut self) -> Result<FilterConfig> {
        self.store.clear_filters()?;
        self.config = FilterConfig::default();
        self.notify();
        Ok(self.config.clone())
    }

    pub fn active_count(&self) -> usize {
        self.config.active_count()
    }

    /// Register a change callback. Called after every completed mutation.
    pub fn subscribe(&mut self, f: impl Fn(&FilterConfig) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_are_fully_populated() {
        let config = FilterConfig::default();
        assert_eq!(config.price_min, "");
        assert_eq!(config.price_max, "");
        assert!(config.property_type.is_empty());
        assert_eq!(config.sort_by, SortBy::Newest);
        assert_eq!(config.active_count(), 0);
        assert!(!config.has_active());
    }

    #[test]
    fn sort_by_falls_back_to_newest() {
        assert_eq!(SortBy::from_key("price-high"), SortBy::PriceHigh);
        assert_eq!(SortBy::from_key("garbage"), SortBy::Newest);
        let parsed: SortBy = serde_json::from_str("\"sqft-low\"").unwrap();
        assert_eq!(parsed, SortBy::SqftLow);
        let unknown: SortBy = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(unknown, SortBy::Newest);
    }

    #[test]
    fn partial_snapshot_merges_over_defaults() {
        let json = r#"{"price_min":"100000","sort_by":"price-low"}"#;
        let config: FilterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.price_min, "100000");
        assert_eq!(config.sort_by, SortBy::PriceLow);
        // Unlisted keys take defaults.
        assert_eq!(config.price_max, "");
        assert!(config.property_type.is_empty());
    }

    #[test]
    fn price_range_counts_as_one_group() {
        let mut config = FilterConfig {
            price_min: "100000".into(),
            ..Default::default()
        };
        assert_eq!(config.active_count(), 1);
        config.price_max = "400000".into();
        assert_eq!(config.active_count(), 1);
        config.location = "austin".into();
        config.bedrooms_min = "2".into();
        assert_eq!(config.active_count(), 3);
    }

    #[test]
    fn active_description_lists_groups_in_panel_order() {
        let config = FilterConfig {
            price_max: "500000".into(),
            property_type: vec![crate::model::PropertyType::Condo],
            bedrooms_min: "3".into(),
            ..Default::default()
        };
        let parts = config.active_description();
        assert_eq!(
            parts,
            vec!["price up to 500000", "type: Condo", "3+ beds"]
        );
    }

    #[test]
    fn set_persists_and_returns_snapshot() {
        let mut state = FilterState::load(InMemoryStore::new()).unwrap();
        let snapshot = state.set("price-min", "150000").unwrap();
        assert_eq!(snapshot.price_min, "150000");
        assert_eq!(state.get().price_min, "150000");

        let saved = state.store.load_filters().unwrap().unwrap();
        assert_eq!(saved, snapshot);
    }

    #[test]
    fn set_unknown_key_is_rejected() {
        let mut state = FilterState::load(InMemoryStore::new()).unwrap();
        assert!(state.set("pool-depth", "3").is_err());
        // Nothing persisted on error.
        assert!(state.store.load_filters().unwrap().is_none());
    }

    #[test]
    fn set_many_only_touches_listed_keys() {
        let mut state = FilterState::load(InMemoryStore::new()).unwrap();
        state.set("location", "portland").unwrap();
        let snapshot = state
            .set_many(FilterPatch {
                sqft_min: Some("1500".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(snapshot.location, "portland");
        assert_eq!(snapshot.sqft_min, "1500");
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut state = FilterState::load(InMemoryStore::new()).unwrap();
        state.set("beds", "3").unwrap();
        state.set("sort", "price-high").unwrap();

        let snapshot = state.reset().unwrap();
        assert_eq!(snapshot, FilterConfig::default());
        assert!(state.store.load_filters().unwrap().is_none());

        let again = state.reset().unwrap();
        assert_eq!(again, FilterConfig::default());
    }

    #[test]
    fn saved_state_survives_reload() {
        let store = InMemoryStore::new();
        let mut state = FilterState::load(store).unwrap();
        state.set("price-max", "750000").unwrap();

        let store = state.store.clone();
        let reloaded = FilterState::load(store).unwrap();
        assert_eq!(reloaded.get().price_max, "750000");
        assert_eq!(reloaded.get().price_min, "");
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut state = FilterState::load(InMemoryStore::new()).unwrap();
        state.subscribe(move |config| sink.borrow_mut().push(config.price_min.clone()));

        state.set("price-min", "100").unwrap();
        state.reset().unwrap();

        assert_eq!(*seen.borrow(), vec!["100".to_string(), String::new()]);
    }

    #[test]
    fn type_key_parses_comma_separated_categories() {
        let patch = FilterPatch::from_key_value("type", "condo, land").unwrap();
        assert_eq!(
            patch.property_type,
            Some(vec![
                crate::model::PropertyType::Condo,
                crate::model::PropertyType::Land
            ])
        );
        let cleared = FilterPatch::from_key_value("type", "").unwrap();
        assert_eq!(cleared.property_type, Some(Vec::new()));
    }
}
