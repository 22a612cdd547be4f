// src/domain/filter.rs

//! Listing search: narrows a fetched snapshot down to the listings that
//! satisfy every active criterion.
//!
//! The snapshot is never touched. Criteria are plain values; UI input is
//! turned into [`FilterEvent`]s and folded into a fresh [`FilterCriteria`]
//! before a search runs.

use crate::domain::listing::ListingRecord;
use crate::errors::ServerError;
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Upper handle of the price slider when nothing else is configured.
pub const DEFAULT_PRICE_CEILING: u64 = 50_000;

/// Inclusive rent bounds. `min <= max` is kept by every update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn full(price_ceiling: u64) -> Self {
        Self {
            min: 0,
            max: price_ceiling,
        }
    }

    pub fn contains(&self, amount: u64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Bedroom selector.
///
/// The top bucket is labelled "5+" in the form, but `Exactly(5)` matches five
/// bedrooms only. Kept literal until product decides what "5+" should mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomFilter {
    Any,
    Exactly(u32),
}

impl BedroomFilter {
    /// Options offered by the select, with their labels.
    pub const CHOICES: [(BedroomFilter, &'static str); 6] = [
        (BedroomFilter::Any, "Any"),
        (BedroomFilter::Exactly(1), "1"),
        (BedroomFilter::Exactly(2), "2"),
        (BedroomFilter::Exactly(3), "3"),
        (BedroomFilter::Exactly(4), "4"),
        (BedroomFilter::Exactly(5), "5+"),
    ];

    pub fn matches(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => bedrooms == *n,
        }
    }
}

impl FromStr for BedroomFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") {
            return Ok(BedroomFilter::Any);
        }
        s.parse::<u32>()
            .map(BedroomFilter::Exactly)
            .map_err(|_| format!("bedrooms must be \"any\" or a whole number, got {s:?}"))
    }
}

impl fmt::Display for BedroomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomFilter::Any => write!(f, "any"),
            BedroomFilter::Exactly(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Empty means no location constraint.
    pub location_query: String,
    pub price_range: PriceRange,
    pub bedroom_filter: BedroomFilter,
}

/// One user edit to the filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    LocationChanged(String),
    MinPriceChanged(u64),
    MaxPriceChanged(u64),
    BedroomsChanged(BedroomFilter),
    Reset,
}

/// Criteria that select the whole snapshot.
pub fn reset_filters(price_ceiling: u64) -> FilterCriteria {
    FilterCriteria {
        location_query: String::new(),
        price_range: PriceRange::full(price_ceiling),
        bedroom_filter: BedroomFilter::Any,
    }
}

/// Listings from `snapshot` matching every active criterion, in snapshot order.
pub fn apply_filters(snapshot: &[ListingRecord], criteria: &FilterCriteria) -> Vec<ListingRecord> {
    let needle = criteria.location_query.to_lowercase();

    snapshot
        .iter()
        .filter(|listing| {
            let location_match =
                needle.is_empty() || listing.location.to_lowercase().contains(&needle);

            location_match
                && criteria.price_range.contains(listing.rent_amount)
                && criteria.bedroom_filter.matches(listing.bedrooms)
        })
        .cloned()
        .collect()
}

impl FilterCriteria {
    /// Fold one event into a new criteria value.
    /// Price handles are clamped to `[0, price_ceiling]` and can't cross.
    pub fn apply(self, event: FilterEvent, price_ceiling: u64) -> Self {
        match event {
            FilterEvent::LocationChanged(location_query) => Self {
                location_query,
                ..self
            },
            FilterEvent::MinPriceChanged(value) => {
                let min = value.min(price_ceiling).min(self.price_range.max);
                Self {
                    price_range: PriceRange { min, ..self.price_range },
                    ..self
                }
            }
            FilterEvent::MaxPriceChanged(value) => {
                let max = value.min(price_ceiling).max(self.price_range.min);
                Self {
                    price_range: PriceRange { max, ..self.price_range },
                    ..self
                }
            }
            FilterEvent::BedroomsChanged(bedroom_filter) => Self {
                bedroom_filter,
                ..self
            },
            FilterEvent::Reset => reset_filters(price_ceiling),
        }
    }

    /// Whether anything differs from [`reset_filters`].
    pub fn is_active(&self, price_ceiling: u64) -> bool {
        *self != reset_filters(price_ceiling)
    }

    /// Build criteria from the submitted search form
    /// (`location`, `min_price`, `max_price`, `bedrooms`).
    ///
    /// Missing or blank fields keep their defaults, except that a whitespace
    /// `location` is kept as a needle. Unknown keys are ignored.
    pub fn from_query(query: Option<&str>, price_ceiling: u64) -> Result<Self, ServerError> {
        let mut location = None;
        let mut min_price = None;
        let mut max_price = None;
        let mut bedrooms = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            // Whitespace is a valid location needle; only an empty field is unset.
            if value.is_empty() || (key != "location" && value.trim().is_empty()) {
                continue;
            }
            match &*key {
                "location" => location = Some(value.into_owned()),
                "min_price" => min_price = Some(parse_price("min_price", &value)?),
                "max_price" => max_price = Some(parse_price("max_price", &value)?),
                "bedrooms" => {
                    bedrooms = Some(value.parse::<BedroomFilter>().map_err(ServerError::BadRequest)?)
                }
                _ => {}
            }
        }

        let events = [
            location.map(FilterEvent::LocationChanged),
            min_price.map(FilterEvent::MinPriceChanged),
            max_price.map(FilterEvent::MaxPriceChanged),
            bedrooms.map(FilterEvent::BedroomsChanged),
        ];

        Ok(events
            .into_iter()
            .flatten()
            .fold(reset_filters(price_ceiling), |criteria, event| {
                criteria.apply(event, price_ceiling)
            }))
    }

    /// Inverse of [`FilterCriteria::from_query`]; default fields are left out.
    pub fn to_query(&self, price_ceiling: u64) -> String {
        let defaults = reset_filters(price_ceiling);
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !self.location_query.is_empty() {
            out.append_pair("location", &self.location_query);
        }
        if self.price_range.min != defaults.price_range.min {
            out.append_pair("min_price", &self.price_range.min.to_string());
        }
        if self.price_range.max != defaults.price_range.max {
            out.append_pair("max_price", &self.price_range.max.to_string());
        }
        if self.bedroom_filter != defaults.bedroom_filter {
            out.append_pair("bedrooms", &self.bedroom_filter.to_string());
        }

        out.finish()
    }
}

fn parse_price(field: &str, raw: &str) -> Result<u64, ServerError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ServerError::BadRequest(format!("{field} must be a whole number, got {raw:?}")))
}
