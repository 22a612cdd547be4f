use crate::api::{ApiError, ListingSource};
use crate::domain::filter::DEFAULT_PRICE_CEILING;
use crate::domain::listing::ListingRecord;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// In-memory stand-in for the listings API.
pub struct StaticListings {
    listings: Vec<ListingRecord>,
    fail: bool,
}

impl ListingSource for StaticListings {
    fn all_listings(&self) -> Result<Vec<ListingRecord>, ApiError> {
        if self.fail {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.listings.clone())
    }

    fn listing(&self, id: &str) -> Result<Option<ListingRecord>, ApiError> {
        if self.fail {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }
}

fn listing(id: &str, location: &str, rent_amount: u64, bedrooms: u32) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        location: location.to_string(),
        rent_amount,
        bedrooms,
        amenities: vec![],
        description: format!("Flat {id} in {location}"),
        images: vec![],
        created_at: None,
    }
}

pub fn sample_listings() -> Vec<ListingRecord> {
    let mut first = listing("a", "Dhanmondi, Dhaka", 15000, 2);
    first.description = "Bright flat near the lake".into();
    first.amenities = vec!["Wifi".into(), "Lift".into(), "Gas".into(), "Parking".into()];
    first.images = vec!["http://img.example.com/a1.jpg".into()];

    vec![
        first,
        listing("b", "Gulshan 2, Dhaka", 40000, 3),
        listing("c", "Agrabad, Chattogram", 18000, 2),
        listing("d", "Zindabazar, Sylhet", 9000, 1),
        listing("e", "Banani", 22000, 5),
        listing("f", "Bashundhara R/A", 35000, 6),
        listing("g", "Uttara Sector 7", 12000, 3),
        listing("h", "Khulshi, Chattogram", 50000, 4),
    ]
}

pub fn init_test_state() -> AppState {
    AppState::new(
        StaticListings {
            listings: sample_listings(),
            fail: false,
        },
        DEFAULT_PRICE_CEILING,
    )
}

/// State whose listing source is always down.
pub fn failing_state() -> AppState {
    AppState::new(
        StaticListings {
            listings: vec![],
            fail: true,
        },
        DEFAULT_PRICE_CEILING,
    )
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Ids of the listing cards on a page, in render order.
pub fn card_ids(body: &str) -> Vec<String> {
    body.split("data-listing-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
