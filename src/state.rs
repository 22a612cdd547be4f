use crate::api::ListingSource;

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub listings: Box<dyn ListingSource>,
    pub price_ceiling: u64,
}

impl AppState {
    pub fn new(listings: impl ListingSource + 'static, price_ceiling: u64) -> Self {
        Self {
            listings: Box::new(listings),
            price_ceiling,
        }
    }
}
