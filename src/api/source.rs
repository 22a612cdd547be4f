use crate::api::ApiError;
use crate::domain::listing::ListingRecord;

/// Where listing snapshots come from.
/// Shared across server workers, so implementations must be thread-safe.
pub trait ListingSource: Send + Sync {
    /// Every listing, in the order the service returns them.
    fn all_listings(&self) -> Result<Vec<ListingRecord>, ApiError>;

    /// `Ok(None)` when the service doesn't know the id.
    fn listing(&self, id: &str) -> Result<Option<ListingRecord>, ApiError>;
}
