pub mod home;
pub mod listing_details;
pub mod listings;

pub use home::home_page;
pub use listing_details::listing_details_page;
pub use listings::{listings_page, ListingsVm};
