mod api_error;
mod client;
pub mod models;
mod source;

pub use api_error::ApiError;
pub use client::ApiClient;
pub use source::ListingSource;
