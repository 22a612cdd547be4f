pub mod filter;
pub mod listing;
