use maud::{html, Markup};

pub mod error;
pub mod filter_form;
pub mod listing_card;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use listing_card::listing_card;

/// Banner for problems the page can still render around.
pub fn notice(message: &str) -> Markup {
    html! {
        div class="notice" role="status" {
            p { (message) }
        }
    }
}

pub fn listing_grid(listings: &[crate::domain::listing::ListingRecord]) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
            @for listing in listings {
                (listing_card(listing))
            }
        }
    }
}
