use crate::domain::listing::{details_path, format_rent, ListingRecord};
use maud::{html, Markup};

const AMENITIES_ON_CARD: usize = 3;

pub fn listing_card(listing: &ListingRecord) -> Markup {
    let (amenities, hidden) = listing.amenity_preview(AMENITIES_ON_CARD);

    html! {
        article class="listing-card" data-listing-id=(listing.id) {
            div class="listing-card-image" {
                img
                    src=(listing.cover_image())
                    alt={ (listing.location) " Property" }
                    loading="lazy";
                span class="price-badge" { "৳" (format_rent(listing.rent_amount)) }
            }

            div class="listing-card-body" {
                h3 class="listing-location" { (listing.location) }
                p class="listing-description" { (listing.description) }
                p class="listing-features" { (listing.bedrooms) " Beds" }

                div class="amenities" {
                    @for amenity in amenities {
                        span class="badge" { (amenity) }
                    }
                    @if hidden > 0 {
                        span class="badge muted" { "+" (hidden) " more" }
                    }
                }

                a class="btn primary" href=(details_path(&listing.id)) { "View Details" }
            }
        }
    }
}
