use crate::domain::listing::{format_rent, secure_image_url, ListingRecord};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn listing_details_page(listing: &ListingRecord) -> Markup {
    desktop_layout(
        &listing.location,
        html! {
            main class="container listing-details" {
                p { a href="/listings" { "← Back to listings" } }

                div class="gallery" {
                    @if listing.images.is_empty() {
                        img src=(listing.cover_image()) alt="No photos yet";
                    }
                    @for (idx, image) in listing.images.iter().enumerate() {
                        img
                            src=(secure_image_url(image))
                            alt={ (listing.location) " photo " (idx + 1) }
                            loading="lazy";
                    }
                }

                p class="price" { "৳" (format_rent(listing.rent_amount)) " / month" }
                p class="location" { (listing.location) }
                h1 { (listing.description) }

                dl class="facts" {
                    dt { "Bedrooms" }
                    dd { (listing.bedrooms) }
                    @if let Some(created_at) = listing.created_at {
                        dt { "Listed" }
                        dd { (created_at.format("%-d %B %Y")) }
                    }
                }

                @if !listing.amenities.is_empty() {
                    section {
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                    }
                }
            }
        },
    )
}
