// templates/pages/home.rs

use crate::domain::listing::ListingRecord;
use crate::templates::{components::listing_grid, desktop_layout, notice};
use maud::{html, Markup};

const LATEST_COUNT: usize = 6;

pub fn home_page(snapshot: &[ListingRecord], fetch_notice: Option<&str>) -> Markup {
    let latest = &snapshot[..snapshot.len().min(LATEST_COUNT)];

    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find your next home" }
                p { "Browse rentals from landlords across the country." }

                form class="hero-search" method="get" action="/listings" {
                    label for="hero-location" class="sr-only" { "Location" }
                    input
                        type="text"
                        id="hero-location"
                        name="location"
                        placeholder="Search by location";
                    button type="submit" class="btn primary" { "Search" }
                }
            }

            @if let Some(message) = fetch_notice {
                (notice(message))
            }

            section class="container" {
                div class="flex items-center justify-between" {
                    h2 { "Latest Listings" }
                    a href="/listings" class="btn outline" { "View All" }
                }
                (listing_grid(latest))
            }
        },
    )
}
