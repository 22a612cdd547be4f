use crate::domain::filter::{BedroomFilter, FilterCriteria};
use crate::domain::listing::format_rent;
use maud::{html, Markup};

/// The search form. Submitting it is the only thing that runs a search;
/// Reset just drops the query string.
pub fn filter_form(criteria: &FilterCriteria, price_ceiling: u64) -> Markup {
    let range = criteria.price_range;

    html! {
        form class="filter-form" method="get" action="/listings" {
            h2 { "Filter Rental Properties" }

            div class="grid gap-6 md:grid-cols-4" {
                div {
                    label for="location" { "Location" }
                    input
                        type="text"
                        id="location"
                        name="location"
                        placeholder="e.g., Dhaka, Chattogram..."
                        value=(criteria.location_query);
                }

                fieldset {
                    legend { "Price Range" }
                    label for="min_price" class="sr-only" { "Minimum rent" }
                    input
                        type="number"
                        id="min_price"
                        name="min_price"
                        min="0"
                        max=(price_ceiling)
                        step="1000"
                        value=(range.min);
                    label for="max_price" class="sr-only" { "Maximum rent" }
                    input
                        type="number"
                        id="max_price"
                        name="max_price"
                        min="0"
                        max=(price_ceiling)
                        step="1000"
                        value=(range.max);
                    p class="price-labels" {
                        span { "৳" (format_rent(range.min)) }
                        " to "
                        span { "৳" (format_rent(range.max)) }
                    }
                }

                div {
                    label for="bedrooms" { "Bedrooms" }
                    select id="bedrooms" name="bedrooms" {
                        @for (choice, label) in BedroomFilter::CHOICES {
                            option value=(choice) selected[choice == criteria.bedroom_filter] { (label) }
                        }
                    }
                }

                div class="filter-actions" {
                    button type="submit" class="btn primary" { "Search" }
                    a href="/listings" class="btn outline" { "Reset" }
                }
            }
        }
    }
}
