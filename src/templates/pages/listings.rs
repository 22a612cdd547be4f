use crate::domain::filter::FilterCriteria;
use crate::domain::listing::ListingRecord;
use crate::templates::components::{filter_form, listing_grid};
use crate::templates::{desktop_layout, notice};
use maud::{html, Markup};

pub struct ListingsVm {
    pub criteria: FilterCriteria,
    pub price_ceiling: u64,
    /// Filter output, in snapshot order.
    pub results: Vec<ListingRecord>,
    /// Size of the unfiltered snapshot.
    pub total: usize,
    pub fetch_notice: Option<String>,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Listings",
        html! {
            main class="container" {
                (filter_form(&vm.criteria, vm.price_ceiling))

                @if let Some(message) = &vm.fetch_notice {
                    (notice(message))
                }

                h2 { "All Listings" }

                @if vm.criteria.is_active(vm.price_ceiling) {
                    p class="result-count" {
                        "Showing " strong { (vm.results.len()) } " of " (vm.total) " listings"
                    }
                }

                @if vm.results.is_empty() {
                    div class="empty-state" {
                        p { "No listings match your search criteria." }
                    }
                } @else {
                    (listing_grid(&vm.results))
                }
            }
        },
    )
}
