use crate::domain::filter::{apply_filters, FilterCriteria};
use crate::domain::listing::{id_from_segment, ListingRecord};
use crate::errors::ServerError;
use crate::responses::{html_response, text_response, ResultResp};
use crate::state::AppState;
use crate::templates::{self, pages::ListingsVm};
use astra::{Request, Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

const FETCH_FAILED_NOTICE: &str =
    "We could not load listings right now. Please try again in a moment.";

/// Route, render, and log one request. Errors become HTML error pages.
pub fn respond(req: Request, state: &AppState) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::Upstream(_) | ServerError::InternalError => {
                    error!(%method, %path, error = %err, "Request failed")
                }
                _ => debug!(%method, %path, error = %err, "Request rejected"),
            }
            templates::html_error_response(err)
        }
    };

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed = ?start.elapsed(),
        "Handled request"
    );
    resp
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => home(state),
        ("GET", "/listings") => listings(req.uri().query(), state),
        ("GET", "/health") => text_response("ok"),
        ("GET", p) if p.starts_with("/listings/") => {
            listing_details(&p["/listings/".len()..], state)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Fetch the snapshot for one page. A failed fetch is an empty snapshot plus a notice.
fn load_snapshot(state: &AppState) -> (Vec<ListingRecord>, Option<String>) {
    match state.listings.all_listings() {
        Ok(snapshot) => {
            debug!(count = snapshot.len(), "Fetched listing snapshot");
            (snapshot, None)
        }
        Err(e) => {
            warn!(error = %e, "Listing fetch failed, rendering empty snapshot");
            (Vec::new(), Some(FETCH_FAILED_NOTICE.to_string()))
        }
    }
}

fn home(state: &AppState) -> ResultResp {
    let (snapshot, fetch_notice) = load_snapshot(state);
    html_response(templates::pages::home_page(&snapshot, fetch_notice.as_deref()))
}

fn listings(query: Option<&str>, state: &AppState) -> ResultResp {
    // Bad input is rejected before we spend a round trip on the API.
    let criteria = FilterCriteria::from_query(query, state.price_ceiling)?;
    let (snapshot, fetch_notice) = load_snapshot(state);

    let results = apply_filters(&snapshot, &criteria);
    debug!(
        matched = results.len(),
        total = snapshot.len(),
        query = %criteria.to_query(state.price_ceiling),
        "Applied listing filters"
    );

    html_response(templates::pages::listings_page(&ListingsVm {
        criteria,
        price_ceiling: state.price_ceiling,
        results,
        total: snapshot.len(),
        fetch_notice,
    }))
}

fn listing_details(segment: &str, state: &AppState) -> ResultResp {
    let id = id_from_segment(segment).ok_or(ServerError::NotFound)?;
    let listing = state.listings.listing(&id)?.ok_or(ServerError::NotFound)?;

    html_response(templates::pages::listing_details_page(&listing))
}
