// client.rs
use crate::api::models::{decode_listing, decode_listings};
use crate::api::{ApiError, ListingSource};
use crate::domain::listing::ListingRecord;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("basafinder/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the BasaFinder REST API.
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// `{base}/seg/seg...`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<(StatusCode, String), ApiError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!(%url, status = status.as_u16(), elapsed = ?start.elapsed(), "Listings API call");

        Ok((status, body))
    }

    pub fn fetch_listings(&self) -> Result<Vec<ListingRecord>, ApiError> {
        let url = self.endpoint(&["listings"])?;
        let (status, body) = self.get(url.clone())?;

        // The collection endpoint has no "not found"; a 404 there is an error.
        if !check_status(status, &url)? {
            return Err(status_error(status, &url));
        }

        decode_listings(&body)
    }

    pub fn fetch_listing(&self, id: &str) -> Result<Option<ListingRecord>, ApiError> {
        let url = self.endpoint(&["listings", id])?;
        let (status, body) = self.get(url.clone())?;

        if !check_status(status, &url)? {
            return Ok(None);
        }

        decode_listing(&body)
    }
}

/// `Ok(true)` for a 2xx body worth decoding, `Ok(false)` for a 404,
/// and `ApiError::Status` for anything else.
fn check_status(status: StatusCode, url: &Url) -> Result<bool, ApiError> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(status_error(status, url))
    }
}

fn status_error(status: StatusCode, url: &Url) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        url: url.to_string(),
    }
}

impl ListingSource for ApiClient {
    fn all_listings(&self) -> Result<Vec<ListingRecord>, ApiError> {
        self.fetch_listings()
    }

    fn listing(&self, id: &str) -> Result<Option<ListingRecord>, ApiError> {
        self.fetch_listing(id)
    }
}
