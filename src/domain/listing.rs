use chrono::{DateTime, Utc};
use url::form_urlencoded;

/// A rental listing after boundary validation.
/// Everything past `api::models` can assume these fields are well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub id: String,
    pub location: String,
    pub rent_amount: u64,
    pub bedrooms: u32,
    pub amenities: Vec<String>,
    pub description: String,
    pub images: Vec<String>,

    // Display only, never filtered on.
    pub created_at: Option<DateTime<Utc>>,
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

impl ListingRecord {
    /// First image, upgraded to https, or the placeholder when there are none.
    pub fn cover_image(&self) -> String {
        self.images
            .first()
            .map(|url| secure_image_url(url))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// Up to `n` amenities plus how many were left out.
    pub fn amenity_preview(&self, n: usize) -> (&[String], usize) {
        let shown = &self.amenities[..self.amenities.len().min(n)];
        (shown, self.amenities.len() - shown.len())
    }
}

/// `/listings/{id}` with the id encoded as a single path segment.
pub fn details_path(id: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/listings/{encoded}")
}

/// Decode an id segment produced by [`details_path`].
pub fn id_from_segment(segment: &str) -> Option<String> {
    if segment.is_empty() || segment.contains(&['/', '=', '&'][..]) {
        return None;
    }
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(id, _)| id.into_owned())
        .filter(|id| !id.trim().is_empty())
}

/// Image hosts hand back http URLs; pages are served over https.
pub fn secure_image_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// 15000 -> "15,000"
pub fn format_rent(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
