use crate::api::ApiError;
use crate::domain::listing::ListingRecord;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

// {
//   success: bool,
//   message: string,
//   data: listing | [listing]
// }
//
// listing
//  ├── _id
//  ├── location
//  ├── rentAmount      number, sometimes a string
//  ├── bedrooms        number, sometimes a string
//  ├── amenities       [string]
//  ├── description
//  ├── images          [url]
//  └── createdAt       RFC 3339

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(rename = "_id")]
    pub mongo_id: Option<String>,
    pub id: Option<String>,

    pub location: Option<String>,
    pub rent_amount: Option<Value>,
    pub bedrooms: Option<Value>,
    pub amenities: Option<Vec<Value>>,
    pub description: Option<String>,
    pub images: Option<Vec<Value>>,

    pub created_at: Option<String>,
}

impl RawListing {
    /// Validate the loosely-typed payload into a strict record.
    /// Identity and the two filterable numbers are required; text and lists default.
    pub fn into_record(self) -> Result<ListingRecord, String> {
        let id = self
            .mongo_id
            .or(self.id)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty listing id")?;

        let rent_amount = self
            .rent_amount
            .as_ref()
            .and_then(whole_number)
            .ok_or_else(|| format!("Listing {id}: missing or invalid rentAmount"))?;

        let bedrooms = self
            .bedrooms
            .as_ref()
            .and_then(whole_number)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| format!("Listing {id}: missing or invalid bedrooms"))?;

        let created_at = self
            .created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(ListingRecord {
            id,
            location: self.location.unwrap_or_default(),
            rent_amount,
            bedrooms,
            amenities: strings_only(self.amenities),
            description: self.description.unwrap_or_default(),
            images: strings_only(self.images),
            created_at,
        })
    }
}

/// Non-negative integer from a JSON number (`15000`, `15000.0`) or numeric string
/// (`"15000"`, `"15000.0"`).
fn whole_number(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_float))
        }
        _ => None,
    }
}

fn whole_float(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then(|| f as u64)
}

fn strings_only(values: Option<Vec<Value>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn parse_envelope(body: &str) -> Result<Envelope, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::JsonParse(e.to_string()))
}

/// Decode `GET /listings`. Malformed elements are logged and skipped.
pub fn decode_listings(body: &str) -> Result<Vec<ListingRecord>, ApiError> {
    let envelope = parse_envelope(body)?;

    if envelope.success == Some(false) {
        return Err(ApiError::Unsuccessful(
            envelope.message.unwrap_or_else(|| "request failed".into()),
        ));
    }

    let data = envelope
        .data
        .ok_or_else(|| ApiError::UnexpectedShape("data missing".into()))?;
    let arr = data
        .as_array()
        .ok_or_else(|| ApiError::UnexpectedShape("data is not an array".into()))?;

    let mut listings = Vec::with_capacity(arr.len());
    for (index, value) in arr.iter().enumerate() {
        let record = RawListing::deserialize(value)
            .map_err(|e| e.to_string())
            .and_then(RawListing::into_record);

        match record {
            Ok(listing) => listings.push(listing),
            Err(reason) => warn!(index, %reason, "Skipping malformed listing"),
        }
    }

    Ok(listings)
}

/// Decode `GET /listings/{id}`. `success: false` or `data: null` means not found.
pub fn decode_listing(body: &str) -> Result<Option<ListingRecord>, ApiError> {
    let envelope = parse_envelope(body)?;

    if envelope.success == Some(false) {
        return Ok(None);
    }

    match envelope.data {
        None => Err(ApiError::UnexpectedShape("data missing".into())),
        Some(Value::Null) => Ok(None),
        Some(value) => RawListing::deserialize(&value)
            .map_err(|e| e.to_string())
            .and_then(RawListing::into_record)
            .map(Some)
            .map_err(ApiError::UnexpectedShape),
    }
}
