use crate::api::ApiError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or the listings API behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Listings service error: {0}")]
    Upstream(#[from] ApiError),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
