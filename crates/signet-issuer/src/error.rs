use actix_web::{HttpResponse, ResponseError};

/// Handler-facing error type mapped onto the HTTP surface.
#[derive(Debug, thiserror::Error)]
pub enum IssuerError {
    /// Origin present and not allow-listed
    #[error("CORS check failed")]
    OriginDenied,
    /// Anything that must fail closed with a generic 5xx
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for IssuerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Plain-text body, no CORS headers; the browser reports the block.
            IssuerError::OriginDenied => HttpResponse::Forbidden().body("CORS check failed"),
            IssuerError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}
