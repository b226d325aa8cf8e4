use actix_web::http::{header, Method};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::IssuerError;
use crate::state::AppState;

/// Canonical issuance path; every other path 302-redirects here.
pub const SIGNATURE_PATH: &str = "/v1/signature";

/// The `Origin` header, when the browser sent one.
fn header_origin(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// The request's own URL origin (`scheme://host`), used when no `Origin`
/// header is present and as the redirect base.
fn own_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Catch-all path gate: `302 Found` to the canonical path on the same
/// origin, discarding the original path and query.
pub async fn redirect_to_signature(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), "redirecting to canonical path");
    let location = format!("{}{}", own_origin(&req), SIGNATURE_PATH);
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// `OPTIONS /v1/signature` - CORS preflight.
///
/// A disallowed origin gets a bare 403; an allowed (or absent) origin gets
/// 204 with the CORS grant echoed back.
pub async fn preflight(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, IssuerError> {
    let origin = header_origin(&req);
    if let Some(ref origin) = origin {
        if !state.policy.is_allowed(origin) {
            tracing::warn!(%origin, "preflight denied");
            return Err(IssuerError::OriginDenied);
        }
    }

    let allow = origin.unwrap_or_else(|| own_origin(&req));
    Ok(HttpResponse::NoContent()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, allow))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish())
}

/// `GET /v1/signature` (any non-OPTIONS method) - mint a credential.
///
/// The origin check applies only when the browser sent an `Origin` header;
/// a header-less request is served using its own URL origin for the CORS
/// grant. Only the outcome is logged, never the signature.
pub async fn issue(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, IssuerError> {
    let origin = header_origin(&req);
    if let Some(ref origin) = origin {
        if !state.policy.is_allowed(origin) {
            tracing::warn!(%origin, "origin denied");
            return Err(IssuerError::OriginDenied);
        }
    }

    let credential = state
        .issuer
        .issue()
        .map_err(|e| IssuerError::Internal(e.to_string()))?;

    let allow = origin.unwrap_or_else(|| own_origin(&req));
    tracing::debug!(origin = %allow, "credential issued");

    Ok(HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, allow))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .json(credential))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SIGNATURE_PATH)
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::route().to(issue)),
    )
    .default_service(web::route().to(redirect_to_signature));
}
