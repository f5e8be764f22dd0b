use crate::error::ApiError;
use axum::{Extension, http::StatusCode};
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Returns a greeting with the user's subject identifier from their JWT claims
#[utoipa::path(
    get,
    path = "/auth",
    responses(
        (status = 200, description = "Successfully authenticated", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn auth(
    claims: Option<Extension<DefaultClaims>>,
) -> Result<(StatusCode, String), ApiError> {
    // Without an issuer configured there is no token layer and no claims
    let sub = claims
        .and_then(|Extension(claims)| claims.sub)
        .ok_or(ApiError::MissingSubject)?;

    Ok((StatusCode::OK, format!("Hello, {sub}")))
}
