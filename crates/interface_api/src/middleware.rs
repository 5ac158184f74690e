//! API middleware

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use domain_access::authorize_route;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
///
/// Validates JWT tokens and extracts user claims. The claims are also copied
/// onto the response so [`audit_middleware`] can name the user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("Missing or invalid Authorization header");
            ApiError::Unauthorized
        })?;

    match crate::auth::validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => {
            request.extensions_mut().insert(claims.clone());
            let mut response = next.run(request).await;
            response.extensions_mut().insert(claims);
            Ok(response)
        }
        Err(e) => {
            warn!(error = %e, "Token validation failed");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Authorization middleware
///
/// Checks the full request path against the route permission table. Runs after
/// [`auth_middleware`], so a missing `Claims` extension is treated as anonymous.
pub async fn authorization_middleware(
    OriginalUri(uri): OriginalUri,
    request: Request<Body>,
    next: Next,
) -> Response {
    let roles = request
        .extensions()
        .get::<Claims>()
        .map(Claims::portal_roles)
        .unwrap_or_default();

    match authorize_route(&roles, uri.path()) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(path = %uri.path(), reason = %e, "Request denied");
            ApiError::from(e).into_response()
        }
    }
}

/// Audit logging middleware
///
/// Outermost on the API routes, so requests rejected by authentication or
/// authorization are logged too.
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| request.uri().clone());
    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();
    let user_id = response
        .extensions()
        .get::<Claims>()
        .map(|c| c.sub.as_str())
        .unwrap_or("anonymous");

    info!(
        method = %method,
        uri = %uri,
        user = %user_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
