//! Route access handler

use axum::{Extension, Json};

use domain_access::{can_access_route, default_route, required_roles};

use crate::auth::Claims;
use crate::dto::access::{AccessQuery, AccessResponse};
use crate::extract::ApiQuery;

/// Reports whether the caller may open a portal route
pub async fn check_access(
    Extension(claims): Extension<Claims>,
    ApiQuery(query): ApiQuery<AccessQuery>,
) -> Json<AccessResponse> {
    let roles = claims.portal_roles();
    Json(AccessResponse {
        allowed: can_access_route(&roles, &query.route),
        required_roles: required_roles(&query.route).map(<[_]>::to_vec),
        default_route: default_route(&roles).to_string(),
        route: query.route,
    })
}
