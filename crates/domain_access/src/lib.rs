//! Access Domain
//!
//! Decides which portal areas and API routes a user may reach, given the roles
//! carried in their token. The route table is static; every check is a pure
//! function of the table, the route and the user's roles.
//!
//! Unknown routes are denied. A route with an empty role list is public.

pub mod routes;
pub mod error;

pub use routes::{
    authorize_route, can_access_route, default_route, has_any_role, parse_roles, required_roles,
    RouteRule, LOGIN_ROUTE, ROUTES,
};
pub use error::AccessError;
