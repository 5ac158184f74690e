//! Access DTOs

use serde::{Deserialize, Serialize};

use core_kernel::Role;

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub route: String,
}

#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub route: String,
    pub allowed: bool,
    /// `None` when no rule covers the route
    pub required_roles: Option<Vec<Role>>,
    pub default_route: String,
}
