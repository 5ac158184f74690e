//! Static route permission table

use core_kernel::Role;
use tracing::debug;

use crate::error::AccessError;

/// Where users without a usable role are sent
pub const LOGIN_ROUTE: &str = "/login";

/// Roles allowed under a route prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub prefix: &'static str,
    /// Empty means public
    pub roles: &'static [Role],
}

const PROVIDERS: &[Role] = &[Role::Doctor, Role::Pharmacist, Role::LabTech, Role::Radiologist];

pub static ROUTES: &[RouteRule] = &[
    RouteRule { prefix: "/login", roles: &[] },
    RouteRule { prefix: "/unauthorized", roles: &[] },
    RouteRule { prefix: "/health", roles: &[] },
    RouteRule { prefix: "/client", roles: &[Role::Client] },
    RouteRule { prefix: "/provider", roles: PROVIDERS },
    RouteRule { prefix: "/medical-admin", roles: &[Role::MedicalAdmin] },
    RouteRule { prefix: "/coordination-admin", roles: &[Role::CoordinationAdmin] },
    RouteRule { prefix: "/insurance-manager", roles: &[Role::InsuranceManager] },
    RouteRule { prefix: "/profile", roles: &Role::ALL },
    RouteRule { prefix: "/api/v1", roles: &Role::ALL },
    RouteRule {
        prefix: "/api/v1/reports",
        roles: &[Role::InsuranceManager, Role::CoordinationAdmin],
    },
];

/// True if the user holds any required role; an empty requirement is public
pub fn has_any_role(user_roles: &[Role], required: &[Role]) -> bool {
    required.is_empty() || required.iter().any(|role| user_roles.contains(role))
}

fn normalize(route: &str) -> &str {
    let path = route.split(['?', '#']).next().unwrap_or("");
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Roles required for `route`, from the longest matching prefix
///
/// Prefixes match whole path segments, so `/provider` does not cover
/// `/providers`. Query strings and trailing slashes are ignored.
pub fn required_roles(route: &str) -> Option<&'static [Role]> {
    let path = normalize(route);
    ROUTES
        .iter()
        .filter(|rule| matches_prefix(path, rule.prefix))
        .max_by_key(|rule| rule.prefix.len())
        .map(|rule| rule.roles)
}

/// Whether a user with `user_roles` may open `route`
pub fn can_access_route(user_roles: &[Role], route: &str) -> bool {
    authorize_route(user_roles, route).is_ok()
}

/// Checks a route, explaining a denial
pub fn authorize_route(user_roles: &[Role], route: &str) -> Result<(), AccessError> {
    let required = required_roles(route).ok_or_else(|| {
        debug!(route, "No access rule for route");
        AccessError::UnknownRoute(route.to_string())
    })?;

    if has_any_role(user_roles, required) {
        Ok(())
    } else {
        debug!(route, ?user_roles, "Route denied");
        Err(AccessError::Forbidden {
            route: route.to_string(),
            required: required
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

const fn dashboard(role: Role) -> &'static str {
    match role {
        Role::InsuranceManager => "/insurance-manager",
        Role::CoordinationAdmin => "/coordination-admin",
        Role::MedicalAdmin => "/medical-admin",
        Role::Doctor | Role::Pharmacist | Role::LabTech | Role::Radiologist => "/provider",
        Role::Client => "/client",
    }
}

/// Landing page for a user, chosen by the highest-priority role they hold
pub fn default_route(user_roles: &[Role]) -> &'static str {
    Role::ALL
        .iter()
        .find(|role| user_roles.contains(role))
        .map(|role| dashboard(*role))
        .unwrap_or(LOGIN_ROUTE)
}

/// Parses token role strings, dropping unknown values and duplicates
pub fn parse_roles<I, S>(raw: I) -> Vec<Role>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roles = Vec::new();
    for value in raw {
        match value.as_ref().parse::<Role>() {
            Ok(role) if !roles.contains(&role) => roles.push(role),
            Ok(_) => {}
            Err(_) => debug!(role = value.as_ref(), "Ignoring unknown role"),
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_whole_segments() {
        assert!(matches_prefix("/provider", "/provider"));
        assert!(matches_prefix("/provider/claims/42", "/provider"));
        assert!(!matches_prefix("/providers", "/provider"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/client/?tab=open"), "/client");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(required_roles("/api/v1/statuses"), Some(&Role::ALL[..]));
        assert_eq!(
            required_roles("/api/v1/reports/summary"),
            Some(&[Role::InsuranceManager, Role::CoordinationAdmin][..])
        );
    }

    #[test]
    fn test_every_role_has_a_reachable_dashboard() {
        for role in Role::ALL {
            let home = default_route(&[role]);
            assert!(can_access_route(&[role], home), "{} cannot open {}", role, home);
        }
    }
}
