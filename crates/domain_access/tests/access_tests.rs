//! Comprehensive tests for domain_access

use core_kernel::Role;
use domain_access::{
    authorize_route, can_access_route, default_route, has_any_role, parse_roles, required_roles,
    AccessError, LOGIN_ROUTE,
};
use proptest::prelude::*;

// ============================================================================
// Role Matching Tests
// ============================================================================

mod role_matching_tests {
    use super::*;

    #[test]
    fn test_empty_requirement_is_public() {
        assert!(has_any_role(&[], &[]));
        assert!(has_any_role(&[Role::Client], &[]));
    }

    #[test]
    fn test_any_overlap_grants() {
        assert!(has_any_role(&[Role::Client, Role::Doctor], &[Role::Doctor, Role::Pharmacist]));
        assert!(!has_any_role(&[Role::Client], &[Role::Doctor, Role::Pharmacist]));
        assert!(!has_any_role(&[], &[Role::Client]));
    }

    #[test]
    fn test_parse_roles_drops_unknown_and_duplicates() {
        let roles = parse_roles(["doctor", "lab-tech", "SUPERUSER", "DOCTOR", ""]);
        assert_eq!(roles, vec![Role::Doctor, Role::LabTech]);
    }
}

// ============================================================================
// Route Table Tests
// ============================================================================

mod route_tests {
    use super::*;

    #[test]
    fn test_portal_areas() {
        assert!(can_access_route(&[Role::MedicalAdmin], "/medical-admin/claims"));
        assert!(!can_access_route(&[Role::MedicalAdmin], "/coordination-admin"));
        assert!(can_access_route(&[Role::Radiologist], "/provider/claims/new"));
        assert!(!can_access_route(&[Role::Client], "/provider"));
        assert!(can_access_route(&[Role::Client], "/client"));
        assert!(can_access_route(&[Role::InsuranceManager], "/insurance-manager/reports"));
    }

    #[test]
    fn test_public_routes() {
        assert!(can_access_route(&[], "/login"));
        assert!(can_access_route(&[], "/health"));
        assert!(can_access_route(&[], "/unauthorized"));
    }

    #[test]
    fn test_unknown_route_is_denied() {
        assert!(required_roles("/admin").is_none());
        assert!(!can_access_route(&Role::ALL, "/admin"));
        assert_eq!(
            authorize_route(&Role::ALL, "/admin"),
            Err(AccessError::UnknownRoute("/admin".to_string()))
        );
    }

    #[test]
    fn test_segment_boundary() {
        assert!(required_roles("/clients").is_none());
        assert!(required_roles("/client/").is_some());
    }

    #[test]
    fn test_forbidden_names_required_roles() {
        let error = authorize_route(&[Role::Client], "/medical-admin").unwrap_err();
        assert_eq!(
            error,
            AccessError::Forbidden {
                route: "/medical-admin".to_string(),
                required: "MEDICAL_ADMIN".to_string(),
            }
        );
        assert!(error.to_string().contains("MEDICAL_ADMIN"));
    }

    #[test]
    fn test_api_routes_open_to_portal_roles() {
        for role in Role::ALL {
            assert!(can_access_route(&[role], "/api/v1/statuses/PAID/next"));
        }
        assert!(!can_access_route(&[], "/api/v1/statuses"));
    }

    #[test]
    fn test_reports_restricted() {
        assert!(can_access_route(&[Role::InsuranceManager], "/api/v1/reports/summary"));
        assert!(!can_access_route(&[Role::Doctor], "/api/v1/reports/summary"));
    }
}

// ============================================================================
// Default Route Tests
// ============================================================================

mod default_route_tests {
    use super::*;

    #[test]
    fn test_highest_priority_role_wins() {
        assert_eq!(default_route(&[Role::Client, Role::MedicalAdmin]), "/medical-admin");
        assert_eq!(
            default_route(&[Role::CoordinationAdmin, Role::InsuranceManager]),
            "/insurance-manager"
        );
        assert_eq!(default_route(&[Role::Pharmacist]), "/provider");
    }

    #[test]
    fn test_no_roles_goes_to_login() {
        assert_eq!(default_route(&[]), LOGIN_ROUTE);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn roles() -> impl Strategy<Value = Vec<Role>> {
    prop::sample::subsequence(Role::ALL.to_vec(), 0..=Role::ALL.len())
}

proptest! {
    #[test]
    fn access_agrees_with_required_roles(user in roles(), route in "(/[a-z-]{0,20}){0,3}") {
        let expected = match required_roles(&route) {
            Some(required) => has_any_role(&user, required),
            None => false,
        };
        prop_assert_eq!(can_access_route(&user, &route), expected);
    }

    #[test]
    fn more_roles_never_lose_access(user in roles(), extra in roles(), route in "(/[a-z-]{0,20}){0,3}") {
        let mut widened = user.clone();
        widened.extend(extra);
        if can_access_route(&user, &route) {
            prop_assert!(can_access_route(&widened, &route));
        }
    }

    #[test]
    fn default_route_is_accessible(user in roles()) {
        let home = default_route(&user);
        prop_assert!(can_access_route(&user, home));
    }
}
