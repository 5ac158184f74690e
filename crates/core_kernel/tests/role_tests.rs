//! Role parsing tests

use core_kernel::Role;
use proptest::prelude::*;

#[test]
fn test_serde_uses_screaming_snake_case() {
    let json = serde_json::to_string(&Role::CoordinationAdmin).unwrap();
    assert_eq!(json, "\"COORDINATION_ADMIN\"");

    let role: Role = serde_json::from_str("\"INSURANCE_MANAGER\"").unwrap();
    assert_eq!(role, Role::InsuranceManager);
}

#[test]
fn test_all_roles_are_distinct() {
    let mut names: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), Role::ALL.len());
}

proptest! {
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = input.parse::<Role>();
    }

    #[test]
    fn parse_ignores_case_and_separators(index in 0usize..8, lower in any::<bool>()) {
        let role = Role::ALL[index];
        let spelled = role.as_str().replace('_', "-");
        let spelled = if lower { spelled.to_lowercase() } else { spelled };
        prop_assert_eq!(spelled.parse::<Role>().unwrap(), role);
    }
}
