use crate::test_utils::{backend_set, instance};
use crate::{BackendSet, Comparison, ServiceInstance};

#[test]
fn test_instance_display() {
    assert_eq!(instance("10.0.0.1", 9000).to_string(), "10.0.0.1:9000");
}

#[test]
fn test_backend_set_display() {
    let set = backend_set(&[("10.0.0.1", 9000), ("10.0.0.2", 9001)]);
    assert_eq!(set.to_string(), "10.0.0.1:9000, 10.0.0.2:9001");
    assert_eq!(BackendSet::default().to_string(), "");
}

#[test]
fn test_registration_decode_ignores_unknown_fields() {
    let payload = br#"{"address":"10.0.0.1","port":9000,"weight":5,"zone":"eu"}"#;
    let decoded: ServiceInstance = serde_json::from_slice(payload).unwrap();
    assert_eq!(decoded, instance("10.0.0.1", 9000));
}

#[test]
fn test_identical_sets_are_unchanged_in_both_modes() {
    let a = backend_set(&[("10.0.0.1", 9000), ("10.0.0.2", 9000)]);
    assert!(!Comparison::Ordered.has_changed(&a, &a.clone()));
    assert!(!Comparison::Canonical.has_changed(&a, &a.clone()));
}

#[test]
fn test_membership_difference_is_a_change_in_both_modes() {
    let a = backend_set(&[("10.0.0.1", 9000), ("10.0.0.2", 9000)]);
    let b = backend_set(&[("10.0.0.1", 9000), ("10.0.0.3", 9000)]);
    assert!(Comparison::Ordered.has_changed(&a, &b));
    assert!(Comparison::Canonical.has_changed(&a, &b));
}

#[test]
fn test_length_difference_is_a_change_in_both_modes() {
    let a = backend_set(&[("10.0.0.1", 9000)]);
    let b = backend_set(&[("10.0.0.1", 9000), ("10.0.0.1", 9000)]);
    assert!(Comparison::Ordered.has_changed(&a, &b));
    assert!(Comparison::Canonical.has_changed(&a, &b));
}

/// Enumeration-order jitter: a change only under strict sequence equality.
#[test]
fn test_reorder_only_changes_under_ordered_comparison() {
    let a = backend_set(&[("10.0.0.1", 9000), ("10.0.0.2", 9000)]);
    let b = backend_set(&[("10.0.0.2", 9000), ("10.0.0.1", 9000)]);
    assert!(Comparison::Ordered.has_changed(&a, &b));
    assert!(!Comparison::Canonical.has_changed(&a, &b));
}

/// Same multiset length with differing duplicate counts is still a change.
#[test]
fn test_canonical_respects_duplicate_counts() {
    let a = backend_set(&[("10.0.0.1", 9000), ("10.0.0.1", 9000), ("10.0.0.2", 9000)]);
    let b = backend_set(&[("10.0.0.1", 9000), ("10.0.0.2", 9000), ("10.0.0.2", 9000)]);
    assert!(Comparison::Canonical.has_changed(&a, &b));
}

#[test]
fn test_same_address_different_port_is_a_change() {
    let a = backend_set(&[("10.0.0.1", 9000)]);
    let b = backend_set(&[("10.0.0.1", 9001)]);
    assert!(Comparison::Canonical.has_changed(&a, &b));
}
