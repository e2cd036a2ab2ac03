//! Ownership classification for offered resources.
//!
//! Other frameworks and the operator may hold reservations overlapping
//! ours, including dynamic reservations made by sibling deployments
//! against the same pre-reserved role pool. A misclassified resource
//! gets double-used and corrupts the stateful tasks built on top, so
//! anything not provably ours is skipped rather than claimed or
//! released.

use std::collections::BTreeSet;

use moorage_core::{FrameworkIdentity, ResourceDescriptor};
use tracing::debug;

use crate::labels::{framework_id, has_resource_id};
use crate::reservation::dynamic_reservations;
use crate::roles::reservation_roles;

/// Whether this framework may process an offered resource.
///
/// A resource with no dynamic reservation is either fully free or only
/// statically pre-reserved for a shared pool, and is always safe to
/// consider. A dynamically reserved resource is ours only when it
/// carries our resource-ID stamp, every role in its chain is one we are
/// authorized for, and any framework-ID stamp on it matches our own
/// known ID. `our_framework_id` is `None` before the first registration
/// completes; a stamped resource is not knowably ours then.
pub fn is_processable(
    resource: &ResourceDescriptor,
    our_roles: &BTreeSet<String>,
    our_framework_id: Option<&str>,
) -> bool {
    if dynamic_reservations(resource).is_empty() {
        return true;
    }

    let resource_id_present = has_resource_id(resource);
    let reservation_is_ours = reservation_roles(resource).is_subset(our_roles);
    // An absent framework-ID stamp means no instance has claimed the
    // bookkeeping yet; a present stamp must match an ID we know.
    let framework_id_ok = match framework_id(resource) {
        None => true,
        Some(claimed) => our_framework_id.is_some_and(|ours| ours == claimed),
    };

    let processable = resource_id_present && reservation_is_ours && framework_id_ok;
    if !processable {
        debug!(
            resource = %resource.name,
            resource_id_present,
            reservation_is_ours,
            framework_id_ok,
            "resource is dynamically reserved but not ours, skipping"
        );
    }
    processable
}

/// [`is_processable`] against a loaded [`FrameworkIdentity`].
pub fn is_processable_for(resource: &ResourceDescriptor, identity: &FrameworkIdentity) -> bool {
    is_processable(resource, &identity.roles, identity.framework_id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moorage_core::labels as keys;
    use moorage_core::ReservationEntry;

    fn our_roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn claimed_entry(role: &str) -> ReservationEntry {
        ReservationEntry::dynamic(role).with_label(keys::RESOURCE_ID, "id-1")
    }

    #[test]
    fn unreserved_resource_is_processable() {
        let resource = ResourceDescriptor::scalar("cpus", 1.0);
        assert!(is_processable(&resource, &our_roles(&[]), None));
    }

    #[test]
    fn statically_reserved_resource_is_processable() {
        // Only pre-reserved by the operator; any framework authorized for
        // the pool may reserve against it.
        let resource = ResourceDescriptor::scalar("cpus", 1.0)
            .with_reservation(ReservationEntry::pre_reserved("slave_public"));
        assert!(is_processable(&resource, &our_roles(&["unrelated"]), None));
    }

    #[test]
    fn missing_resource_id_blocks_even_with_matching_role() {
        // Dynamically reserved by infrastructure tooling outside any
        // scheduler framework: no labels at all.
        let resource = ResourceDescriptor::scalar("cpus", 1.0)
            .with_reservation(ReservationEntry::dynamic("svc-role"));
        assert!(!is_processable(
            &resource,
            &our_roles(&["svc-role"]),
            Some("fw-1")
        ));
    }

    #[test]
    fn unauthorized_role_blocks() {
        let resource =
            ResourceDescriptor::scalar("cpus", 1.0).with_reservation(claimed_entry("other-role"));
        assert!(!is_processable(
            &resource,
            &our_roles(&["svc-role"]),
            Some("fw-1")
        ));
    }

    #[test]
    fn refined_chain_requires_every_role() {
        let resource = ResourceDescriptor::scalar("cpus", 1.0)
            .with_role("slave_public")
            .with_reservation_chain(vec![
                ReservationEntry::pre_reserved("slave_public"),
                ReservationEntry::dynamic("slave_public/svc-role")
                    .with_label(keys::RESOURCE_ID, "id-1"),
            ]);

        // Authorized for the refinement alone: the legacy ancestor role
        // is still in the chain's role set, so this is not ours.
        assert!(!is_processable(
            &resource,
            &our_roles(&["slave_public/svc-role"]),
            None
        ));
        assert!(is_processable(
            &resource,
            &our_roles(&["slave_public", "slave_public/svc-role"]),
            None
        ));
    }

    #[test]
    fn foreign_framework_id_blocks() {
        let resource = ResourceDescriptor::scalar("cpus", 1.0).with_reservation(
            claimed_entry("svc-role").with_label(keys::FRAMEWORK_ID, "other-fw"),
        );
        assert!(!is_processable(
            &resource,
            &our_roles(&["svc-role"]),
            Some("this-fw")
        ));
    }

    #[test]
    fn matching_framework_id_is_processable() {
        let resource = ResourceDescriptor::scalar("cpus", 1.0).with_reservation(
            claimed_entry("svc-role").with_label(keys::FRAMEWORK_ID, "this-fw"),
        );
        assert!(is_processable(
            &resource,
            &our_roles(&["svc-role"]),
            Some("this-fw")
        ));
    }

    #[test]
    fn unclaimed_framework_id_is_processable() {
        // Resource-ID stamp without a framework-ID stamp: treated as
        // claimable bookkeeping. Pinned deliberately; tightening this
        // breaks re-association after upgrades from older deployments.
        let resource =
            ResourceDescriptor::scalar("cpus", 1.0).with_reservation(claimed_entry("svc-role"));
        assert!(is_processable(
            &resource,
            &our_roles(&["svc-role"]),
            Some("this-fw")
        ));
    }

    #[test]
    fn stamped_resource_with_unknown_own_id_blocks() {
        // First boot, before self-registration: we cannot prove the
        // stamp is ours, so the resource is not knowably ours.
        let resource = ResourceDescriptor::scalar("cpus", 1.0).with_reservation(
            claimed_entry("svc-role").with_label(keys::FRAMEWORK_ID, "this-fw"),
        );
        assert!(!is_processable(&resource, &our_roles(&["svc-role"]), None));
    }

    #[test]
    fn identity_adapter_delegates() {
        let identity = FrameworkIdentity::new(
            Some("this-fw".to_string()),
            ["svc-role".to_string()],
        )
        .unwrap();

        let ours =
            ResourceDescriptor::scalar("cpus", 1.0).with_reservation(claimed_entry("svc-role"));
        let foreign =
            ResourceDescriptor::scalar("cpus", 1.0).with_reservation(claimed_entry("other-role"));

        assert!(is_processable_for(&ours, &identity));
        assert!(!is_processable_for(&foreign, &identity));
    }
}
