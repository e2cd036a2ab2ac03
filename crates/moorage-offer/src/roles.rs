//! Role chain resolution.
//!
//! A resource can be reserved under a chain of roles when a framework
//! refines an operator pre-reservation (e.g. `slave_public` refined to
//! `slave_public/svc-role`). The resolvers here compute the set of
//! roles a reservation chain actually claims and the single canonical
//! role used for display and bookkeeping.

use std::collections::BTreeSet;

use moorage_core::ResourceDescriptor;

pub use moorage_core::ANY_ROLE;

use crate::reservation::{dynamic_reservations, effective_reservation};

/// The set of roles a resource is currently reserved under.
///
/// Union of every DYNAMIC entry's role and the legacy top-level role
/// when set. The wildcard is removed unconditionally: it marks a
/// resource as unassigned and is never an ownership claim.
pub fn reservation_roles(resource: &ResourceDescriptor) -> BTreeSet<String> {
    let mut roles: BTreeSet<String> = dynamic_reservations(resource)
        .iter()
        .map(|entry| entry.role.clone())
        .collect();
    if let Some(role) = &resource.role {
        roles.insert(role.clone());
    }
    roles.remove(ANY_ROLE);
    roles
}

/// The canonical role of a resource: the most specific reservation's
/// role, else the legacy top-level role, else the wildcard.
pub fn role(resource: &ResourceDescriptor) -> &str {
    effective_reservation(resource)
        .map(|entry| entry.role.as_str())
        .or(resource.role.as_deref())
        .unwrap_or(ANY_ROLE)
}
