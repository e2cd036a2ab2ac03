//! Reservation extraction.
//!
//! Reservation metadata is stored in one of two legacy-compatible wire
//! forms: a single embedded entry (classic) or an ordered refinement
//! chain where entry i reserves against entry i-1's role. The functions
//! here normalize both into a single view so the rest of the engine
//! never branches on wire form.

use moorage_core::{ReservationEntry, ResourceDescriptor};
use tracing::warn;

/// All DYNAMIC reservation entries on a resource, in chain order.
///
/// STATIC entries are operator pre-reservations, not framework claims,
/// and are filtered out wherever they appear in the chain.
pub fn dynamic_reservations(resource: &ResourceDescriptor) -> Vec<&ReservationEntry> {
    let mut entries: Vec<&ReservationEntry> = resource.reservations.iter().collect();
    if let Some(classic) = &resource.reservation {
        entries.push(classic);
    }
    entries.retain(|entry| entry.kind.is_dynamic());
    entries
}

/// The most specific reservation currently held on a resource.
///
/// For a refinement chain the last entry wins; earlier entries are
/// ancestor roles (e.g. the operator's pre-reserved static role), not
/// currently-held claims. Well-formed input populates at most one wire
/// form, but when both are present the chain is preferred.
pub fn effective_reservation(resource: &ResourceDescriptor) -> Option<&ReservationEntry> {
    if let Some(last) = resource.reservations.last() {
        if resource.reservation.is_some() {
            warn!(
                resource = %resource.name,
                "resource carries both reservation forms, using the refinement chain"
            );
        }
        return Some(last);
    }
    resource.reservation.as_ref()
}
