//! Ownership label and sub-descriptor accessors.
//!
//! Every accessor here is total: a missing reservation, label, or disk
//! descriptor yields `None`, never an error. Label reads inspect only
//! the most specific reservation entry, since that is where framework
//! bookkeeping is stamped.

use moorage_core::labels as keys;
use moorage_core::{DiskSource, ProviderId, ResourceDescriptor};

use crate::reservation::effective_reservation;

/// The resource ID this framework stamped on the reservation, if any.
pub fn resource_id(resource: &ResourceDescriptor) -> Option<&str> {
    effective_reservation(resource).and_then(|entry| entry.labels.get(keys::RESOURCE_ID))
}

/// The framework-instance ID stamped on the reservation, if any.
pub fn framework_id(resource: &ResourceDescriptor) -> Option<&str> {
    effective_reservation(resource).and_then(|entry| entry.labels.get(keys::FRAMEWORK_ID))
}

/// The namespace the resource was claimed under, if any.
pub fn namespace(resource: &ResourceDescriptor) -> Option<&str> {
    effective_reservation(resource).and_then(|entry| entry.labels.get(keys::NAMESPACE))
}

/// The principal that made the effective reservation.
pub fn principal(resource: &ResourceDescriptor) -> Option<&str> {
    effective_reservation(resource).and_then(|entry| entry.principal.as_deref())
}

pub fn has_resource_id(resource: &ResourceDescriptor) -> bool {
    resource_id(resource).is_some()
}

pub fn has_framework_id(resource: &ResourceDescriptor) -> bool {
    framework_id(resource).is_some()
}

/// Persistence ID of a persistent volume.
///
/// Read from the disk descriptor, not the reservation; present only for
/// volume resources that survive task restarts.
pub fn persistence_id(resource: &ResourceDescriptor) -> Option<&str> {
    resource
        .disk
        .as_ref()?
        .persistence
        .as_ref()
        .map(|persistence| persistence.id.as_str())
}

/// The provider that produced this resource, if any.
pub fn provider_id(resource: &ResourceDescriptor) -> Option<&ProviderId> {
    resource.provider_id.as_ref()
}

/// Whether a resource is a pre-provisioned MOUNT volume, as opposed to
/// a path/root volume carved out of shared free space.
pub fn is_mount_volume(resource: &ResourceDescriptor) -> bool {
    resource
        .disk
        .as_ref()
        .and_then(|disk| disk.source.as_ref())
        .is_some_and(|source| source.kind.is_mount())
}

/// The disk source of a MOUNT volume. `None` for path/root volumes.
pub fn disk_source(resource: &ResourceDescriptor) -> Option<&DiskSource> {
    if !is_mount_volume(resource) {
        return None;
    }
    resource.disk.as_ref()?.source.as_ref()
}
