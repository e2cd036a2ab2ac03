//! moorage-offer — resource ownership and reservation reconciliation.
//!
//! Given resources offered by the cluster resource manager (or attached
//! to persisted task records), this crate decides which ones already
//! belong to this framework's prior work and recovers the stable
//! identifiers stamped on them. Everything here is a pure function over
//! immutable descriptor values, with no I/O and no shared state, so
//! calls are safe to run concurrently and to memoize.
//!
//! # Components
//!
//! - **`reservation`** — normalizes the two reservation wire forms
//! - **`labels`** — ownership label and sub-descriptor accessors
//! - **`roles`** — effective role chain resolution
//! - **`classify`** — decides whether a reserved resource is ours to process
//! - **`collect`** — batch helpers over task resource lists

pub mod classify;
pub mod collect;
pub mod labels;
pub mod reservation;
pub mod roles;

pub use classify::{is_processable, is_processable_for};
pub use collect::{all_resources, task_resources, unique_framework_ids, unique_resource_ids};
pub use labels::{
    disk_source, framework_id, has_framework_id, has_resource_id, is_mount_volume, namespace,
    persistence_id, principal, provider_id, resource_id,
};
pub use reservation::{dynamic_reservations, effective_reservation};
pub use roles::{ANY_ROLE, reservation_roles, role};
