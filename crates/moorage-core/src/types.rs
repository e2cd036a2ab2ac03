//! Resource descriptor wire types.
//!
//! These types mirror the resource manager's offer encoding. A resource
//! is a named quantity (scalar, ranges, or set) that may carry
//! reservation metadata, a disk descriptor for volumes, and a provider
//! ID. Reservations arrive in one of two legacy-compatible forms: a
//! single embedded entry (classic) or an ordered refinement chain. All
//! of these are immutable values; derivations elsewhere in the framework
//! allocate new values rather than mutating in place.

use serde::{Deserialize, Serialize};

use crate::labels::Labels;

/// The wildcard role sentinel. On the wire it means "unassigned to any
/// role" and is never a real ownership claim.
pub const ANY_ROLE: &str = "*";

// ── Resource ──────────────────────────────────────────────────────

/// A quantity of one resource type offered by the resource manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource name: "cpus", "mem", "disk", "ports", ...
    pub name: String,
    pub value: ResourceValue,
    /// Legacy top-level role field. `"*"` means unreserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Classic single-entry reservation form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationEntry>,
    /// Refined reservation chain: entry i reserves against entry i-1's
    /// role. The last entry is the reservation currently held.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reservations: Vec<ReservationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<DiskDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<ProviderId>,
}

impl ResourceDescriptor {
    /// A scalar resource (cpus, mem, disk) with no reservation.
    pub fn scalar(name: &str, value: f64) -> Self {
        Self::new(name, ResourceValue::Scalar { value })
    }

    /// A ranges resource (ports) with no reservation.
    pub fn ranges(name: &str, ranges: Vec<Range>) -> Self {
        Self::new(name, ResourceValue::Ranges { ranges })
    }

    pub fn new(name: &str, value: ResourceValue) -> Self {
        Self {
            name: name.to_string(),
            value,
            role: None,
            reservation: None,
            reservations: Vec::new(),
            disk: None,
            provider_id: None,
        }
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Attach a classic single-entry reservation.
    pub fn with_reservation(mut self, entry: ReservationEntry) -> Self {
        self.reservation = Some(entry);
        self
    }

    /// Attach a refined reservation chain.
    pub fn with_reservation_chain(mut self, chain: Vec<ReservationEntry>) -> Self {
        self.reservations = chain;
        self
    }

    pub fn with_disk(mut self, disk: DiskDescriptor) -> Self {
        self.disk = Some(disk);
        self
    }

    pub fn with_provider_id(mut self, provider_id: ProviderId) -> Self {
        self.provider_id = Some(provider_id);
        self
    }
}

/// The quantity carried by a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceValue {
    Scalar { value: f64 },
    Ranges { ranges: Vec<Range> },
    Set { items: Vec<String> },
}

/// A closed interval, begin and end inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub begin: u64,
    pub end: u64,
}

// ── Reservation ───────────────────────────────────────────────────

/// One link in a reservation chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationEntry {
    pub role: String,
    #[serde(rename = "type")]
    pub kind: ReservationKind,
    /// Authenticated identity that made the reservation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    /// Opaque label set carrying framework bookkeeping. The resource
    /// manager stores these without interpreting them.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl ReservationEntry {
    /// A DYNAMIC reservation made by a framework at runtime.
    pub fn dynamic(role: &str) -> Self {
        Self::new(role, ReservationKind::Dynamic)
    }

    /// A STATIC reservation made by the operator for a role pool.
    pub fn pre_reserved(role: &str) -> Self {
        Self::new(role, ReservationKind::Static)
    }

    pub fn new(role: &str, kind: ReservationKind) -> Self {
        Self {
            role: role.to_string(),
            kind,
            principal: None,
            labels: Labels::new(),
        }
    }

    pub fn with_principal(mut self, principal: &str) -> Self {
        self.principal = Some(principal.to_string());
        self
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.push(key, value);
        self
    }
}

/// How a reservation was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationKind {
    /// Pre-reserved by the operator for a role pool. Informational
    /// ancestry in a chain, never a framework's own claim.
    Static,
    /// Reserved at runtime by a framework.
    Dynamic,
}

impl ReservationKind {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

// ── Disk ──────────────────────────────────────────────────────────

/// Disk metadata for volume resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence: Option<Persistence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DiskSource>,
}

impl DiskDescriptor {
    /// A persistent volume carved from shared free space.
    pub fn persistent(persistence_id: &str) -> Self {
        Self {
            persistence: Some(Persistence {
                id: persistence_id.to_string(),
                principal: None,
            }),
            source: None,
        }
    }

    /// A pre-provisioned MOUNT volume rooted at the given device path.
    pub fn mount(root: &str) -> Self {
        Self {
            persistence: None,
            source: Some(DiskSource {
                kind: DiskSourceKind::Mount,
                root: Some(root.to_string()),
            }),
        }
    }

    pub fn with_persistence(mut self, persistence_id: &str) -> Self {
        self.persistence = Some(Persistence {
            id: persistence_id.to_string(),
            principal: None,
        });
        self
    }
}

/// Stable identity of a persistent volume. Survives task restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persistence {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
}

/// Where a disk resource comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSource {
    #[serde(rename = "type")]
    pub kind: DiskSourceKind,
    /// Mount point or path root on the agent, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskSourceKind {
    /// A pre-provisioned whole device.
    Mount,
    /// A directory carved out of shared free space.
    Path,
    Block,
    Raw,
}

impl DiskSourceKind {
    pub fn is_mount(&self) -> bool {
        matches!(self, Self::Mount)
    }
}

// ── Provider ──────────────────────────────────────────────────────

/// Identifies the storage/resource provider that produced a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
