//! Opaque reservation labels and the ownership keys stored in them.
//!
//! Reservation label sets smuggle framework bookkeeping (resource ID,
//! framework ID, namespace) through the resource manager, which stores
//! them without interpreting them. Absence of a key means "not yet
//! claimed by any framework's bookkeeping", not "unreserved".

use serde::{Deserialize, Serialize};

/// Label key for the stable resource ID this framework assigns when it
/// reserves a resource.
pub const RESOURCE_ID: &str = "resource_id";

/// Label key for the ID of the framework instance that claimed a resource.
pub const FRAMEWORK_ID: &str = "framework_id";

/// Label key for the namespace a resource is claimed under.
pub const NAMESPACE: &str = "namespace";

/// One key/value pair in a reservation label set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

/// An ordered, opaque label set.
///
/// The resource manager treats labels as a plain list, so duplicate keys
/// can arrive in offers; reads return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first label with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|label| label.key == key)
            .map(|label| label.value.as_str())
    }

    /// Append a label. Duplicate keys are not collapsed.
    pub fn push(&mut self, key: &str, value: &str) {
        self.0.push(Label {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
}
