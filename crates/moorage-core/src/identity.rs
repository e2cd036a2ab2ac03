//! Framework identity configuration.
//!
//! The scheduler presents one identity to the resource manager: the
//! framework ID it was assigned on registration (absent until the first
//! registration completes) and the set of roles it is authorized to
//! reserve under, meaning its own role plus any pre-reserved roles it
//! has been granted. The identity is loaded at startup and passed into
//! the offer engine on every call; nothing in this crate caches it.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ANY_ROLE;

/// Result type alias for identity validation.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Errors raised while validating an identity configuration.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("authorized role set is empty")]
    NoRoles,

    #[error("authorized role set contains the wildcard role")]
    WildcardRole,

    #[error("framework id is empty")]
    EmptyFrameworkId,
}

/// On-disk identity configuration (TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Assigned on first registration; absent before that.
    pub framework_id: Option<String>,
    /// Roles this framework may reserve under.
    pub roles: Vec<String>,
}

impl IdentityConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: IdentityConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate into a [`FrameworkIdentity`].
    ///
    /// The wildcard is never a real authorization and is rejected here,
    /// before it can reach the offer engine.
    pub fn validate(self) -> IdentityResult<FrameworkIdentity> {
        if self.roles.is_empty() {
            return Err(IdentityError::NoRoles);
        }
        if self.roles.iter().any(|role| role == ANY_ROLE) {
            return Err(IdentityError::WildcardRole);
        }
        if self.framework_id.as_deref() == Some("") {
            return Err(IdentityError::EmptyFrameworkId);
        }
        Ok(FrameworkIdentity {
            framework_id: self.framework_id,
            roles: self.roles.into_iter().collect(),
        })
    }
}

/// A validated framework identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkIdentity {
    pub framework_id: Option<String>,
    pub roles: BTreeSet<String>,
}

impl FrameworkIdentity {
    pub fn new(
        framework_id: Option<String>,
        roles: impl IntoIterator<Item = String>,
    ) -> IdentityResult<Self> {
        IdentityConfig {
            framework_id,
            roles: roles.into_iter().collect(),
        }
        .validate()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Ok(IdentityConfig::from_file(path)?.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_minimal_config() {
        let config: IdentityConfig = toml::from_str(r#"roles = ["svc-role"]"#).unwrap();
        let identity = config.validate().unwrap();
        assert_eq!(identity.framework_id, None);
        assert!(identity.roles.contains("svc-role"));
    }

    #[test]
    fn rejects_empty_role_set() {
        let config = IdentityConfig {
            framework_id: None,
            roles: vec![],
        };
        assert!(matches!(config.validate(), Err(IdentityError::NoRoles)));
    }

    #[test]
    fn rejects_wildcard_role() {
        let config = IdentityConfig {
            framework_id: Some("fw-1".to_string()),
            roles: vec!["svc-role".to_string(), "*".to_string()],
        };
        assert!(matches!(config.validate(), Err(IdentityError::WildcardRole)));
    }

    #[test]
    fn rejects_empty_framework_id() {
        let config = IdentityConfig {
            framework_id: Some(String::new()),
            roles: vec!["svc-role".to_string()],
        };
        assert!(matches!(
            config.validate(),
            Err(IdentityError::EmptyFrameworkId)
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
framework_id = "fw-1"
roles = ["svc-role", "slave_public/svc-role"]
"#
        )
        .unwrap();

        let identity = FrameworkIdentity::from_file(file.path()).unwrap();
        assert_eq!(identity.framework_id.as_deref(), Some("fw-1"));
        assert_eq!(identity.roles.len(), 2);
    }
}
