//! moorage-core — shared domain types for the Moorage scheduler.
//!
//! Wire types for resources offered by the cluster resource manager
//! (descriptors, reservation chains, disk and provider metadata), the
//! persisted task records built from them, and the framework identity
//! (instance ID plus authorized roles) the scheduler presents when
//! claiming resources.

pub mod identity;
pub mod labels;
pub mod task;
pub mod types;

pub use identity::{FrameworkIdentity, IdentityConfig, IdentityError, IdentityResult};
pub use labels::{Label, Labels};
pub use task::{ExecutorRecord, TaskRecord};
pub use types::*;
