//! Persisted task records.

use serde::{Deserialize, Serialize};

use crate::types::ResourceDescriptor;

/// Unique identifier for a task.
pub type TaskId = String;

/// Unique identifier for an executor shared by tasks.
pub type ExecutorId = String;

/// A scheduled task and the resources reserved for it.
///
/// Resources may be declared at the task level or on the shared
/// executor; tasks that share an executor split their footprint across
/// both levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
    pub resources: Vec<ResourceDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<ExecutorRecord>,
}

impl TaskRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            resources: Vec::new(),
            executor: None,
        }
    }

    pub fn with_resources(mut self, resources: Vec<ResourceDescriptor>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_executor(mut self, executor: ExecutorRecord) -> Self {
        self.executor = Some(executor);
        self
    }
}

/// The executor a task runs under, with its own resource footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutorRecord {
    pub id: ExecutorId,
    pub resources: Vec<ResourceDescriptor>,
}

impl ExecutorRecord {
    pub fn new(id: &str, resources: Vec<ResourceDescriptor>) -> Self {
        Self {
            id: id.to_string(),
            resources,
        }
    }
}
