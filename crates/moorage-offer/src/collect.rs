//! Batch helpers over task resource lists.

use std::collections::BTreeSet;

use moorage_core::{ResourceDescriptor, TaskRecord};

use crate::labels::{framework_id, resource_id};

/// All resources reserved for a task: task-level first, then the shared
/// executor's, when one is attached.
pub fn task_resources(task: &TaskRecord) -> Vec<ResourceDescriptor> {
    let mut resources = task.resources.clone();
    if let Some(executor) = &task.executor {
        resources.extend(executor.resources.iter().cloned());
    }
    resources
}

/// All resources across a set of tasks, in task order.
///
/// Duplicates are retained when several tasks carry copies of the same
/// resource; deduplication by ID is the caller's job via
/// [`unique_resource_ids`].
pub fn all_resources(tasks: &[TaskRecord]) -> Vec<ResourceDescriptor> {
    tasks.iter().flat_map(task_resources).collect()
}

/// Resource IDs stamped on the given resources, first occurrence first,
/// deduplicated.
pub fn unique_resource_ids(resources: &[ResourceDescriptor]) -> Vec<String> {
    unique_by(resources, resource_id)
}

/// Framework IDs stamped on the given resources, first occurrence
/// first, deduplicated.
pub fn unique_framework_ids(resources: &[ResourceDescriptor]) -> Vec<String> {
    unique_by(resources, framework_id)
}

fn unique_by<'a>(
    resources: &'a [ResourceDescriptor],
    get: fn(&'a ResourceDescriptor) -> Option<&'a str>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut values = Vec::new();
    for value in resources.iter().filter_map(get) {
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}
