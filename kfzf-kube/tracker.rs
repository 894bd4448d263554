use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{Resource, ResourceId};

#[cfg(test)]
#[path = "./tracker.tests.rs"]
mod tracker_tests;

/// Result of observing a resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Record with this identity was not seen before.
    Added,

    /// Record replaced a previous one that differed in something displayed or indexed.
    Updated,

    /// Record was equivalent to the previous one, it was not stored.
    Unchanged,
}

impl Observation {
    /// Returns `true` if the cached line for the record should be rewritten.
    pub fn is_changed(&self) -> bool {
        *self != Observation::Unchanged
    }
}

/// Keeps the last observed record for every resource identity.\
/// **Note** that ordering of observations for a single identity is the caller's job.
#[derive(Default)]
pub struct ResourceTracker {
    records: HashMap<ResourceId, Resource>,
}

impl ResourceTracker {
    /// Stores `resource` if it is new or has changed and returns what happened.
    pub fn observe(&mut self, resource: Resource) -> Observation {
        match self.records.entry(resource.identity()) {
            Entry::Vacant(entry) => {
                entry.insert(resource);
                Observation::Added
            },
            Entry::Occupied(mut entry) => {
                if entry.get().has_changed(&resource) {
                    entry.insert(resource);
                    Observation::Updated
                } else {
                    Observation::Unchanged
                }
            },
        }
    }

    /// Forgets the record with the specified identity and returns it.
    pub fn remove(&mut self, id: &ResourceId) -> Option<Resource> {
        self.records.remove(id)
    }

    /// Returns the last stored record with the specified identity.
    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.records.get(id)
    }

    /// Returns number of tracked records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no tracked records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns iterator over tracked records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.records.values()
    }
}
