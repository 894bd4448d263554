use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::Value;
use kfzf_kube::{ConstructionError, CtorConfig, Observation, Resource, ResourceKind, ResourceTracker, object_kind};

#[cfg(test)]
#[path = "./processor.tests.rs"]
mod processor_tests;

/// Builds resource records from raw objects and keeps the ones that changed.
pub struct Processor {
    config: CtorConfig,
    kind: Option<ResourceKind>,
    typed: bool,
    tracker: ResourceTracker,
}

impl Processor {
    /// Creates new [`Processor`] instance.\
    /// **Note** that kind of each object is taken from the object itself if `kind` is `None`.
    pub fn new(config: CtorConfig, kind: Option<ResourceKind>, typed: bool) -> Self {
        Self {
            config,
            kind,
            typed,
            tracker: ResourceTracker::default(),
        }
    }

    /// Builds record from the `object` and returns its rendered line if the record is new or has changed.
    pub fn process(&mut self, object: &Value) -> Result<Option<String>, ConstructionError> {
        self.process_at(object, &Timestamp::now())
    }

    /// Builds record from the `object` and returns its line rendered relative to `now` if it is new or has changed.
    pub fn process_at(&mut self, object: &Value, now: &Timestamp) -> Result<Option<String>, ConstructionError> {
        let resource = self.build(object)?;
        let id = resource.identity();

        match self.tracker.observe(resource) {
            Observation::Unchanged => Ok(None),
            Observation::Added | Observation::Updated => Ok(self.tracker.get(&id).map(|r| r.render_at(now))),
        }
    }

    /// Returns number of distinct resources seen so far.
    pub fn tracked(&self) -> usize {
        self.tracker.len()
    }

    fn build(&self, object: &Value) -> Result<Resource, ConstructionError> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => object_kind(object)?,
        };

        if self.typed {
            Resource::from_typed_value(kind, object.clone(), &self.config)
        } else {
            Resource::from_dynamic_as(kind, object, &self.config)
        }
    }
}
