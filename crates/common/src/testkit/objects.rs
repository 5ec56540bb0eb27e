use std::sync::Mutex;

use async_trait::async_trait;

use super::{lock, Failure};
use crate::error::ServiceError;
use crate::services::ObjectService;
use crate::types::ObjectRecord;

#[derive(Debug, Default)]
pub struct MemoryObjectService {
    objects: Mutex<Vec<ObjectRecord>>,
    failure: Failure,
    searches: Mutex<Vec<Vec<String>>>,
}

impl MemoryObjectService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, object: ObjectRecord) {
        lock(&self.objects).push(object);
    }

    pub fn fail_with(&self, message: &str) {
        self.failure.set(Some(message.to_string()));
    }

    pub fn searches(&self) -> Vec<Vec<String>> {
        lock(&self.searches).clone()
    }
}

#[async_trait]
impl ObjectService for MemoryObjectService {
    async fn search_objects(
        &self,
        object_ids: &[String],
    ) -> Result<Vec<ObjectRecord>, ServiceError> {
        lock(&self.searches).push(object_ids.to_vec());
        self.failure.check()?;

        Ok(lock(&self.objects)
            .iter()
            .filter(|o| object_ids.contains(&o.id))
            .cloned()
            .collect())
    }
}
