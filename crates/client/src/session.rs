use std::sync::Arc;

use common::loading::LoadingIndicator;
use common::store::{BucketObjectStore, BucketStore};
use common::toast::Notifier;

use crate::api::client::ApiClient;

/// Both stores wired to one API client and one loading indicator.
pub struct Session {
    pub loading: LoadingIndicator,
    pub buckets: BucketStore,
    pub bucket_objects: BucketObjectStore,
}

impl Session {
    pub fn new(client: ApiClient, toast: Arc<dyn Notifier>) -> Self {
        let client = Arc::new(client);
        let loading = LoadingIndicator::new();

        let buckets = BucketStore::new(
            client.clone(),
            client.clone(),
            loading.clone(),
            toast.clone(),
        );
        let bucket_objects = BucketObjectStore::new(
            client.clone(),
            client.clone(),
            client,
            loading.clone(),
            toast,
        );

        Self {
            loading,
            buckets,
            bucket_objects,
        }
    }
}
