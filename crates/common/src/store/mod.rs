mod bucket_object_store;
mod bucket_store;

pub use bucket_object_store::{BucketObjectStore, FETCH_BUCKET_OBJECTS_SUMMARY};
pub use bucket_store::{BucketStore, FETCH_BUCKETS_LIFE, FETCH_BUCKETS_SUMMARY};
