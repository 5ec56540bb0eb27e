mod audit;
mod bucket;
mod bucket_object;
mod object;
mod permission;

pub use audit::Audit;
pub use bucket::Bucket;
pub use bucket_object::BucketObject;
pub use object::ObjectRecord;
pub use permission::{BucketPermission, BucketSearchPermissionsOptions, ObjectPermission};

/// Entities whose cache entries are scoped by the bucket they belong to.
pub trait BucketScoped {
    fn bucket_id(&self) -> &str;
}

impl BucketScoped for Bucket {
    fn bucket_id(&self) -> &str {
        &self.bucket_id
    }
}

impl BucketScoped for BucketObject {
    fn bucket_id(&self) -> &str {
        &self.bucket_id
    }
}
