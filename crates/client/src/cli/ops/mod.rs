pub mod bucket;
pub mod init;
pub mod object;
mod scope;
pub mod version;

pub use bucket::Bucket;
pub use init::Init;
pub use object::Object;
pub use scope::ScopeArgs;
pub use version::Version;
