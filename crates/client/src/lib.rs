// REST client for the object management API
pub mod api;

// Store wiring over the REST client
pub mod session;

// Local configuration and persisted cache
pub mod state;

pub mod logging;

pub use api::client::{ApiClient, ApiError};
pub use session::Session;
pub use state::{AppConfig, AppState, StateError};
