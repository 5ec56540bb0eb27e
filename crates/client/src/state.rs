use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use common::types::Bucket;

pub const APP_NAME: &str = "coms";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const BUCKETS_FILE_NAME: &str = "buckets.json";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root URL of the object management service
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Default tracing level, overridable with RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Keep the bucket cache on disk between runs
    #[serde(default = "default_persist_buckets")]
    pub persist_buckets: bool,
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("hardcoded URL must parse")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_persist_buckets() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_token: None,
            log_level: default_log_level(),
            persist_buckets: default_persist_buckets(),
        }
    }
}

impl AppConfig {
    /// The configured level, falling back to INFO when it does not parse
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the coms directory (~/.coms)
    pub coms_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Path to the persisted bucket cache
    pub buckets_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the coms directory path (custom or default ~/.coms)
    pub fn coms_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new coms state directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let coms_dir = Self::coms_dir(custom_path)?;

        if coms_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&coms_dir)?;

        let config = config.unwrap_or_default();
        let config_path = coms_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            buckets_path: coms_dir.join(BUCKETS_FILE_NAME),
            coms_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the coms directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let coms_dir = Self::coms_dir(custom_path)?;

        if !coms_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = coms_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            buckets_path: coms_dir.join(BUCKETS_FILE_NAME),
            coms_dir,
            config_path,
            config,
        })
    }

    /// Like [`AppState::load`], but an uninitialized directory is `Ok(None)`.
    /// Any other failure, such as a malformed config, is still an error.
    pub fn load_optional(custom_path: Option<PathBuf>) -> Result<Option<Self>, StateError> {
        match Self::load(custom_path) {
            Ok(state) => Ok(Some(state)),
            Err(StateError::NotInitialized) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Read the persisted bucket cache. A missing file is an empty cache.
    pub fn load_buckets(&self) -> Result<Vec<Bucket>, StateError> {
        if !self.config.persist_buckets || !self.buckets_path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.buckets_path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_buckets(&self, buckets: &[Bucket]) -> Result<(), StateError> {
        if !self.config.persist_buckets {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(buckets)?;
        fs::write(&self.buckets_path, json)?;
        tracing::debug!(count = buckets.len(), path = ?self.buckets_path, "saved bucket cache");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("coms directory not initialized. Run 'coms init' first")]
    NotInitialized,

    #[error("coms directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("bucket cache error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_load_round_trips_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("coms");
        let config = AppConfig {
            api_url: Url::parse("https://coms.example.com").unwrap(),
            auth_token: Some("token".to_string()),
            ..Default::default()
        };

        AppState::init(Some(dir.clone()), Some(config.clone())).unwrap();
        let state = AppState::load(Some(dir.clone())).unwrap();

        assert_eq!(state.config, config);
        assert!(matches!(
            AppState::init(Some(dir), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_load_uninitialized_dir_fails() {
        let temp = TempDir::new().unwrap();
        let result = AppState::load(Some(temp.path().join("missing")));
        assert!(matches!(result, Err(StateError::NotInitialized)));
    }

    #[test]
    fn test_load_optional_separates_missing_from_malformed() {
        let temp = TempDir::new().unwrap();
        assert!(AppState::load_optional(Some(temp.path().join("missing")))
            .unwrap()
            .is_none());

        let dir = temp.path().join("coms");
        let state = AppState::init(Some(dir.clone()), None).unwrap();
        assert!(AppState::load_optional(Some(dir.clone())).unwrap().is_some());

        fs::write(&state.config_path, "api_url = [not toml").unwrap();
        assert!(matches!(
            AppState::load_optional(Some(dir)),
            Err(StateError::TomlDe(_))
        ));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert!(config.persist_buckets);
    }

    #[test]
    fn test_bucket_cache_persists() {
        let temp = TempDir::new().unwrap();
        let state = AppState::init(Some(temp.path().join("coms")), None).unwrap();
        assert!(state.load_buckets().unwrap().is_empty());

        let buckets = vec![Bucket::new("A", "Ay"), Bucket::new("B", "Bee")];
        state.save_buckets(&buckets).unwrap();

        assert_eq!(state.load_buckets().unwrap(), buckets);
    }

    #[test]
    fn test_disabled_persistence_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            persist_buckets: false,
            ..Default::default()
        };
        let state = AppState::init(Some(temp.path().join("coms")), Some(config)).unwrap();

        state.save_buckets(&[Bucket::new("A", "Ay")]).unwrap();

        assert!(!state.buckets_path.exists());
        assert!(state.load_buckets().unwrap().is_empty());
    }
}
