//! Configuration management for RAX FTP Mirror
//!
//! Connection defaults (port and credentials) layered from built-in values,
//! an optional `config.toml` and `RAX_MIRROR_*` environment variables.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;

/// Default FTP control port
pub const DEFAULT_PORT: u16 = 21;
/// Username for public access data
pub const DEFAULT_USERNAME: &str = "anonymous";
/// Password for anonymous users
pub const DEFAULT_PASSWORD: &str = "";

/// Connection settings used when opening a session with the server
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    /// Port for the FTP control connection, unless the server address names one
    /// Environment: RAX_MIRROR_PORT
    pub port: u16,

    /// Environment: RAX_MIRROR_USERNAME
    pub username: String,

    /// Environment: RAX_MIRROR_PASSWORD
    pub password: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl MirrorConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Installed layout first, then the working directory. TOML only.
        let config_paths = ["rax-ftp-mirror/config", "config"];

        let mut builder = Self::defaults()?;
        for config_path in config_paths {
            builder = builder.add_source(File::new(config_path, FileFormat::Toml).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("RAX_MIRROR"));

        Self::finish(builder)
    }

    /// Load one explicit configuration file on top of the defaults
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("username", DEFAULT_USERNAME)?
            .set_default("password", DEFAULT_PASSWORD)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: MirrorConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.username.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "username cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
