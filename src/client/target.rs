//! Connection target
//!
//! Server address, port and credentials for one mirror job.

use crate::config::MirrorConfig;

/// Everything needed to open a session with a server. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl ConnectionTarget {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Anonymous access on the default port
    pub fn anonymous(host: impl Into<String>) -> Self {
        let defaults = MirrorConfig::default();
        Self::new(host, defaults.port, defaults.username, defaults.password)
    }

    /// Builds a target from a `--server` value.
    ///
    /// Accepts `host`, `host:port` and `ftp://host[:port][/]`. A port in the
    /// address wins over the configured one.
    pub fn from_server(server: &str, config: &MirrorConfig) -> Self {
        let address = server.trim();
        let address = address.strip_prefix("ftp://").unwrap_or(address);
        let address = address.trim_end_matches('/');

        let (host, port) = match address.rsplit_once(':') {
            Some((host, port)) if !host.contains(':') => match port.parse::<u16>() {
                Ok(port) if port != 0 => (host, port),
                _ => (address, config.port),
            },
            _ => (address, config.port),
        };

        Self::new(host, port, config.username.clone(), config.password.clone())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
