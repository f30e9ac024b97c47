//! Configuration for the supervisor and its HTTP gateway.

use serde::{Deserialize, Serialize};

/// Main supervisor configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Supervisor display name
    #[serde(default = "default_name")]
    pub name: String,

    /// HTTP gateway settings
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_name() -> String {
    "Supervisor".into()
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            server: ServerConfig::default(),
        }
    }
}

impl SupervisorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SupervisorConfig::default();
        assert_eq!(config.name, "Supervisor");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SupervisorConfig = toml::from_str("name = \"Overseer\"").unwrap();
        assert_eq!(config.name, "Overseer");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_full_toml() {
        let config: SupervisorConfig = toml::from_str(
            "name = \"Overseer\"\n\n[server]\nhost = \"0.0.0.0\"\nport = 9000\n",
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }
}
