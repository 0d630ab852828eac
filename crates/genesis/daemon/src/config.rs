//! Configuration for genesisd

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Contact endpoint configuration
    #[serde(default)]
    pub contact: ContactConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
            request_timeout_secs: default_request_timeout(),
            max_body_size: default_max_body_size(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Contact endpoint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Simulated processing time before acknowledging a submission
    #[serde(default)]
    pub ack_delay_ms: u64,
}

impl ContactConfig {
    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.ack_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_size() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `GENESIS__`-prefixed environment variables
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Double underscore separates sections, so `ack_delay_ms` stays intact:
        // GENESIS__CONTACT__ACK_DELAY_MS=250
        builder = builder.add_source(
            config::Environment::with_prefix("GENESIS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot serve a request
    ///
    /// The acknowledgement delay must finish inside the request timeout,
    /// otherwise every valid submission would time out.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.contact.ack_delay() >= self.server.request_timeout() {
            return Err(config::ConfigError::Message(format!(
                "contact.ack_delay_ms ({}) must be shorter than server.request_timeout_secs ({}s)",
                self.contact.ack_delay_ms, self.server.request_timeout_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// `load` reads the process environment; tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.server.listen_addr.port(), 8080);
        assert!(config.server.enable_cors);
        assert_eq!(config.contact.ack_delay(), Duration::ZERO);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.max_body_size, 64 * 1024);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = DaemonConfig::load(None).unwrap();
        assert_eq!(config.server.request_timeout_secs, 30);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: DaemonConfig = serde_json::from_str(
            r#"{ "contact": { "ack_delay_ms": 1000 }, "server": { "enable_cors": false } }"#,
        )
        .unwrap();
        assert_eq!(config.contact.ack_delay(), Duration::from_secs(1));
        assert!(!config.server.enable_cors);
        assert_eq!(config.server.listen_addr.port(), 8080);
    }

    #[test]
    fn test_load_reads_toml_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = std::env::temp_dir().join(format!("genesisd-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nrequest_timeout_secs = 5\n\n[contact]\nack_delay_ms = 500\n\n[logging]\njson = true\n",
        )
        .unwrap();

        let loaded = DaemonConfig::load(path.to_str());
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.server.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.contact.ack_delay(), Duration::from_millis(500));
        assert!(config.logging.json);
        assert!(config.server.enable_cors);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_reads_nested_env_vars() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("GENESIS__CONTACT__ACK_DELAY_MS", "250");
        std::env::set_var("GENESIS__SERVER__ENABLE_CORS", "false");

        let loaded = DaemonConfig::load(None);
        std::env::remove_var("GENESIS__CONTACT__ACK_DELAY_MS");
        std::env::remove_var("GENESIS__SERVER__ENABLE_CORS");

        let config = loaded.unwrap();
        assert_eq!(config.contact.ack_delay(), Duration::from_millis(250));
        assert!(!config.server.enable_cors);
        assert_eq!(config.server.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_rejects_ack_delay_beyond_timeout() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("GENESIS__CONTACT__ACK_DELAY_MS", "30000");

        let loaded = DaemonConfig::load(None);
        std::env::remove_var("GENESIS__CONTACT__ACK_DELAY_MS");

        assert!(loaded.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = DaemonConfig::default();
        assert!(config.validate().is_ok());

        config.contact.ack_delay_ms = 29_999;
        assert!(config.validate().is_ok());

        config.contact.ack_delay_ms = 30_000;
        assert!(config.validate().is_err());

        config.contact.ack_delay_ms = 0;
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
