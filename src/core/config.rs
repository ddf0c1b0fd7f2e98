//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use leptos::config::ReloadWSProtocol;
use leptos::prelude::LeptosOptions;

/// Default live-reload client host
pub const DEFAULT_LIVE_RELOAD_HOST: &str = "localhost";
/// Default live-reload websocket path
pub const DEFAULT_LIVE_RELOAD_PATH: &str = "/ws";
/// Default live-reload port, matches `reload-port` in Cargo.toml
pub const DEFAULT_LIVE_RELOAD_PORT: u16 = 8500;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("unsupported live-reload protocol {0:?} (expected \"ws\" or \"wss\")")]
    UnsupportedProtocol(String),
}

/// Websocket scheme used by the live-reload client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WsProtocol {
    #[default]
    Ws,
    Wss,
}

impl WsProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            WsProtocol::Ws => "ws",
            WsProtocol::Wss => "wss",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ws" => Ok(WsProtocol::Ws),
            "wss" => Ok(WsProtocol::Wss),
            _ => Err(ConfigError::UnsupportedProtocol(s.to_string())),
        }
    }
}

impl From<WsProtocol> for ReloadWSProtocol {
    fn from(protocol: WsProtocol) -> Self {
        match protocol {
            WsProtocol::Ws => ReloadWSProtocol::WS,
            WsProtocol::Wss => ReloadWSProtocol::WSS,
        }
    }
}

/// Where the development live-reload client connects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveReloadConfig {
    pub hostname: String,
    /// Always starts with `/`
    pub path: String,
    pub port: u16,
    pub protocol: WsProtocol,
}

impl Default for LiveReloadConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_LIVE_RELOAD_HOST.to_string(),
            path: DEFAULT_LIVE_RELOAD_PATH.to_string(),
            port: DEFAULT_LIVE_RELOAD_PORT,
            protocol: WsProtocol::Ws,
        }
    }
}

impl LiveReloadConfig {
    /// Build from a key lookup, falling back to defaults for missing keys.
    ///
    /// Recognized keys: `LIVE_RELOAD_HOST`, `LIVE_RELOAD_PATH`,
    /// `LIVE_RELOAD_PORT`, `LIVE_RELOAD_PROTOCOL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(hostname) = lookup("LIVE_RELOAD_HOST") {
            config.hostname = hostname;
        }

        if let Some(path) = lookup("LIVE_RELOAD_PATH") {
            config.path = if path.starts_with('/') {
                path
            } else {
                format!("/{path}")
            };
        }

        if let Some(value) = lookup("LIVE_RELOAD_PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: "LIVE_RELOAD_PORT",
                    value,
                })?;
        }

        if let Some(protocol) = lookup("LIVE_RELOAD_PROTOCOL") {
            config.protocol = WsProtocol::parse(&protocol)?;
        }

        Ok(config)
    }

    /// Configured websocket URL, e.g. `ws://localhost:8500/ws`.
    ///
    /// Leptos' auto-reload client only takes the port and protocol from this;
    /// it connects to the page's own host on its fixed `/live_reload` path.
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol.as_str(),
            self.hostname,
            self.port,
            self.path
        )
    }

    /// Point the Leptos auto-reload client at the configured port and protocol
    pub fn apply_to(&self, options: &mut LeptosOptions) {
        options.reload_port = u32::from(self.port);
        options.reload_external_port = Some(u32::from(self.port));
        options.reload_ws_protocol = self.protocol.into();
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub live_reload: LiveReloadConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            live_reload: LiveReloadConfig::from_lookup(lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.live_reload.hostname, "localhost");
        assert_eq!(config.live_reload.path, "/ws");
        assert_eq!(config.live_reload.port, 8500);
        assert_eq!(config.live_reload.protocol, WsProtocol::Ws);
        assert_eq!(config.live_reload.url(), "ws://localhost:8500/ws");
    }

    #[test]
    fn test_overrides() {
        let config = LiveReloadConfig::from_lookup(lookup_from(&[
            ("LIVE_RELOAD_HOST", "dev.local"),
            ("LIVE_RELOAD_PATH", "/reload"),
            ("LIVE_RELOAD_PORT", "9000"),
            ("LIVE_RELOAD_PROTOCOL", "wss"),
        ]))
        .unwrap();

        assert_eq!(config.url(), "wss://dev.local:9000/reload");
    }

    #[test]
    fn test_path_without_leading_slash() {
        let config =
            LiveReloadConfig::from_lookup(lookup_from(&[("LIVE_RELOAD_PATH", "ws")])).unwrap();

        assert_eq!(config.path, "/ws");
    }

    #[test]
    fn test_protocol_is_case_insensitive() {
        assert_eq!(WsProtocol::parse("WS").unwrap(), WsProtocol::Ws);
        assert_eq!(WsProtocol::parse(" Wss ").unwrap(), WsProtocol::Wss);
    }

    #[test]
    fn test_invalid_port() {
        let err = LiveReloadConfig::from_lookup(lookup_from(&[("LIVE_RELOAD_PORT", "80a")]))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidPort { var: "LIVE_RELOAD_PORT", ref value } if value == "80a"
        ));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = LiveReloadConfig::from_lookup(lookup_from(&[("LIVE_RELOAD_PORT", "70000")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_protocol() {
        let err = Config::from_lookup(lookup_from(&[("LIVE_RELOAD_PROTOCOL", "http")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedProtocol(ref p) if p == "http"));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_apply_to_leptos_options() {
        let mut options = LeptosOptions::builder().output_name("coli-cards").build();
        let config = LiveReloadConfig {
            port: 9100,
            ..LiveReloadConfig::default()
        };

        config.apply_to(&mut options);

        assert_eq!(options.reload_port, 9100);
        assert_eq!(options.reload_external_port, Some(9100));
        assert_eq!(options.reload_ws_protocol, ReloadWSProtocol::WS);
    }

    #[test]
    fn test_apply_to_uses_configured_protocol() {
        let mut options = LeptosOptions::builder().output_name("coli-cards").build();
        let config =
            LiveReloadConfig::from_lookup(lookup_from(&[("LIVE_RELOAD_PROTOCOL", "wss")])).unwrap();

        config.apply_to(&mut options);

        assert_eq!(options.reload_ws_protocol, ReloadWSProtocol::WSS);
        assert_eq!(options.reload_port, 8500);
    }
}
