use crate::post::SchemaVariant;

/// Default bind host (all IPv4 interfaces).
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: u16 = 8000;

/// Default maximum request body size (1 MiB).
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Hostname or IP literal; resolved when the listener binds.
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub schema_variant: SchemaVariant,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
            schema_variant: SchemaVariant::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `POST_SERVER_HOST` (optional, default 0.0.0.0) — bind hostname or IP address
    /// - `POST_SERVER_PORT` (optional, default 8000) — listen port
    /// - `POST_SERVER_BODY_LIMIT` (optional, default 1048576) — max body bytes
    /// - `POST_SCHEMA_VARIANT` (optional, default `post`) — `post` or `post-with-author-email`
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("POST_SERVER_HOST") {
            Some(val) if val.trim().is_empty() => {
                return Err("POST_SERVER_HOST must not be empty".to_string())
            }
            Some(val) => val.trim().to_string(),
            None => defaults.host,
        };

        let port = match lookup("POST_SERVER_PORT") {
            Some(val) => val
                .trim()
                .parse::<u16>()
                .map_err(|_| "POST_SERVER_PORT must be an integer between 0 and 65535".to_string())?,
            None => defaults.port,
        };

        let body_limit = match lookup("POST_SERVER_BODY_LIMIT") {
            Some(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err("POST_SERVER_BODY_LIMIT must be a positive integer".to_string()),
            },
            None => defaults.body_limit,
        };

        let schema_variant = match lookup("POST_SCHEMA_VARIANT") {
            Some(val) => val
                .parse::<SchemaVariant>()
                .map_err(|e| format!("POST_SCHEMA_VARIANT: {e}"))?,
            None => defaults.schema_variant,
        };

        Ok(Self {
            host,
            port,
            body_limit,
            schema_variant,
        })
    }

    /// Address in the form accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), ("0.0.0.0", 8000));
    }

    #[test]
    fn all_values_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("POST_SERVER_HOST", "127.0.0.1"),
            ("POST_SERVER_PORT", "9090"),
            ("POST_SERVER_BODY_LIMIT", "4096"),
            ("POST_SCHEMA_VARIANT", "post-with-author-email"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), ("127.0.0.1", 9090));
        assert_eq!(config.body_limit, 4096);
        assert_eq!(config.schema_variant, SchemaVariant::PostWithAuthorEmail);
    }

    #[test]
    fn hostname_is_accepted() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("POST_SERVER_HOST", " localhost ")])).unwrap();
        assert_eq!(config.bind_addr(), ("localhost", 8000));
    }

    #[test]
    fn blank_host_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("POST_SERVER_HOST", "  ")]))
            .unwrap_err();
        assert!(err.contains("POST_SERVER_HOST"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("POST_SERVER_PORT", "eighty")]))
            .unwrap_err();
        assert!(err.contains("POST_SERVER_PORT"));
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("POST_SERVER_BODY_LIMIT", "0")]))
            .unwrap_err();
        assert!(err.contains("POST_SERVER_BODY_LIMIT"));
    }

    #[test]
    fn unknown_schema_variant_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("POST_SCHEMA_VARIANT", "draft")]))
            .unwrap_err();
        assert!(err.contains("POST_SCHEMA_VARIANT"));
    }
}
