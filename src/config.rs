//! # Gateway Configuration
//!
//! All settings come from the process environment and are read once, before the server
//! binds. A missing upstream address is a startup failure, never a per-request error.
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `SENSOR_SIM` | yes | - |
//! | `PATHFINDING` | yes | - |
//! | `SMK_API` | no | `https://api.smk.dk/api/v1/art` |
//! | `GATEWAY_ADDR` | no | `0.0.0.0:8000` |
//! | `UPSTREAM_TIMEOUT_SECS` | no | `30` |
//! | `CONCURRENT_UPSTREAM_FETCH` | no | `false` |
//! | `CORS_ALLOWED_ORIGINS` | no | `*` (comma separated list otherwise) |

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderValue, Uri};

pub const DEFAULT_SMK_API: &str = "https://api.smk.dk/api/v1/art";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Which browser origins may call the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    /// Each entry is a `scheme://host[:port]` origin.
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Base URL of the room/sensor simulation service.
    pub sensor_sim_url: String,
    /// Base URL of the pathfinding service.
    pub pathfinding_url: String,
    /// Base URL of the SMK art API (the `/search` path is appended).
    pub smk_api_url: String,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
    /// Fetch rooms and sensors concurrently instead of one after the other.
    pub concurrent_fetch: bool,
    pub cors_origins: CorsOrigins,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let sensor_sim_url = var("SENSOR_SIM").ok_or(ConfigError::Missing("SENSOR_SIM"))?;
        let pathfinding_url = var("PATHFINDING").ok_or(ConfigError::Missing("PATHFINDING"))?;
        let smk_api_url = var("SMK_API").unwrap_or_else(|| DEFAULT_SMK_API.to_string());

        let bind_addr = var("GATEWAY_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                name: "GATEWAY_ADDR",
                value: bind_addr.clone(),
            })?;

        let upstream_timeout = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let concurrent_fetch = match var("CONCURRENT_UPSTREAM_FETCH") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "CONCURRENT_UPSTREAM_FETCH",
                value,
            })?,
            None => false,
        };

        let cors_origins = match var("CORS_ALLOWED_ORIGINS") {
            None => CorsOrigins::Any,
            Some(value) if value == "*" => CorsOrigins::Any,
            Some(value) => CorsOrigins::List(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        parse_origin(origin).ok_or_else(|| ConfigError::Invalid {
                            name: "CORS_ALLOWED_ORIGINS",
                            value: origin.to_string(),
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
        };

        Ok(Self {
            sensor_sim_url: trim_base(sensor_sim_url),
            pathfinding_url: trim_base(pathfinding_url),
            smk_api_url: trim_base(smk_api_url),
            bind_addr,
            upstream_timeout,
            concurrent_fetch,
            cors_origins,
        })
    }
}

fn parse_origin(origin: &str) -> Option<HeaderValue> {
    let uri = origin.parse::<Uri>().ok()?;
    let bare = uri.scheme().is_some()
        && uri.authority().is_some()
        && matches!(uri.path(), "" | "/")
        && uri.query().is_none();
    if !bare {
        return None;
    }
    HeaderValue::from_str(origin).ok()
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn required_upstreams_with_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("SENSOR_SIM", "http://sim:8002/"),
            ("PATHFINDING", "http://paths:8001"),
        ]))
        .unwrap();

        assert_eq!(config.sensor_sim_url, "http://sim:8002");
        assert_eq!(config.pathfinding_url, "http://paths:8001");
        assert_eq!(config.smk_api_url, DEFAULT_SMK_API);
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
        assert!(!config.concurrent_fetch);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn missing_sensor_sim_is_fatal() {
        let err = GatewayConfig::from_lookup(lookup(&[("PATHFINDING", "http://paths")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SENSOR_SIM"));
        assert_eq!(err.to_string(), "SENSOR_SIM not found in environment variables");
    }

    #[test]
    fn blank_pathfinding_counts_as_missing() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("SENSOR_SIM", "http://sim"),
            ("PATHFINDING", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("PATHFINDING"));
    }

    #[test]
    fn optional_settings_are_parsed() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("SENSOR_SIM", "http://sim"),
            ("PATHFINDING", "http://paths"),
            ("SMK_API", "http://smk.local/art/"),
            ("GATEWAY_ADDR", "127.0.0.1:9000"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
            ("CONCURRENT_UPSTREAM_FETCH", "true"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();

        assert_eq!(config.smk_api_url, "http://smk.local/art");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
        assert!(config.concurrent_fetch);
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ])
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("SENSOR_SIM", "http://sim"),
            ("PATHFINDING", "http://paths"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "UPSTREAM_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn malformed_cors_origin_fails_at_startup() {
        for bad in ["http://a.test, not an origin", "a.test", "http://a.test/app?x=1"] {
            let err = GatewayConfig::from_lookup(lookup(&[
                ("SENSOR_SIM", "http://sim"),
                ("PATHFINDING", "http://paths"),
                ("CORS_ALLOWED_ORIGINS", bad),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: "CORS_ALLOWED_ORIGINS", .. }),
                "{bad} should be rejected"
            );
        }
    }
}
