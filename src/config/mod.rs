use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Route the retired WhatsApp confirmation flow used to be served on.
pub const DEFAULT_LEGACY_VERIFY_PATH: &str = "/api/auth/verify-whatsapp";

/// Paths served by the regular routes; a legacy route may not shadow them.
pub const RESERVED_PATHS: [&str; 2] = ["/", "/health"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub legacy: LegacyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// CORS for the regular routes. The legacy route always sends its own headers.
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyConfig {
    pub verify_paths: Vec<String>,
    pub log_hits: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides; STOREFRONT_API_PORT wins over the platform PORT
        if let Ok(v) = env::var("SERVER_BIND_HOST") {
            self.server.bind_host = v;
        }
        if let Some(port) = env::var("STOREFRONT_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_list(&v);
        }

        // Legacy route overrides
        if let Ok(v) = env::var("LEGACY_VERIFY_PATHS") {
            let paths = sanitize_verify_paths(split_list(&v));
            if !paths.is_empty() {
                self.legacy.verify_paths = paths;
            }
        }
        if let Ok(v) = env::var("LEGACY_LOG_HITS") {
            self.legacy.log_hits = v.parse().unwrap_or(self.legacy.log_hits);
        }

        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_host, self.server.port)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                bind_host: "127.0.0.1".to_string(),
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["*".to_string()],
            },
            legacy: LegacyConfig {
                verify_paths: vec![DEFAULT_LEGACY_VERIFY_PATH.to_string()],
                log_hits: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                bind_host: "0.0.0.0".to_string(),
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
            legacy: LegacyConfig {
                verify_paths: vec![DEFAULT_LEGACY_VERIFY_PATH.to_string()],
                log_hits: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                bind_host: "0.0.0.0".to_string(),
                port: 3000,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
            legacy: LegacyConfig {
                verify_paths: vec![DEFAULT_LEGACY_VERIFY_PATH.to_string()],
                log_hits: false,
            },
        }
    }
}

/// Keep absolute, unreserved paths, first occurrence only. Mounting the same
/// path twice, or over a regular route, makes the router panic.
pub fn sanitize_verify_paths(paths: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(paths.len());

    for path in paths {
        if !path.starts_with('/') {
            tracing::warn!("Ignoring legacy verify path {:?}: not absolute", path);
        } else if RESERVED_PATHS.contains(&path.as_str()) {
            tracing::warn!("Ignoring legacy verify path {:?}: already served", path);
        } else if kept.contains(&path) {
            tracing::warn!("Ignoring duplicate legacy verify path {:?}", path);
        } else {
            kept.push(path);
        }
    }

    kept
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_production {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Production)
    };
}
