//! Gateway configuration loaded from environment variables.
//!
//! Values are read once at startup. Only presence and parse checks happen
//! here; the route that needs an optional value (the auth provider's
//! service-role key) reports its absence itself.

use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TENANT_API_URL: &str = "http://localhost:8000";
const DEFAULT_AUTH_PROVIDER_URL: &str = "http://localhost:54321";
const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Tenant backend
    pub tenant_api_url: String,
    pub organization_id: Option<String>,

    // Auth provider
    pub auth_provider_url: String,
    pub auth_service_role_key: Option<String>,

    // Public site, used for generated links and CORS
    pub site_url: String,
    pub cors_allowed_origins: Vec<String>,

    pub max_json_payload_size: usize,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = var("GATEWAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("GATEWAY_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("GATEWAY_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let tenant_api_url = base_url(var("TENANT_API_URL"), DEFAULT_TENANT_API_URL);
        let auth_provider_url = base_url(var("AUTH_PROVIDER_URL"), DEFAULT_AUTH_PROVIDER_URL);
        let site_url = base_url(var("SITE_URL"), DEFAULT_SITE_URL);

        let cors_allowed_origins = match var("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => Vec::new(),
        };
        let cors_allowed_origins = if cors_allowed_origins.is_empty() {
            default_origins(&site_url)
        } else {
            cors_allowed_origins
        };

        let max_json_payload_size = match var("MAX_JSON_PAYLOAD_SIZE") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::config(format!("MAX_JSON_PAYLOAD_SIZE must be a byte count, got '{raw}'"))
            })?,
            None => DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        };

        Ok(Config {
            host,
            port,
            tenant_api_url,
            organization_id: var("TENANT_ORGANIZATION_ID"),
            auth_provider_url,
            auth_service_role_key: var("AUTH_SERVICE_ROLE_KEY"),
            site_url,
            cors_allowed_origins,
            max_json_payload_size,
        })
    }

    /// Local defaults, no organization id and no service-role key.
    pub fn local() -> Self {
        let site_url = DEFAULT_SITE_URL.to_string();
        Config {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            tenant_api_url: DEFAULT_TENANT_API_URL.to_string(),
            organization_id: None,
            auth_provider_url: DEFAULT_AUTH_PROVIDER_URL.to_string(),
            auth_service_role_key: None,
            cors_allowed_origins: default_origins(&site_url),
            site_url,
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        }
    }
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Comma-separated origins; empty, `null` and non-http entries are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

fn default_origins(site_url: &str) -> Vec<String> {
    let mut origins = vec![site_url.to_string()];
    for local in ["http://localhost:3000", "http://127.0.0.1:3000"] {
        if !origins.iter().any(|o| o == local) {
            origins.push(local.to_string());
        }
    }
    origins
}
