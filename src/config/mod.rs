use std::env;

/// Port used when no candidate variable resolves to a valid port
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const PORT_VARS: &[&str] = &["SERVICE_PORT", "PORT"];
pub const HOST_VARS: &[&str] = &["SERVICE_HOST"];
pub const CORS_ORIGINS_VARS: &[&str] = &["SERVICE_CORS_ORIGINS"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingRequired(String),
}

/// Read the first candidate variable that is present and non-empty.
///
/// Candidates are checked left to right; the environment is re-read on every call.
fn read_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}

pub fn resolve_string(names: &[&str], default: &str) -> String {
    read_env(names).unwrap_or_else(|| default.to_string())
}

/// Resolve a base-10 integer, falling back to `default` when unset or unparsable.
///
/// Leading whitespace and a sign are accepted, and parsing stops at the first
/// non-digit, so `"8081abc"` resolves to 8081.
pub fn resolve_int(names: &[&str], default: i64) -> i64 {
    read_env(names)
        .and_then(|value| parse_leading_int(&value))
        .unwrap_or(default)
}

pub fn resolve_list(names: &[&str], default: &str, separator: &str) -> Vec<String> {
    let value = resolve_string(names, default);
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a variable that must be set, naming `label` (or the first candidate) on failure.
pub fn resolve_required(names: &[&str], label: Option<&str>) -> Result<String, ConfigError> {
    read_env(names).ok_or_else(|| {
        let name = label
            .or_else(|| names.first().copied())
            .unwrap_or_default();
        ConfigError::MissingRequired(name.to_string())
    })
}

fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// Runtime configuration for the tenant registry service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means permissive
    pub cors_origins: Vec<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = u16::try_from(resolve_int(PORT_VARS, i64::from(DEFAULT_PORT)))
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: resolve_string(HOST_VARS, DEFAULT_HOST),
            port,
            cors_origins: resolve_list(CORS_ORIGINS_VARS, "", ","),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}
