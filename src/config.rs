//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WALLET_API_URL: &str = "http://127.0.0.1:4000";
pub const DEFAULT_PROXY_BODY_LIMIT_BYTES: usize = 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "wallet_web=info,tower_http=info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("WALLET_API_URL must be an http:// or https:// URL, got {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL without a trailing `/`.
    pub wallet_api_url: String,
    pub body_limit_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WALLET_API_URL`: default `http://127.0.0.1:4000`
    /// - `PROXY_BODY_LIMIT_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let body_limit_bytes =
            parse_or("PROXY_BODY_LIMIT_BYTES", lookup("PROXY_BODY_LIMIT_BYTES"), DEFAULT_PROXY_BODY_LIMIT_BYTES)?;
        let wallet_api_url = normalize_api_url(
            lookup("WALLET_API_URL")
                .filter(|v| !v.trim().is_empty())
                .as_deref()
                .unwrap_or(DEFAULT_WALLET_API_URL),
        )?;

        Ok(Self { port, wallet_api_url, body_limit_bytes })
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            wallet_api_url: DEFAULT_WALLET_API_URL.to_owned(),
            body_limit_bytes: DEFAULT_PROXY_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value: value.to_owned() }),
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidApiUrl(raw.to_owned()))?;
    if rest.is_empty() {
        return Err(ConfigError::InvalidApiUrl(raw.to_owned()));
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
