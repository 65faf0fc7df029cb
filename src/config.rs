use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;

use crate::pinning::PinningConfig;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024; // 32 MiB

/// Legacy environment variable holding the Pinata token
const LEGACY_JWT_VAR: &str = "API_JWT";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pinata: PinataSection,
    pub cors: CorsSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from `.env`, disk and environment.
    pub fn load() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("failed to read .env file");
            }
        }

        let config_path =
            env::var("PINRELAY_CONFIG").unwrap_or_else(|_| "pinrelay.toml".to_string());

        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from the given file (if it exists) and environment.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PINRELAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.pinata.jwt.trim().is_empty() {
            if let Ok(jwt) = env::var(LEGACY_JWT_VAR) {
                config.pinata.jwt = jwt;
            }
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<()> {
        let jwt = self.pinata.jwt.trim();
        if jwt.is_empty() {
            bail!("pinata.jwt must be specified (or set {})", LEGACY_JWT_VAR);
        }
        if HeaderValue::from_str(jwt).is_err() {
            bail!("pinata.jwt contains characters not allowed in an HTTP header");
        }

        validate_http_url("pinata.api_url", &self.pinata.api_url)?;
        validate_http_url("pinata.gateway_url", &self.pinata.gateway_url)?;

        if self.pinata.timeout_secs == 0 {
            bail!("pinata.timeout_secs must be greater than zero");
        }
        if self.pinata.connect_timeout_secs == 0 {
            bail!("pinata.connect_timeout_secs must be greater than zero");
        }
        if self.server.max_upload_bytes == 0 {
            bail!("server.max_upload_bytes must be greater than zero");
        }

        self.cors.origin_header()?;

        Ok(())
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{} must be specified", key);
    }
    let url = reqwest::Url::parse(value).with_context(|| format!("invalid {}: {}", key, value))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{} must use http or https, got '{}'", key, url.scheme());
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PinataSection {
    pub jwt: String,
    pub api_url: String,
    pub gateway_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl PinataSection {
    pub fn to_runtime(&self) -> PinningConfig {
        PinningConfig {
            jwt: self.jwt.trim().to_string(),
            api_url: self.api_url.trim().to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

impl Default for PinataSection {
    fn default() -> Self {
        Self {
            jwt: String::new(),
            api_url: "https://api.pinata.cloud".to_string(),
            gateway_url: "https://gateway.pinata.cloud".to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl std::fmt::Debug for PinataSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataSection")
            .field("jwt", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("gateway_url", &self.gateway_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub allowed_origin: String,
}

impl CorsSection {
    pub fn origin_header(&self) -> Result<HeaderValue> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() {
            bail!("cors.allowed_origin must be specified");
        }
        HeaderValue::from_str(origin)
            .with_context(|| format!("invalid cors.allowed_origin: {}", self.allowed_origin))
    }
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
