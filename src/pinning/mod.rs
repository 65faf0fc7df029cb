//! Pinning provider abstraction
//!
//! Pins raw files and JSON documents to IPFS through a remote provider and
//! hands back the provider-assigned content identifier.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

pub mod pinata;

pub use pinata::PinataClient;

/// Pinning backend trait
#[async_trait]
pub trait PinningBackend: Send + Sync {
    /// Pin a file and return its content identifier
    async fn pin_file(&self, file_name: &str, content: Bytes) -> Result<String>;

    /// Pin a JSON document under `name` and return its content identifier
    async fn pin_json(&self, document: &serde_json::Value, name: &str) -> Result<String>;
}

/// Pinning client configuration
#[derive(Clone)]
pub struct PinningConfig {
    /// Value sent verbatim in the `Authorization` header
    pub jwt: String,
    pub api_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for PinningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinningConfig")
            .field("jwt", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Create pinning backend from config
pub fn create_pinning_backend(config: PinningConfig) -> Result<Box<dyn PinningBackend>> {
    let client = PinataClient::new(config)?;
    Ok(Box::new(client))
}
