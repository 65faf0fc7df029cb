//! Pinata pinning client

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

use super::{PinningBackend, PinningConfig};

const PIN_FILE_PATH: &str = "pinning/pinFileToIPFS";
const PIN_JSON_PATH: &str = "pinning/pinJSONToIPFS";

/// Pinata API client
#[derive(Clone)]
pub struct PinataClient {
    http: reqwest::Client,
    api_url: String,
    jwt: String,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: Option<String>,
}

#[derive(Debug, Serialize)]
struct PinJsonRequest<'a> {
    #[serde(rename = "pinataMetadata")]
    metadata: PinMetadata<'a>,
    #[serde(rename = "pinataContent")]
    content: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
struct PinMetadata<'a> {
    name: &'a str,
}

impl PinataClient {
    pub fn new(config: PinningConfig) -> Result<Self> {
        Url::parse(&config.api_url).map_err(|e| {
            Error::config(format!("invalid pinata api url '{}': {}", config.api_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            jwt: config.jwt,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Send an authorized request and pull `IpfsHash` out of the response.
    async fn send_and_extract_id(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.header(AUTHORIZATION, &self.jwt).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Provider { status, body });
        }

        let pinned: PinResponse = serde_json::from_str(&body)?;
        match pinned.ipfs_hash {
            Some(cid) if !cid.is_empty() => Ok(cid),
            _ => Err(Error::MissingContentId(body)),
        }
    }
}

#[async_trait]
impl PinningBackend for PinataClient {
    async fn pin_file(&self, file_name: &str, content: Bytes) -> Result<String> {
        let file_name = sanitize_file_name(file_name);
        let size = content.len() as u64;

        let part = Part::stream_with_length(content, size)
            .file_name(file_name.clone())
            .mime_str("application/octet-stream")?;
        let form = Form::new().part("file", part);

        tracing::debug!(file_name = %file_name, size, "Pinning file");

        let cid = self
            .send_and_extract_id(self.http.post(self.endpoint(PIN_FILE_PATH)).multipart(form))
            .await?;

        tracing::info!(file_name = %file_name, %cid, "Pinned file");
        Ok(cid)
    }

    async fn pin_json(&self, document: &serde_json::Value, name: &str) -> Result<String> {
        let payload = PinJsonRequest {
            metadata: PinMetadata { name },
            content: document,
        };

        tracing::debug!(pin_name = name, "Pinning JSON document");

        let cid = self
            .send_and_extract_id(self.http.post(self.endpoint(PIN_JSON_PATH)).json(&payload))
            .await?;

        tracing::info!(pin_name = name, %cid, "Pinned JSON document");
        Ok(cid)
    }
}

/// Reduce a client-supplied file name to its base name.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    match base {
        "" | "." | ".." => "file".to_string(),
        other => other.to_string(),
    }
}
