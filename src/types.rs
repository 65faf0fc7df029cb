//! Core data types for pinrelay

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Token metadata document pinned alongside the uploaded asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// Gateway URI of the pinned asset
    pub image: String,
}

/// File part of an upload request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the client (unsanitized)
    pub file_name: String,
    pub content: Bytes,
}

/// A parsed upload request
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub name: String,
    pub description: String,
    /// Name recorded with the metadata pin on the provider side
    pub json_name: String,
    pub file: Option<UploadedFile>,
}

/// Response body of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
}

/// Build the gateway URI for a content identifier.
pub fn gateway_uri(gateway_base: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), cid)
}
