//! Upload pipeline: pin the asset, then pin its token metadata

use thiserror::Error;

use crate::pinning::PinningBackend;
use crate::types::{gateway_uri, TokenMetadata, UploadRequest};

/// Stage at which an upload failed
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("file not found")]
    MissingFile,

    #[error("failed to pin image: {0}")]
    Image(#[source] crate::Error),

    #[error("failed to pin metadata: {0}")]
    Metadata(#[source] crate::Error),
}

/// Pin the uploaded file and its metadata document, returning the token URI.
///
/// The two provider calls run strictly in order since the metadata embeds the
/// file's gateway URI. An image pinned before a metadata failure is left on
/// the provider.
pub async fn publish(
    pinning: &dyn PinningBackend,
    gateway_url: &str,
    request: UploadRequest,
) -> Result<String, UploadError> {
    let file = match request.file {
        Some(file) if !file.content.is_empty() => file,
        _ => return Err(UploadError::MissingFile),
    };

    let image_cid = pinning
        .pin_file(&file.file_name, file.content)
        .await
        .map_err(UploadError::Image)?;

    let metadata = TokenMetadata {
        name: request.name,
        description: request.description,
        image: gateway_uri(gateway_url, &image_cid),
    };
    let document = serde_json::to_value(&metadata)
        .map_err(|e| UploadError::Metadata(crate::Error::Serialization(e)))?;

    let metadata_cid = pinning
        .pin_json(&document, &request.json_name)
        .await
        .map_err(UploadError::Metadata)?;

    Ok(gateway_uri(gateway_url, &metadata_cid))
}
