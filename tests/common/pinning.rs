//! In-memory pinning backend that records every call.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use pinrelay::pinning::PinningBackend;
use pinrelay::{Error, Result};

#[derive(Debug, Clone)]
pub struct PinnedFile {
    pub file_name: String,
    pub content: Bytes,
}

#[derive(Debug, Clone)]
pub struct PinnedJson {
    pub document: serde_json::Value,
    pub name: String,
}

/// Pinning backend returning fixed content identifiers. A `None` identifier
/// makes that call fail.
pub struct RecordingPinning {
    file_cid: Option<String>,
    json_cid: Option<String>,
    files: Mutex<Vec<PinnedFile>>,
    documents: Mutex<Vec<PinnedJson>>,
}

impl RecordingPinning {
    pub fn new(file_cid: Option<&str>, json_cid: Option<&str>) -> Self {
        Self {
            file_cid: file_cid.map(str::to_string),
            json_cid: json_cid.map(str::to_string),
            files: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(file_cid: &str, json_cid: &str) -> Self {
        Self::new(Some(file_cid), Some(json_cid))
    }

    pub fn file_calls(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn json_calls(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn files(&self) -> Vec<PinnedFile> {
        self.files.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<PinnedJson> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl PinningBackend for RecordingPinning {
    async fn pin_file(&self, file_name: &str, content: Bytes) -> Result<String> {
        self.files.lock().unwrap().push(PinnedFile {
            file_name: file_name.to_string(),
            content,
        });
        self.file_cid
            .clone()
            .ok_or_else(|| Error::MissingContentId("{}".to_string()))
    }

    async fn pin_json(&self, document: &serde_json::Value, name: &str) -> Result<String> {
        self.documents.lock().unwrap().push(PinnedJson {
            document: document.clone(),
            name: name.to_string(),
        });
        self.json_cid
            .clone()
            .ok_or_else(|| Error::MissingContentId("{}".to_string()))
    }
}
