//! Hand-built multipart/form-data request bodies.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;

pub const BOUNDARY: &str = "pinrelay-test-boundary";

/// Builder for a multipart upload body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }

    /// `POST /upload` request carrying this body.
    pub fn into_request(self) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.finish()))
            .unwrap()
    }
}

/// The cat upload used across scenarios.
pub fn cat_upload() -> MultipartBody {
    MultipartBody::new()
        .text("name", "Cat")
        .text("description", "A cat")
        .text("json_name", "cat-meta")
        .file("file", "cat.png", b"\x89PNG\r\n\x1a\nmeow")
}
