//! pinrelay - pin an uploaded asset and its token metadata to IPFS
//!
//! A small HTTP relay in front of the Pinata pinning API:
//! - `POST /upload` pins the uploaded file, builds a token metadata document
//!   pointing at the file's gateway URI, pins that document and returns its
//!   gateway URI as `tokenURI`
//! - `GET /health-check` reports liveness

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod pinning;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
