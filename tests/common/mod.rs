//! Common test utilities and fixtures.

pub mod multipart;
pub mod pinning;

#[allow(unused_imports)]
pub use multipart::*;
#[allow(unused_imports)]
pub use pinning::*;
