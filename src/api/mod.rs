//! Bindings for the provider's `/v2/domains` REST surface.

pub mod client;
pub mod paths;
pub mod types;

pub use client::ApiClient;
pub use types::{CreateDomainRequest, RecordQuery};
