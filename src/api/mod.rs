//! Attestation service API: wire types and HTTP client.

pub mod client;
pub mod types;

pub use client::AnchorClient;
pub use types::{RawResponse, StatusResponse, SubmitResponse};
