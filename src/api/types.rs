//! Wire types for the attestation service.
//!
//! The service's payloads are loosely typed; every response field is optional
//! and explicitly named so interpretation stays exhaustive instead of poking
//! at an open-ended JSON map.

use serde::{Deserialize, Serialize};

/// Body of the submission POST.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitBody {
    pub github_id: u64,
    pub branch: String,
}

/// Body of each status poll POST.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBody {
    pub tx_hash: String,
    pub confirmations: u32,
}

/// Decoded submission response. Fields the service did not send stay `None`;
/// `commit_hash`, `manifest_cid` and `merkle_root` are opaque pass-throughs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    pub status: Option<String>,
    pub tx_hash: Option<String>,
    pub tx_url: Option<String>,
    pub commit_hash: Option<String>,
    pub manifest_cid: Option<String>,
    pub merkle_root: Option<String>,
    pub error: Option<String>,
}

/// Decoded status-poll response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    pub status: Option<String>,
    /// The service sometimes sends this as a string; accept any JSON shape
    /// and extract a count only when it is numeric.
    pub confirmations: Option<serde_json::Value>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl StatusResponse {
    /// Confirmation count, when the field is present and numeric.
    pub fn confirmation_count(&self) -> Option<u64> {
        self.confirmations.as_ref().and_then(|v| v.as_u64())
    }
}

/// An HTTP response with its body already read to completion as text.
///
/// The raw text is kept so error messages can show exactly what the service
/// sent, even when it is not JSON.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
