//! Snapshot request descriptor.
//!
//! A [`SnapshotRequest`] is the fully validated, immutable description of one
//! snapshot attempt. It is only ever produced by the validator in
//! [`crate::config::validation`]; from then on nothing mutates it.

/// A validated snapshot request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    /// Repository identifier as known to the attestation service.
    pub github_id: u64,

    /// Branch whose state fingerprint is being anchored.
    pub branch: String,

    /// Submission endpoint, used verbatim.
    pub endpoint: String,

    /// Status endpoint polled during confirmation.
    pub status_endpoint: String,

    /// Minimum on-chain confirmation depth to wait for.
    pub confirmations: u32,

    /// Seconds to sleep between status polls.
    pub poll_interval_secs: f64,

    /// Deadline for the whole confirmation phase, in seconds.
    pub max_wait_secs: f64,
}

/// Derive the status endpoint from the submission endpoint.
///
/// Trailing slashes are stripped from the base before appending `/status`;
/// the literal endpoint itself is never modified.
pub fn derive_status_endpoint(endpoint: &str) -> String {
    format!("{}/status", endpoint.trim_end_matches('/'))
}
