//! Submission phase.
//!
//! One authenticated POST carrying `{github_id, branch}`. There is exactly
//! one attempt: a transport failure or a rejection here aborts the run, it is
//! never retried. Pass-through fields from an accepted response are exposed
//! immediately; they are final regardless of how confirmation later ends.

use crate::api::types::{RawResponse, SubmitResponse};
use crate::api::AnchorClient;
use crate::config::SnapshotRequest;
use crate::error::{AnchorError, AnchorResult};
use crate::outputs::OutputSink;

/// An accepted submission, ready for the confirmation phase.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Anchoring transaction hash. Immutable from here on; every later log
    /// and error message echoes it for correlation.
    pub tx_hash: String,
    pub tx_url: Option<String>,
    pub commit_hash: Option<String>,
    pub manifest_cid: Option<String>,
    pub merkle_root: Option<String>,
}

/// Perform the single submission attempt and expose pass-through outputs.
pub async fn submit_snapshot(
    client: &AnchorClient,
    request: &SnapshotRequest,
    outputs: &OutputSink,
) -> AnchorResult<Submission> {
    tracing::info!(
        github_id = request.github_id,
        branch = %request.branch,
        endpoint = %request.endpoint,
        "submitting snapshot request"
    );

    let raw = client
        .submit(request)
        .await
        .map_err(AnchorError::SubmissionTransport)?;

    let decoded = interpret_submission(&raw)?;

    outputs.set_opt("tx-url", decoded.tx_url.as_deref());
    outputs.set_opt("commit-hash", decoded.commit_hash.as_deref());
    outputs.set_opt("manifest-cid", decoded.manifest_cid.as_deref());
    outputs.set_opt("merkle-root", decoded.merkle_root.as_deref());

    let tx_hash = decoded.tx_hash.clone().ok_or(AnchorError::NoTransactionId)?;
    outputs.set("tx-hash", &tx_hash);

    tracing::info!(
        tx_hash = %tx_hash,
        service_status = decoded.status.as_deref().unwrap_or("unknown"),
        "submission accepted"
    );

    Ok(Submission {
        tx_hash,
        tx_url: decoded.tx_url,
        commit_hash: decoded.commit_hash,
        manifest_cid: decoded.manifest_cid,
        merkle_root: decoded.merkle_root,
    })
}

/// Classify the raw submission response.
///
/// The body was read as text up front; JSON decode failure on a rejection is
/// tolerated (the raw text becomes the detail), while an undecodable body on
/// a success status is fatal because acceptance cannot be verified.
fn interpret_submission(raw: &RawResponse) -> AnchorResult<SubmitResponse> {
    let decoded = serde_json::from_str::<SubmitResponse>(&raw.body).ok();

    if !raw.is_success() {
        let detail = decoded
            .and_then(|d| d.error)
            .unwrap_or_else(|| raw.body.clone());
        return Err(AnchorError::SubmissionRejected {
            status: raw.status,
            status_text: raw.status_text.clone(),
            detail,
        });
    }

    decoded.ok_or(AnchorError::EmptyResponse { status: raw.status })
}
