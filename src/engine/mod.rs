//! Submission-and-confirmation engine.
//!
//! # Data Flow
//! ```text
//! SnapshotRequest
//!     → submit.rs (single POST, never retried)
//!     → Submission (tx hash + pass-through fields, outputs exposed)
//!     → confirm.rs (bounded polling loop)
//!     → ConfirmedSnapshot | AnchorError
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one call in flight at a time, a sleep between
//!   polls, no worker pool
//! - Pass-through outputs are final at submission time; a later timeout or
//!   on-chain failure does not retract them
//! - Cancellation is purely the elapsed-time deadline

pub mod confirm;
pub mod submit;

pub use confirm::{wait_for_confirmation, PollOutcome};
pub use submit::{submit_snapshot, Submission};

use crate::api::AnchorClient;
use crate::config::SnapshotRequest;
use crate::error::AnchorResult;
use crate::outputs::OutputSink;

/// Final outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ConfirmedSnapshot {
    pub tx_hash: String,
    pub tx_url: Option<String>,
    pub commit_hash: Option<String>,
    pub manifest_cid: Option<String>,
    pub merkle_root: Option<String>,
    /// Depth reported by the service on the confirming poll, when numeric.
    pub confirmations: Option<u64>,
}

/// Run one snapshot attempt end to end: submit, then wait for confirmation.
pub async fn run_snapshot(
    client: &AnchorClient,
    request: &SnapshotRequest,
    outputs: &OutputSink,
) -> AnchorResult<ConfirmedSnapshot> {
    let submission = submit_snapshot(client, request, outputs).await?;
    let confirmations = wait_for_confirmation(client, request, &submission.tx_hash).await?;

    if let Some(count) = confirmations {
        outputs.set("confirmations", &count.to_string());
    }

    Ok(ConfirmedSnapshot {
        tx_hash: submission.tx_hash,
        tx_url: submission.tx_url,
        commit_hash: submission.commit_hash,
        manifest_cid: submission.manifest_cid,
        merkle_root: submission.merkle_root,
        confirmations,
    })
}
