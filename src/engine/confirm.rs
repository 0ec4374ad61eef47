//! Confirmation polling loop.
//!
//! # Responsibilities
//! - Poll the status endpoint until the transaction is confirmed or failed
//! - Enforce the elapsed-time deadline; there is no attempt-count ceiling
//! - Swallow transient poll failures (non-success status, undecodable body,
//!   transport error) into a warning and keep looping
//!
//! State machine: Start → Polling → {Confirmed | Failed | TimedOut}.
//! Polling self-transitions on transient errors and on `pending`; no path
//! leaves a terminal state.

use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::api::types::StatusResponse;
use crate::api::AnchorClient;
use crate::config::SnapshotRequest;
use crate::error::{AnchorError, AnchorResult};

/// Outcome of a single status poll. Each poll is independent; no state
/// accumulates across polls beyond elapsed time and the attempt counter.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Terminal success, with the reported depth when it was numeric.
    Confirmed { confirmations: Option<u64> },
    /// Terminal failure reported by the service.
    Failed { reason: String },
    /// Anything else, including unrecognized or absent status strings.
    Pending,
}

/// Classify a decoded status response. Matching is case-insensitive; an
/// unknown vocabulary entry is treated as still pending, not as an anomaly.
pub fn classify(response: &StatusResponse) -> PollOutcome {
    let status = response.status.as_deref().map(str::to_ascii_lowercase);
    match status.as_deref() {
        Some("confirmed") => PollOutcome::Confirmed {
            confirmations: response.confirmation_count(),
        },
        Some("failed") => PollOutcome::Failed {
            reason: response
                .message
                .clone()
                .or_else(|| response.error.clone())
                .unwrap_or_else(|| "transaction failed".to_string()),
        },
        _ => PollOutcome::Pending,
    }
}

/// Wait until the transaction reaches the required confirmation depth.
///
/// Returns the reported confirmation count on success. The deadline is
/// checked before every poll, so a run whose budget is already spent makes
/// no further network calls.
pub async fn wait_for_confirmation(
    client: &AnchorClient,
    request: &SnapshotRequest,
    tx_hash: &str,
) -> AnchorResult<Option<u64>> {
    let max_wait = Duration::from_secs_f64(request.max_wait_secs);
    let poll_interval = Duration::from_secs_f64(request.poll_interval_secs);
    let started = Instant::now();
    let mut attempt: u32 = 0;

    tracing::info!(
        tx_hash = %tx_hash,
        required = request.confirmations,
        max_wait_secs = request.max_wait_secs,
        "waiting for confirmation"
    );

    loop {
        let elapsed = started.elapsed();
        if elapsed >= max_wait {
            return Err(AnchorError::ConfirmationTimeout {
                tx_hash: tx_hash.to_string(),
                elapsed_secs: elapsed.as_secs(),
                max_wait_secs: max_wait.as_secs(),
            });
        }

        attempt += 1;
        match client.poll_status(request, tx_hash).await {
            Err(e) => {
                tracing::warn!(tx_hash = %tx_hash, attempt, "status poll failed: {e}");
            }
            Ok(raw) if !raw.is_success() => {
                tracing::warn!(
                    tx_hash = %tx_hash,
                    attempt,
                    status = raw.status,
                    body = %raw.body,
                    "status poll returned non-success"
                );
            }
            Ok(raw) => match serde_json::from_str::<StatusResponse>(&raw.body) {
                Err(_) => {
                    tracing::warn!(
                        tx_hash = %tx_hash,
                        attempt,
                        body = %raw.body,
                        "status poll body was not decodable"
                    );
                }
                Ok(response) => match classify(&response) {
                    PollOutcome::Confirmed { confirmations } => {
                        tracing::info!(
                            tx_hash = %tx_hash,
                            attempt,
                            confirmations = ?confirmations,
                            elapsed_secs = elapsed.as_secs(),
                            "transaction confirmed"
                        );
                        return Ok(confirmations);
                    }
                    PollOutcome::Failed { reason } => {
                        return Err(AnchorError::TransactionFailed {
                            tx_hash: tx_hash.to_string(),
                            reason,
                        });
                    }
                    PollOutcome::Pending => {
                        tracing::debug!(
                            tx_hash = %tx_hash,
                            attempt,
                            status = response.status.as_deref().unwrap_or("none"),
                            "still pending"
                        );
                    }
                },
            },
        }

        sleep(poll_interval).await;
    }
}
