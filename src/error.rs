//! Error definitions for the snapshot run.
//!
//! # Design Decisions
//! - Every fatal error carries its correlation data (HTTP status, tx hash,
//!   elapsed seconds) in the message, so one log line is enough to act on
//! - Transient poll failures are not represented here: they are swallowed
//!   into a warning and the loop continues
//! - The initial submission is never retried; a transport failure there is
//!   as fatal as a rejection

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that terminate a snapshot run.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// Bad or missing configuration; no network call was attempted.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Transport failure on the initial submission call.
    #[error("submission request failed: {0}")]
    SubmissionTransport(#[source] reqwest::Error),

    /// The service rejected the submission with a non-success status.
    #[error("submission rejected: HTTP {status} {status_text}: {detail}")]
    SubmissionRejected {
        status: u16,
        status_text: String,
        detail: String,
    },

    /// The service returned success but an empty or non-JSON body, so it is
    /// unknown whether the snapshot was accepted.
    #[error("submission returned HTTP {status} with an empty or undecodable body")]
    EmptyResponse { status: u16 },

    /// The submission response carried no transaction hash; confirmation
    /// cannot proceed without one.
    #[error("submission response contained no tx_hash; cannot wait for confirmation")]
    NoTransactionId,

    /// The service reported the anchoring transaction as failed on-chain.
    #[error("transaction {tx_hash} failed: {reason}")]
    TransactionFailed { tx_hash: String, reason: String },

    /// The confirmation deadline elapsed while the transaction was still
    /// unconfirmed.
    #[error("transaction {tx_hash} not confirmed after {elapsed_secs}s (max wait {max_wait_secs}s)")]
    ConfirmationTimeout {
        tx_hash: String,
        elapsed_secs: u64,
        max_wait_secs: u64,
    },
}

/// Result type for snapshot operations.
pub type AnchorResult<T> = Result<T, AnchorError>;
