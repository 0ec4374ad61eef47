//! Repository snapshot anchoring client.
//!
//! Submits a signed snapshot request for one repository/branch pair to a
//! remote attestation service, then polls the service until the anchoring
//! transaction reaches the required confirmation depth or the deadline
//! expires.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args + env ──▶ config (validate) ──▶ SnapshotRequest
//!                                                 │
//!                                                 ▼
//!                          engine::submit ── POST endpoint ──▶ tx_hash
//!                                                 │
//!                                                 ▼
//!                          engine::confirm ── POST status ──▶ confirmed
//!                              ▲    │ pending / transient        failed
//!                              └────┘ sleep(poll_interval)      timed out
//! ```
//!
//! One invocation is one snapshot attempt. The submission is never retried;
//! only the confirmation poll loops, bounded by the elapsed-time deadline.

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod outputs;

pub use api::AnchorClient;
pub use config::SnapshotRequest;
pub use engine::{run_snapshot, ConfirmedSnapshot};
pub use error::{AnchorError, AnchorResult};
pub use outputs::OutputSink;
