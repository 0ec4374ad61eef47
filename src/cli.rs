//! Command-line and environment input surface.
//!
//! Every value arrives as a raw string and stays one until the validator in
//! [`crate::config::validation`] has looked at it. The `INPUT_*` environment
//! bindings let the binary run unmodified as a CI step, where inputs are
//! delivered through the environment rather than argv.

use clap::Parser;

use crate::config::{EnvFallbacks, RawInputs};

/// Anchor a repository snapshot on-chain and wait for confirmation.
#[derive(Debug, Parser)]
#[command(name = "repo-anchor")]
#[command(about = "Submit a repository snapshot to an attestation service and wait for on-chain confirmation", long_about = None)]
pub struct Cli {
    /// Repository identifier known to the attestation service.
    #[arg(long, env = "INPUT_GITHUB_ID")]
    pub github_id: Option<String>,

    /// Branch to snapshot.
    #[arg(long, env = "INPUT_BRANCH")]
    pub branch: Option<String>,

    /// Submission endpoint URL.
    #[arg(long, env = "INPUT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Status endpoint URL (default: endpoint + "/status").
    #[arg(long, env = "INPUT_STATUS_ENDPOINT")]
    pub status_endpoint: Option<String>,

    /// Required on-chain confirmation depth (default: 1).
    #[arg(long, env = "INPUT_CONFIRMATIONS")]
    pub confirmations: Option<String>,

    /// Seconds between status polls (default: 5).
    #[arg(long, env = "INPUT_POLL_INTERVAL")]
    pub poll_interval: Option<String>,

    /// Maximum seconds to wait for confirmation (default: 600).
    #[arg(long, env = "INPUT_MAX_WAIT")]
    pub max_wait: Option<String>,

    /// Repository-scoped API credential.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: String,
}

impl Cli {
    /// Raw inputs for the validator, untouched.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            github_id: self.github_id.clone(),
            branch: self.branch.clone(),
            endpoint: self.endpoint.clone(),
            status_endpoint: self.status_endpoint.clone(),
            confirmations: self.confirmations.clone(),
            poll_interval_secs: self.poll_interval.clone(),
            max_wait_secs: self.max_wait.clone(),
        }
    }
}

/// Fallbacks the CI host provides for the current repository and ref.
pub fn env_fallbacks() -> EnvFallbacks {
    EnvFallbacks {
        repository_id: std::env::var("GITHUB_REPOSITORY_ID").ok(),
        branch: std::env::var("GITHUB_REF_NAME").ok(),
    }
}
