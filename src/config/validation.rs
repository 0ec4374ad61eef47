//! Request validation.
//!
//! # Responsibilities
//! - Turn raw string-typed inputs (possibly absent) into a [`SnapshotRequest`]
//! - Apply environment-derived fallbacks for repository id and branch
//! - Check value ranges (confirmations >= 1, intervals >= 1s)
//!
//! # Design Decisions
//! - Validation is a pure function: RawInputs -> Result<SnapshotRequest, ValidationError>
//! - Fails on the first invalid field, naming that field specifically
//! - No network access and no hidden state; identical inputs always yield
//!   field-for-field identical requests

use thiserror::Error;
use url::Url;

use crate::config::request::{derive_status_endpoint, SnapshotRequest};

/// Default confirmation depth.
pub const DEFAULT_CONFIRMATIONS: u32 = 1;
/// Default seconds between status polls.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 5.0;
/// Default confirmation deadline in seconds.
pub const DEFAULT_MAX_WAIT_SECS: f64 = 600.0;

/// Raw caller-supplied inputs, exactly as received from the CLI or the
/// hosting environment. All optional; defaults and fallbacks apply here, in
/// the validator, never silently downstream.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub github_id: Option<String>,
    pub branch: Option<String>,
    pub endpoint: Option<String>,
    pub status_endpoint: Option<String>,
    pub confirmations: Option<String>,
    pub poll_interval_secs: Option<String>,
    pub max_wait_secs: Option<String>,
}

/// Environment-derived fallbacks consulted when the explicit input is absent.
#[derive(Debug, Clone, Default)]
pub struct EnvFallbacks {
    /// Repository identifier from the hosting environment.
    pub repository_id: Option<String>,
    /// Branch name from the hosting environment.
    pub branch: Option<String>,
}

/// Errors produced during request validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// No repository identifier was supplied and none could be derived.
    #[error("repository id is required: pass --github-id or run in an environment that provides one")]
    MissingRepositoryId,

    /// The repository identifier did not parse as a finite non-negative integer.
    #[error("invalid repository id {0:?}: expected a finite non-negative integer")]
    InvalidRepositoryId(String),

    /// Branch was empty after trimming and no fallback was available.
    #[error("branch is required: pass --branch or run in an environment that provides one")]
    MissingBranch,

    /// No submission endpoint was supplied.
    #[error("endpoint is required")]
    MissingEndpoint,

    /// The API credential contained bytes that cannot travel in a header.
    #[error("invalid API credential: not a valid header value")]
    InvalidCredential,

    /// The endpoint (or status endpoint) was not a valid URL.
    #[error("invalid {name} URL {value:?}: {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A numeric parameter failed to parse or violated its lower bound.
    #[error("invalid {name} {value:?}: expected a finite number >= {min}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        min: u32,
    },
}

/// Build a validated [`SnapshotRequest`] from raw inputs and environment
/// fallbacks. Pure and deterministic; fails on the first invalid field.
pub fn build_request(
    inputs: &RawInputs,
    fallbacks: &EnvFallbacks,
) -> Result<SnapshotRequest, ValidationError> {
    let github_id = resolve_github_id(inputs, fallbacks)?;
    let branch = resolve_branch(inputs, fallbacks)?;

    let confirmations = match &inputs.confirmations {
        None => DEFAULT_CONFIRMATIONS,
        Some(raw) => parse_integer_param("confirmations", raw, 1)? as u32,
    };
    let poll_interval_secs = match &inputs.poll_interval_secs {
        None => DEFAULT_POLL_INTERVAL_SECS,
        Some(raw) => parse_seconds_param("poll-interval", raw)?,
    };
    let max_wait_secs = match &inputs.max_wait_secs {
        None => DEFAULT_MAX_WAIT_SECS,
        Some(raw) => parse_seconds_param("max-wait", raw)?,
    };

    let endpoint = inputs
        .endpoint
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingEndpoint)?
        .to_string();
    check_url("endpoint", &endpoint)?;

    let status_endpoint = match inputs.status_endpoint.as_deref().map(str::trim) {
        Some(explicit) if !explicit.is_empty() => {
            check_url("status endpoint", explicit)?;
            explicit.to_string()
        }
        _ => derive_status_endpoint(&endpoint),
    };

    Ok(SnapshotRequest {
        github_id,
        branch,
        endpoint,
        status_endpoint,
        confirmations,
        poll_interval_secs,
        max_wait_secs,
    })
}

fn resolve_github_id(
    inputs: &RawInputs,
    fallbacks: &EnvFallbacks,
) -> Result<u64, ValidationError> {
    let raw = inputs
        .github_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            fallbacks
                .repository_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .ok_or(ValidationError::MissingRepositoryId)?;

    // Loosely-typed callers may hand us "123" or "123.0"; both name the same
    // repository. Anything non-finite, negative, or fractional is rejected.
    let parsed: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidRepositoryId(raw.to_string()))?;
    if !parsed.is_finite() || parsed < 0.0 || parsed.fract() != 0.0 {
        return Err(ValidationError::InvalidRepositoryId(raw.to_string()));
    }
    Ok(parsed as u64)
}

fn resolve_branch(
    inputs: &RawInputs,
    fallbacks: &EnvFallbacks,
) -> Result<String, ValidationError> {
    inputs
        .branch
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            fallbacks
                .branch
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
        .ok_or(ValidationError::MissingBranch)
}

fn parse_integer_param(
    name: &'static str,
    raw: &str,
    min: u32,
) -> Result<u64, ValidationError> {
    let invalid = || ValidationError::InvalidParameter {
        name,
        value: raw.to_string(),
        min,
    };
    let parsed: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite()
        || parsed.fract() != 0.0
        || parsed < min as f64
        || parsed > u32::MAX as f64
    {
        return Err(invalid());
    }
    Ok(parsed as u64)
}

fn parse_seconds_param(name: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidParameter {
        name,
        value: raw.to_string(),
        min: 1,
    };
    let parsed: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite() || parsed < 1.0 {
        return Err(invalid());
    }
    Ok(parsed)
}

fn check_url(name: &'static str, value: &str) -> Result<(), ValidationError> {
    Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
