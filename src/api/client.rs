//! HTTP client for the attestation service.
//!
//! # Responsibilities
//! - Attach the repository-scoped bearer credential to every call
//! - Read each response body to completion as text before returning, so the
//!   raw content survives for error messages and the socket is fully drained
//!
//! # Design Decisions
//! - The client never interprets bodies; classification of success, rejection
//!   and pending states belongs to the engine
//! - Transport errors bubble up as `reqwest::Error`; whether they are fatal
//!   (submission) or transient (poll) is the caller's decision

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::api::types::{RawResponse, StatusBody, SubmitBody};
use crate::config::{SnapshotRequest, ValidationError};

/// Client for the submission and status endpoints.
#[derive(Debug, Clone)]
pub struct AnchorClient {
    http: reqwest::Client,
    headers: HeaderMap,
}

impl AnchorClient {
    /// Create a client holding the repository-scoped credential.
    pub fn new(token: &str) -> Result<Self, ValidationError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ValidationError::InvalidCredential)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            http: reqwest::Client::new(),
            headers,
        })
    }

    /// POST the snapshot payload to the submission endpoint.
    pub async fn submit(&self, request: &SnapshotRequest) -> Result<RawResponse, reqwest::Error> {
        let body = SubmitBody {
            github_id: request.github_id,
            branch: request.branch.clone(),
        };
        self.post_json(&request.endpoint, &body).await
    }

    /// POST one status poll for the given transaction.
    pub async fn poll_status(
        &self,
        request: &SnapshotRequest,
        tx_hash: &str,
    ) -> Result<RawResponse, reqwest::Error> {
        let body = StatusBody {
            tx_hash: tx_hash.to_string(),
            confirmations: request.confirmations,
        };
        self.post_json(&request.status_endpoint, &body).await
    }

    async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<RawResponse, reqwest::Error> {
        let res = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            body,
        })
    }
}
