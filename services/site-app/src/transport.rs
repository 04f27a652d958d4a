//! Outbound submission transport
//!
//! The spreadsheet endpoint is a third-party hosted script that does not
//! send CORS headers, so the browser posts to it in `no-cors` mode and gets
//! back an opaque response: no status, no body. The only failure the client
//! can observe is the transport itself failing.

use async_trait::async_trait;

use crate::submission::SubmissionRecord;

/// Hosted spreadsheet script that appends one row per submission
pub const SUBMISSION_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwRoboticsClubHackathonSubmissions/exec";

/// What the transport could observe about a single POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// A readable response came back
    Delivered,
    /// The request left the client but the response is opaque
    DeliveredOpaque,
    /// DNS failure, refused connection, abort, ...
    TransportFailed(String),
}

/// Outcome reported to the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

/// Abstraction over the outbound POST for dependency injection
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionTransport {
    /// POST `body` (a JSON object) to `url`. Never retries.
    async fn post_json(&self, url: &str, body: &str) -> Delivery;
}

/// Send one record to [`SUBMISSION_ENDPOINT`].
///
/// Exactly one transport call is made. The caller is responsible for
/// validating the record first.
pub async fn submit<T>(transport: &T, record: &SubmissionRecord) -> SubmitOutcome
where
    T: SubmissionTransport + ?Sized,
{
    let body = match record.to_json() {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Could not serialize submission: {}", e);
            return SubmitOutcome::Failed;
        }
    };

    tracing::debug!(
        "Submitting {:?} record ({} bytes) to {}",
        record.variant(),
        body.len(),
        SUBMISSION_ENDPOINT
    );

    match transport.post_json(SUBMISSION_ENDPOINT, &body).await {
        Delivery::Delivered => {
            tracing::info!("Submission delivered");
            SubmitOutcome::Succeeded
        }
        // The endpoint may have rejected the row; an opaque response cannot
        // tell us, so anything that left the client counts as success.
        Delivery::DeliveredOpaque => {
            tracing::info!("Submission sent (opaque response, assuming success)");
            SubmitOutcome::Succeeded
        }
        Delivery::TransportFailed(reason) => {
            tracing::warn!("Submission failed: {}", reason);
            SubmitOutcome::Failed
        }
    }
}

/// Browser transport using the Fetch API in `no-cors` mode
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
impl FetchTransport {
    async fn send(&self, url: &str, body: &str) -> crate::Result<web_sys::ResponseType> {
        // text/plain keeps the request "simple" so no preflight is attempted
        let response = gloo_net::http::Request::post(url)
            .mode(web_sys::RequestMode::NoCors)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body.to_string())
            .map_err(|e| crate::SiteAppError::Transport(format!("Building request: {}", e)))?
            .send()
            .await
            .map_err(|e| crate::SiteAppError::Transport(format!("POST {} failed: {}", url, e)))?;
        Ok(response.type_())
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl SubmissionTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Delivery {
        tracing::debug!("POST {}", url);
        match self.send(url, body).await {
            Ok(web_sys::ResponseType::Opaque) => Delivery::DeliveredOpaque,
            Ok(_) => Delivery::Delivered,
            Err(e) => Delivery::TransportFailed(e.to_string()),
        }
    }
}

/// Transport used outside the browser, where there is no network path to
/// the endpoint. Every call reports a transport failure.
#[derive(Debug, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl SubmissionTransport for OfflineTransport {
    async fn post_json(&self, url: &str, _body: &str) -> Delivery {
        Delivery::TransportFailed(format!("no network transport available for {}", url))
    }
}

/// Transport for the current build target
#[cfg(feature = "csr")]
pub fn default_transport() -> FetchTransport {
    FetchTransport
}

#[cfg(not(feature = "csr"))]
pub fn default_transport() -> OfflineTransport {
    OfflineTransport
}
