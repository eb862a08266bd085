use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use crate::error::{AssistantError, Result};

/// Shared HTTP client for weather and suggestion providers.
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AssistantError::upstream("HTTP client", e))
}

/// Send a request and read the body as text, whatever the status.
///
/// Only transport failures are errors here; the providers decide what a
/// status or body means.
pub(crate) async fn send_for_text(
    service: &'static str,
    request: RequestBuilder,
) -> Result<(StatusCode, String)> {
    let res = request
        .send()
        .await
        .map_err(|e| AssistantError::upstream(service, format!("request failed: {e}")))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| {
        AssistantError::upstream(service, format!("failed to read response body: {e}"))
    })?;

    debug!(service, %status, bytes = body.len(), "received response");
    Ok((status, body))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
