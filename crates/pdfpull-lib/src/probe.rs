use crate::error::PdfPullError;
use reqwest::StatusCode;
use std::time::Duration;

/// Issues a single GET to `url` and fails unless the server answers 200 or 201.
pub async fn probe_connection(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<(), PdfPullError> {
    tracing::info!(url, "Probing connection");

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| PdfPullError::ProbeFailed {
            url: url.to_string(),
            reason: describe_request_error(&e),
        })?;

    let status = response.status();
    tracing::debug!(url, %status, "Probe response");

    if status == StatusCode::OK || status == StatusCode::CREATED {
        tracing::info!(url, "Connection probe succeeded");
        Ok(())
    } else {
        Err(PdfPullError::ProbeFailed {
            url: url.to_string(),
            reason: format!("server responded with {status}"),
        })
    }
}

pub(crate) fn describe_request_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {error}")
    } else if error.is_connect() {
        format!("could not connect: {error}")
    } else {
        error.to_string()
    }
}
