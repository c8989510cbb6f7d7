use crate::config::Config;
use crate::error::PdfPullError;
use reqwest::header::{CONNECTION, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};

/// Builds the HTTP client shared by the probe and the batch loop. Every
/// request carries the PDF content type, keep-alive and, when configured,
/// the session cookie.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, PdfPullError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    if let Some(cookie) = config.cookie() {
        let mut value =
            HeaderValue::from_str(cookie).map_err(|e| PdfPullError::ConfigurationMissing {
                details: format!("COOKIE is not a valid header value: {e}"),
            })?;
        value.set_sensitive(true);
        headers.insert(COOKIE, value);
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;
    Ok(client)
}
