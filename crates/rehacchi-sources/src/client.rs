//! Shared HTTP plumbing for the corpus adapters.

use std::time::Duration;

use rehacchi_core::{Error, Result};

/// Build the HTTP client both adapters share. One client, one pool.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

/// GET `url` with the given query parameters and return the body as text.
///
/// Non-2xx statuses are errors. Parameter encoding is left to the client.
pub async fn fetch_text(
    http: &reqwest::Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<String> {
    let response = http
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;
    let response = response
        .error_for_status()
        .map_err(|e| Error::Http(e.to_string()))?;
    response.text().await.map_err(|e| Error::Http(e.to_string()))
}
