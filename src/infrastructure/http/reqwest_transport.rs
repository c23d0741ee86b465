use error_stack::{report, Result, ResultExt};
use reqwest::blocking::Client;

use crate::domain::error::UploadError;
use crate::domain::transport::HttpTransport;

/// Blocking transport. One attempt per call, no retries, client default
/// timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<String, UploadError> {
        let transport_error = || UploadError::transport(url);

        let request = headers
            .iter()
            .fold(self.client.post(url), |request, (name, value)| {
                request.header(*name, *value)
            })
            .body(body);

        let response = request.send().change_context_lazy(transport_error)?;
        let status = response.status();
        let text = response
            .text()
            .change_context_lazy(transport_error)
            .attach_printable_lazy(|| format!("Failed to read response body (status {status})"))?;

        if !status.is_success() {
            return Err(report!(transport_error())
                .attach_printable(format!("Unexpected status {status}"))
                .attach_printable(format!("Response body: {text}")));
        }

        Ok(text)
    }
}
