use error_stack::Result;

use super::error::UploadError;

pub trait HttpTransport {
    /// Sends a single POST and waits for the full response body.
    /// Network failures and non-success statuses are both errors.
    fn post(&self, url: &str, headers: &[(&str, &str)], body: String)
        -> Result<String, UploadError>;
}
