use error_stack::{report, Result};

use crate::domain::error::UploadError;
use crate::domain::payload::UploadPayload;
use crate::domain::source::{ActiveSource, Sheet};
use crate::domain::transport::HttpTransport;
use crate::domain::validation::{validate_data, validate_header};
use crate::infrastructure::config::upload_config::UploadConfig;

pub const JSON_HEADERS: [(&str, &str); 1] = [("Content-Type", "application/json")];

/// Reads the configured sheet, validates it and posts it as JSON.
///
/// Every step runs to completion before the next one starts and the first
/// failure ends the run.
pub struct UploadRoutine<S, T> {
    source: S,
    transport: T,
    config: UploadConfig,
}

impl<S: ActiveSource, T: HttpTransport> UploadRoutine<S, T> {
    pub fn new(source: S, transport: T, config: UploadConfig) -> Self {
        UploadRoutine {
            source,
            transport,
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn content_sheet(&self) -> Result<S::Sheet, UploadError> {
        self.source
            .sheet_by_name(&self.config.sheet_name)
            .ok_or_else(|| report!(UploadError::missing_source(&*self.config.sheet_name)))
    }

    pub fn build_payload(&self) -> Result<UploadPayload, UploadError> {
        let sheet = self.content_sheet()?;
        let (raw_header, raw_data) = sheet.data_range()?.split_header();
        log::debug!(
            "Sheet '{}' has {} columns and {} data rows",
            sheet.name(),
            raw_header.len(),
            raw_data.len()
        );

        let header = validate_header(raw_header)?;
        let data = validate_data(raw_data)?;

        UploadPayload::new(self.source.document_id(), header, data)
    }

    /// Returns the endpoint's response text untouched.
    pub fn run(&self) -> Result<String, UploadError> {
        let payload = self.build_payload()?;
        let body = payload.to_json()?;
        log::debug!("Payload! {}", body);

        let response = self
            .transport
            .post(&self.config.endpoint, &JSON_HEADERS, body)?;
        log::info!("Response! {}", response);

        Ok(response)
    }
}
