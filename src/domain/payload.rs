use error_stack::{report, Result, ResultExt};
use serde::Serialize;

use super::error::UploadError;
use super::table::{DataRow, Header};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSize {
    pub cols: usize,
    pub rows: usize,
}

/// Body of the upload request.
///
/// Built once per upload from an already validated header and data, then
/// dropped after the request returns.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub id: String,
    pub column_names: Header,
    pub size: PayloadSize,
    pub rows: Vec<DataRow>,
}

impl UploadPayload {
    /// Fails with [`UploadError::RaggedRow`] if any row's length differs
    /// from the header's, so `size.cols` always describes every row.
    pub fn new<S: Into<String>>(
        id: S,
        column_names: Header,
        rows: Vec<DataRow>,
    ) -> Result<Self, UploadError> {
        let cols = column_names.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(report!(UploadError::RaggedRow {
                row: index + 1,
                found: row.len(),
                expected: cols,
            }));
        }

        Ok(UploadPayload {
            id: id.into(),
            size: PayloadSize {
                cols,
                rows: rows.len(),
            },
            column_names,
            rows,
        })
    }

    pub fn to_json(&self) -> Result<String, UploadError> {
        serde_json::to_string(self).change_context(UploadError::Serialization)
    }
}
