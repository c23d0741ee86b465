use thiserror::Error;

/// Every way an upload invocation can fail. All of them are fatal to the
/// invocation and end up in front of the user as plain text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Missing {sheet} sheet. Please make sure you have a sheet called '{sheet}'")]
    MissingSource { sheet: String },
    #[error("Failed to read sheet '{sheet}' from the source document")]
    SourceRead { sheet: String },
    #[error("Header either has a blank cell or an unexpected shape")]
    InvalidHeader,
    #[error("Blank cell detected in the data! Please do not include blank cells")]
    InvalidData,
    #[error("Data row {row} has {found} cells but the header has {expected} columns")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("Failed to encode the upload payload as JSON")]
    Serialization,
    #[error("Upload to {url} failed")]
    Transport { url: String },
}

impl UploadError {
    pub fn missing_source<S: Into<String>>(sheet: S) -> Self {
        UploadError::MissingSource {
            sheet: sheet.into(),
        }
    }

    pub fn transport<S: Into<String>>(url: S) -> Self {
        UploadError::Transport { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message_names_the_sheet() {
        let error = UploadError::missing_source("Content");
        assert_eq!(
            error.to_string(),
            "Missing Content sheet. Please make sure you have a sheet called 'Content'"
        );
    }

    #[test]
    fn test_ragged_row_message() {
        let error = UploadError::RaggedRow {
            row: 2,
            found: 1,
            expected: 3,
        };
        assert_eq!(
            error.to_string(),
            "Data row 2 has 1 cells but the header has 3 columns"
        );
    }
}
