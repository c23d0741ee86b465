use error_stack::{report, Result};

use super::error::UploadError;
use super::table::{DataRow, Header};

/// Rejects the whole header if any of its cells is blank.
///
/// An empty header has no blank cells and passes unchanged.
pub fn validate_header(header: Header) -> Result<Header, UploadError> {
    let filled = header.iter().filter(|cell| !cell.is_empty()).count();
    if filled == header.len() {
        Ok(header)
    } else {
        Err(report!(UploadError::InvalidHeader).attach_printable(format!(
            "{} of {} header cells are blank",
            header.len() - filled,
            header.len()
        )))
    }
}

/// Fails on the first blank cell found. The report does not say where it is.
pub fn validate_data(data: Vec<DataRow>) -> Result<Vec<DataRow>, UploadError> {
    if data.iter().flatten().any(|cell| cell.is_empty()) {
        return Err(report!(UploadError::InvalidData));
    }
    Ok(data)
}
