use error_stack::Result;

use super::error::UploadError;
use super::table::Table;

/// A named sheet of the source document.
pub trait Sheet {
    fn name(&self) -> &str;

    /// Reads the full populated range of the sheet, header row included.
    fn data_range(&self) -> Result<Table, UploadError>;
}

/// The document the upload reads from. Reads have no side effects.
pub trait ActiveSource {
    type Sheet: Sheet;

    /// Returns `None` when the document has no sheet with that name.
    fn sheet_by_name(&self, name: &str) -> Option<Self::Sheet>;

    fn document_id(&self) -> &str;
}
