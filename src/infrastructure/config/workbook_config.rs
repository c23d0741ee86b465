use std::path::PathBuf;

pub const DEFAULT_DIRECTORY: &str = ".";

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkbookConfig {
    /// Directory holding one `<sheet>.csv` file per sheet.
    pub directory: PathBuf,
    /// Falls back to the directory name when unset.
    pub document_id: Option<Box<str>>,
}
