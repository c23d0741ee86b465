pub const DEFAULT_ENDPOINT: &str = "https://q77r6a.deta.dev/upload";
pub const DEFAULT_SHEET_NAME: &str = "Content";

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub endpoint: Box<str>,
    pub sheet_name: Box<str>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            endpoint: DEFAULT_ENDPOINT.into(),
            sheet_name: DEFAULT_SHEET_NAME.into(),
        }
    }
}
