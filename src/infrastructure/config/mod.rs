pub mod app_config;
pub mod upload_config;
pub mod workbook_config;
