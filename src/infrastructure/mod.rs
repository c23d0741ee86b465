pub mod config;
pub mod http;
pub mod prompt;
pub mod sheets;
