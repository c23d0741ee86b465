pub mod error;
pub mod payload;
pub mod prompt;
pub mod source;
pub mod table;
pub mod transport;
pub mod validation;
