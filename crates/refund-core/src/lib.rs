pub mod config;
pub mod error;
pub mod groups;
pub mod sanitize;
pub mod types;
pub mod validate;

pub use config::RefundConfig;
pub use error::{RefundError, Result, ValidationError};
pub use groups::GroupDirectory;
pub use sanitize::sanitize;
pub use types::{Group, RefundRequest, ValidatedRequest};
pub use validate::validate;
