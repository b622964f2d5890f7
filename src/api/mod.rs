mod client;
mod types;

pub use client::BackendClient;
pub use types::{CheckReport, SendResponse, Summary, ValidateResponse, ValidationResult};
