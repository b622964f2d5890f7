use crate::extract::ExtractError;
use thiserror::Error;

/// Everything a form can fail with. The `Display` strings double as the
/// user-facing messages shown inline in the form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Please upload a valid Excel or CSV file")]
    UnsupportedFileType,

    #[error("Error reading file. Please upload a valid format file.")]
    FileRead(#[from] ExtractError),

    #[error("No valid email addresses found in the file")]
    NoEmailsFound,

    /// The backend answered but did not set its success flag; the message
    /// is the backend's error string verbatim.
    #[error("{0}")]
    BackendRejected(String),

    /// Network failure or an undecodable response body.
    #[error("{0}")]
    Transport(String),
}
