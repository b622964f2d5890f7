use serde::Deserialize;

/// Per-address verdict from the validation backend. Only the literal
/// status `"Valid"` counts as valid; there is no failure taxonomy.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationResult {
    pub email: String,
    pub status: String,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.status == "Valid"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    pub valid: usize,
    pub total: usize,
}

/// Envelope of the validation endpoint. A missing success flag reads as
/// false, which is how a rejection is recognized.
#[derive(Debug, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub success: bool,
    pub results: Option<Vec<ValidationResult>>,
    pub summary: Option<Summary>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

/// What a completed check hands to the UI: the per-address rows plus the
/// valid/total counts for the summary line.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub results: Vec<ValidationResult>,
    pub valid: usize,
    pub total: usize,
}
