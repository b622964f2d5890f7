use crate::api::CheckReport;
use crate::error::FormError;
use std::sync::mpsc::Receiver;

/// The mutually exclusive phases a form moves through. One tagged value per
/// form replaces the independent loading/status/error flags, so stale
/// results can never be shown next to a fresh error.
pub enum FormPhase<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for FormPhase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FormPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

pub enum CheckOutcome {
    /// Addresses were extracted from a spreadsheet into the input field.
    Loaded,
    Report(CheckReport),
}

pub enum SendOutcome {
    Loaded,
    Sent,
}

#[derive(Default)]
pub struct CheckerForm {
    pub emails: String,
    pub phase: FormPhase<CheckOutcome>,
    pub load_receiver: Option<Receiver<Result<Vec<String>, FormError>>>,
    pub check_receiver: Option<Receiver<Result<CheckReport, FormError>>>,
}

impl CheckerForm {
    pub fn has_pending_work(&self) -> bool {
        self.load_receiver.is_some() || self.check_receiver.is_some()
    }

    /// Status line for the results panel, with an error flag for coloring.
    pub fn status_text(&self) -> Option<(String, bool)> {
        match &self.phase {
            FormPhase::Idle => None,
            FormPhase::Loading => {
                if self.check_receiver.is_some() {
                    Some(("Checking emails...".to_string(), false))
                } else {
                    Some(("Reading spreadsheet...".to_string(), false))
                }
            }
            FormPhase::Succeeded(CheckOutcome::Loaded) => {
                Some(("Emails loaded successfully from Excel!".to_string(), false))
            }
            FormPhase::Succeeded(CheckOutcome::Report(report)) => Some((
                format!(
                    "Email check completed! {}/{} emails are valid.",
                    report.valid, report.total
                ),
                false,
            )),
            FormPhase::Failed(message) => Some((message.clone(), true)),
        }
    }
}

#[derive(Default)]
pub struct SenderForm {
    pub emails: String,
    pub subject: String,
    pub message: String,
    pub phase: FormPhase<SendOutcome>,
    pub load_receiver: Option<Receiver<Result<Vec<String>, FormError>>>,
    pub send_receiver: Option<Receiver<Result<(), FormError>>>,
}

impl SenderForm {
    pub fn has_pending_work(&self) -> bool {
        self.load_receiver.is_some() || self.send_receiver.is_some()
    }

    pub fn status_text(&self) -> Option<(String, bool)> {
        match &self.phase {
            FormPhase::Idle => None,
            FormPhase::Loading => {
                if self.send_receiver.is_some() {
                    Some(("Sending...".to_string(), false))
                } else {
                    Some(("Reading spreadsheet...".to_string(), false))
                }
            }
            FormPhase::Succeeded(SendOutcome::Loaded) => {
                Some(("Emails loaded successfully from Excel!".to_string(), false))
            }
            FormPhase::Succeeded(SendOutcome::Sent) => {
                Some(("Emails sent successfully!".to_string(), false))
            }
            FormPhase::Failed(message) => Some((message.clone(), true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_form_is_idle_with_no_status() {
        let form = CheckerForm::default();
        assert!(!form.phase.is_loading());
        assert!(form.status_text().is_none());
        assert!(!form.has_pending_work());
    }

    #[test]
    fn check_report_renders_the_summary_line() {
        let form = CheckerForm {
            phase: FormPhase::Succeeded(CheckOutcome::Report(CheckReport {
                results: Vec::new(),
                valid: 1,
                total: 1,
            })),
            ..Default::default()
        };
        let (text, is_error) = form.status_text().unwrap();
        assert_eq!(text, "Email check completed! 1/1 emails are valid.");
        assert!(!is_error);
    }

    #[test]
    fn failure_status_is_flagged_as_error() {
        let form = SenderForm {
            phase: FormPhase::Failed("Failed to send emails: quota exceeded".to_string()),
            ..Default::default()
        };
        let (text, is_error) = form.status_text().unwrap();
        assert_eq!(text, "Failed to send emails: quota exceeded");
        assert!(is_error);
    }
}
