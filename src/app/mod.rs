mod state;
mod ui;

use crate::api::{BackendClient, CheckReport};
use crate::config::BackendConfig;
use crate::error::FormError;
use crate::extract::{self, FileKind};
use crate::utils::email_list::split_email_list;
use eframe::{egui, App};
pub use state::{CheckOutcome, CheckerForm, FormPhase, SendOutcome, SenderForm};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Checker,
    Sender,
}

pub struct BulkMailer {
    pub(crate) active_tab: Tab,
    pub(crate) checker: CheckerForm,
    pub(crate) sender: SenderForm,
    config: BackendConfig,
}

impl BulkMailer {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BackendConfig) -> Self {
        log::info!("Initializing Email Checker & Bulk Sender");
        Self::with_config(config)
    }

    pub fn with_config(config: BackendConfig) -> Self {
        Self {
            active_tab: Tab::Checker,
            checker: CheckerForm::default(),
            sender: SenderForm::default(),
            config,
        }
    }

    /// File-type gate plus background extraction. The gate rejects on the
    /// file name alone; nothing is read from disk for an unsupported
    /// extension. The worker sends exactly one result.
    fn spawn_extract(path: PathBuf) -> Result<Receiver<Result<Vec<String>, FormError>>, FormError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let kind = FileKind::from_name(&name).ok_or(FormError::UnsupportedFileType)?;

        let (sender, receiver) = channel();
        std::thread::spawn(move || {
            let result = extract::extract_emails(&path, kind)
                .map_err(|e| {
                    log::warn!("Spreadsheet extraction failed for {}: {}", path.display(), e);
                    FormError::FileRead(e)
                })
                .and_then(|emails| {
                    if emails.is_empty() {
                        Err(FormError::NoEmailsFound)
                    } else {
                        Ok(emails)
                    }
                });
            let _ = sender.send(result);
        });
        Ok(receiver)
    }

    pub fn load_checker_file(&mut self, path: PathBuf) {
        match Self::spawn_extract(path) {
            Ok(receiver) => {
                self.checker.phase = FormPhase::Loading;
                self.checker.load_receiver = Some(receiver);
            }
            Err(e) => self.checker.phase = FormPhase::Failed(e.to_string()),
        }
    }

    pub fn load_sender_file(&mut self, path: PathBuf) {
        match Self::spawn_extract(path) {
            Ok(receiver) => {
                self.sender.phase = FormPhase::Loading;
                self.sender.load_receiver = Some(receiver);
            }
            Err(e) => self.sender.phase = FormPhase::Failed(e.to_string()),
        }
    }

    pub fn check_emails(&mut self) {
        let emails = split_email_list(&self.checker.emails);
        log::info!("Checking {} email addresses", emails.len());

        self.checker.phase = FormPhase::Loading;
        let (sender, receiver) = channel();
        self.checker.check_receiver = Some(receiver);

        let client = BackendClient::new(self.config.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(client.validate(&emails));
            let _ = sender.send(result);
        });
    }

    pub fn send_emails(&mut self) {
        let emails = split_email_list(&self.sender.emails);
        let subject = self.sender.subject.clone();
        let message = self.sender.message.clone();
        log::info!("Sending message to {} recipients", emails.len());

        self.sender.phase = FormPhase::Loading;
        let (sender, receiver) = channel();
        self.sender.send_receiver = Some(receiver);

        let client = BackendClient::new(self.config.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(client.send(&emails, &subject, &message));
            let _ = sender.send(result);
        });
    }

    fn on_checker_loaded(&mut self, result: Result<Vec<String>, FormError>) {
        match result {
            Ok(emails) => {
                // Extracted addresses replace whatever was typed before.
                self.checker.emails = emails.join(", ");
                self.checker.phase = FormPhase::Succeeded(CheckOutcome::Loaded);
            }
            Err(e) => self.checker.phase = FormPhase::Failed(e.to_string()),
        }
    }

    fn on_sender_loaded(&mut self, result: Result<Vec<String>, FormError>) {
        match result {
            Ok(emails) => {
                self.sender.emails = emails.join(", ");
                self.sender.phase = FormPhase::Succeeded(SendOutcome::Loaded);
            }
            Err(e) => self.sender.phase = FormPhase::Failed(e.to_string()),
        }
    }

    fn on_check_finished(&mut self, result: Result<CheckReport, FormError>) {
        self.checker.phase = match result {
            Ok(report) => FormPhase::Succeeded(CheckOutcome::Report(report)),
            Err(FormError::BackendRejected(msg)) => {
                FormPhase::Failed(format!("Failed to validate emails: {}", msg))
            }
            Err(FormError::Transport(msg)) => FormPhase::Failed(format!("Error: {}", msg)),
            Err(e) => FormPhase::Failed(e.to_string()),
        };
    }

    fn on_send_finished(&mut self, result: Result<(), FormError>) {
        self.sender.phase = match result {
            Ok(()) => {
                // Only a successful send clears the inputs.
                self.sender.emails.clear();
                self.sender.subject.clear();
                self.sender.message.clear();
                FormPhase::Succeeded(SendOutcome::Sent)
            }
            Err(FormError::BackendRejected(msg)) => {
                FormPhase::Failed(format!("Failed to send emails: {}", msg))
            }
            Err(FormError::Transport(msg)) => FormPhase::Failed(format!("Error: {}", msg)),
            Err(e) => FormPhase::Failed(e.to_string()),
        };
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.checker.load_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.checker.load_receiver = None;
                self.on_checker_loaded(result);
            }
        }
        if let Some(receiver) = &self.checker.check_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.checker.check_receiver = None;
                self.on_check_finished(result);
            }
        }
        if let Some(receiver) = &self.sender.load_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.sender.load_receiver = None;
                self.on_sender_loaded(result);
            }
        }
        if let Some(receiver) = &self.sender.send_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.sender.send_receiver = None;
                self.on_send_finished(result);
            }
        }

        // Keep polling while a worker is outstanding, otherwise its result
        // would sit in the channel until the next input event.
        if self.checker.has_pending_work() || self.sender.has_pending_work() {
            ctx.request_repaint();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            match self.active_tab {
                Tab::Checker => self.load_checker_file(path),
                Tab::Sender => self.load_sender_file(path),
            }
        }
    }
}

impl App for BulkMailer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.handle_dropped_files(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ValidationResult;

    fn app() -> BulkMailer {
        BulkMailer::with_config(BackendConfig::default())
    }

    #[test]
    fn loaded_emails_overwrite_the_input_field() {
        let mut app = app();
        app.checker.emails = "old@x.com".to_string();
        app.on_checker_loaded(Ok(vec!["a@x.com".to_string(), "b@y.com".to_string()]));

        assert_eq!(app.checker.emails, "a@x.com, b@y.com");
        let (text, is_error) = app.checker.status_text().unwrap();
        assert_eq!(text, "Emails loaded successfully from Excel!");
        assert!(!is_error);
    }

    #[test]
    fn extraction_failure_leaves_the_input_untouched() {
        let mut app = app();
        app.checker.emails = "typed@x.com".to_string();
        app.on_checker_loaded(Err(FormError::NoEmailsFound));

        assert_eq!(app.checker.emails, "typed@x.com");
        let (text, is_error) = app.checker.status_text().unwrap();
        assert_eq!(text, "No valid email addresses found in the file");
        assert!(is_error);
    }

    #[test]
    fn unsupported_extension_fails_without_spawning_a_worker() {
        let mut app = app();
        app.load_checker_file(PathBuf::from("contacts.txt"));

        assert!(app.checker.load_receiver.is_none());
        let (text, is_error) = app.checker.status_text().unwrap();
        assert_eq!(text, "Please upload a valid Excel or CSV file");
        assert!(is_error);
    }

    #[test]
    fn check_success_produces_the_summary_status() {
        let mut app = app();
        app.on_check_finished(Ok(CheckReport {
            results: vec![ValidationResult {
                email: "a@x.com".to_string(),
                status: "Valid".to_string(),
            }],
            valid: 1,
            total: 1,
        }));

        let (text, _) = app.checker.status_text().unwrap();
        assert_eq!(text, "Email check completed! 1/1 emails are valid.");
    }

    #[test]
    fn check_rejection_uses_the_validate_prefix() {
        let mut app = app();
        app.on_check_finished(Err(FormError::BackendRejected("bad request".to_string())));

        let (text, is_error) = app.checker.status_text().unwrap();
        assert_eq!(text, "Failed to validate emails: bad request");
        assert!(is_error);
    }

    #[test]
    fn transport_failure_surfaces_the_exception_text() {
        let mut app = app();
        app.on_check_finished(Err(FormError::Transport("connection refused".to_string())));

        let (text, _) = app.checker.status_text().unwrap();
        assert_eq!(text, "Error: connection refused");
    }

    #[test]
    fn send_success_clears_all_three_inputs() {
        let mut app = app();
        app.sender.emails = "a@x.com".to_string();
        app.sender.subject = "Hello".to_string();
        app.sender.message = "Body".to_string();
        app.on_send_finished(Ok(()));

        assert!(app.sender.emails.is_empty());
        assert!(app.sender.subject.is_empty());
        assert!(app.sender.message.is_empty());
        let (text, _) = app.sender.status_text().unwrap();
        assert_eq!(text, "Emails sent successfully!");
    }

    #[test]
    fn send_rejection_keeps_the_inputs() {
        let mut app = app();
        app.sender.emails = "a@x.com".to_string();
        app.sender.subject = "Hello".to_string();
        app.sender.message = "Body".to_string();
        app.on_send_finished(Err(FormError::BackendRejected("quota exceeded".to_string())));

        assert_eq!(app.sender.emails, "a@x.com");
        assert_eq!(app.sender.subject, "Hello");
        assert_eq!(app.sender.message, "Body");
        let (text, is_error) = app.sender.status_text().unwrap();
        assert_eq!(text, "Failed to send emails: quota exceeded");
        assert!(is_error);
    }

    #[test]
    fn spreadsheet_without_emails_surfaces_no_emails_found() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "name,count").unwrap();
        writeln!(file, "widget,3").unwrap();

        let mut app = app();
        app.load_checker_file(file.path().to_path_buf());

        let receiver = app.checker.load_receiver.take().unwrap();
        let result = receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        app.on_checker_loaded(result);

        let (text, is_error) = app.checker.status_text().unwrap();
        assert_eq!(text, "No valid email addresses found in the file");
        assert!(is_error);
    }

    #[test]
    fn csv_load_round_trips_through_the_worker() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "jane@example.com,foo").unwrap();
        writeln!(file, "bar@baz.org").unwrap();

        let mut app = app();
        app.load_sender_file(file.path().to_path_buf());
        assert!(app.sender.phase.is_loading());

        let receiver = app.sender.load_receiver.take().unwrap();
        let result = receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        app.on_sender_loaded(result);

        assert_eq!(app.sender.emails, "jane@example.com, bar@baz.org");
    }
}
