use super::{BulkMailer, CheckOutcome, FormPhase, Tab};
use crate::utils::email_list::split_email_list;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const RED: Color32 = Color32::from_rgb(220, 50, 50);

impl BulkMailer {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(15.0);
            ui.vertical_centered(|ui| {
                ui.heading(match self.active_tab {
                    Tab::Checker => "Email Validator & Checker",
                    Tab::Sender => "Email Bulk Message Sender",
                });
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Upload Excel files or enter emails manually")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::Checker, "✅ Email Checker");
                ui.selectable_value(&mut self.active_tab, Tab::Sender, "📧 Bulk Sender");
            });
            ui.separator();
            ui.add_space(10.0);

            egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                Tab::Checker => self.render_checker(ui),
                Tab::Sender => self.render_sender(ui),
            });
        });
    }

    fn render_checker(&mut self, ui: &mut egui::Ui) {
        let mut picked_file = None;
        let is_loading = self.checker.phase.is_loading();

        render_upload_group(ui, is_loading, &mut picked_file);
        if let Some(path) = picked_file {
            self.load_checker_file(path);
        }

        ui.add_space(10.0);
        render_emails_group(ui, &mut self.checker.emails);

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let can_check = !self.checker.emails.trim().is_empty() && !is_loading;
            let label = if is_loading {
                "⏳ Checking Emails..."
            } else {
                "✅ Check Emails"
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
            if ui.add_enabled(can_check, button).clicked() {
                self.check_emails();
            }
        });

        ui.add_space(15.0);
        ui.group(|ui| {
            ui.label(RichText::new("Validation Results").strong());
            ui.add_space(5.0);

            if let Some((text, is_error)) = self.checker.status_text() {
                ui.colored_label(if is_error { RED } else { GREEN }, text);
                ui.add_space(5.0);
            }

            if let FormPhase::Succeeded(CheckOutcome::Report(report)) = &self.checker.phase {
                egui::ScrollArea::vertical()
                    .max_height(300.0)
                    .show(ui, |ui| {
                        for result in &report.results {
                            ui.horizontal(|ui| {
                                if result.is_valid() {
                                    ui.label("✅");
                                    ui.label(&result.email);
                                    ui.colored_label(GREEN, &result.status);
                                } else {
                                    ui.label("❌");
                                    ui.label(&result.email);
                                    ui.colored_label(RED, &result.status);
                                }
                            });
                            ui.add_space(2.0);
                        }
                    });
            } else if matches!(self.checker.phase, FormPhase::Idle) {
                ui.label(
                    RichText::new("Ready to check emails")
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                );
            }
        });
    }

    fn render_sender(&mut self, ui: &mut egui::Ui) {
        let mut picked_file = None;
        let is_loading = self.sender.phase.is_loading();

        render_upload_group(ui, is_loading, &mut picked_file);
        if let Some(path) = picked_file {
            self.load_sender_file(path);
        }

        ui.add_space(10.0);
        render_emails_group(ui, &mut self.sender.emails);

        ui.add_space(10.0);
        ui.group(|ui| {
            ui.label("Subject");
            ui.add_sized(
                [ui.available_width(), 24.0],
                egui::TextEdit::singleline(&mut self.sender.subject).hint_text("Email subject"),
            );
            ui.add_space(8.0);
            ui.label("Message");
            ui.add_sized(
                [ui.available_width(), 120.0],
                egui::TextEdit::multiline(&mut self.sender.message)
                    .hint_text("Write your message here"),
            );
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let can_send = !self.sender.emails.trim().is_empty()
                && !self.sender.subject.trim().is_empty()
                && !self.sender.message.trim().is_empty()
                && !is_loading;
            let label = if is_loading {
                "⏳ Sending..."
            } else {
                "📧 Send Emails"
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
            if ui.add_enabled(can_send, button).clicked() {
                self.send_emails();
            }
        });

        if let Some((text, is_error)) = self.sender.status_text() {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(if is_error { RED } else { GREEN }, text);
            });
        }
    }
}

fn render_upload_group(ui: &mut egui::Ui, is_loading: bool, picked_file: &mut Option<std::path::PathBuf>) {
    ui.group(|ui| {
        ui.label("Upload Excel File");
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            let button = egui::Button::new("📁 Select Spreadsheet");
            if ui.add_enabled(!is_loading, button).clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter("Spreadsheets", &["xlsx", "xls", "csv"])
                    .pick_file()
                {
                    *picked_file = Some(path);
                }
            }
            ui.label(
                RichText::new(".xlsx, .xls, or .csv (or drop a file on the window)")
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
        });
    });
}

fn render_emails_group(ui: &mut egui::Ui, emails: &mut String) {
    ui.group(|ui| {
        ui.label("Email Addresses");
        ui.add_sized(
            [ui.available_width(), 80.0],
            egui::TextEdit::multiline(emails)
                .hint_text("Enter email addresses separated by commas"),
        );
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Example: email1@example.com, email2@example.com")
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} emails", split_email_list(emails).len()));
            });
        });
    });
}
