use eframe::egui;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::ConsoleConfig;
use crate::format::render_body;
use crate::request::{HttpMethod, Outcome, spawn_fetch};

pub struct ConsoleApp {
    config: ConsoleConfig,

    // Request configuration
    url: String,

    // Output area, replaced on every outcome
    output: String,

    // UI state
    in_flight: bool,

    // Communication channel for background requests
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl ConsoleApp {
    pub fn new(config: ConsoleConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            url: config.default_url.clone(),
            output: config.placeholder.clone(),
            in_flight: false,
            config,
            tx,
            rx,
        }
    }

    /// Starts a request for the URL currently in the input field.
    fn submit(&mut self, method: HttpMethod, ctx: &egui::Context) {
        let url = self.url.clone();
        log::info!("Submitting {method} {url}");

        self.in_flight = true;
        spawn_fetch(
            method,
            url,
            self.config.system_proxy,
            self.tx.clone(),
            ctx.clone(),
        );
    }

    /// Replaces the output area with the rendering of `outcome`.
    fn apply(&mut self, outcome: Outcome) {
        self.in_flight = false;
        self.output.clear();

        match outcome {
            Outcome::Body(bytes) => match render_body(&bytes) {
                Ok(pretty) => self.output = pretty,
                Err(e) => log::error!("Could not display response: {e}"),
            },
            Outcome::Failed(message) => self.output = message,
        }
    }

    fn render_request_section(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label("Prepare your HTTP request");
            ui.label("url:");

            let url_response = ui.add(
                egui::TextEdit::singleline(&mut self.url)
                    .desired_width(self.config.url_field_width),
            );

            let submit_button = ui.add_enabled(!self.in_flight, egui::Button::new("Submit"));
            let enter_pressed =
                url_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (submit_button.clicked() || enter_pressed) && !self.in_flight {
                self.submit(HttpMethod::Get, ui.ctx());
            }

            if ui.button("Close").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }

            if self.in_flight {
                ui.spinner();
            }
        });
    }

    fn render_output_section(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("output_scroll")
            .show(ui, |ui| {
                let line_height = ui.text_style_height(&egui::TextStyle::Monospace);
                let rows = (ui.available_height() / line_height).max(1.0) as usize;

                // A `&str` buffer is selectable but cannot be edited.
                ui.add(
                    egui::TextEdit::multiline(&mut self.output.as_str())
                        .code_editor()
                        .frame(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(rows),
                );
            });
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_request_section(ui);
            ui.add_space(8.0);
            self.render_output_section(ui);
        });
    }
}
