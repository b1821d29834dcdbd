use std::sync::{Arc, Mutex};
use std::time::Duration;

use eframe::egui;
use eframe::egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};
use tokio::sync::{mpsc, watch};
use tr::tr;
use tracing::error;

use crate::logic::address::{AddressError, normalize_address};
use crate::logic::client::DeviceClient;
use crate::logic::poller::{SharedState, control_task};
use crate::model::{AppState, DeviceId, Direction, ProbeStatus};

/// Runtime options for the panel, filled from the CLI in `main`.
#[derive(Debug, Clone, Copy)]
pub struct PanelOptions {
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            request_timeout: Duration::from_secs(3),
        }
    }
}

pub struct DeckRemote {
    pub(crate) state: SharedState,
    pub input_address: String,
    pub(crate) input_error: Option<String>,
    commands: mpsc::UnboundedSender<Direction>,
    shutdown: watch::Sender<bool>,
}

/// Helper for application-specific colors adapted for light/dark themes.
struct PanelVisuals {
    pub is_dark: bool,
}

impl PanelVisuals {
    fn from_ctx(ctx: &egui::Context) -> Self {
        Self {
            is_dark: ctx.style().visuals.dark_mode,
        }
    }

    fn ok_color(&self) -> Color32 {
        if self.is_dark {
            Color32::from_rgb(86, 180, 233) // Sky Blue
        } else {
            Color32::from_rgb(0, 114, 178) // Blue
        }
    }

    fn error_color(&self) -> Color32 {
        Color32::from_rgb(213, 94, 0) // Vermilion
    }
}

impl DeckRemote {
    pub fn new(_cc: &eframe::CreationContext<'_>, options: PanelOptions) -> Self {
        let state: SharedState = Arc::new(Mutex::new(AppState::default()));

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task_state = Arc::clone(&state);
        std::thread::spawn(move || {
            let client = match DeviceClient::new(options.request_timeout) {
                Ok(client) => client,
                Err(err) => {
                    error!(error = %err, "failed to build the HTTP client");
                    return;
                }
            };
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("control runtime")
                .block_on(control_task(
                    task_state,
                    client,
                    options.poll_interval,
                    command_rx,
                    shutdown_rx,
                ));
        });

        Self {
            state,
            input_address: String::new(),
            input_error: None,
            commands: command_tx,
            shutdown: shutdown_tx,
        }
    }

    /// Test constructor: no background runtime; broadcast commands land in
    /// the returned receiver.
    pub fn from_state(state: SharedState) -> (Self, mpsc::UnboundedReceiver<Direction>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        (
            Self {
                state,
                input_address: String::new(),
                input_error: None,
                commands: command_tx,
                shutdown: shutdown_tx,
            },
            command_rx,
        )
    }

    pub fn ui_layout(&mut self, ctx: &egui::Context) {
        let visuals = PanelVisuals::from_ctx(ctx);

        egui::TopBottomPanel::top("registration").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let addr_field_id = ui.make_persistent_id("addr_field");

                let rs = ui.add(
                    egui::TextEdit::singleline(&mut self.input_address)
                        .id(addr_field_id)
                        .char_limit(80)
                        .hint_text(tr!("Device address"))
                        .desired_width(8.0 * 30.0),
                );

                // "Add" button click or Enter in the field registers the
                // address.
                if ui.button(tr!("Add")).clicked()
                    || (rs.lost_focus() && rs.ctx.input(|i| i.key_pressed(egui::Key::Enter)))
                {
                    self.add_device();
                    if self.input_error.is_none() {
                        ui.memory_mut(|mem| mem.request_focus(addr_field_id));
                    }
                }

                // Theme switcher (right side)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut theme = ui.ctx().options(|o| o.theme_preference);
                    let old_theme = theme;
                    theme.radio_buttons(ui);
                    if theme != old_theme {
                        ui.ctx().options_mut(|o| o.theme_preference = theme);
                    }
                });
            });

            if let Some(ref message) = self.input_error {
                ui.colored_label(visuals.error_color(), message);
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("slide_controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new(tr!("⏴ Previous")).strong()).clicked() {
                    self.send_direction(Direction::Prev);
                }
                if ui.button(RichText::new(tr!("Next ⏵")).strong()).clicked() {
                    self.send_direction(Direction::Next);
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.device_table(ui, &visuals);
        });
    }

    fn device_table(&mut self, ui: &mut egui::Ui, visuals: &PanelVisuals) {
        // Clone once so the table body never holds the state lock.
        let (devices, statuses) = {
            let state = self.state.lock().unwrap();
            (state.devices.clone(), state.statuses.clone())
        };

        let mut to_remove: Vec<DeviceId> = Vec::new();

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(240.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(40.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong(tr!("Address"));
                });
                header.col(|ui| {
                    ui.strong(tr!("Status"));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for device in &devices {
                    let status = statuses.get(&device.id).copied().unwrap_or_default();
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(&device.address).monospace());
                        });
                        row.col(|ui| match status {
                            // Empty cell until the first probe lands.
                            ProbeStatus::Unknown => {}
                            ProbeStatus::Ok => {
                                ui.colored_label(visuals.ok_color(), "●")
                                    .on_hover_text(tr!("Responding"));
                            }
                            ProbeStatus::Error => {
                                ui.colored_label(visuals.error_color(), "●")
                                    .on_hover_text(tr!("Not responding"));
                            }
                        });
                        row.col(|ui| {
                            if ui.button("x").clicked() {
                                to_remove.push(device.id);
                            }
                        });
                    });
                }
            });

        if !to_remove.is_empty() {
            let mut state = self.state.lock().unwrap();
            for id in to_remove {
                state.remove_device(id);
            }
        }
    }

    fn add_device(&mut self) {
        match normalize_address(&self.input_address) {
            Ok(address) => {
                self.state.lock().unwrap().add_device(address);
                self.input_address.clear();
                self.input_error = None;
            }
            Err(err) => {
                // Rejected input stays in the field for correction.
                self.input_error = Some(match err {
                    AddressError::Empty => tr!("Enter a device address."),
                    AddressError::Invalid(_) => tr!("Enter a valid device address."),
                });
            }
        }
    }

    fn send_direction(&self, direction: Direction) {
        if self.commands.send(direction).is_err() {
            error!(?direction, "control task is gone, dropping slide command");
        }
    }
}

impl eframe::App for DeckRemote {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_layout(ctx);
        ctx.request_repaint_after(Duration::from_millis(1000));
    }
}

impl Drop for DeckRemote {
    fn drop(&mut self) {
        // Stop the control task so a torn-down view never keeps probing.
        let _ = self.shutdown.send(true);
    }
}
