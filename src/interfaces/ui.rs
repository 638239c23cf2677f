use crate::application::app::EstimatorApp;
use crate::domain::currency::format_inr;
use crate::domain::features::FeatureField;
use chrono::Utc;
use eframe::egui;

// Palette lifted from the product mockups: black/navy base, neon accents.
const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 46, 99);
const ACCENT_LIGHT: egui::Color32 = egui::Color32::from_rgb(0, 255, 245);
const BG: egui::Color32 = egui::Color32::from_rgb(5, 10, 18);

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 0. Theme Configuration ---
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = BG;
        visuals.panel_fill = BG;
        ctx.set_visuals(visuals);

        // --- 1. Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🏠 Homeworth Property Estimator");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("● MODEL READY")
                            .color(egui::Color32::GREEN)
                            .small(),
                    );
                });
            });
        });

        // --- 2. Central Panel: Property Form ---
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Property Details")
                    .heading()
                    .color(ACCENT_LIGHT),
            );
            ui.add_space(10.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    egui::Grid::new("property_form")
                        .num_columns(2)
                        .min_col_width(180.0)
                        .spacing([30.0, 14.0])
                        .show(ui, |ui| {
                            for field in FeatureField::ALL {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} {}",
                                        field.icon(),
                                        field.label()
                                    ))
                                    .strong(),
                                );
                                let entry = self.inputs.entry(field).or_default();
                                ui.add(
                                    egui::TextEdit::singleline(entry)
                                        .hint_text(field.hint())
                                        .desired_width(240.0),
                                );
                                ui.end_row();
                            }
                        });

                    ui.add_space(20.0);

                    // Action buttons
                    ui.horizontal(|ui| {
                        if ui
                            .button(egui::RichText::new("🧮 Calculate").strong())
                            .clicked()
                        {
                            self.calculate();
                        }
                        if ui.button("🔄 Reset").clicked() {
                            self.reset();
                        }
                        if ui.button("💾 Save").clicked() {
                            self.save();
                        }
                    });

                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(5.0);

                    let status_color = if self.status.is_error {
                        egui::Color32::RED
                    } else {
                        egui::Color32::from_gray(220)
                    };
                    ui.label(egui::RichText::new(&self.status.text).color(status_color));
                });
        });

        // --- 3. Result Popup: animated price reveal ---
        if let Some(reveal) = &mut self.reveal {
            if !reveal.done() {
                reveal.tick();
                ctx.request_repaint_after(std::time::Duration::from_millis(50));
            }

            let mut close = false;
            egui::Window::new("Property Valuation Result")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(
                            egui::RichText::new("Estimated Property Price")
                                .size(24.0)
                                .strong()
                                .color(ACCENT),
                        );
                        ui.add_space(15.0);
                        ui.label(
                            egui::RichText::new(format!("₹ {}", format_inr(reveal.current())))
                                .size(36.0)
                                .strong()
                                .color(ACCENT),
                        );
                        ui.add_space(20.0);
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                        ui.add_space(10.0);
                    });
                });

            if close {
                self.reveal = None;
            }
        }
    }
}
