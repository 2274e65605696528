// src/gui/components/submit_button.rs
use eframe::egui::{self, widgets::Spinner};
use crate::{gui::{actions, app::App}, i18n::Strings};

pub fn draw(ui: &mut egui::Ui, app: &mut App, t: &Strings) {
    let busy = app.session.controller.is_submitting();
    let enabled = app.session.controller.can_submit();

    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 150, 90);

        let button_parse = ui.add_enabled(
            enabled,
            egui::Button::new(
                egui::RichText::new(t.parse_button)
                .color(egui::Color32::WHITE)
                .strong())
            .fill(green));

        if button_parse.clicked() {
            actions::submit(app, ui.ctx());
        }

        if busy {
            ui.add(Spinner::new().size(16.0));
        }
    });
}
