// src/gui/components/language_toggle.rs
use eframe::egui;
use crate::{gui::app::App, i18n::Strings};

pub fn draw(ui: &mut egui::Ui, app: &mut App, t: &Strings) {
    ui.horizontal(|ui| {
        ui.label("🌐");
        if ui.button(t.language_toggle).clicked() {
            app.session.toggle_locale();
        }
    });
}
