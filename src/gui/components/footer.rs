// src/gui/components/footer.rs
use eframe::egui;
use crate::{config::consts::{APP_VERSION, DEVELOPER}, i18n::Strings};

pub fn draw(ui: &mut egui::Ui, t: &Strings) {
    ui.horizontal(|ui| {
        ui.weak(APP_VERSION);
        ui.separator();
        ui.weak(format!("{} {}.", t.rights, DEVELOPER));
    });
}
