// src/gui/components/changelog.rs
use eframe::egui;
use crate::{controller::ChangelogOverlay, i18n::Strings};

pub fn draw(ctx: &egui::Context, overlay: &mut ChangelogOverlay, t: &Strings) {
    if !overlay.is_open() {
        return;
    }

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(t.changelog_title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                ui.label(t.changelog_content);
            });
            ui.separator();
            if ui.button(t.close_button).clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        overlay.close();
        logd!("UI: changelog closed");
    }
}
