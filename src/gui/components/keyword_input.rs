// src/gui/components/keyword_input.rs
use eframe::egui;
use crate::{gui::{actions, app::App}, i18n::Strings};

pub fn draw(ui: &mut egui::Ui, app: &mut App, t: &Strings) {
    let resp = ui.add(
        egui::TextEdit::singleline(app.session.controller.input_mut())
            .hint_text(t.placeholder)
            .desired_width(f32::INFINITY),
    );

    if resp.changed() {
        logd!("UI: keywords text → {:?}", app.session.controller.input());
    }

    // Enter in the field behaves like the Parse button.
    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        actions::submit(app, ui.ctx());
    }
}
