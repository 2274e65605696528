// src/gui/components/about.rs
//
// Descriptive copy below the tool: what it is, how to donate, where to
// find the developer. Addresses and links are rendered verbatim.
use eframe::egui;
use crate::{config::consts::{DONATIONS, SOCIALS}, i18n::Strings};

pub fn draw(ui: &mut egui::Ui, t: &Strings) {
    ui.heading(t.about_title);
    ui.label(t.about_content);
    ui.add_space(8.0);

    ui.heading(t.support_title);
    ui.label(t.support_content);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        for (i, (label, address)) in DONATIONS.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("[{label}] -"));
                ui.add(egui::Label::new(egui::RichText::new(*address).monospace()).selectable(true));
            });
        }
    });
    ui.add_space(8.0);

    ui.heading(t.connect_title);
    ui.horizontal(|ui| {
        for (label, url) in SOCIALS {
            ui.hyperlink_to(*label, *url);
        }
    });
}
