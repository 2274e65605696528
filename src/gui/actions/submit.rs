// src/gui/actions/submit.rs
use eframe::egui;

use crate::{controller::InFlight, gui::app::App};

pub fn submit(app: &mut App, ui_ctx: &egui::Context) {
    // The controller refuses while a request is in flight; this also covers
    // Enter being pressed while the button is disabled.
    let Some(payload) = app.session.submit() else { return };

    app.status.clear();

    let ctx = ui_ctx.clone();
    app.in_flight = Some(InFlight::dispatch(
        app.transport.clone(),
        payload,
        move || ctx.request_repaint(),
    ));
}
