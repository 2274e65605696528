// src/gui/actions/back.rs
use crate::gui::app::App;

pub fn back(app: &mut App) {
    if app.session.controller.back() {
        app.status.clear();
    }
}
