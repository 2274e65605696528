// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

/// Copy every link of the current result, untruncated, one per line.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(result) = app.session.controller.result() else {
        logd!("Copy: Clicked, but there's no result");
        return;
    };

    let links: Vec<&str> = result.links().collect();
    if links.is_empty() {
        app.status = s!(app.session.strings().no_links);
        logd!("Copy: Clicked, but the result has no links");
        return;
    }

    let n = links.len();
    ui_ctx.copy_text(links.join("\n"));
    logf!("Copy: links={}", n);

    app.status = format!("{} {}", n, app.session.strings().links_copied);
}
