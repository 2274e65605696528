// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::state::AppState,
    controller::{InFlight, Session},
    core::{HttpTransport, Transport},
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let http = HttpTransport::new(&state.options)?;
    logf!("Init: endpoint={} lang={}", http.endpoint(), state.options.locale);
    let transport: Arc<dyn Transport> = Arc::new(http);

    eframe::run_native(
        "CrawlLab",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, transport)))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // single source of truth for the page (UI thread only)
    pub session: Session,

    pub transport: Arc<dyn Transport>,

    // the one request in flight, if any
    pub in_flight: Option<InFlight>,

    // transient feedback next to the result actions
    pub status: String,
}

impl App {
    pub fn new(state: AppState, transport: Arc<dyn Transport>) -> Self {
        let session = Session::new(state.options.locale);
        Self {
            state,
            session,
            transport,
            in_flight: None,
            status: s!(),
        }
    }

    /// Apply the worker's outcome once it arrives.
    pub fn poll_in_flight(&mut self) {
        let Some(outcome) = self.in_flight.as_ref().and_then(InFlight::poll) else { return };
        self.in_flight = None;
        self.session.controller.complete(outcome);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_in_flight();

        let t = self.session.strings();

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::footer::draw(ui, t);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(t.title);
                    ui.label(t.subheading);
                });
                ui.add_space(8.0);

                components::keyword_input::draw(ui, self, t);

                ui.separator();

                components::submit_button::draw(ui, self, t);

                if self.session.controller.has_result() {
                    components::result_list::draw(ui, self, t);
                }

                ui.separator();

                if ui.button(t.changelog_button).clicked() {
                    self.session.changelog.toggle();
                }

                ui.separator();

                if self.session.locale_toggle_visible() {
                    components::language_toggle::draw(ui, self, t);
                }

                ui.add_space(16.0);
                components::about::draw(ui, t);
            });
        });

        components::changelog::draw(ctx, &mut self.session.changelog, t);
    }
}
