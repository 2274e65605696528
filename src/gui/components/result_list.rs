// src/gui/components/result_list.rs
//
// Table of the last result: one row per link, labelled with its group.
// Groups without links get a single row carrying the "no links" text.
// Links are shortened for display but open/copy in full.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::LINK_MAX_LEN,
    core::payload::truncate_link,
    gui::{actions, app::App},
    i18n::Strings,
};

/// A flattened table row: (group label, link).
type Row<'a> = (&'a str, Option<&'a str>);

pub fn draw(ui: &mut egui::Ui, app: &mut App, t: &Strings) {
    let mut back_clicked = false;
    let mut copy_clicked = false;

    {
        let Some(result) = app.session.controller.result() else { return };

        let rows: Vec<Row<'_>> = result
            .groups()
            .iter()
            .flat_map(|g| {
                let label = g.label.as_str();
                let links: Vec<Row<'_>> = if g.links.is_empty() {
                    vec![(label, None)]
                } else {
                    g.links.iter().map(|l| (label, Some(l.as_str()))).collect()
                };
                links
            })
            .collect();

        ui.add_space(8.0);

        if rows.is_empty() {
            ui.label(t.no_links);
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().resizable(true).at_least(90.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| { ui.strong(t.keyword_column); });
                    header.col(|ui| { ui.strong(t.link_column); });
                })
                .body(|body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let Some((label, link)) = rows.get(row.index()).copied() else { return };
                        row.col(|ui| { ui.label(label); });
                        row.col(|ui| match link {
                            Some(link) => {
                                ui.hyperlink_to(truncate_link(link, LINK_MAX_LEN).into_owned(), link)
                                    .on_hover_text(link);
                            }
                            None => { ui.weak(t.no_links); }
                        });
                    });
                });
        }

        ui.horizontal(|ui| {
            back_clicked = ui.button(t.back_button).clicked();
            copy_clicked = ui.button(t.copy_button).clicked();
            if !app.status.is_empty() {
                ui.label(&app.status);
            }
        });
    }

    // Handle clicks after the result borrow ends
    if copy_clicked {
        actions::copy(app, ui.ctx());
    }
    if back_clicked {
        actions::back(app);
    }
}
