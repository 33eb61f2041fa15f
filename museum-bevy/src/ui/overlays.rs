//! Detail overlays: the open room's full view and the prophet/manuscript
//! modal windows.
//!
//! Every close path here releases the narration the closed view owned, so
//! audio never outlives the control that started it.

use bevy_egui::egui;

use museum_core::{Catalog, ControlId};

use super::{audio_button, GOLD, GOLD_DIM, IVORY, IVORY_DIM, NAVY_LIGHT};
use crate::state::MuseumState;

/// Detail view of the open room, replacing the room grid.
pub fn render_room_detail(ui: &mut egui::Ui, state: &mut MuseumState, now: f64) {
    let Some(room_id) = state.rooms.selected() else {
        return;
    };
    let Some(room) = Catalog::get().room(room_id) else {
        state.rooms.close();
        return;
    };

    if ui
        .button(egui::RichText::new("→ العودة إلى القاعات").color(GOLD))
        .clicked()
    {
        state.rooms.close();
        state.narrator.release_section(ControlId::Room(room_id).section());
        return;
    }
    ui.add_space(10.0);

    // Header banner in the room's gradient colors.
    let from = egui::Color32::from_rgb(
        room.gradient.from[0],
        room.gradient.from[1],
        room.gradient.from[2],
    );
    egui::Frame::default()
        .fill(from.linear_multiply(0.25))
        .stroke(egui::Stroke::new(1.0, from))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&room.icon).size(44.0));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&room.title)
                            .size(28.0)
                            .strong()
                            .color(IVORY),
                    );
                    ui.label(egui::RichText::new(&room.subtitle).color(GOLD));
                });
            });
            ui.label(egui::RichText::new(&room.long_description).color(IVORY_DIM));
            audio_button(
                ui,
                &mut state.narrator,
                ControlId::Room(room_id),
                room.narration_text(),
                "استمع للوصف",
                now,
            );
        });
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .id_salt("room_detail_scroll")
        .show(ui, |ui| {
            let mut toggled = None;
            for row_start in (0..room.items.len()).step_by(3) {
                let row = &room.items[row_start..room.items.len().min(row_start + 3)];
                ui.columns(3, |columns| {
                    for (offset, (column, item)) in columns.iter_mut().zip(row).enumerate() {
                        let index = row_start + offset;
                        let expanded = state.rooms.active_item() == Some(index);
                        let response = egui::Frame::default()
                            .fill(NAVY_LIGHT)
                            .stroke(egui::Stroke::new(
                                1.0,
                                if expanded { GOLD } else { GOLD_DIM },
                            ))
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(12.0)
                            .show(column, |ui| {
                                ui.label(egui::RichText::new(&item.icon).size(30.0));
                                ui.label(
                                    egui::RichText::new(&item.title)
                                        .size(18.0)
                                        .strong()
                                        .color(IVORY),
                                );
                                if expanded {
                                    ui.label(
                                        egui::RichText::new(&item.description).color(IVORY_DIM),
                                    );
                                    audio_button(
                                        ui,
                                        &mut state.narrator,
                                        ControlId::RoomItem(room_id, index),
                                        &item.narration_text(),
                                        "استمع",
                                        now,
                                    );
                                }
                            })
                            .response;
                        if response.interact(egui::Sense::click()).clicked() {
                            toggled = Some(index);
                        }
                    }
                });
                ui.add_space(8.0);
            }
            if let Some(index) = toggled {
                if let Some(previous) = state.rooms.toggle_item(index) {
                    state
                        .narrator
                        .stop_if_owner(ControlId::RoomItem(room_id, previous));
                }
                // Collapsing the item also silences it.
                if state.rooms.active_item().is_none() {
                    state
                        .narrator
                        .stop_if_owner(ControlId::RoomItem(room_id, index));
                }
            }
        });
}

/// Prophet biography modal over the timeline.
pub fn render_prophet_modal(ctx: &egui::Context, state: &mut MuseumState, now: f64) {
    let Some(prophet_id) = state.timeline.selected() else {
        return;
    };
    let Some(prophet) = Catalog::get().prophet(prophet_id) else {
        state.timeline.close();
        return;
    };

    let mut open = true;
    egui::Window::new(
        egui::RichText::new(format!("{} {}", prophet.icon, prophet.arabic_name))
            .size(22.0)
            .color(GOLD),
    )
    .id(egui::Id::new("prophet_modal"))
    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
    .collapsible(false)
    .resizable(false)
    .max_width(520.0)
    .open(&mut open)
    .show(ctx, |ui| {
        ui.label(egui::RichText::new(&prophet.period).color(GOLD_DIM));
        ui.separator();
        ui.label(egui::RichText::new(&prophet.details).color(IVORY));
        ui.add_space(8.0);
        audio_button(
            ui,
            &mut state.narrator,
            ControlId::Prophet(prophet_id),
            &prophet.narration_text(),
            "استمع للسيرة",
            now,
        );
    });

    if !open {
        state.timeline.close();
        state.narrator.stop_if_owner(ControlId::Prophet(prophet_id));
    }
}

/// Manuscript detail modal over the gallery.
pub fn render_manuscript_modal(ctx: &egui::Context, state: &mut MuseumState, now: f64) {
    let Some(manuscript_id) = state.manuscripts.selected() else {
        return;
    };
    let Some(manuscript) = Catalog::get().manuscript(manuscript_id) else {
        state.manuscripts.close();
        return;
    };

    let mut open = true;
    egui::Window::new(
        egui::RichText::new(&manuscript.title).size(22.0).color(GOLD),
    )
    .id(egui::Id::new("manuscript_modal"))
    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
    .collapsible(false)
    .resizable(false)
    .max_width(520.0)
    .open(&mut open)
    .show(ctx, |ui| {
        let [r, g, b] = manuscript.category_color.rgb();
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&manuscript.category)
                    .color(egui::Color32::from_rgb(r, g, b)),
            );
            ui.label(egui::RichText::new(&manuscript.period).color(GOLD_DIM));
        });
        ui.label(egui::RichText::new(format!("من تأليف {}", manuscript.author)).color(GOLD));
        ui.separator();
        ui.label(egui::RichText::new(&manuscript.details).color(IVORY));
        ui.add_space(8.0);
        audio_button(
            ui,
            &mut state.narrator,
            ControlId::Manuscript(manuscript_id),
            &manuscript.narration_text(),
            "استمع للوصف",
            now,
        );
    });

    if !open {
        state.manuscripts.close();
        state
            .narrator
            .stop_if_owner(ControlId::Manuscript(manuscript_id));
    }
}
