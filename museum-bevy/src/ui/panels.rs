//! Section panels: navbar, footer, landing screen, and the three gallery
//! sections.

use bevy_egui::egui;

use museum_core::{Catalog, ManuscriptsView, Section};

use super::{overlays, GOLD, GOLD_DIM, IVORY, IVORY_DIM, NAVY, NAVY_LIGHT};
use crate::state::MuseumState;

/// Top navigation bar, hidden on the landing screen.
pub fn render_navbar(ctx: &egui::Context, state: &mut MuseumState, now: f64) {
    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::default()
                .fill(NAVY_LIGHT)
                .inner_margin(egui::Margin::symmetric(18.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Logo returns to the landing screen.
                let logo = egui::RichText::new(format!(
                    "{} {}",
                    Section::Landing.icon(),
                    Section::Landing.label()
                ))
                .size(22.0)
                .color(GOLD);
                if ui
                    .add(egui::Label::new(logo).sense(egui::Sense::click()))
                    .clicked()
                {
                    state.request_navigation(Section::Landing, now);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for section in Section::NAV_ITEMS {
                        let active = state.navigator.current() == section
                            || state.navigator.pending_target() == Some(section);
                        let text = egui::RichText::new(format!(
                            "{} {}",
                            section.icon(),
                            section.label()
                        ))
                        .color(if active { GOLD } else { IVORY_DIM });
                        if ui.selectable_label(active, text).clicked() {
                            state.request_navigation(section, now);
                        }
                    }
                });
            });
        });
}

/// Footer, hidden on the landing screen.
pub fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer")
        .frame(
            egui::Frame::default()
                .fill(NAVY_LIGHT)
                .inner_margin(egui::Margin::symmetric(18.0, 8.0)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("المتحف الإسلامي الرقمي التفاعلي")
                        .small()
                        .color(IVORY_DIM),
                );
                ui.label(
                    egui::RichText::new("رحلة عبر تاريخ الحضارة الإسلامية")
                        .small()
                        .color(GOLD_DIM),
                );
            });
        });
}

/// Full-bleed landing screen.
pub fn render_landing(ui: &mut egui::Ui, state: &mut MuseumState, now: f64) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.14);

        ui.label(egui::RichText::new("☪").size(64.0).color(GOLD));
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("بسم الله الرحمن الرحيم")
                .size(20.0)
                .color(GOLD),
        );
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new("المتحف الإسلامي")
                .size(46.0)
                .strong()
                .color(IVORY),
        );
        ui.label(
            egui::RichText::new("الرقمي التفاعلي")
                .size(34.0)
                .color(GOLD),
        );

        ui.add_space(10.0);
        ui.label(egui::RichText::new("◆ ─────── ◆ ─────── ◆").color(GOLD_DIM));
        ui.add_space(10.0);

        ui.label(
            egui::RichText::new(
                "رحلة تفاعلية عبر قاعات الحضارة الإسلامية: العمارة والعلوم والخط \
                 والطب والفنون، ومسيرة الأنبياء، وكنوز المخطوطات",
            )
            .size(18.0)
            .color(IVORY_DIM),
        );

        ui.add_space(24.0);
        let enter = egui::Button::new(
            egui::RichText::new("ادخل المتحف ←")
                .size(22.0)
                .color(NAVY)
                .strong(),
        )
        .fill(GOLD)
        .min_size(egui::vec2(220.0, 48.0));
        if ui.add(enter).clicked() {
            state.enter_museum(now);
        }

        ui.add_space(32.0);
        ui.columns(4, |columns| {
            let features = [
                ("🏛", "قاعات افتراضية"),
                ("📅", "مسيرة الأنبياء"),
                ("📜", "مخطوطات نادرة"),
                ("🔊", "سرد صوتي"),
            ];
            for (column, (icon, title)) in columns.iter_mut().zip(features) {
                column.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(icon).size(28.0));
                    ui.label(egui::RichText::new(title).color(IVORY_DIM));
                });
            }
        });
    });
}

/// Virtual rooms section: card grid, or the open room's detail view.
pub fn render_rooms(ui: &mut egui::Ui, state: &mut MuseumState, now: f64, reset_scroll: bool) {
    if state.rooms.selected().is_some() {
        overlays::render_room_detail(ui, state, now);
        return;
    }

    section_header(ui, "القاعات الافتراضية", "تجول في قاعات الحضارة الإسلامية");

    let mut scroll = egui::ScrollArea::vertical().id_salt("rooms_scroll");
    if reset_scroll {
        scroll = scroll.vertical_scroll_offset(0.0);
    }
    scroll.show(ui, |ui| {
        let rooms = &Catalog::get().rooms;
        let mut clicked = None;
        for row in rooms.chunks(3) {
            ui.columns(3, |columns| {
                for (column, room) in columns.iter_mut().zip(row) {
                    let response = card_frame(column, |ui| {
                        let header = egui::Color32::from_rgb(
                            room.gradient.from[0],
                            room.gradient.from[1],
                            room.gradient.from[2],
                        );
                        ui.label(egui::RichText::new(&room.icon).size(40.0));
                        ui.label(
                            egui::RichText::new(&room.title)
                                .size(20.0)
                                .strong()
                                .color(header),
                        );
                        ui.label(egui::RichText::new(&room.subtitle).color(GOLD));
                        ui.label(egui::RichText::new(&room.description).color(IVORY_DIM));
                    });
                    if response.clicked() {
                        clicked = Some(room.id);
                    }
                }
            });
            ui.add_space(8.0);
        }
        if let Some(id) = clicked {
            state.open_room(id);
        }
    });
}

/// Prophet timeline section.
pub fn render_timeline(ui: &mut egui::Ui, state: &mut MuseumState, reset_scroll: bool) {
    section_header(ui, "مسيرة الأنبياء", "من آدم عليه السلام إلى محمد ﷺ");

    let mut scroll = egui::ScrollArea::vertical().id_salt("timeline_scroll");
    if reset_scroll {
        scroll = scroll.vertical_scroll_offset(0.0);
    }
    scroll.show(ui, |ui| {
        let mut clicked = None;
        for prophet in &Catalog::get().prophets {
            let response = card_frame(ui, |ui| {
                ui.horizontal(|ui| {
                    // Order badge along the timeline.
                    ui.label(
                        egui::RichText::new(format!("{}", prophet.id))
                            .size(22.0)
                            .color(GOLD)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(&prophet.icon).size(26.0));
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&prophet.arabic_name)
                                .size(20.0)
                                .strong()
                                .color(IVORY),
                        );
                        ui.label(egui::RichText::new(&prophet.period).color(GOLD_DIM));
                        ui.label(egui::RichText::new(&prophet.description).color(IVORY_DIM));
                    });
                });
            });
            if response.clicked() {
                clicked = Some(prophet.id);
            }
            ui.add_space(6.0);
        }
        if let Some(id) = clicked {
            // Cards stay clickable behind the modal; opening another one
            // replaces it and must silence it too.
            state.open_prophet(id);
        }
    });
}

/// Manuscript gallery section with category filter chips.
pub fn render_manuscripts(ui: &mut egui::Ui, state: &mut MuseumState, reset_scroll: bool) {
    section_header(ui, "معرض المخطوطات", "كنوز التراث العلمي والأدبي");

    let manuscripts = &Catalog::get().manuscripts;

    // Filter chips: show-all plus each category.
    ui.horizontal_wrapped(|ui| {
        for filter in ManuscriptsView::categories(manuscripts) {
            let active = *state.manuscripts.filter() == filter;
            let text = egui::RichText::new(filter.label())
                .color(if active { NAVY } else { IVORY_DIM });
            if ui.selectable_label(active, text).clicked() {
                state.manuscripts.set_filter(filter);
            }
        }
    });
    ui.add_space(10.0);

    let mut scroll = egui::ScrollArea::vertical().id_salt("manuscripts_scroll");
    if reset_scroll {
        scroll = scroll.vertical_scroll_offset(0.0);
    }
    scroll.show(ui, |ui| {
        let shown = state.manuscripts.filtered(manuscripts);
        let mut clicked = None;
        for row in shown.chunks(2) {
            ui.columns(2, |columns| {
                for (column, manuscript) in columns.iter_mut().zip(row) {
                    let response = card_frame(column, |ui| {
                        let [r, g, b] = manuscript.category_color.rgb();
                        let badge = egui::Color32::from_rgb(r, g, b);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&manuscript.title)
                                    .size(19.0)
                                    .strong()
                                    .color(IVORY),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(&manuscript.category)
                                            .small()
                                            .color(badge),
                                    );
                                },
                            );
                        });
                        ui.label(egui::RichText::new(&manuscript.author).color(GOLD));
                        ui.label(egui::RichText::new(&manuscript.period).color(GOLD_DIM));
                        ui.label(egui::RichText::new(&manuscript.description).color(IVORY_DIM));
                    });
                    if response.clicked() {
                        clicked = Some(manuscript.id);
                    }
                }
            });
            ui.add_space(8.0);
        }
        if let Some(id) = clicked {
            state.open_manuscript(id);
        }
    });
}

fn section_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(32.0).strong().color(GOLD));
        ui.label(egui::RichText::new(subtitle).color(IVORY_DIM));
    });
    ui.add_space(14.0);
}

/// A clickable card with the museum's frame styling.
fn card_frame(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let response = egui::Frame::default()
        .fill(NAVY_LIGHT)
        .stroke(egui::Stroke::new(1.0, GOLD_DIM))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(14.0)
        .show(ui, |ui| {
            add_contents(ui);
        })
        .response;
    response.interact(egui::Sense::click())
}
