//! egui user interface for the museum.
//!
//! The UI renders whichever section the navigator says is current, at the
//! opacity the navigator reports, so the 300ms crossfade falls out of plain
//! immediate-mode rendering. Chrome (navbar and footer) is skipped on the
//! landing screen.

mod audio;
mod overlays;
mod panels;

pub use audio::audio_button;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use museum_core::Section;

use crate::state::MuseumState;

// Palette: deep night blue with gold accents, ivory text.
pub const NAVY: egui::Color32 = egui::Color32::from_rgb(10, 22, 40);
pub const NAVY_LIGHT: egui::Color32 = egui::Color32::from_rgb(20, 36, 60);
pub const GOLD: egui::Color32 = egui::Color32::from_rgb(201, 168, 76);
pub const GOLD_DIM: egui::Color32 = egui::Color32::from_rgb(120, 101, 48);
pub const IVORY: egui::Color32 = egui::Color32::from_rgb(243, 239, 230);
pub const IVORY_DIM: egui::Color32 = egui::Color32::from_rgb(170, 168, 160);

/// Apply the museum's visual theme to the egui context.
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (
            egui::TextStyle::Heading,
            egui::FontId::new(30.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::new(17.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::new(17.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Small,
            egui::FontId::new(13.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::new(15.0, egui::FontFamily::Monospace),
        ),
    ]
    .into();

    style.visuals.panel_fill = NAVY;
    style.visuals.window_fill = NAVY_LIGHT;
    style.visuals.window_stroke = egui::Stroke::new(1.0, GOLD_DIM);
    style.visuals.override_text_color = Some(IVORY);
    style.visuals.widgets.noninteractive.bg_fill = NAVY_LIGHT;
    style.visuals.widgets.inactive.bg_fill = NAVY_LIGHT;
    style.visuals.widgets.hovered.bg_fill = GOLD_DIM;
    style.visuals.widgets.active.bg_fill = GOLD;
    style.visuals.selection.bg_fill = GOLD_DIM;
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    ctx.set_style(style);
}

/// Main UI rendering system.
pub fn main_ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<MuseumState>,
    time: Res<Time>,
    mut styled: Local<bool>,
) {
    let ctx = contexts.ctx_mut();
    if !*styled {
        configure_style(ctx);
        *styled = true;
    }

    let now = time.elapsed_secs_f64();
    let state = &mut *state;

    if state.navigator.chrome_visible() {
        panels::render_navbar(ctx, state, now);
        panels::render_footer(ctx);
    }

    let reset_scroll = std::mem::take(&mut state.reset_scroll);
    let opacity = state.navigator.opacity(now);
    let section = state.navigator.current();

    egui::CentralPanel::default()
        .frame(
            egui::Frame::default()
                .fill(central_panel_fill(section))
                .inner_margin(24.0),
        )
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            match section {
                Section::Landing => panels::render_landing(ui, state, now),
                Section::Rooms => panels::render_rooms(ui, state, now, reset_scroll),
                Section::Timeline => panels::render_timeline(ui, state, reset_scroll),
                Section::Manuscripts => panels::render_manuscripts(ui, state, reset_scroll),
            }
        });

    // Detail modals float above the section panels.
    match section {
        Section::Timeline => overlays::render_prophet_modal(ctx, state, now),
        Section::Manuscripts => overlays::render_manuscript_modal(ctx, state, now),
        _ => {}
    }

    // Transitions keep animating even without input.
    if state.navigator.is_transitioning() {
        ctx.request_repaint();
    }
}

/// Landing leaves the panel transparent so the star ornaments rendered
/// behind egui show through; other sections paint the solid background.
fn central_panel_fill(section: Section) -> egui::Color32 {
    if section == Section::Landing {
        egui::Color32::TRANSPARENT
    } else {
        NAVY
    }
}

/// Keyboard shortcuts.
pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<MuseumState>,
    mut exit: EventWriter<AppExit>,
) {
    let modifier = keys.pressed(KeyCode::ControlLeft)
        || keys.pressed(KeyCode::ControlRight)
        || keys.pressed(KeyCode::SuperLeft)
        || keys.pressed(KeyCode::SuperRight);
    if modifier && keys.just_pressed(KeyCode::KeyQ) {
        exit.send(AppExit::Success);
    }

    if keys.just_pressed(KeyCode::Escape) {
        state.close_active_detail();
    }
}
