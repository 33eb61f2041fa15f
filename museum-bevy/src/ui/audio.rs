//! The shared narration control.
//!
//! Every "listen" affordance in the museum is this one widget: a labelled
//! button that toggles narration of its text through the one narration
//! controller, plus an animated sound-wave indicator while playing.

use bevy_egui::egui;

use museum_core::{ControlId, Narrator};

use super::{GOLD, IVORY_DIM};

const STOP_LABEL: &str = "إيقاف";

/// Render an audio control. `label` is the idle caption ("استمع" variants
/// like "استمع للسيرة"); while this control is playing it shows a stop
/// caption and pulsing sound-wave bars instead.
pub fn audio_button(
    ui: &mut egui::Ui,
    narrator: &mut Narrator,
    control: ControlId,
    text: &str,
    label: &str,
    now: f64,
) {
    let playing = narrator.is_playing(control);

    ui.horizontal(|ui| {
        let caption = if playing {
            format!("⏸ {STOP_LABEL}")
        } else {
            format!("🔊 {label}")
        };
        let button = egui::Button::new(
            egui::RichText::new(caption).color(if playing { GOLD } else { IVORY_DIM }),
        );
        if ui.add(button).clicked() {
            narrator.toggle(control, text);
        }

        if playing {
            sound_wave(ui, now);
            ui.ctx().request_repaint();
        }
    });
}

/// Three vertical bars pulsing out of phase.
fn sound_wave(ui: &mut egui::Ui, now: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(22.0, 18.0), egui::Sense::hover());
    let painter = ui.painter();
    let center_y = rect.center().y;
    for i in 0..3 {
        let x = rect.left() + 4.0 + i as f32 * 7.0;
        let half = (4.0 + 10.0 * (0.5 + 0.5 * ((now * 6.0) as f32 + i as f32 * 0.9).sin())) / 2.0;
        painter.line_segment(
            [
                egui::pos2(x, center_y - half),
                egui::pos2(x, center_y + half),
            ],
            egui::Stroke::new(2.0, GOLD),
        );
    }
}
