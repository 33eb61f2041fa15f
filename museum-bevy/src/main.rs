//! Interactive digital museum - a visual journey through Islamic
//! civilization.
//!
//! This application provides a single-window museum experience built with
//! Bevy and egui. It features:
//! - A full-bleed landing screen with animated star ornaments
//! - Virtual exhibition rooms with expandable exhibits
//! - A prophet timeline and a filterable manuscript gallery
//! - Optional text-to-speech narration in Arabic

mod ornaments;
mod state;
mod ui;

use std::sync::Mutex;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use museum_core::Narrator;
use museum_speech::SpeechConfig;

use crate::state::{MuseumState, SpeechEvents};

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Wire the narration controller to the best available speech backend.
    let (engine, speech_events) = museum_speech::engine_from_config(SpeechConfig::from_env());
    let narrator = Narrator::new(engine);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "المتحف الإسلامي الرقمي التفاعلي".into(),
            resolution: (1280., 800.).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin)
    // Navy backdrop; the landing panel is transparent over it so the
    // star ornaments stay visible.
    .insert_resource(ClearColor(Color::srgb_u8(10, 22, 40)))
    // App state
    .insert_resource(MuseumState::new(narrator))
    // Startup systems
    .add_systems(Startup, setup)
    // Update systems - UI
    .add_systems(Update, (ui::main_ui_system, ui::handle_keyboard_input))
    // Update systems - navigation, narration, and ornaments
    .add_systems(
        Update,
        (
            state::advance_navigation,
            state::drain_speech_events,
            ornaments::animate_stars,
        ),
    );

    if let Some(receiver) = speech_events {
        app.insert_resource(SpeechEvents {
            receiver: Mutex::new(receiver),
        });
    }

    app.run();
}

/// Initial setup system.
fn setup(mut commands: Commands) {
    // Spawn 2D camera for the ornament layer
    commands.spawn(Camera2d);
    ornaments::spawn_stars(&mut commands);
}
