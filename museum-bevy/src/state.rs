//! Application state and speech backend integration.
//!
//! This module provides the MuseumState resource that holds all mutable
//! application state, and the systems that advance navigation and drain
//! events from the speech backend.

use std::sync::mpsc::Receiver;
use std::sync::Mutex;

use bevy::prelude::*;
use museum_core::{
    Catalog, ControlId, ManuscriptsView, Narrator, Navigator, RoomsView, Section, SpeechEvent,
    TimelineView,
};

/// Main application state resource.
#[derive(Resource)]
pub struct MuseumState {
    /// Section navigation and crossfade state.
    pub navigator: Navigator,
    /// The one narration controller serving every audio button.
    pub narrator: Narrator,
    /// Rooms section selection state.
    pub rooms: RoomsView,
    /// Timeline section selection state.
    pub timeline: TimelineView,
    /// Manuscript gallery selection and filter state.
    pub manuscripts: ManuscriptsView,
    /// Set when a transition completes so the next frame renders the new
    /// section scrolled back to the top.
    pub reset_scroll: bool,
}

impl MuseumState {
    pub fn new(narrator: Narrator) -> Self {
        Self {
            navigator: Navigator::new(),
            narrator,
            rooms: RoomsView::default(),
            timeline: TimelineView::default(),
            manuscripts: ManuscriptsView::default(),
            reset_scroll: false,
        }
    }

    /// The read-only content catalog.
    pub fn catalog(&self) -> &'static Catalog {
        Catalog::get()
    }

    /// Request a section change. Narration owned by the section being
    /// left is released as part of leaving it.
    pub fn request_navigation(&mut self, target: Section, now: f64) {
        let leaving = self.navigator.current();
        self.navigator.navigate(target, now);
        if self.navigator.is_transitioning() {
            self.narrator.release_section(leaving);
        }
    }

    /// The landing screen's enter affordance.
    pub fn enter_museum(&mut self, now: f64) {
        self.request_navigation(Section::Rooms, now);
    }

    /// Open a room's detail view. A different room being replaced takes
    /// its narration (room header and items alike) with it.
    pub fn open_room(&mut self, id: u32) {
        if let Some(previous) = self.rooms.open(id) {
            if previous != id {
                self.narrator.release_section(Section::Rooms);
            }
        }
    }

    /// Open a prophet's modal, releasing the narration of a different
    /// prophet whose modal this replaces.
    pub fn open_prophet(&mut self, id: u32) {
        if let Some(previous) = self.timeline.open(id) {
            if previous != id {
                self.narrator.stop_if_owner(ControlId::Prophet(previous));
            }
        }
    }

    /// Open a manuscript's modal, releasing the narration of a different
    /// manuscript whose modal this replaces.
    pub fn open_manuscript(&mut self, id: u32) {
        if let Some(previous) = self.manuscripts.open(id) {
            if previous != id {
                self.narrator.stop_if_owner(ControlId::Manuscript(previous));
            }
        }
    }

    /// Close whatever detail view the current section has open, releasing
    /// its narration. Returns whether anything was closed.
    pub fn close_active_detail(&mut self) -> bool {
        match self.navigator.current() {
            Section::Landing => false,
            Section::Rooms => {
                if self.rooms.close().is_some() {
                    // Covers both the room header and its item controls.
                    self.narrator.release_section(Section::Rooms);
                    true
                } else {
                    false
                }
            }
            Section::Timeline => {
                if let Some(id) = self.timeline.close() {
                    self.narrator.stop_if_owner(ControlId::Prophet(id));
                    true
                } else {
                    false
                }
            }
            Section::Manuscripts => {
                if let Some(id) = self.manuscripts.close() {
                    self.narrator.stop_if_owner(ControlId::Manuscript(id));
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Receiver for speech backend events, drained once per frame.
#[derive(Resource)]
pub struct SpeechEvents {
    pub receiver: Mutex<Receiver<SpeechEvent>>,
}

/// System to complete due section transitions.
pub fn advance_navigation(mut state: ResMut<MuseumState>, time: Res<Time>) {
    let now = time.elapsed_secs_f64();
    if state.navigator.tick(now).is_some() {
        state.reset_scroll = true;
        // A completed navigation shows the new section freshly mounted:
        // detail views and filters reset to their defaults.
        state.rooms = RoomsView::default();
        state.timeline = TimelineView::default();
        state.manuscripts = ManuscriptsView::default();
    }
}

/// System to route speech backend events to the narration controller.
pub fn drain_speech_events(mut state: ResMut<MuseumState>, events: Option<Res<SpeechEvents>>) {
    let Some(events) = events else { return };
    loop {
        let event = {
            let receiver = events.receiver.lock().unwrap();
            receiver.try_recv()
        };
        match event {
            Ok(event) => state.narrator.handle_event(event),
            Err(_) => break,
        }
    }
}
