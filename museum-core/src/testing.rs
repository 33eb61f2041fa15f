//! Testing utilities for the museum core.
//!
//! This module provides:
//! - `FakeSpeechEngine` for deterministic narration tests without a real
//!   synthesizer
//! - `NarrationHarness` for scripted playback scenarios
//! - Assertion helpers for verifying narration state

use std::sync::{Arc, Mutex};

use crate::narration::{
    ControlId, Narrator, SpeechEngine, SpeechError, SpeechEvent, SpeechToken, Utterance, Voice,
};

#[derive(Debug, Default)]
struct FakeState {
    voices: Vec<Voice>,
    spoken: Vec<Utterance>,
    cancel_calls: usize,
    voice_queries: usize,
    available: bool,
}

/// A speech engine that records every request instead of producing audio.
///
/// The voice list is scriptable, including the "platform still loading"
/// case where the list starts empty and arrives later.
pub struct FakeSpeechEngine {
    state: Mutex<FakeState>,
}

impl FakeSpeechEngine {
    /// Create an engine with no voices yet (as if the platform list has
    /// not loaded).
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                available: true,
                ..FakeState::default()
            }),
        }
    }

    /// Create an engine that already knows the given voices.
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        let engine = Self::new();
        engine.set_voices(voices);
        engine
    }

    /// Create an engine that reports itself unavailable.
    pub fn unavailable() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Replace the scripted voice list, simulating the platform's
    /// asynchronous voice-list load.
    pub fn set_voices(&self, voices: Vec<Voice>) {
        self.state.lock().unwrap().voices = voices;
    }

    /// Every utterance submitted so far, in order.
    pub fn spoken(&self) -> Vec<Utterance> {
        self.state.lock().unwrap().spoken.clone()
    }

    /// The most recently submitted utterance.
    pub fn last_spoken(&self) -> Option<Utterance> {
        self.state.lock().unwrap().spoken.last().cloned()
    }

    /// How many times `cancel_all` has been called.
    pub fn cancel_calls(&self) -> usize {
        self.state.lock().unwrap().cancel_calls
    }

    /// How many times the voice list has been queried.
    pub fn voice_queries(&self) -> usize {
        self.state.lock().unwrap().voice_queries
    }
}

impl Default for FakeSpeechEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechEngine for FakeSpeechEngine {
    fn list_voices(&self) -> Vec<Voice> {
        let mut state = self.state.lock().unwrap();
        state.voice_queries += 1;
        state.voices.clone()
    }

    fn speak(&self, utterance: &Utterance) {
        self.state.lock().unwrap().spoken.push(utterance.clone());
    }

    fn cancel_all(&self) {
        self.state.lock().unwrap().cancel_calls += 1;
    }

    fn is_available(&self) -> bool {
        self.state.lock().unwrap().available
    }
}

/// An Arabic test voice.
pub fn arabic_voice(name: &str) -> Voice {
    Voice::new(name, "ar-SA")
}

/// A non-Arabic test voice.
pub fn english_voice(name: &str) -> Voice {
    Voice::new(name, "en-GB")
}

/// Harness wiring a [`Narrator`] to a [`FakeSpeechEngine`], with helpers
/// for delivering the engine's completion and error callbacks.
pub struct NarrationHarness {
    pub engine: Arc<FakeSpeechEngine>,
    pub narrator: Narrator,
}

impl NarrationHarness {
    /// Harness whose engine has no voices loaded yet.
    pub fn new() -> Self {
        Self::with_engine(FakeSpeechEngine::new())
    }

    /// Harness whose engine knows the given voices.
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self::with_engine(FakeSpeechEngine::with_voices(voices))
    }

    pub fn with_engine(engine: FakeSpeechEngine) -> Self {
        let engine = Arc::new(engine);
        let narrator = Narrator::new(Arc::clone(&engine) as Arc<dyn SpeechEngine>);
        Self { engine, narrator }
    }

    pub fn toggle(&mut self, control: ControlId, text: &str) {
        self.narrator.toggle(control, text);
    }

    /// Token of the most recently submitted utterance.
    ///
    /// # Panics
    /// Panics if nothing has been spoken.
    pub fn last_token(&self) -> SpeechToken {
        self.engine
            .last_spoken()
            .expect("no utterance was submitted")
            .token
    }

    /// Deliver a natural-completion callback for the given token.
    pub fn finish(&mut self, token: SpeechToken) {
        self.narrator.handle_event(SpeechEvent::Finished(token));
    }

    /// Deliver an error callback for the given token.
    pub fn error(&mut self, token: SpeechToken) {
        self.narrator.handle_event(SpeechEvent::Errored(
            token,
            SpeechError::Synthesis("scripted failure".to_string()),
        ));
    }

    /// Deliver the platform's voices-changed notification.
    pub fn voices_changed(&mut self) {
        self.narrator.handle_event(SpeechEvent::VoicesChanged);
    }
}

impl Default for NarrationHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that the given control's narration is playing.
#[track_caller]
pub fn assert_playing(harness: &NarrationHarness, control: ControlId) {
    assert!(
        harness.narrator.is_playing(control),
        "Expected {control:?} to be playing"
    );
}

/// Assert that no narration is playing at all.
#[track_caller]
pub fn assert_all_idle(harness: &NarrationHarness) {
    assert!(
        !harness.narrator.any_playing(),
        "Expected no narration to be playing"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_engine_records_requests() {
        let mut harness = NarrationHarness::new();
        harness.toggle(ControlId::Room(1), "النص الأول");

        let spoken = harness.engine.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "النص الأول");
        assert_playing(&harness, ControlId::Room(1));
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut harness = NarrationHarness::new();
        harness.toggle(ControlId::Prophet(2), "نص");
        let token = harness.last_token();
        harness.finish(token);
        assert_all_idle(&harness);
    }

    #[test]
    fn unavailable_engine_makes_controls_inert() {
        let mut harness = NarrationHarness::with_engine(FakeSpeechEngine::unavailable());
        harness.toggle(ControlId::Room(1), "نص");
        assert!(harness.engine.spoken().is_empty());
        assert_all_idle(&harness);
    }
}
