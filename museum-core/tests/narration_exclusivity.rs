//! Integration tests for the narration controller:
//! - Global exclusivity of playback across controls
//! - Stale-callback protection via session tokens
//! - Voice selection and asynchronous voice-list readiness

use museum_core::testing::{
    arabic_voice, assert_all_idle, assert_playing, english_voice, FakeSpeechEngine,
    NarrationHarness,
};
use museum_core::{ControlId, SpeechEvent, SpeechToken};

#[test]
fn starting_a_second_narration_supersedes_the_first() {
    let mut harness = NarrationHarness::new();

    harness.toggle(ControlId::Room(1), "narration A");
    let token_a = harness.last_token();
    assert_playing(&harness, ControlId::Room(1));

    // B starts strictly after A, before A completes.
    harness.toggle(ControlId::Manuscript(2), "narration B");
    let token_b = harness.last_token();
    assert_ne!(token_a, token_b);

    assert_playing(&harness, ControlId::Manuscript(2));
    assert!(!harness.narrator.is_playing(ControlId::Room(1)));
}

#[test]
fn stale_callback_does_not_stop_the_newer_session() {
    let mut harness = NarrationHarness::new();

    harness.toggle(ControlId::Room(1), "narration A");
    let token_a = harness.last_token();
    harness.toggle(ControlId::Room(2), "narration B");

    // A's late completion arrives after B started; B must keep playing.
    harness.finish(token_a);
    assert_playing(&harness, ControlId::Room(2));

    // Same for a late error callback.
    harness.error(token_a);
    assert_playing(&harness, ControlId::Room(2));

    let token_b = harness.last_token();
    harness.finish(token_b);
    assert_all_idle(&harness);
}

#[test]
fn completion_and_error_are_idempotent() {
    let mut harness = NarrationHarness::new();
    harness.toggle(ControlId::Prophet(3), "نص");
    let token = harness.last_token();

    harness.finish(token);
    assert_all_idle(&harness);

    // Either callback may fire again; the second application is harmless.
    harness.error(token);
    harness.finish(token);
    assert_all_idle(&harness);
}

#[test]
fn cancelling_while_idle_is_a_no_op() {
    let mut harness = NarrationHarness::new();
    harness.narrator.stop();
    assert_all_idle(&harness);
    assert_eq!(harness.engine.cancel_calls(), 0);
}

#[test]
fn toggling_a_playing_control_cancels_it() {
    let mut harness = NarrationHarness::new();
    harness.toggle(ControlId::Manuscript(1), "نص");
    assert_playing(&harness, ControlId::Manuscript(1));

    harness.toggle(ControlId::Manuscript(1), "نص");
    assert_all_idle(&harness);
    assert_eq!(harness.engine.cancel_calls(), 1);
    // The toggle-off did not submit a second utterance.
    assert_eq!(harness.engine.spoken().len(), 1);
}

#[test]
fn tokens_increase_monotonically() {
    let mut harness = NarrationHarness::new();
    let mut last = SpeechToken(0);
    for id in 1..=4 {
        harness.toggle(ControlId::Room(id), "نص");
        let token = harness.last_token();
        assert!(token > last);
        last = token;
    }
}

#[test]
fn binds_first_arabic_voice_when_available() {
    let mut harness = NarrationHarness::with_voices(vec![
        english_voice("Daniel"),
        arabic_voice("Layla"),
        arabic_voice("Tarik"),
    ]);

    harness.toggle(ControlId::Room(1), "نص");
    let utterance = harness.engine.last_spoken().unwrap();
    assert_eq!(utterance.voice.as_ref().map(|v| v.name.as_str()), Some("Layla"));
}

#[test]
fn falls_back_to_platform_default_without_arabic_voice() {
    let mut harness = NarrationHarness::with_voices(vec![english_voice("Daniel")]);

    harness.toggle(ControlId::Room(1), "نص");
    let utterance = harness.engine.last_spoken().unwrap();
    assert_eq!(utterance.voice, None);
    // Playback still proceeds; the fallback is silent.
    assert_playing(&harness, ControlId::Room(1));
}

#[test]
fn utterance_carries_fixed_language_rate_and_pitch() {
    let mut harness = NarrationHarness::new();
    harness.toggle(ControlId::Prophet(1), "السلام عليكم");

    let utterance = harness.engine.last_spoken().unwrap();
    assert_eq!(utterance.lang, "ar-SA");
    assert!((utterance.rate - 0.9).abs() < f32::EPSILON);
    assert!((utterance.pitch - 1.0).abs() < f32::EPSILON);
    assert_eq!(utterance.text, "السلام عليكم");
}

#[test]
fn empty_voice_list_is_requeried_after_voices_changed() {
    let engine = FakeSpeechEngine::new();
    let mut harness = NarrationHarness::with_engine(engine);

    // First use: platform has not loaded its voices yet.
    harness.toggle(ControlId::Room(1), "نص");
    assert_eq!(harness.engine.last_spoken().unwrap().voice, None);

    // The platform signals that voices arrived.
    harness.engine.set_voices(vec![arabic_voice("Layla")]);
    harness.voices_changed();

    harness.toggle(ControlId::Room(2), "نص آخر");
    let utterance = harness.engine.last_spoken().unwrap();
    assert_eq!(utterance.voice.as_ref().map(|v| v.name.as_str()), Some("Layla"));
}

#[test]
fn release_section_stops_only_that_sections_narration() {
    let mut harness = NarrationHarness::new();
    harness.toggle(ControlId::Prophet(1), "نص");

    harness
        .narrator
        .release_section(museum_core::Section::Rooms);
    assert_playing(&harness, ControlId::Prophet(1));

    harness
        .narrator
        .release_section(museum_core::Section::Timeline);
    assert_all_idle(&harness);
}

#[test]
fn voices_changed_event_marks_cache_stale() {
    let mut harness = NarrationHarness::with_voices(vec![arabic_voice("Layla")]);
    harness.toggle(ControlId::Room(1), "نص");
    assert_eq!(harness.engine.voice_queries(), 1);

    // Cached: a second start does not re-query.
    harness.toggle(ControlId::Room(2), "نص");
    assert_eq!(harness.engine.voice_queries(), 1);

    harness.narrator.handle_event(SpeechEvent::VoicesChanged);
    harness.toggle(ControlId::Room(3), "نص");
    assert_eq!(harness.engine.voice_queries(), 2);
}
