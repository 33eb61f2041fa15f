//! Narration control over an injected speech synthesis engine.
//!
//! The speech engine is a single global exclusive resource: one utterance
//! plays at a time, and submitting a new one supersedes whatever was
//! playing. The [`Narrator`] mirrors that on the state side — only the most
//! recently started session reports as playing, and completion or error
//! callbacks from a superseded session are ignored by comparing the
//! session's [`SpeechToken`] against the current one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::Section;

/// Language tag attached to every narration request.
pub const NARRATION_LANG: &str = "ar-SA";
/// Playback rate: slightly slower than default for clearer diction.
pub const NARRATION_RATE: f32 = 0.9;
/// Default pitch.
pub const NARRATION_PITCH: f32 = 1.0;

/// A synthesis voice offered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP-47 style language tag, e.g. `ar-SA` or `en-GB`.
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    /// Whether this voice can narrate Arabic content.
    pub fn is_arabic(&self) -> bool {
        self.lang.starts_with("ar")
    }
}

/// Identity of a speech request.
///
/// Tokens are handed out in monotonically increasing order, so a late
/// callback from a superseded request can never be confused with the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeechToken(pub u64);

/// A single speech request submitted to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub token: SpeechToken,
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    /// Explicit voice binding; `None` means the platform default.
    pub voice: Option<Voice>,
}

/// Errors reported by a speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available on this platform")]
    Unsupported,
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

/// Asynchronous notifications from the speech engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// Playback of the identified utterance has begun.
    Started(SpeechToken),
    /// Playback finished naturally.
    Finished(SpeechToken),
    /// Playback failed; the session reverts to idle with no user-visible
    /// error beyond the control ceasing to highlight.
    Errored(SpeechToken, SpeechError),
    /// The platform's voice list changed and should be re-queried.
    VoicesChanged,
}

/// Capability interface over the platform speech engine.
///
/// Injected into the [`Narrator`] so the real backend can be replaced by
/// [`crate::testing::FakeSpeechEngine`] in tests.
pub trait SpeechEngine: Send + Sync {
    /// The currently known synthesis voices. May be empty while the
    /// platform is still loading its list.
    fn list_voices(&self) -> Vec<Voice>;

    /// Submit an utterance. Implicitly supersedes whatever was playing.
    fn speak(&self, utterance: &Utterance);

    /// Stop all playback immediately.
    fn cancel_all(&self);

    /// Whether this engine can produce audio at all. Inert engines return
    /// `false`, which turns narration controls into no-ops.
    fn is_available(&self) -> bool {
        true
    }
}

/// Identity of an audio control in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The long-description narration of a room's detail header.
    Room(u32),
    /// A single expandable item inside a room, by room id and item index.
    RoomItem(u32, usize),
    /// A prophet's biography in the timeline modal.
    Prophet(u32),
    /// A manuscript's description in the gallery modal.
    Manuscript(u32),
}

impl ControlId {
    /// The section that owns this control; used to release narration when
    /// navigation leaves the section.
    pub fn section(&self) -> Section {
        match self {
            ControlId::Room(_) | ControlId::RoomItem(_, _) => Section::Rooms,
            ControlId::Prophet(_) => Section::Timeline,
            ControlId::Manuscript(_) => Section::Manuscripts,
        }
    }
}

/// Process-wide cache of known voices.
///
/// The platform may load its voice list asynchronously after first use, so
/// an empty query result is never cached: it is retried on the next use,
/// and a `VoicesChanged` notification marks the cache stale explicitly.
#[derive(Debug, Default)]
pub struct VoiceCache {
    voices: Vec<Voice>,
    stale: bool,
}

impl VoiceCache {
    pub fn new() -> Self {
        Self {
            voices: Vec::new(),
            stale: true,
        }
    }

    /// Force a re-query on next use.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// The known voices, refreshed from the engine when stale or empty.
    pub fn voices(&mut self, engine: &dyn SpeechEngine) -> &[Voice] {
        if self.stale || self.voices.is_empty() {
            self.voices = engine.list_voices();
            self.stale = false;
        }
        &self.voices
    }
}

/// The one narration session allowed to be live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveNarration {
    token: SpeechToken,
    owner: ControlId,
}

/// Root-owned narration controller.
///
/// One instance serves every audio control in the application; a control is
/// identified by its [`ControlId`] and at most one control is playing at
/// any time.
pub struct Narrator {
    engine: Arc<dyn SpeechEngine>,
    voices: VoiceCache,
    next_token: u64,
    active: Option<ActiveNarration>,
}

impl Narrator {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            voices: VoiceCache::new(),
            next_token: 0,
            active: None,
        }
    }

    /// Whether the given control's narration is playing.
    pub fn is_playing(&self, control: ControlId) -> bool {
        self.active.is_some_and(|a| a.owner == control)
    }

    /// Whether any narration is playing.
    pub fn any_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Toggle the given control: stop it if it is playing, otherwise start
    /// narrating `text` (superseding whatever else was playing).
    pub fn toggle(&mut self, control: ControlId, text: &str) {
        if self.is_playing(control) {
            self.stop();
        } else {
            self.start(control, text);
        }
    }

    fn start(&mut self, control: ControlId, text: &str) {
        if !self.engine.is_available() {
            return;
        }

        let engine = Arc::clone(&self.engine);
        let voice = self
            .voices
            .voices(engine.as_ref())
            .iter()
            .find(|v| v.is_arabic())
            .cloned();

        self.next_token += 1;
        let token = SpeechToken(self.next_token);
        let utterance = Utterance {
            token,
            text: text.to_owned(),
            lang: NARRATION_LANG.to_owned(),
            rate: NARRATION_RATE,
            pitch: NARRATION_PITCH,
            voice,
        };

        // The engine preempts any in-flight playback on its own; dropping
        // the old session here keeps state and platform in agreement.
        self.engine.speak(&utterance);
        self.active = Some(ActiveNarration {
            token,
            owner: control,
        });
    }

    /// Cancel playback and return to idle. No-op when nothing is playing.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            self.engine.cancel_all();
        }
    }

    /// Scoped-resource release for a control leaving the view: cancels
    /// playback only if this control owns it.
    pub fn stop_if_owner(&mut self, control: ControlId) {
        if self.is_playing(control) {
            self.stop();
        }
    }

    /// Release any narration owned by a control inside `section`; called
    /// when navigation leaves that section.
    pub fn release_section(&mut self, section: Section) {
        if self.active.is_some_and(|a| a.owner.section() == section) {
            self.stop();
        }
    }

    /// Apply an engine notification. Finished/Errored events only flip the
    /// session to idle when their token matches the current session; stale
    /// callbacks from superseded sessions are ignored.
    pub fn handle_event(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Started(_) => {}
            SpeechEvent::Finished(token) | SpeechEvent::Errored(token, _) => {
                if self.active.is_some_and(|a| a.token == token) {
                    self.active = None;
                }
            }
            SpeechEvent::VoicesChanged => self.voices.mark_stale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSpeechEngine;

    #[test]
    fn voice_cache_retries_while_empty() {
        let engine = FakeSpeechEngine::new();
        let mut cache = VoiceCache::new();

        assert!(cache.voices(&engine).is_empty());
        // Empty result is not cached: the next use queries again.
        engine.set_voices(vec![Voice::new("Layla", "ar-SA")]);
        assert_eq!(cache.voices(&engine).len(), 1);
        assert_eq!(engine.voice_queries(), 2);
    }

    #[test]
    fn voice_cache_holds_until_marked_stale() {
        let engine = FakeSpeechEngine::with_voices(vec![Voice::new("Layla", "ar-SA")]);
        let mut cache = VoiceCache::new();

        cache.voices(&engine);
        cache.voices(&engine);
        assert_eq!(engine.voice_queries(), 1);

        cache.mark_stale();
        cache.voices(&engine);
        assert_eq!(engine.voice_queries(), 2);
    }

    #[test]
    fn arabic_voice_detection() {
        assert!(Voice::new("Layla", "ar-SA").is_arabic());
        assert!(Voice::new("Tarik", "ar-MA").is_arabic());
        assert!(!Voice::new("Daniel", "en-GB").is_arabic());
    }

    #[test]
    fn control_sections() {
        assert_eq!(ControlId::Room(1).section(), Section::Rooms);
        assert_eq!(ControlId::RoomItem(1, 0).section(), Section::Rooms);
        assert_eq!(ControlId::Prophet(3).section(), Section::Timeline);
        assert_eq!(ControlId::Manuscript(2).section(), Section::Manuscripts);
    }
}
