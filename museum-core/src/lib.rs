//! Core logic for the interactive digital museum.
//!
//! This crate provides:
//! - The static content catalog (exhibition rooms, prophet timeline,
//!   manuscript gallery)
//! - Section navigation with a fixed-length crossfade transition
//! - Narration control over an injected speech synthesis engine
//! - Gallery selection and filtering state
//!
//! # Quick Start
//!
//! ```
//! use museum_core::{Catalog, Navigator, Section};
//!
//! let catalog = Catalog::get();
//! assert!(!catalog.rooms.is_empty());
//!
//! let mut nav = Navigator::new();
//! nav.enter_museum(0.0);
//! nav.tick(0.3);
//! assert_eq!(nav.current(), Section::Rooms);
//! ```

pub mod catalog;
pub mod gallery;
pub mod narration;
pub mod navigation;
pub mod testing;

// Primary public API
pub use catalog::{Catalog, CategoryColor, Gradient, Manuscript, Prophet, Room, RoomItem};
pub use gallery::{CategoryFilter, ManuscriptsView, RoomsView, TimelineView};
pub use narration::{
    ControlId, Narrator, SpeechEngine, SpeechError, SpeechEvent, SpeechToken, Utterance, Voice,
    VoiceCache,
};
pub use navigation::{Navigator, Section, TRANSITION_SECS};
