//! Section navigation with a fixed-length crossfade transition.
//!
//! The museum has four top-level sections. Exactly one is shown at a time;
//! switching sections runs a short crossfade during which the old section
//! stays on screen, fading out, until the transition window elapses.

use serde::{Deserialize, Serialize};

/// Length of the crossfade between sections, in seconds.
pub const TRANSITION_SECS: f64 = 0.3;

/// A top-level view of the museum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    /// Full-bleed entry screen, shown without navbar or footer.
    #[default]
    Landing,
    /// Virtual exhibition rooms.
    Rooms,
    /// Prophet timeline.
    Timeline,
    /// Manuscript gallery.
    Manuscripts,
}

impl Section {
    /// Sections reachable from the navigation bar, in display order.
    pub const NAV_ITEMS: [Section; 3] = [Section::Rooms, Section::Timeline, Section::Manuscripts];

    /// Arabic label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Landing => "المتحف الإسلامي",
            Section::Rooms => "القاعات",
            Section::Timeline => "الأنبياء",
            Section::Manuscripts => "المخطوطات",
        }
    }

    /// Icon shown next to the navbar label.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Landing => "☪",
            Section::Rooms => "🏛",
            Section::Timeline => "📅",
            Section::Manuscripts => "📜",
        }
    }
}

/// A scheduled section change that has not completed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTransition {
    target: Section,
    due_at: f64,
}

/// Owns which section is visible and runs the crossfade between sections.
///
/// Time is passed in by the caller as seconds since application start; the
/// navigator keeps no clock of its own, so it is trivially testable.
///
/// A `navigate` call issued while a transition is still pending replaces the
/// pending transition outright: the earlier one is cancelled and never
/// fires, so the most recent target always wins.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    current: Section,
    pending: Option<PendingTransition>,
}

impl Navigator {
    /// Create a navigator showing the landing screen.
    pub fn new() -> Self {
        Self {
            current: Section::Landing,
            pending: None,
        }
    }

    /// The section currently rendered. During a transition this is still
    /// the *previous* section; it only changes once the window elapses.
    pub fn current(&self) -> Section {
        self.current
    }

    /// Whether a crossfade is in progress.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// The section a pending transition will land on, if any.
    pub fn pending_target(&self) -> Option<Section> {
        self.pending.map(|p| p.target)
    }

    /// Request a section change.
    ///
    /// Navigating to the section already shown cancels any pending
    /// transition and otherwise does nothing. Any earlier pending
    /// transition is dropped, never fired.
    pub fn navigate(&mut self, target: Section, now: f64) {
        if target == self.current {
            self.pending = None;
            return;
        }
        self.pending = Some(PendingTransition {
            target,
            due_at: now + TRANSITION_SECS,
        });
    }

    /// The landing screen's enter affordance: always goes to the rooms.
    pub fn enter_museum(&mut self, now: f64) {
        self.navigate(Section::Rooms, now);
    }

    /// Complete a due transition. Returns the newly shown section when the
    /// window has elapsed so the caller can reset scroll position.
    pub fn tick(&mut self, now: f64) -> Option<Section> {
        let pending = self.pending?;
        if now < pending.due_at {
            return None;
        }
        self.pending = None;
        self.current = pending.target;
        Some(pending.target)
    }

    /// Render opacity of the visible section: fades linearly from 1 to 0
    /// across the transition window, 1.0 when idle.
    pub fn opacity(&self, now: f64) -> f32 {
        match self.pending {
            None => 1.0,
            Some(pending) => {
                let remaining = (pending.due_at - now).clamp(0.0, TRANSITION_SECS);
                (remaining / TRANSITION_SECS) as f32
            }
        }
    }

    /// Navbar and footer are shown for every section except the landing
    /// screen.
    pub fn chrome_visible(&self) -> bool {
        self.current != Section::Landing
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing_without_chrome() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Section::Landing);
        assert!(!nav.is_transitioning());
        assert!(!nav.chrome_visible());
        assert_eq!(nav.opacity(0.0), 1.0);
    }

    #[test]
    fn navigate_to_current_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Landing, 1.0);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.tick(10.0), None);
        assert_eq!(nav.current(), Section::Landing);
    }

    #[test]
    fn transition_completes_after_window() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Timeline, 1.0);
        assert!(nav.is_transitioning());
        assert_eq!(nav.current(), Section::Landing);

        assert_eq!(nav.tick(1.0 + TRANSITION_SECS / 2.0), None);
        assert_eq!(nav.current(), Section::Landing);

        assert_eq!(nav.tick(1.0 + TRANSITION_SECS), Some(Section::Timeline));
        assert_eq!(nav.current(), Section::Timeline);
        assert!(!nav.is_transitioning());
        assert!(nav.chrome_visible());
    }

    #[test]
    fn opacity_fades_during_transition() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Rooms, 0.0);
        assert!((nav.opacity(0.0) - 1.0).abs() < 1e-6);
        assert!((nav.opacity(TRANSITION_SECS / 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(nav.opacity(TRANSITION_SECS), 0.0);
    }

    #[test]
    fn later_navigate_replaces_pending_transition() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Rooms, 0.0);
        nav.navigate(Section::Timeline, 0.1);

        // The first transition's deadline passes without effect.
        assert_eq!(nav.tick(0.3), None);
        assert_eq!(nav.current(), Section::Landing);

        assert_eq!(nav.tick(0.4), Some(Section::Timeline));
        assert_eq!(nav.current(), Section::Timeline);
    }

    #[test]
    fn navigating_back_to_current_cancels_pending() {
        let mut nav = Navigator::new();
        nav.navigate(Section::Rooms, 0.0);
        nav.tick(0.3);
        nav.navigate(Section::Manuscripts, 1.0);
        nav.navigate(Section::Rooms, 1.1);

        assert!(!nav.is_transitioning());
        assert_eq!(nav.tick(5.0), None);
        assert_eq!(nav.current(), Section::Rooms);
    }

    #[test]
    fn enter_museum_always_goes_to_rooms() {
        let mut nav = Navigator::new();
        nav.enter_museum(0.0);
        assert_eq!(nav.pending_target(), Some(Section::Rooms));
        assert_eq!(nav.tick(TRANSITION_SECS), Some(Section::Rooms));
    }
}
