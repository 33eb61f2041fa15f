//! Integration tests for section navigation: the crossfade window,
//! no-op navigation, and rapid double-navigation.

use museum_core::{Navigator, Section, TRANSITION_SECS};

#[test]
fn navigating_to_the_current_section_changes_nothing() {
    for target in [
        Section::Landing,
        Section::Rooms,
        Section::Timeline,
        Section::Manuscripts,
    ] {
        let mut nav = Navigator::new();
        nav.navigate(target, 0.0);
        nav.tick(TRANSITION_SECS);
        assert_eq!(nav.current(), target);

        // Re-navigating to where we already are must not start a fade.
        nav.navigate(nav.current(), 10.0);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.tick(20.0), None);
    }
}

#[test]
fn every_distinct_target_is_reached_after_the_window() {
    let all = [
        Section::Landing,
        Section::Rooms,
        Section::Timeline,
        Section::Manuscripts,
    ];
    for from in all {
        for to in all {
            if from == to {
                continue;
            }
            let mut nav = Navigator::new();
            nav.navigate(from, 0.0);
            nav.tick(TRANSITION_SECS);

            nav.navigate(to, 1.0);
            assert!(nav.is_transitioning());
            assert_eq!(nav.tick(1.0 + TRANSITION_SECS), Some(to));
            assert_eq!(nav.current(), to);
            assert!(!nav.is_transitioning());
        }
    }
}

#[test]
fn rapid_double_navigation_lands_on_the_latest_target() {
    let mut nav = Navigator::new();
    nav.navigate(Section::Rooms, 0.0);
    // Second request before the first window elapses.
    nav.navigate(Section::Timeline, 0.1);

    // After both original deadlines have passed, only the later target
    // took effect; the superseded transition never fired.
    let mut completions = Vec::new();
    for now in [0.3, 0.4, 1.0] {
        if let Some(section) = nav.tick(now) {
            completions.push(section);
        }
    }
    assert_eq!(completions, vec![Section::Timeline]);
    assert_eq!(nav.current(), Section::Timeline);
}

#[test]
fn old_section_stays_visible_while_fading() {
    let mut nav = Navigator::new();
    nav.enter_museum(0.0);

    // Mid-fade: the landing screen is still the rendered section.
    assert_eq!(nav.tick(0.15), None);
    assert_eq!(nav.current(), Section::Landing);
    assert!(nav.opacity(0.15) > 0.0 && nav.opacity(0.15) < 1.0);

    assert_eq!(nav.tick(0.35), Some(Section::Rooms));
    assert_eq!(nav.opacity(0.35), 1.0);
}

#[test]
fn chrome_hidden_only_on_landing() {
    let mut nav = Navigator::new();
    assert!(!nav.chrome_visible());

    for target in Section::NAV_ITEMS {
        nav.navigate(target, 0.0);
        nav.tick(TRANSITION_SECS);
        assert!(nav.chrome_visible(), "chrome should show on {target:?}");
    }

    nav.navigate(Section::Landing, 10.0);
    nav.tick(10.0 + TRANSITION_SECS);
    assert!(!nav.chrome_visible());
}
