//! Integration tests for gallery selection and filtering, including the
//! coupling between closing a detail view and releasing its narration.

use museum_core::testing::{assert_all_idle, assert_playing, NarrationHarness};
use museum_core::{
    Catalog, CategoryColor, CategoryFilter, ControlId, Manuscript, ManuscriptsView, RoomsView,
    TimelineView,
};

fn manuscript(id: u32, category: &str) -> Manuscript {
    Manuscript {
        id,
        title: format!("مخطوطة {id}"),
        author: "مؤلف".to_owned(),
        period: "قديم".to_owned(),
        category: category.to_owned(),
        category_color: CategoryColor::Amber,
        description: String::new(),
        details: String::new(),
    }
}

#[test]
fn filter_selects_exactly_the_tagged_manuscripts_in_order() {
    // 5 manuscripts total, 3 tagged "الفلك".
    let manuscripts = vec![
        manuscript(1, "الفلك"),
        manuscript(2, "الطب"),
        manuscript(3, "الفلك"),
        manuscript(4, "الأدب"),
        manuscript(5, "الفلك"),
    ];

    let mut view = ManuscriptsView::default();
    view.set_filter(CategoryFilter::Category("الفلك".to_owned()));

    let shown: Vec<u32> = view.filtered(&manuscripts).iter().map(|m| m.id).collect();
    assert_eq!(shown, vec![1, 3, 5]);

    // Selecting "الكل" restores all five.
    view.set_filter(CategoryFilter::All);
    let shown: Vec<u32> = view.filtered(&manuscripts).iter().map(|m| m.id).collect();
    assert_eq!(shown, vec![1, 2, 3, 4, 5]);
}

#[test]
fn show_all_is_the_default_filter() {
    let view = ManuscriptsView::default();
    assert_eq!(view.filter(), &CategoryFilter::All);
    assert_eq!(view.filter().label(), "الكل");
}

#[test]
fn real_catalog_filters_by_category() {
    let catalog = Catalog::get();
    let mut view = ManuscriptsView::default();
    view.set_filter(CategoryFilter::Category("الطب".to_owned()));

    let shown = view.filtered(&catalog.manuscripts);
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|m| m.category == "الطب"));

    view.set_filter(CategoryFilter::All);
    assert_eq!(
        view.filtered(&catalog.manuscripts).len(),
        catalog.manuscripts.len()
    );
}

#[test]
fn closing_a_detail_view_releases_its_narration() {
    let catalog = Catalog::get();
    let mut harness = NarrationHarness::new();
    let mut view = ManuscriptsView::default();

    let manuscript = &catalog.manuscripts[0];
    view.open(manuscript.id);
    harness.toggle(
        ControlId::Manuscript(manuscript.id),
        &manuscript.narration_text(),
    );
    assert_playing(&harness, ControlId::Manuscript(manuscript.id));

    // Closing the modal must leave no narration active.
    if let Some(closed) = view.close() {
        harness.narrator.stop_if_owner(ControlId::Manuscript(closed));
    }
    assert_all_idle(&harness);
    assert_eq!(view.selected(), None);
}

#[test]
fn replacing_an_open_selection_releases_its_narration() {
    let mut harness = NarrationHarness::new();
    let mut view = TimelineView::default();

    view.open(1);
    harness.toggle(ControlId::Prophet(1), "سيرة");
    assert_playing(&harness, ControlId::Prophet(1));

    // Clicking a second card replaces the first modal without a close;
    // the replaced view must take its narration down with it.
    if let Some(previous) = view.open(2) {
        harness.narrator.stop_if_owner(ControlId::Prophet(previous));
    }
    assert!(!harness.narrator.is_playing(ControlId::Prophet(1)));
    assert_all_idle(&harness);
    assert_eq!(view.selected(), Some(2));
}

#[test]
fn closing_one_view_does_not_stop_anothers_narration() {
    let mut harness = NarrationHarness::new();
    let mut rooms = RoomsView::default();

    rooms.open(1);
    harness.toggle(ControlId::Prophet(2), "سيرة");

    if let Some(closed) = rooms.close() {
        harness.narrator.stop_if_owner(ControlId::Room(closed));
    }
    // The timeline's narration was not attributable to the closed room.
    assert_playing(&harness, ControlId::Prophet(2));
}

#[test]
fn room_detail_back_releases_item_narration_too() {
    let catalog = Catalog::get();
    let mut harness = NarrationHarness::new();
    let mut rooms = RoomsView::default();

    let room = &catalog.rooms[0];
    rooms.open(room.id);
    rooms.toggle_item(0);
    harness.toggle(
        ControlId::RoomItem(room.id, 0),
        &room.items[0].narration_text(),
    );

    if let Some(closed) = rooms.close() {
        harness.narrator.release_section(ControlId::Room(closed).section());
    }
    assert_all_idle(&harness);
    assert_eq!(rooms.active_item(), None);
}
