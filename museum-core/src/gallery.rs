//! Selection and filtering state for the gallery views.
//!
//! Each section keeps a small piece of local state: which record (if any)
//! is open in a detail view, and for the manuscript gallery which category
//! filter is active. These are in-memory projections over the static
//! catalog; selecting a new record replaces the previous selection
//! outright, and closing a detail view clears it. `open` hands the
//! replaced selection back so the UI layer can pair every exit path, close
//! and replacement alike, with a narration release.

use crate::catalog::Manuscript;

/// Label of the show-all manuscript filter.
pub const FILTER_ALL_LABEL: &str = "الكل";

/// Category filter for the manuscript gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every manuscript.
    #[default]
    All,
    /// Show only manuscripts with this exact category.
    Category(String),
}

impl CategoryFilter {
    /// Display label for the filter chip.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => FILTER_ALL_LABEL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn matches(&self, manuscript: &Manuscript) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => manuscript.category == *name,
        }
    }
}

/// Selection state of the virtual rooms section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomsView {
    selected: Option<u32>,
    active_item: Option<usize>,
}

impl RoomsView {
    /// Open a room's detail view, replacing any previous selection.
    /// Returns the room that was open before, so the caller can release
    /// the narration it owned.
    pub fn open(&mut self, room_id: u32) -> Option<u32> {
        self.active_item = None;
        self.selected.replace(room_id)
    }

    /// Close the detail view, returning the room that was open.
    pub fn close(&mut self) -> Option<u32> {
        self.active_item = None;
        self.selected.take()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Expand an item inside the open room; tapping the expanded item
    /// again collapses it. Returns the previously expanded index.
    pub fn toggle_item(&mut self, index: usize) -> Option<usize> {
        let previous = self.active_item;
        self.active_item = if previous == Some(index) {
            None
        } else {
            Some(index)
        };
        previous
    }

    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }
}

/// Selection state of the prophet timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineView {
    selected: Option<u32>,
}

impl TimelineView {
    /// Open a prophet's modal, returning the previously open selection.
    pub fn open(&mut self, prophet_id: u32) -> Option<u32> {
        self.selected.replace(prophet_id)
    }

    pub fn close(&mut self) -> Option<u32> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }
}

/// Selection and filter state of the manuscript gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManuscriptsView {
    selected: Option<u32>,
    filter: CategoryFilter,
}

impl ManuscriptsView {
    /// Open a manuscript's modal, returning the previously open selection.
    pub fn open(&mut self, manuscript_id: u32) -> Option<u32> {
        self.selected.replace(manuscript_id)
    }

    pub fn close(&mut self) -> Option<u32> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// The manuscripts passing the active filter, in catalog order.
    pub fn filtered<'a>(&self, manuscripts: &'a [Manuscript]) -> Vec<&'a Manuscript> {
        manuscripts
            .iter()
            .filter(|m| self.filter.matches(m))
            .collect()
    }

    /// Filter chips to offer: show-all plus each distinct category in
    /// first-appearance order.
    pub fn categories(manuscripts: &[Manuscript]) -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        for manuscript in manuscripts {
            let filter = CategoryFilter::Category(manuscript.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryColor, Manuscript};

    fn manuscript(id: u32, category: &str) -> Manuscript {
        Manuscript {
            id,
            title: format!("مخطوطة {id}"),
            author: "مؤلف".to_owned(),
            period: "القرن الرابع الهجري".to_owned(),
            category: category.to_owned(),
            category_color: CategoryColor::Emerald,
            description: String::new(),
            details: String::new(),
        }
    }

    #[test]
    fn filter_all_matches_everything() {
        let m = manuscript(1, "الطب");
        assert!(CategoryFilter::All.matches(&m));
        assert!(CategoryFilter::Category("الطب".into()).matches(&m));
        assert!(!CategoryFilter::Category("الفلك".into()).matches(&m));
    }

    #[test]
    fn selecting_replaces_previous_outright() {
        let mut view = TimelineView::default();
        assert_eq!(view.open(1), None);
        // The replaced selection is handed back for narration release.
        assert_eq!(view.open(4), Some(1));
        assert_eq!(view.selected(), Some(4));
        assert_eq!(view.close(), Some(4));
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn room_item_toggles_closed_on_second_tap() {
        let mut view = RoomsView::default();
        view.open(2);
        assert_eq!(view.toggle_item(1), None);
        assert_eq!(view.active_item(), Some(1));
        assert_eq!(view.toggle_item(1), Some(1));
        assert_eq!(view.active_item(), None);
    }

    #[test]
    fn opening_a_room_clears_expanded_item() {
        let mut view = RoomsView::default();
        view.open(1);
        view.toggle_item(0);
        view.open(2);
        assert_eq!(view.active_item(), None);
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let manuscripts = vec![
            manuscript(1, "الطب"),
            manuscript(2, "الفلك"),
            manuscript(3, "الطب"),
        ];
        let filters = ManuscriptsView::categories(&manuscripts);
        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Category("الطب".into()),
                CategoryFilter::Category("الفلك".into()),
            ]
        );
    }
}
