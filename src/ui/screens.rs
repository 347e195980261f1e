use std::collections::{HashMap, HashSet};

use crate::models::{ArtistFilter, Profession, VenueFilter, Zone};
use crate::rating::RatingInput;

use super::helpers::cycle_filter;

/// Widget state for the artist search view: filters, cursor, which cards are
/// expanded, and the pending score of every rating control. Controls are keyed
/// by artist id so namesakes never share a score.
#[derive(Default)]
pub(crate) struct ArtistSearchScreen {
    pub(crate) filter: ArtistFilter,
    pub(crate) selected: usize,
    expanded: HashSet<i64>,
    ratings: HashMap<i64, RatingInput>,
}

impl ArtistSearchScreen {
    pub(crate) fn cycle_profession(&mut self, options: &[Profession], step: isize) {
        self.filter.profession = cycle_filter(options, self.filter.profession, step);
        self.selected = 0;
    }

    pub(crate) fn cycle_zone(&mut self, options: &[Zone], step: isize) {
        self.filter.zone = cycle_filter(options, self.filter.zone, step);
        self.selected = 0;
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        self.selected = step_index(self.selected, offset, len);
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub(crate) fn toggle_expanded(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub(crate) fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    pub(crate) fn rating_for(&self, id: i64) -> RatingInput {
        self.ratings.get(&id).copied().unwrap_or_default()
    }

    pub(crate) fn adjust_rating(&mut self, id: i64, delta: i8) {
        self.ratings.entry(id).or_default().adjust(delta);
    }
}

/// Widget state for the venue search view.
#[derive(Default)]
pub(crate) struct VenueSearchScreen {
    pub(crate) filter: VenueFilter,
    pub(crate) selected: usize,
    expanded: HashSet<i64>,
}

impl VenueSearchScreen {
    pub(crate) fn cycle_zone(&mut self, options: &[Zone], step: isize) {
        self.filter.zone = cycle_filter(options, self.filter.zone, step);
        self.selected = 0;
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        self.selected = step_index(self.selected, offset, len);
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub(crate) fn toggle_expanded(&mut self, id: i64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub(crate) fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }
}

fn step_index(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + offset).clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_tracked_per_artist() {
        let mut screen = ArtistSearchScreen::default();
        screen.adjust_rating(1, 1);
        screen.adjust_rating(2, -5);
        assert_eq!(screen.rating_for(1).value(), 4);
        assert_eq!(screen.rating_for(2).value(), 1);
        assert_eq!(screen.rating_for(3).value(), 3);
    }

    #[test]
    fn changing_a_filter_resets_the_cursor() {
        let mut screen = ArtistSearchScreen {
            selected: 4,
            ..ArtistSearchScreen::default()
        };
        screen.cycle_profession(&[Profession::Dj], 1);
        assert_eq!(screen.filter.profession, Some(Profession::Dj));
        assert_eq!(screen.selected, 0);
        screen.cycle_profession(&[Profession::Dj], 1);
        assert_eq!(screen.filter.profession, None);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut screen = VenueSearchScreen::default();
        screen.move_selection(5, 3);
        assert_eq!(screen.selected, 2);
        screen.move_selection(-9, 3);
        assert_eq!(screen.selected, 0);
        screen.move_selection(1, 0);
        assert_eq!(screen.selected, 0);
        screen.toggle_expanded(7);
        assert!(screen.is_expanded(7));
        screen.toggle_expanded(7);
        assert!(!screen.is_expanded(7));
    }
}
