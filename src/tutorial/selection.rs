//! Card selections made while performing the cuts by hand.

use crate::card::DECK_SIZE;

/// A contiguous run of deck indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    /// First index in the section.
    pub start: usize,
    /// One past the last index in the section.
    pub end: usize,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of cards in the section.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the section is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `index` lies in the section.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Sections picked for the triple cut.
///
/// The top section must run from the top of the deck and the bottom section
/// to the bottom. An unselected section counts as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TripleCutSelection {
    /// Cards above the first joker.
    pub top: Option<Section>,
    /// Cards below the second joker.
    pub bottom: Option<Section>,
}

impl TripleCutSelection {
    /// Returns whether no section is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none()
    }

    /// Returns whether `index` lies in a selected section.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        matches!(self.top, Some(s) if s.contains(index))
            || matches!(self.bottom, Some(s) if s.contains(index))
    }

    // Returns `(top_end, bottom_start)` when the sections hug the deck edges
    // without overlapping.
    pub(crate) fn bounds(&self) -> Option<(usize, usize)> {
        let top = self.top.unwrap_or(Section::new(0, 0));
        let bottom = self.bottom.unwrap_or(Section::new(DECK_SIZE, DECK_SIZE));

        let hugs_edges = top.start == 0 && bottom.end == DECK_SIZE;
        let ordered = top.end <= bottom.start && bottom.start <= bottom.end;
        (hugs_edges && ordered).then_some((top.end, bottom.start))
    }
}

/// Cards picked for the count cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountCutSelection {
    /// Whether the bottom card has been selected, revealing its number.
    pub bottom_selected: bool,
    /// Index of the last card of the counted top portion.
    pub boundary: Option<usize>,
}

impl CountCutSelection {
    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.bottom_selected && self.boundary.is_none()
    }
}
