use crate::card::DECK_SIZE;
use crate::engine::{Step, joker_bounds};
use crate::error::StepError;

use super::{CountCutSelection, Outcome, Phase, Section, TripleCutSelection, Tutorial};

impl Tutorial {
    /// Handles a click on the card at `index`.
    ///
    /// - Step 3: toggles the section above the first joker or below the second.
    /// - Step 4: the first click must be on the bottom card, which reveals its
    ///   number; the second marks the last card of the counted top portion.
    ///   Any other click clears the selection.
    /// - Step 5: picks the output card (see [`Tutorial::select_output_candidate`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the phase takes no clicks.
    pub fn click_card(&mut self, index: usize) -> Result<Outcome, StepError> {
        Self::check_index(index)?;

        match self.phase {
            Phase::TripleCut => Ok(self.toggle_section(index)),
            Phase::CountCut => Ok(self.pick_count_card(index)),
            Phase::Output => self.select_output_candidate(index),
            _ => Err(StepError::InvalidPhase),
        }
    }

    fn toggle_section(&mut self, index: usize) -> Outcome {
        let (first, second) = joker_bounds(&self.deck);

        if index < first {
            self.triple_cut.top = match self.triple_cut.top {
                Some(_) => None,
                None => Some(Section::new(0, first)),
            };
        } else if index > second {
            self.triple_cut.bottom = match self.triple_cut.bottom {
                Some(_) => None,
                None => Some(Section::new(second + 1, DECK_SIZE)),
            };
        } else {
            return Outcome::Rejected;
        }

        Outcome::Selected
    }

    fn pick_count_card(&mut self, index: usize) -> Outcome {
        let bottom = DECK_SIZE - 1;
        let selection = &mut self.count_cut;

        if index == bottom && selection.is_empty() {
            selection.bottom_selected = true;
        } else if selection.bottom_selected && selection.boundary.is_none() && index != bottom {
            selection.boundary = Some(index);
        } else {
            *selection = CountCutSelection::default();
        }

        Outcome::Selected
    }

    /// Returns the bottom card's number once the user has selected it in step 4.
    #[must_use]
    pub fn revealed_count(&self) -> Option<u8> {
        (self.phase == Phase::CountCut && self.count_cut.bottom_selected)
            .then(|| self.deck.bottom().number())
    }

    /// Performs the triple cut with the user's sections.
    ///
    /// The selected bottom section is moved to the top and the selected top
    /// section to the bottom. The result must equal the engine's triple cut.
    ///
    /// # Errors
    ///
    /// Returns an error outside step 3, or if a section runs past the deck or
    /// ends before it starts.
    pub fn confirm_triple_cut(
        &mut self,
        selection: TripleCutSelection,
    ) -> Result<Outcome, StepError> {
        if self.phase != Phase::TripleCut {
            return Err(StepError::InvalidPhase);
        }
        for section in [selection.top, selection.bottom].into_iter().flatten() {
            if section.start > DECK_SIZE || section.start > section.end {
                return Err(StepError::IndexOutOfRange(section.start));
            }
            if section.end > DECK_SIZE {
                return Err(StepError::IndexOutOfRange(section.end));
            }
        }

        let Some((top_end, bottom_start)) = selection.bounds() else {
            return Ok(self.reject());
        };

        let mut candidate = self.deck.clone();
        candidate.swap_ends(top_end, bottom_start);

        if candidate == Step::TripleCut.apply(&self.deck) {
            Ok(self.accept(candidate))
        } else {
            Ok(self.reject())
        }
    }

    /// Performs the triple cut with the sections picked by clicking.
    ///
    /// # Errors
    ///
    /// Returns an error outside step 3.
    pub fn confirm_selected_triple_cut(&mut self) -> Result<Outcome, StepError> {
        self.confirm_triple_cut(self.triple_cut)
    }

    /// Performs the count cut at the user's boundary.
    ///
    /// The cards from the top down to the boundary move to just above the
    /// bottom card. The bottom card must have been selected first. With a
    /// joker at the bottom no boundary is needed, since the cut does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error outside step 4 or if the boundary is out of range.
    pub fn confirm_count_cut(
        &mut self,
        selection: CountCutSelection,
    ) -> Result<Outcome, StepError> {
        if self.phase != Phase::CountCut {
            return Err(StepError::InvalidPhase);
        }
        if let Some(boundary) = selection.boundary {
            Self::check_index(boundary)?;
        }

        if !selection.bottom_selected {
            return Ok(self.reject());
        }

        let mut candidate = self.deck.clone();
        match selection.boundary {
            Some(boundary) if boundary < DECK_SIZE - 1 => candidate.cut_above_bottom(boundary + 1),
            Some(_) => return Ok(self.reject()),
            None => {}
        }

        if candidate == Step::CountCut.apply(&self.deck) {
            Ok(self.accept(candidate))
        } else {
            Ok(self.reject())
        }
    }

    /// Performs the count cut with the cards picked by clicking.
    ///
    /// # Errors
    ///
    /// Returns an error outside step 4.
    pub fn confirm_selected_count_cut(&mut self) -> Result<Outcome, StepError> {
        self.confirm_count_cut(self.count_cut)
    }
}
