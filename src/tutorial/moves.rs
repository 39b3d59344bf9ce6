use crate::card::Card;
use crate::deck::Deck;
use crate::error::StepError;

use super::{DropTargets, Outcome, Phase, Tutorial};

impl Tutorial {
    /// Submits the deck the user produced for the current step.
    ///
    /// While `Ready` any deck is accepted and keys the session. During steps 1
    /// to 4 the deck is accepted only if it equals the engine's result for the
    /// step; the phase then advances. A mismatch is
    /// [`Outcome::Rejected`] and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error during step 5, where a card must be picked instead.
    pub fn submit_deck_state(&mut self, deck: Deck) -> Result<Outcome, StepError> {
        if self.phase == Phase::Ready {
            self.deck = deck;
            return Ok(Outcome::Rekeyed);
        }

        let step = self.phase.step().ok_or(StepError::InvalidPhase)?;
        if deck == step.apply(&self.deck) {
            Ok(self.accept(deck))
        } else {
            Ok(self.reject())
        }
    }

    /// Submits a card order from a rendering surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards do not form a valid deck, or during step 5.
    pub fn submit_cards(&mut self, cards: &[Card]) -> Result<Outcome, StepError> {
        let deck = Deck::from_cards(cards)?;
        self.submit_deck_state(deck)
    }

    /// Drags the card at `from` so that it ends at index `to`, then submits
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range, or during step 5.
    pub fn drag_card(&mut self, from: usize, to: usize) -> Result<Outcome, StepError> {
        let mut deck = self.deck.clone();
        deck.move_card(from, to)?;
        self.submit_deck_state(deck)
    }

    /// Returns whether the card at `index` may be picked up.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn can_drag(&self, index: usize) -> Result<bool, StepError> {
        Ok(self.valid_destinations(index)? != DropTargets::Nowhere)
    }

    /// Returns where the card at `index` may be dropped.
    ///
    /// Everything may move while keying the deck. In steps 1 and 2 only the
    /// phase's joker may move, and only to the index the engine would put it
    /// at. Nothing is dragged in the later steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn valid_destinations(&self, index: usize) -> Result<DropTargets, StepError> {
        Self::check_index(index)?;

        let (Some(joker), Some(step)) = (self.phase.joker(), self.phase.step()) else {
            return Ok(if self.phase == Phase::Ready {
                DropTargets::Anywhere
            } else {
                DropTargets::Nowhere
            });
        };

        if self.joker_start != Some(index) {
            return Ok(DropTargets::Nowhere);
        }

        let expected = step.apply(&self.deck);
        Ok(DropTargets::Only(expected.locate(joker)))
    }

    /// Performs the current step for the user, as a demonstration.
    ///
    /// # Errors
    ///
    /// Returns an error while `Ready`.
    pub fn perform_step(&mut self) -> Result<Outcome, StepError> {
        if self.phase == Phase::Output {
            let index = self.deck.top().number() as usize;
            return self.select_output_candidate(index);
        }

        let step = self.phase.step().ok_or(StepError::InvalidPhase)?;
        let deck = step.apply(&self.deck);
        Ok(self.accept(deck))
    }
}
