use crate::engine::output_card;
use crate::error::StepError;

use super::{Outcome, Phase, Tutorial};

impl Tutorial {
    /// Picks the card at `index` as the output card.
    ///
    /// The pick is accepted only if `index` equals the top card's number and
    /// the card there is the engine's output card. A standard card yields its
    /// keystream value, which is appended to [`Tutorial::values`], and the
    /// tutorial returns to `Ready`. A joker yields nothing and the round starts
    /// over at step 1 on the current deck.
    ///
    /// # Errors
    ///
    /// Returns an error outside step 5 or if `index` is out of range.
    pub fn select_output_candidate(&mut self, index: usize) -> Result<Outcome, StepError> {
        if self.phase != Phase::Output {
            return Err(StepError::InvalidPhase);
        }
        Self::check_index(index)?;

        let count = self.deck.top().number() as usize;
        let Some(card) = output_card(&self.deck) else {
            return Ok(self.reject());
        };
        if index != count || self.deck.get(index) != Some(card) {
            return Ok(self.reject());
        }

        match card.keystream_value() {
            Some(value) => {
                self.values.push(value);
                self.enter(Phase::Ready);
                tracing::debug!(value, card = %card, "keystream value extracted");
                Ok(Outcome::Value(value))
            }
            None => {
                self.enter(Phase::MoveJokerA);
                tracing::debug!(card = %card, "joker output card, round restarted");
                Ok(Outcome::JokerDiscarded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn wrong_pick_is_rejected() {
        let mut tutorial = Tutorial::new(0);
        tutorial.start_round().unwrap();
        for _ in 0..4 {
            tutorial.perform_step().unwrap();
        }
        assert_eq!(tutorial.phase(), Phase::Output);

        // The ordered deck's first round leaves the Two of Clubs on top.
        assert_eq!(tutorial.select_output_candidate(3).unwrap(), Outcome::Rejected);
        assert_eq!(tutorial.phase(), Phase::Output);

        assert_eq!(tutorial.select_output_candidate(2).unwrap(), Outcome::Value(4));
        assert_eq!(tutorial.phase(), Phase::Ready);
        assert_eq!(tutorial.values(), &[4]);
    }

    #[test]
    fn joker_output_restarts_round() {
        let mut deck = Deck::new();
        deck.move_card(25, 0).unwrap();
        let mut tutorial = Tutorial::with_deck(deck, 0);

        tutorial.start_round().unwrap();
        for _ in 0..4 {
            tutorial.perform_step().unwrap();
        }

        assert_eq!(tutorial.perform_step().unwrap(), Outcome::JokerDiscarded);
        assert_eq!(tutorial.phase(), Phase::MoveJokerA);
        assert!(tutorial.values().is_empty());

        for _ in 0..4 {
            tutorial.perform_step().unwrap();
        }
        assert_eq!(tutorial.perform_step().unwrap(), Outcome::Value(23));
    }

    #[test]
    fn picking_outside_step_five_fails() {
        let mut tutorial = Tutorial::new(0);
        assert_eq!(
            tutorial.select_output_candidate(0),
            Err(StepError::InvalidPhase)
        );
    }
}
