//! Guided keystream rounds with step verification.
//!
//! A [`Tutorial`] lets a user perform the algorithm by hand: dragging the
//! jokers, selecting the sections of the cuts and picking the output card. Each
//! action is checked against the engine. A step only completes when the deck
//! the user produced is exactly the deck the engine would have produced.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Joker;
use crate::deck::Deck;
use crate::error::StepError;

mod cuts;
mod moves;
mod output;
pub mod selection;
pub mod state;

pub use selection::{CountCutSelection, Section, TripleCutSelection};
pub use state::{DropTargets, Outcome, Phase};

/// An interactive session that verifies hand-performed keystream rounds.
///
/// The session owns the deck. Rounds run `Ready → MoveJokerA → MoveJokerB →
/// TripleCut → CountCut → Output → Ready`; a phase only advances when its step
/// was done correctly, and a wrong attempt leaves everything as it was so the
/// user can try again.
///
/// # Example
///
/// ```
/// use pontifex::{Deck, Outcome, Phase, Tutorial};
///
/// let mut tutorial = Tutorial::new(1);
/// tutorial.start_round().unwrap();
///
/// // Joker A sits at index 52 of a fresh deck and must move to 53.
/// assert_eq!(tutorial.drag_card(52, 53).unwrap(), Outcome::Advanced(Phase::MoveJokerB));
/// ```
#[derive(Debug, Clone)]
pub struct Tutorial {
    /// The deck as the user currently sees it.
    deck: Deck,
    /// Current phase.
    phase: Phase,
    /// Index of the joker being moved, recorded on entering steps 1 and 2.
    joker_start: Option<usize>,
    /// Sections picked for the triple cut.
    triple_cut: TripleCutSelection,
    /// Cards picked for the count cut.
    count_cut: CountCutSelection,
    /// Keystream values extracted so far.
    values: Vec<u8>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Tutorial {
    /// Creates a session on an ordered deck, shuffling later with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(), seed)
    }

    /// Creates a session on an already keyed deck.
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self {
            deck,
            phase: Phase::Ready,
            joker_start: None,
            triple_cut: TripleCutSelection::default(),
            count_cut: CountCutSelection::default(),
            values: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the keystream values extracted so far.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Returns where the joker of the current phase started.
    #[must_use]
    pub const fn joker_start(&self) -> Option<usize> {
        self.joker_start
    }

    /// Returns the current triple-cut selection.
    #[must_use]
    pub const fn triple_cut_selection(&self) -> TripleCutSelection {
        self.triple_cut
    }

    /// Returns the current count-cut selection.
    #[must_use]
    pub const fn count_cut_selection(&self) -> CountCutSelection {
        self.count_cut
    }

    /// Starts a keystream round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<(), StepError> {
        if self.phase != Phase::Ready {
            return Err(StepError::InvalidPhase);
        }

        self.enter(Phase::MoveJokerA);
        tracing::debug!("keystream round started");
        Ok(())
    }

    /// Abandons the current round and returns to `Ready`.
    ///
    /// The deck keeps any steps already completed, and extracted values are
    /// kept.
    pub fn reset_round(&mut self) {
        self.enter(Phase::Ready);
    }

    /// Forgets the extracted keystream values.
    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    /// Puts the deck back in order, abandons the current round and forgets
    /// the values extracted with the previous key.
    pub fn reset_deck(&mut self) {
        self.deck = Deck::new();
        self.values.clear();
        self.reset_round();
    }

    /// Shuffles the deck to key it.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn shuffle_deck(&mut self) -> Result<(), StepError> {
        if self.phase != Phase::Ready {
            return Err(StepError::InvalidPhase);
        }

        self.deck.shuffle(&mut self.rng);
        Ok(())
    }

    /// Returns the indices worth highlighting in the current phase.
    ///
    /// Both jokers during steps 1 to 3, the bottom card during step 4 and the
    /// top card during step 5.
    #[must_use]
    pub fn highlights(&self) -> Vec<usize> {
        match self.phase {
            Phase::Ready => Vec::new(),
            Phase::MoveJokerA | Phase::MoveJokerB | Phase::TripleCut => {
                alloc::vec![self.deck.locate(Joker::A), self.deck.locate(Joker::B)]
            }
            Phase::CountCut => alloc::vec![self.deck.cards().len() - 1],
            Phase::Output => alloc::vec![0],
        }
    }

    // Switches to `phase` and records what the new phase needs.
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.joker_start = phase.joker().map(|joker| self.deck.locate(joker));
        self.triple_cut = TripleCutSelection::default();
        self.count_cut = CountCutSelection::default();
    }

    // Replaces the deck with a verified one and moves on.
    fn accept(&mut self, deck: Deck) -> Outcome {
        self.deck = deck;
        let next = self.phase.next();
        tracing::debug!(from = ?self.phase, to = ?next, "step verified");
        self.enter(next);
        Outcome::Advanced(next)
    }

    fn reject(&self) -> Outcome {
        tracing::trace!(phase = ?self.phase, "step attempt rejected");
        Outcome::Rejected
    }

    const fn check_index(index: usize) -> Result<(), StepError> {
        if index < crate::card::DECK_SIZE {
            Ok(())
        } else {
            Err(StepError::IndexOutOfRange(index))
        }
    }
}
