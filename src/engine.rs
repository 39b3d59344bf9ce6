//! The Solitaire keystream algorithm.
//!
//! One keystream value is produced by applying the four [`Step`]s in order
//! (move Joker A, move Joker B, triple cut, count cut) and then reading the
//! output card. A joker output card yields nothing, and the whole round is
//! repeated on the already mutated deck.
//!
//! All functions mutate the deck they are given. The deck left behind by one
//! call is the deck the next call must start from.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Joker};
use crate::deck::Deck;
use crate::error::KeystreamError;

/// Default bound on the number of rounds tried for a single keystream value.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// One of the four deck transforms of a keystream round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Move Joker A one card down.
    MoveJokerA,
    /// Move Joker B two cards down.
    MoveJokerB,
    /// Swap the cards above the first joker with those below the second.
    TripleCut,
    /// Cut by the number of the bottom card.
    CountCut,
}

impl Step {
    /// The steps in the order a round applies them.
    pub const ALL: [Self; 4] = [
        Self::MoveJokerA,
        Self::MoveJokerB,
        Self::TripleCut,
        Self::CountCut,
    ];

    /// Applies the step to `deck` in place.
    pub fn apply_in_place(self, deck: &mut Deck) {
        match self {
            Self::MoveJokerA => move_joker_a(deck),
            Self::MoveJokerB => move_joker_b(deck),
            Self::TripleCut => triple_cut(deck),
            Self::CountCut => count_cut(deck),
        }
    }

    /// Returns the deck that results from applying the step to `deck`.
    #[must_use]
    pub fn apply(self, deck: &Deck) -> Deck {
        let mut next = deck.clone();
        self.apply_in_place(&mut next);
        next
    }

    /// Returns the step that follows this one within a round.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::MoveJokerA => Some(Self::MoveJokerB),
            Self::MoveJokerB => Some(Self::TripleCut),
            Self::TripleCut => Some(Self::CountCut),
            Self::CountCut => None,
        }
    }
}

/// Moves Joker A one card down.
///
/// Joker A swaps with the card below it. From the bottom of the deck it wraps
/// to just below the top card (index 1).
pub fn move_joker_a(deck: &mut Deck) {
    let index = deck.locate(Joker::A);

    let target = if index == DECK_SIZE - 1 { 1 } else { index + 1 };
    deck.relocate(index, target);
}

/// Moves Joker B two cards down.
///
/// With Joker B lifted out the deck has 53 slots. The joker goes back in at
/// `(index + 2) mod 53`, except that slot 0 becomes slot 1 so that it never
/// lands on top.
pub fn move_joker_b(deck: &mut Deck) {
    let index = deck.locate(Joker::B);

    let mut target = (index + 2) % (DECK_SIZE - 1);
    if target == 0 {
        target = 1;
    }

    deck.relocate(index, target);
}

/// Swaps the cards above the first joker with the cards below the second.
///
/// Both jokers and everything between them stay together, in order, in the
/// middle.
pub fn triple_cut(deck: &mut Deck) {
    let (first, second) = joker_bounds(deck);
    deck.swap_ends(first, second + 1);
}

/// Cuts the deck by the number of the bottom card.
///
/// The top `n` cards move to just above the bottom card, where `n` is the
/// bottom card's number. The bottom card itself never moves, and a joker at
/// the bottom (number 53) leaves the deck unchanged.
pub fn count_cut(deck: &mut Deck) {
    let count = deck.bottom().number() as usize;
    if count >= DECK_SIZE - 1 {
        return;
    }

    deck.cut_above_bottom(count);
}

/// Returns the output card of the deck.
///
/// The top card's number `n` counts down the deck; the card at index `n` is
/// the output. Returns `None` if the count runs past the bottom.
#[must_use]
pub fn output_card(deck: &Deck) -> Option<Card> {
    deck.get(deck.top().number() as usize)
}

/// Returns the indices of the first and second joker from the top.
#[must_use]
pub fn joker_bounds(deck: &Deck) -> (usize, usize) {
    let a = deck.locate(Joker::A);
    let b = deck.locate(Joker::B);
    (a.min(b), a.max(b))
}

/// Applies the four steps of one round without reading the output.
pub fn round(deck: &mut Deck) {
    for step in Step::ALL {
        step.apply_in_place(deck);
    }
}

/// Generates one keystream value (1..=26), retrying at most
/// [`DEFAULT_MAX_ATTEMPTS`] rounds.
///
/// # Errors
///
/// Returns an error if no round within the bound produced a standard output
/// card.
pub fn generate_letter(deck: &mut Deck) -> Result<u8, KeystreamError> {
    generate_letter_with(deck, DEFAULT_MAX_ATTEMPTS)
}

/// Generates one keystream value, trying at most `max_attempts` rounds.
///
/// # Errors
///
/// Returns an error if no round within the bound produced a standard output
/// card.
pub fn generate_letter_with(deck: &mut Deck, max_attempts: u32) -> Result<u8, KeystreamError> {
    for attempt in 1..=max_attempts {
        round(deck);

        match output_card(deck) {
            Some(card) => {
                if let Some(value) = card.keystream_value() {
                    tracing::trace!(attempt, value, "keystream value generated");
                    return Ok(value);
                }
                tracing::trace!(attempt, card = %card, "joker output card discarded");
            }
            None => tracing::trace!(attempt, "count ran past the bottom of the deck"),
        }
    }

    tracing::warn!(max_attempts, "keystream generation exhausted its retry bound");
    Err(KeystreamError::Exhausted {
        attempts: max_attempts,
    })
}

/// Generates `count` keystream values from the deck.
///
/// The deck keeps moving between values: generating three values and then
/// two more yields the same five values as generating five at once.
///
/// # Errors
///
/// Returns an error if any value cannot be generated within
/// [`DEFAULT_MAX_ATTEMPTS`] rounds.
pub fn generate_keystream(deck: &mut Deck, count: usize) -> Result<Vec<u8>, KeystreamError> {
    generate_keystream_with(deck, count, DEFAULT_MAX_ATTEMPTS)
}

/// Generates `count` keystream values, bounding each by `max_attempts` rounds.
///
/// # Errors
///
/// Returns an error if any value cannot be generated within the bound.
pub fn generate_keystream_with(
    deck: &mut Deck,
    count: usize,
    max_attempts: u32,
) -> Result<Vec<u8>, KeystreamError> {
    let values = (0..count)
        .map(|_| generate_letter_with(deck, max_attempts))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count, "keystream generated");
    Ok(values)
}
