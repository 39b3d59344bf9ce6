//! Error types for deck, cipher and tutorial operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building or rearranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 54 cards.
    #[error("deck holds {len} cards, expected 54")]
    WrongSize {
        /// Number of cards supplied.
        len: usize,
    },
    /// A card has a rank that is not legal for its suit.
    #[error("invalid card: {0:?}")]
    InvalidCard(Card),
    /// A card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    /// An index points past the end of the deck.
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// Errors that can occur while generating keystream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeystreamError {
    /// Every round within the retry bound produced a joker or no output card.
    #[error("no keystream value after {attempts} rounds")]
    Exhausted {
        /// Number of rounds tried.
        attempts: u32,
    },
}

/// Errors that can occur while converting or combining text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    /// The text contains a character outside `A..=Z`.
    #[error("non-letter character {0:?}")]
    NonLetter(char),
    /// A number is outside `1..=26`.
    #[error("number {0} is not a letter value")]
    InvalidNumber(u8),
    /// Fewer keystream values than letters were supplied.
    #[error("keystream too short: need {needed}, have {available}")]
    KeystreamTooShort {
        /// Number of letters to combine.
        needed: usize,
        /// Number of keystream values supplied.
        available: usize,
    },
}

/// Errors that can occur during encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The input text was malformed.
    #[error(transparent)]
    Text(#[from] TextError),
    /// The deck could not produce enough keystream.
    #[error(transparent)]
    Keystream(#[from] KeystreamError),
}

/// Errors that can occur while driving the tutorial.
///
/// A wrong move is not an error: it is reported as
/// [`Outcome::Rejected`](crate::Outcome::Rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The action is not available in the current phase.
    #[error("action not available in the current phase")]
    InvalidPhase,
    /// A card index points past the end of the deck.
    #[error("card index {0} is out of range")]
    IndexOutOfRange(usize),
    /// The submitted cards do not form a valid deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
