//! The 54-card deck that serves as both key and cipher state.

use core::ops::Index;
use core::slice;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Joker, Suit};
use crate::error::DeckError;

/// An ordered deck of exactly 54 distinct cards.
///
/// Every card of the four standard suits appears once, together with one
/// [`Joker::A`] and one [`Joker::B`]. The only ways to obtain a `Deck` are
/// [`Deck::new`], [`Deck::shuffled`] and the validating [`Deck::from_cards`],
/// and every operation afterwards is a permutation, so these invariants hold
/// for the lifetime of the value.
///
/// The deck is not `Copy`: keystream generation mutates it in place, and a
/// caller that needs the same key twice (say, to encrypt and then decrypt)
/// must [`clone`](Clone::clone) it before the first use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Creates the canonical deck in order.
    ///
    /// Clubs, Diamonds, Hearts and Spades from Ace to King, followed by
    /// Joker A and then Joker B.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::JOKER_A; DECK_SIZE];
        let mut index = 0;

        for suit in Suit::STANDARD {
            for rank in 1..=13 {
                cards[index] = Card::new(suit, rank);
                index += 1;
            }
        }

        cards[DECK_SIZE - 2] = Card::JOKER_A;
        cards[DECK_SIZE - 1] = Card::JOKER_B;

        Self { cards }
    }

    /// Creates a deck shuffled with a seeded random number generator.
    ///
    /// The same seed always produces the same order, which makes it usable as a
    /// shared key.
    ///
    /// # Example
    ///
    /// ```
    /// use pontifex::Deck;
    ///
    /// assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    /// assert_ne!(Deck::shuffled(7), Deck::new());
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle(&mut rng);
        deck
    }

    /// Builds a deck from an explicit card order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly 54 cards, a card has an
    /// illegal rank, or a card appears twice.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        let cards: [Card; DECK_SIZE] = cards
            .try_into()
            .map_err(|_| DeckError::WrongSize { len: cards.len() })?;

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            if !card.is_valid() {
                return Err(DeckError::InvalidCard(*card));
            }

            let slot = &mut seen[slot_of(card)];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place with an unbiased Fisher-Yates shuffle.
    ///
    /// The deck keeps its identity: the previous order is lost. Clone first if
    /// it is still needed.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the cards from top (index 0) to bottom (index 53).
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the top card.
    #[must_use]
    pub const fn top(&self) -> Card {
        self.cards[0]
    }

    /// Returns the bottom card.
    #[must_use]
    pub const fn bottom(&self) -> Card {
        self.cards[DECK_SIZE - 1]
    }

    /// Returns an iterator over the cards from top to bottom.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the index of `card`, if present.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Returns the index of the given joker.
    #[expect(
        clippy::missing_panics_doc,
        reason = "both jokers are present in every constructed deck"
    )]
    #[must_use]
    pub fn locate(&self, joker: Joker) -> usize {
        let suit = joker.suit();
        self.cards
            .iter()
            .position(|c| c.suit == suit)
            .expect("a deck always holds both jokers")
    }

    /// Moves the card at `from` so that it ends up at index `to`.
    ///
    /// The cards in between shift by one place to close the gap. This is the
    /// reorder a drag-and-drop surface performs.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), DeckError> {
        if from >= DECK_SIZE {
            return Err(DeckError::IndexOutOfRange(from));
        }
        if to >= DECK_SIZE {
            return Err(DeckError::IndexOutOfRange(to));
        }

        self.relocate(from, to);
        Ok(())
    }

    // Both indices must be in range.
    pub(crate) fn relocate(&mut self, from: usize, to: usize) {
        if from < to {
            self.cards[from..=to].rotate_left(1);
        } else {
            self.cards[to..=from].rotate_right(1);
        }
    }

    // Exchanges `[0, top_end)` with `[bottom_start, 54)`, keeping the cards
    // between them in place relative to each other.
    pub(crate) fn swap_ends(&mut self, top_end: usize, bottom_start: usize) {
        let cards = self.cards;
        let bottom = &cards[bottom_start..];
        let middle = &cards[top_end..bottom_start];
        let top = &cards[..top_end];

        let (head, rest) = self.cards.split_at_mut(bottom.len());
        let (mid, tail) = rest.split_at_mut(middle.len());
        head.copy_from_slice(bottom);
        mid.copy_from_slice(middle);
        tail.copy_from_slice(top);
    }

    // Moves the top `count` cards to just above the bottom card.
    pub(crate) fn cut_above_bottom(&mut self, count: usize) {
        self.cards[..DECK_SIZE - 1].rotate_left(count);
    }
}

// Standard cards map to their number minus one, the jokers to the last two slots.
const fn slot_of(card: &Card) -> usize {
    match card.suit {
        Suit::JokerA => DECK_SIZE - 2,
        Suit::JokerB => DECK_SIZE - 1,
        _ => card.number() as usize - 1,
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
