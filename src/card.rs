//! Card types and the numeric values the cipher reads from them.

use core::fmt;

/// Card suit.
///
/// The four standard suits are ordered the way the cipher counts them
/// (Clubs, Diamonds, Hearts, Spades). The two jokers are modelled as their
/// own suits so that they stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// The first joker.
    JokerA,
    /// The second joker.
    JokerB,
}

impl Suit {
    /// The four standard suits in cipher order.
    pub const STANDARD: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the numeric index of the suit (0..=5).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
            Self::JokerA => 4,
            Self::JokerB => 5,
        }
    }

    /// Returns the suit for a numeric index, if any.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            4 => Some(Self::JokerA),
            5 => Some(Self::JokerB),
            _ => None,
        }
    }

    /// Returns whether this is one of the joker suits.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::JokerA | Self::JokerB)
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
            Self::JokerA => "JA",
            Self::JokerB => "JB",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::JokerA => "Joker A",
            Self::JokerB => "Joker B",
        }
    }
}

/// One of the two jokers that drive the shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joker {
    /// Joker A, moved one position per round.
    A,
    /// Joker B, moved two positions per round.
    B,
}

impl Joker {
    /// Returns the card carrying this joker identity.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::A => Card::JOKER_A,
            Self::B => Card::JOKER_B,
        }
    }

    /// Returns the suit carrying this joker identity.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.card().suit
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King, 0 for jokers).
    pub rank: u8,
}

impl Card {
    /// Joker A.
    pub const JOKER_A: Self = Self::new(Suit::JokerA, 0);
    /// Joker B.
    pub const JOKER_B: Self = Self::new(Suit::JokerB, 0);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::is_valid`] or
    /// build a [`Deck`](crate::Deck) through
    /// [`Deck::from_cards`](crate::Deck::from_cards) to reject odd cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is one of the jokers.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }

    /// Returns the joker identity of this card, if it is a joker.
    #[must_use]
    pub const fn joker(&self) -> Option<Joker> {
        match self.suit {
            Suit::JokerA => Some(Joker::A),
            Suit::JokerB => Some(Joker::B),
            _ => None,
        }
    }

    /// Returns whether the rank is legal for the suit.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        if self.suit.is_joker() {
            self.rank == 0
        } else {
            self.rank >= 1 && self.rank <= 13
        }
    }

    /// Returns the card-number used for counting (1..=53).
    ///
    /// Standard cards count `rank + suit * 13`, so the Ace of Clubs is 1 and
    /// the King of Spades is 52. Both jokers count 53.
    #[must_use]
    pub const fn number(&self) -> u8 {
        if self.is_joker() {
            53
        } else {
            self.rank + self.suit.index() * 13
        }
    }

    /// Returns the keystream value of the card (1..=26).
    ///
    /// Clubs and Hearts give their rank, Diamonds and Spades give their rank
    /// plus 13. Jokers have no keystream value and return `None`.
    #[must_use]
    pub const fn keystream_value(&self) -> Option<u8> {
        match self.suit {
            Suit::Clubs | Suit::Hearts => Some(self.rank),
            Suit::Diamonds | Suit::Spades => Some(self.rank + 13),
            Suit::JokerA | Suit::JokerB => None,
        }
    }

    /// Returns a short label such as `A♣`, `10♥` or `JA`.
    #[must_use]
    pub const fn label(&self) -> Label {
        Label(*self)
    }
}

const fn rank_str(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

const fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "Ace",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => rank_str(rank),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str(self.suit.name())
        } else {
            write!(f, "{} of {}", rank_name(self.rank), self.suit.name())
        }
    }
}

/// Short display form of a [`Card`], returned by [`Card::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(Card);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        if card.is_joker() {
            f.write_str(card.suit.symbol())
        } else {
            write!(f, "{}{}", rank_str(card.rank), card.suit.symbol())
        }
    }
}

/// Number of cards in a keyed deck (52 standard cards plus two jokers).
pub const DECK_SIZE: usize = 54;
