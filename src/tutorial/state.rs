//! Tutorial state types.

use crate::card::Joker;
use crate::engine::Step;

/// Phase of a guided keystream round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round in progress. The deck may be rearranged freely to key it.
    #[default]
    Ready,
    /// Step 1: move Joker A one card down.
    MoveJokerA,
    /// Step 2: move Joker B two cards down.
    MoveJokerB,
    /// Step 3: triple cut around the jokers.
    TripleCut,
    /// Step 4: count cut by the bottom card.
    CountCut,
    /// Step 5: pick the output card.
    Output,
}

impl Phase {
    /// Returns the step number shown to the user (0 for `Ready`, 1..=5 otherwise).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Ready => 0,
            Self::MoveJokerA => 1,
            Self::MoveJokerB => 2,
            Self::TripleCut => 3,
            Self::CountCut => 4,
            Self::Output => 5,
        }
    }

    /// Returns the deck transform this phase asks for, if any.
    #[must_use]
    pub const fn step(self) -> Option<Step> {
        match self {
            Self::MoveJokerA => Some(Step::MoveJokerA),
            Self::MoveJokerB => Some(Step::MoveJokerB),
            Self::TripleCut => Some(Step::TripleCut),
            Self::CountCut => Some(Step::CountCut),
            Self::Ready | Self::Output => None,
        }
    }

    /// Returns the joker moved in this phase, if any.
    #[must_use]
    pub const fn joker(self) -> Option<Joker> {
        match self {
            Self::MoveJokerA => Some(Joker::A),
            Self::MoveJokerB => Some(Joker::B),
            _ => None,
        }
    }

    /// Returns the phase that follows a completed one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Ready => Self::MoveJokerA,
            Self::MoveJokerA => Self::MoveJokerB,
            Self::MoveJokerB => Self::TripleCut,
            Self::TripleCut => Self::CountCut,
            Self::CountCut => Self::Output,
            Self::Output => Self::Ready,
        }
    }
}

/// Result of a user action that the tutorial checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action does not match the algorithm. Nothing changed.
    Rejected,
    /// A card selection changed. The phase did not.
    Selected,
    /// The deck was rearranged while no round was in progress.
    Rekeyed,
    /// The step was done correctly and the tutorial moved on to this phase.
    Advanced(Phase),
    /// The output card was picked and yielded this keystream value.
    Value(u8),
    /// The output card was a joker. The round restarts at step 1.
    JokerDiscarded,
}

impl Outcome {
    /// Returns whether the action was accepted.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Where a dragged card may be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTargets {
    /// Any index; used while keying the deck.
    Anywhere,
    /// Only this final index.
    Only(usize),
    /// The card may not be moved.
    Nowhere,
}

impl DropTargets {
    /// Returns whether a drop at `index` is allowed.
    #[must_use]
    pub const fn allows(self, index: usize) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Only(target) => target == index,
            Self::Nowhere => false,
        }
    }
}
