//! A Pontifex (Solitaire) card cipher engine with optional `no_std` support.
//!
//! A 54-card [`Deck`] is the key. The [`engine`] turns it into a keystream of
//! values in `1..=26` by repeatedly moving the jokers and cutting the deck, and
//! the [`text`] helpers combine that keystream with letters under modulo-26
//! arithmetic. [`Cipher`] wraps both for whole messages, and [`Tutorial`]
//! checks a user performing the algorithm by hand, one step at a time.
//!
//! The cipher is a teaching tool and makes no claim to cryptographic strength.
//!
//! # Example
//!
//! ```
//! use pontifex::{Cipher, CipherOptions, Deck};
//!
//! let key = Deck::shuffled(42);
//! let cipher = Cipher::new(CipherOptions::default());
//!
//! let ciphertext = cipher.encrypt(&mut key.clone(), "Do not use PC").unwrap();
//! assert_eq!(cipher.decrypt(&mut key.clone(), &ciphertext).unwrap(), "DONOT USEPC");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cipher;
pub mod deck;
pub mod engine;
pub mod error;
pub mod options;
pub mod text;
pub mod tutorial;

// Re-export main types
pub use card::{Card, DECK_SIZE, Joker, Suit};
pub use cipher::Cipher;
pub use deck::Deck;
pub use engine::{Step, generate_keystream, generate_letter};
pub use error::{CipherError, DeckError, KeystreamError, StepError, TextError};
pub use options::CipherOptions;
pub use tutorial::{
    CountCutSelection, DropTargets, Outcome, Phase, Section, TripleCutSelection, Tutorial,
};
