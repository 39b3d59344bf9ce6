//! Message-level encryption and decryption.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::engine::generate_keystream_with;
use crate::error::CipherError;
use crate::options::CipherOptions;
use crate::text::{
    decrypt_numbers, encrypt_numbers, format_plaintext_with, group, numbers_to_text,
    text_to_numbers, ungroup,
};

/// Encrypts and decrypts whole messages with a keyed deck.
///
/// The cipher itself holds no key: every call draws keystream from the deck
/// it is handed and leaves that deck advanced. To decrypt, start from a clone
/// of the deck the sender started from.
///
/// # Example
///
/// ```
/// use pontifex::{Cipher, CipherOptions, Deck};
///
/// let key = Deck::shuffled(2024);
/// let cipher = Cipher::new(CipherOptions::default());
///
/// let ciphertext = cipher.encrypt(&mut key.clone(), "Meet at noon").unwrap();
/// let plaintext = cipher.decrypt(&mut key.clone(), &ciphertext).unwrap();
/// assert_eq!(plaintext, "MEETA TNOON");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cipher {
    options: CipherOptions,
}

impl Cipher {
    /// Creates a cipher with the given options.
    #[must_use]
    pub const fn new(options: CipherOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &CipherOptions {
        &self.options
    }

    /// Encrypts `plaintext`, returning grouped ciphertext.
    ///
    /// The plaintext is formatted first (uppercased, non-letters dropped,
    /// padded), and exactly one keystream value is drawn per letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the padding letter is not in `A..=Z` or the deck
    /// cannot produce enough keystream.
    pub fn encrypt(&self, deck: &mut Deck, plaintext: &str) -> Result<String, CipherError> {
        let formatted =
            format_plaintext_with(plaintext, self.options.padding, self.options.group_size);
        let numbers = text_to_numbers(&formatted)?;
        let keystream = self.keystream(deck, numbers.len())?;

        let letters = numbers_to_text(&encrypt_numbers(&numbers, &keystream)?)?;
        tracing::debug!(letters = letters.len(), "message encrypted");
        Ok(group(&letters, self.options.group_size))
    }

    /// Decrypts `ciphertext`, returning grouped plaintext.
    ///
    /// Whitespace is ignored, so grouped ciphertext is accepted as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the ciphertext contains anything but `A..=Z` and
    /// whitespace, or the deck cannot produce enough keystream.
    pub fn decrypt(&self, deck: &mut Deck, ciphertext: &str) -> Result<String, CipherError> {
        let numbers = text_to_numbers(&ungroup(ciphertext))?;
        let keystream = self.keystream(deck, numbers.len())?;

        let letters = numbers_to_text(&decrypt_numbers(&numbers, &keystream)?)?;
        tracing::debug!(letters = letters.len(), "message decrypted");
        Ok(group(&letters, self.options.group_size))
    }

    /// Draws `count` keystream values from the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be generated within the configured
    /// retry bound.
    pub fn keystream(&self, deck: &mut Deck, count: usize) -> Result<Vec<u8>, CipherError> {
        Ok(generate_keystream_with(deck, count, self.options.max_attempts)?)
    }
}
